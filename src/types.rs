//! Type definitions and enums for the application screens and menu navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen, from which a play-through is started.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    ///
    /// This variant represents the options menu screen, where the maze dimensions are chosen.
    OptionsMenu(OptionsMenuItem),
    /// In-game maze screen.
    ///
    /// This variant represents the ingame screen where the maze is displayed and walked.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::Options,
            Self::Options | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame | Self::Options => Self::StartGame,
            Self::Quit => Self::Options,
        }
    }
}

/// Options menu navigation choices.
///
/// This enumeration holds the different items in the options menu. The first two items adjust the
/// size of the next maze; the last one returns to the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// Maze width setting.
    Columns,
    /// Maze height setting.
    Rows,
    /// "Back" navigation option.
    Back,
}

impl OptionsMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Columns => Self::Rows,
            Self::Rows | Self::Back => Self::Back,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Columns | Self::Rows => Self::Columns,
            Self::Back => Self::Rows,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Options menu configuration.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the key hints shown at the bottom of the menu.
    pub(crate) const fn hints(&self) -> &str {
        match self {
            Self::MainMenu(_) => "(j) down / (k) up / (l) select",
            Self::OptionsMenu(_) => "(j/k) move / (l/h) +/- / (esc) back",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let options_menu = Screen::OptionsMenu(OptionsMenuItem::Back);
        let in_game = Screen::InGame;

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(options_menu, Screen::OptionsMenu(OptionsMenuItem::Back));
        assert_eq!(in_game, Screen::InGame);

        assert_ne!(main_menu, in_game);
        assert_ne!(options_menu, in_game);
    }

    #[test]
    fn test_main_menu_item_navigation() {
        assert_eq!(MainMenuItem::StartGame.next(), MainMenuItem::Options);
        assert_eq!(MainMenuItem::Options.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);

        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::Options);
        assert_eq!(MainMenuItem::Options.previous(), MainMenuItem::StartGame);
        assert_eq!(MainMenuItem::StartGame.previous(), MainMenuItem::StartGame);
    }

    #[test]
    fn test_options_menu_item_navigation() {
        assert_eq!(OptionsMenuItem::Columns.next(), OptionsMenuItem::Rows);
        assert_eq!(OptionsMenuItem::Rows.next(), OptionsMenuItem::Back);
        assert_eq!(OptionsMenuItem::Back.next(), OptionsMenuItem::Back);

        assert_eq!(OptionsMenuItem::Back.previous(), OptionsMenuItem::Rows);
        assert_eq!(OptionsMenuItem::Rows.previous(), OptionsMenuItem::Columns);
        assert_eq!(OptionsMenuItem::Columns.previous(), OptionsMenuItem::Columns);
    }

    #[test]
    fn test_menu_type_repr() {
        let main_menu = MenuType::MainMenu(3);
        let options_menu = MenuType::OptionsMenu(3);

        assert_eq!(main_menu.repr(), "Main Menu");
        assert_eq!(options_menu.repr(), "Options Menu");
        assert!(options_menu.hints().contains("(l/h) +/-"));
        assert!(options_menu.hints().contains("(esc) back"));
    }

    #[test]
    fn test_menu_type_value() {
        let main_menu = MenuType::MainMenu(3);
        let options_menu = MenuType::OptionsMenu(2);

        assert_eq!(main_menu.value(), 3);
        assert_eq!(options_menu.value(), 2);
    }

    #[test]
    fn test_debug_implementations() {
        let screen = Screen::InGame;
        let main_item = MainMenuItem::StartGame;
        let options_item = OptionsMenuItem::Columns;

        assert_eq!(format!("{screen:?}"), "InGame");
        assert_eq!(format!("{main_item:?}"), "StartGame");
        assert_eq!(format!("{options_item:?}"), "Columns");
    }
}
