//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Direction,
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Amount by which one key press in the options menu grows or shrinks a maze side.
pub(crate) const DIMENSION_STEP: i64 = 5;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI, which also paces
/// the redraws that keep the on-screen timer running.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press to the handler of the current screen.
///
/// The 'q' key quits from every screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return;
    }

    match app.screen {
        Screen::MainMenu(item) => handle_main_menu(app, item, code),
        Screen::OptionsMenu(item) => handle_options_menu(app, item, code),
        Screen::InGame => handle_in_game(app, code),
    }
}

/// Handles key presses in the main menu.
///
/// 'j' and 'k' move the cursor, 'l' selects the highlighted entry.
pub(crate) fn handle_main_menu(app: &mut App, item: MainMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => match item {
            MainMenuItem::StartGame => app.screen = Screen::InGame,
            MainMenuItem::Options => app.screen = Screen::OptionsMenu(OptionsMenuItem::Columns),
            MainMenuItem::Quit => app.exit = true,
        },
        _ => {}
    }
}

/// Handles key presses in the options menu.
///
/// 'j' and 'k' move the cursor. On a dimension entry 'l' grows and 'h' shrinks it by
/// [`DIMENSION_STEP`]. On the "Back" entry either key returns to the main menu, carving a new maze
/// first when the dimensions no longer match the current one.
pub(crate) fn handle_options_menu(app: &mut App, item: OptionsMenuItem, code: KeyCode) {
    let step = match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.screen = Screen::OptionsMenu(item.next());
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.screen = Screen::OptionsMenu(item.previous());
            return;
        }
        KeyCode::Esc => {
            leave_options_menu(app);
            return;
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => DIMENSION_STEP,
        KeyCode::Char('h') | KeyCode::Left => -DIMENSION_STEP,
        _ => return,
    };

    match item {
        OptionsMenuItem::Columns => app.dimensions = app.dimensions.grown(step, 0),
        OptionsMenuItem::Rows => app.dimensions = app.dimensions.grown(0, step),
        OptionsMenuItem::Back => leave_options_menu(app),
    }
}

/// Returns to the main menu, regenerating the maze if its size was changed.
fn leave_options_menu(app: &mut App) {
    if app.session.grid().dimensions() != app.dimensions {
        app.regenerate();
    }
    app.screen = Screen::MainMenu(MainMenuItem::Options);
}

/// Handles key presses on the in-game screen.
///
/// Arrow keys and 'w', 'a', 's', 'd' in either case move the player; 'r' restarts the current
/// maze, 'n' carves a new one, 'p' toggles the solution overlay and 'Esc' returns to the menu.
pub(crate) fn handle_in_game(app: &mut App, code: KeyCode) {
    if let Some(direction) = direction_for(code) {
        let report = app.session.attempt_move(direction);
        debug!("move {direction:?}: {:?}", report.outcome);
        return;
    }

    match code {
        KeyCode::Char('r' | 'R') => app.session.reset(),
        KeyCode::Char('n' | 'N') => app.regenerate(),
        KeyCode::Char('p' | 'P') => app.toggle_solution(),
        KeyCode::Esc => app.screen = Screen::MainMenu(MainMenuItem::StartGame),
        _ => {}
    }
}

/// Translates a movement key into a direction.
pub(crate) const fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    }
}
