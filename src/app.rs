//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use log::info;
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    generator::RngSource,
    grid::Dimensions,
    session::{Session, SystemClock},
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to. It owns the single
/// game session; the event handlers and the renderer borrow it from here.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Maze play-through currently in progress.
    pub(crate) session: Session,
    /// Random source every maze of this run is carved from.
    pub(crate) source: RngSource,
    /// Size used for the next generated maze, as edited in the options menu.
    pub(crate) dimensions: Dimensions,
    /// Whether the solution path is drawn over the maze.
    pub(crate) show_solution: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    ///
    /// The first maze is carved here, so the game screen always has a session to show.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let dimensions = config.dimensions();
        let mut source = config
            .seed
            .map_or_else(RngSource::from_entropy, RngSource::from_seed);
        let session = Session::generate(dimensions, &mut source, SystemClock::default());

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            session,
            source,
            dimensions,
            show_solution: config.solution,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Carves a new maze with the configured dimensions and starts over on it.
    ///
    /// The solution overlay is hidden again, so every new maze starts unsolved on screen.
    pub(crate) fn regenerate(&mut self) {
        self.session.rebuild(self.dimensions, &mut self.source);
        self.show_solution = false;

        info!(
            "new {}x{} maze requested",
            self.dimensions.cols(),
            self.dimensions.rows()
        );
    }

    /// Shows or hides the solution overlay.
    pub(crate) fn toggle_solution(&mut self) {
        self.show_solution = !self.show_solution;

        info!(
            "solution overlay {}",
            if self.show_solution { "shown" } else { "hidden" }
        );
    }
}
