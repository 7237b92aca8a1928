//! User interface rendering functions for all application screens.

use std::{rc::Rc, time::Duration};

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::{Coord, Dimensions, Direction, Grid},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::OptionsMenu(item) => options_menu(frame, item, app.dimensions),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both main and options menus.
/// The generic part includes the centered positioning and border styling, while the specific menu
/// content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hints())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders a column of menu entries, highlighting the one at `selected`.
fn menu_entries(frame: &mut Frame, layout: &[Rect], entries: &[String], selected: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (entry, area)) in entries.iter().zip(layout).enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.as_str(), style).centered(), *area);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(3));
    let entries = ["Start Game", "Options", "Quit"].map(str::to_owned);
    let selected = match item {
        MainMenuItem::StartGame => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };

    menu_entries(frame, &inner_layout, &entries, selected);
}

/// Renders the options menu screen with the size of the next maze.
///
/// This function displays the pending maze width and height and the "Return" entry, with the same
/// navigation highlighting as the main menu.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem, dimensions: Dimensions) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::OptionsMenu(3));
    let entries = [
        format!("Columns: {}", dimensions.cols()),
        format!("Rows: {}", dimensions.rows()),
        "Return".to_owned(),
    ];
    let selected = match item {
        OptionsMenuItem::Columns => 0,
        OptionsMenuItem::Rows => 1,
        OptionsMenuItem::Back => 2,
    };

    menu_entries(frame, &inner_layout, &entries, selected);
}

/// Renders the in-game screen with the maze, the player and the status line.
///
/// The maze is drawn on a [`Canvas`] as a lattice of points twice as fine as the grid: cell centres
/// sit on odd lattice coordinates and walls on even ones. The solution overlay, the start and goal
/// cells and the player are drawn on separate layers above the walls. When the lattice does not
/// fit the terminal, the canvas switches to braille points to pack more of it in.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or layout retrieval.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = &app.session;
    let grid = session.grid();
    let (lattice_width, lattice_height) = lattice_size(grid);

    // Create overall layout: maze area + status block at bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let space = centered(
        maze_content_area,
        u16::try_from(lattice_width)?,
        u16::try_from(lattice_height)?,
    )?;
    let marker = if usize::from(space.width) < lattice_width
        || usize::from(space.height) < lattice_height
    {
        Marker::Braille
    } else {
        Marker::Dot
    };

    // Pre-compute screen coordinates to handle errors before closures
    let walls = transform_lattice_to_screen_coords(&wall_points(grid), grid)?;
    let solution = if app.show_solution {
        transform_lattice_to_screen_coords(&path_points(session.solution()), grid)?
    } else {
        Vec::new()
    };
    let start = transform_lattice_to_screen_coords(&[cell_point(Coord::default())], grid)?;
    let goal = transform_lattice_to_screen_coords(&[cell_point(session.goal())], grid)?;
    let player = transform_lattice_to_screen_coords(&[cell_point(session.player())], grid)?;

    // The lattice sides are odd, so the outermost points sit exactly on the bounds.
    let half_width = f64::from(rounded_div::i32(
        i32::from(u16::try_from(lattice_width)?) - 1,
        2,
    ));
    let half_height = f64::from(rounded_div::i32(
        i32::from(u16::try_from(lattice_height)?) - 1,
        2,
    ));

    let maze = Canvas::default()
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .marker(marker)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walls,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &solution,
                color: Color::Yellow,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &start,
                color: Color::Blue,
            });
            ctx.draw(&Points {
                coords: &goal,
                color: Color::Red,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &player,
                color: Color::White,
            });
        });

    frame.render_widget(maze, space);

    status(app, frame, status_area)
}

/// Renders the move counter, the timer and the key hints below the maze.
///
/// # Errors
///
/// This function may return errors if the status layout cannot be split.
fn status(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let session = &app.session;
    let style = Style::default().fg(Color::Green);

    let (title, stats) = if session.won() {
        (
            "You Win!",
            format!(
                "Time: {:.2}s  Moves: {}",
                session.elapsed().as_secs_f64(),
                session.moves()
            ),
        )
    } else {
        (
            "Maze",
            format!(
                "Moves: {}  Time: {}",
                session.moves(),
                format_elapsed(session.elapsed())
            ),
        )
    };

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(style)
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
    let stats_area = *lines.first().ok_or_eyre("failed to get stats line from layout")?;
    let hints_area = *lines.last().ok_or_eyre("failed to get hints line from layout")?;

    frame.render_widget(Line::styled(stats, style).centered(), stats_area);
    frame.render_widget(
        Line::styled(
            "(arrows/wasd) move / (r) reset / (n) new / (p) solution / (esc) menu / (q) quit",
            style,
        )
        .centered(),
        hints_area,
    );

    Ok(())
}

/// Formats a duration the way the running timer shows it, with one decimal.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}

/// Centers a `width` by `height` rectangle inside `area`, shrinking it to fit.
///
/// # Errors
///
/// This function may return errors if the layout cannot be split.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let column = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height.min(area.height)),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width.min(area.width)),
        Constraint::Min(0),
    ])
    .split(column)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")
}

/// Returns the width and height of the drawing lattice of `grid`.
pub(crate) const fn lattice_size(grid: &Grid) -> (usize, usize) {
    (grid.cols() * 2 + 1, grid.rows() * 2 + 1)
}

/// Returns the lattice point at the centre of a cell.
pub(crate) const fn cell_point(coord: Coord) -> (usize, usize) {
    (coord.col * 2 + 1, coord.row * 2 + 1)
}

/// Returns the lattice points occupied by walls, including every corner post.
pub(crate) fn wall_points(grid: &Grid) -> Vec<(usize, usize)> {
    let (width, height) = lattice_size(grid);
    let mut points: Vec<(usize, usize)> = (0..height)
        .step_by(2)
        .flat_map(|y| (0..width).step_by(2).map(move |x| (x, y)))
        .collect();

    for coord in grid.coords() {
        let (x, y) = cell_point(coord);
        for direction in Direction::ALL {
            if grid.is_open(coord, direction) {
                continue;
            }
            points.push(match direction {
                Direction::Up => (x, y - 1),
                Direction::Right => (x + 1, y),
                Direction::Down => (x, y + 1),
                Direction::Left => (x - 1, y),
            });
        }
    }

    points.sort_unstable();
    points.dedup();
    points
}

/// Returns the lattice points covered by a path: each cell centre and the passage before it.
pub(crate) fn path_points(path: &[Coord]) -> Vec<(usize, usize)> {
    let mut points = Vec::with_capacity(path.len() * 2);

    for (idx, coord) in path.iter().enumerate() {
        if let Some(previous) = idx.checked_sub(1).and_then(|prev| path.get(prev)) {
            points.push((
                previous.col + coord.col + 1,
                previous.row + coord.row + 1,
            ));
        }
        points.push(cell_point(*coord));
    }

    points
}

/// Transforms lattice coordinates to screen coordinates for canvas rendering.
///
/// This function converts lattice coordinates (x, y) to canvas coordinates using the standard
/// centring formulas: coordinate[i] = i - (n - 1) / 2 for columns and coordinate[i] = (n - 1) / 2 - i
/// for rows, since the canvas y axis grows upwards.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_lattice_to_screen_coords(
    lattice_coords: &[(usize, usize)],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let (width, height) = lattice_size(grid);
    let cols_n = f64::from(u16::try_from(width)?);
    let rows_n = f64::from(u16::try_from(height)?);

    lattice_coords
        .iter()
        .map(|&(x, y)| {
            let screen_x = f64::from(u16::try_from(x)?) - (cols_n - 1.) / 2.;
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(y)?);

            Ok((screen_x, screen_y))
        })
        .collect()
}
