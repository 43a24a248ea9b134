//! Terminal front-end: draws the grid and turns key presses into moves.
//!
//! Keys: `1`-`9` drag that tile into the gap, arrow keys slide whichever tile
//! sits on the far side of the gap in that direction, `s` starts a new shuffled
//! game, `q`/`Esc`/`Ctrl+C` quit.

use std::error::Error;
use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use drag_puzzle::config::{Config, DIMENSIONS};
use drag_puzzle::{Direction, Grid, Point, TileId};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Drag(TileId),
    Slide(Direction),
    Reshuffle,
    Quit,
}

fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('s') => Some(Command::Reshuffle),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit) if digit > 0 => Some(Command::Drag(TileId(digit as usize))),
            _ => None,
        },
        KeyCode::Up => Some(Command::Slide(Direction::Up)),
        KeyCode::Down => Some(Command::Slide(Direction::Down)),
        KeyCode::Left => Some(Command::Slide(Direction::Left)),
        KeyCode::Right => Some(Command::Slide(Direction::Right)),
        _ => None,
    }
}

/// Applies a command and returns the status line, or `None` on quit.
fn apply<R: Rng + ?Sized>(grid: &mut Grid, command: Command, rng: &mut R) -> Option<String> {
    let status = match command {
        Command::Quit => return None,
        Command::Drag(id) => drag(grid, id),
        Command::Slide(direction) => {
            // Sliding up pulls in the tile below the gap.
            match grid.neighbor_in(direction.opposite()) {
                Some(id) => drag(grid, id),
                None => format!("no tile can slide {}", direction.to_string().to_lowercase()),
            }
        }
        Command::Reshuffle => match Grid::new(grid.dimensions()) {
            Ok(mut fresh) => {
                fresh.shuffle_with_rng(rng);
                *grid = fresh;
                "shuffled".to_string()
            }
            Err(err) => err.to_string(),
        },
    };
    Some(status)
}

fn drag(grid: &mut Grid, id: TileId) -> String {
    match grid.try_move(id) {
        Ok(()) => format!("moved {id}"),
        Err(err) => {
            debug!(error = %err, "gesture ignored");
            err.to_string()
        }
    }
}

fn draw(out: &mut impl Write, grid: &Grid, status: &str) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let mut line = 0u16;
    for row in 0..grid.dimensions() {
        queue!(out, MoveTo(2, line))?;
        for col in 0..grid.dimensions() {
            let cell = match grid.tile_at(Point::new(row, col)) {
                Some(tile) if tile.blank => "     ".to_string().stylize(),
                Some(tile) if tile.disabled => format!(" {:^3} ", tile.label).dark_grey(),
                Some(tile) => format!(" {:^3} ", tile.label).black().on_green().bold(),
                None => "  ?  ".to_string().red(),
            };
            queue!(out, PrintStyledContent(cell), Print(" "))?;
        }
        line += 2;
    }

    let draggable: Vec<String> = grid
        .tiles()
        .iter()
        .filter(|tile| tile.is_draggable())
        .map(|tile| match tile.lock_axis {
            Some(axis) => format!("{} ({axis})", tile.label),
            None => tile.label.clone(),
        })
        .collect();

    queue!(
        out,
        MoveTo(0, line),
        Print(format!("draggable: {}", draggable.join(", "))),
        MoveTo(0, line + 1),
        Print(status),
        MoveTo(0, line + 3),
        Print("1-9 drag tile, arrows slide, s shuffle, q quit".dark_grey()),
    )?;
    out.flush()
}

/// Restores the terminal however the session ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut rng = config.rng();
    let mut grid = Grid::new(DIMENSIONS)?;
    grid.shuffle_with_rng(&mut rng);

    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    let mut status = String::from("drag a highlighted tile into the gap");

    loop {
        draw(&mut out, &grid, &status)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = command_for(key) else {
            continue;
        };
        match apply(&mut grid, command, &mut rng) {
            Some(next) => status = next,
            None => return Ok(()),
        }
    }
}

/// Prints the solved and shuffled grids without taking over the terminal.
pub fn print(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(DIMENSIONS)?;
    println!("Initial Puzzle:\n{}", grid);

    grid.shuffle_with_rng(&mut config.rng());
    println!("Shuffled Puzzle:\n{}", grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for(key(KeyCode::Char('7'))), Some(Command::Drag(TileId(7))));
        assert_eq!(command_for(key(KeyCode::Char('0'))), None);
        assert_eq!(command_for(key(KeyCode::Up)), Some(Command::Slide(Direction::Up)));
        assert_eq!(command_for(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn arrow_slides_tile_from_opposite_side() {
        let mut grid = Grid::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        // Gap at the bottom-right: "down" pulls tile 6 from above.
        let status = apply(&mut grid, Command::Slide(Direction::Down), &mut rng).unwrap();
        assert_eq!(status, "moved 6");
        assert_eq!(grid.blank().point, Point::new(1, 2));

        let status = apply(&mut grid, Command::Slide(Direction::Left), &mut rng).unwrap();
        assert_eq!(status, "no tile can slide left");
    }

    #[test]
    fn locked_drag_reports_error() {
        let mut grid = Grid::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let status = apply(&mut grid, Command::Drag(TileId(1)), &mut rng).unwrap();
        assert_eq!(status, "tile 1 is not next to the blank tile");
        assert_eq!(grid.blank().point, Point::new(2, 2));
    }

    #[test]
    fn reshuffle_replaces_grid_and_quit_stops() {
        let mut grid = Grid::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(apply(&mut grid, Command::Reshuffle, &mut rng).as_deref(), Some("shuffled"));
        assert_eq!(grid.check_invariants(), Ok(()));
        assert_eq!(apply(&mut grid, Command::Quit, &mut rng), None);
    }

    #[test]
    fn draw_lists_draggable_tiles() {
        let grid = Grid::new(3).unwrap();
        let mut buffer = Vec::new();
        draw(&mut buffer, &grid, "ready").unwrap();
        let text = String::from_utf8_lossy(&buffer);
        assert!(text.contains("draggable: 6 (y), 8 (x)"));
        assert!(text.contains("ready"));
    }
}
