//! Terminal front end: box-drawn grids and line-based input.

use std::io::{self, Write};

use crate::cell::CellKind;
use crate::game::Side;
use crate::geometry::Position;
use crate::grid::GridView;
use crate::moves::{self, MoveParseError};
use crate::ui::{GameUi, RenderFrame};

/// Symbols a grid is drawn with. The bot board uses a set that keeps
/// unattacked ships indistinguishable from water.
#[derive(Debug, Clone, Copy)]
struct CellSymbols {
    ship: char,
    water: char,
    hit: char,
    splash: char,
}

const PLAYER_SYMBOLS: CellSymbols = CellSymbols {
    ship: '█',
    water: '~',
    hit: 'X',
    splash: '^',
};

const BOT_SYMBOLS: CellSymbols = CellSymbols {
    ship: '~',
    water: '~',
    hit: 'X',
    splash: '^',
};

impl CellSymbols {
    fn symbol(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Ship => self.ship,
            CellKind::Water => self.water,
            CellKind::AttackedShip => self.hit,
            CellKind::AttackedWater => self.splash,
        }
    }
}

/// Line-oriented terminal implementation of [`GameUi`].
///
/// Bot moves are buffered and flushed under the boards at the next repaint,
/// so a chain of bot hits reads as one block. EOF on stdin closes the front
/// end.
pub struct ConsoleUi {
    closed: bool,
    bot_moves: Vec<String>,
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleUi {
    /// Create an open console front end.
    pub fn new() -> ConsoleUi {
        ConsoleUi {
            closed: false,
            bot_moves: Vec::new(),
        }
    }

    fn read_move_line(&mut self) -> Option<String> {
        print!("Enter a move (e.g. B7): ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                println!("\nLeaving the game...");
                None
            }
            Ok(_) => Some(line),
        }
    }
}

fn print_grid(view: &GridView<'_>, symbols: CellSymbols) {
    let dim = view.dimension();
    let width = dim.width as usize;

    print!("   ");
    for x in 0..dim.width {
        print!(" {}", (b'A' + x as u8) as char);
    }
    println!();
    println!("   ┌{}─┐", "─┬".repeat(width - 1));
    for y in 0..dim.height {
        print!("{:>2} ", y + 1);
        for x in 0..dim.width {
            print!("│{}", symbols.symbol(view.kind(x, y)));
        }
        println!("│");
        if y < dim.height - 1 {
            println!("   ├{}─┤", "─┼".repeat(width - 1));
        }
    }
    println!("   └{}─┘", "─┴".repeat(width - 1));
}

impl GameUi for ConsoleUi {
    fn on_new_game(&mut self) {
        println!("════════════════ NAVAL BATTLE ════════════════");
        println!("Sink the enemy fleet before yours goes down.");
    }

    fn on_game_closed(&mut self) {
        println!("Thanks for playing!");
    }

    fn is_open(&self) -> bool {
        !self.closed
    }

    fn process_input(&mut self, expect_move: bool) -> Option<String> {
        if !expect_move {
            return None;
        }
        self.read_move_line()
    }

    fn render(&mut self, frame: &RenderFrame<'_>) {
        if !frame.grids_changed {
            return;
        }
        println!();
        println!("Your fleet:");
        print_grid(&frame.player_grid, PLAYER_SYMBOLS);
        println!();
        println!("Enemy waters:");
        print_grid(&frame.bot_grid, BOT_SYMBOLS);
        println!("Legend: █=ship  X=hit  ^=miss  ~=water");
        for line in self.bot_moves.drain(..) {
            println!("{line}");
        }
    }

    fn on_bot_move(&mut self, pos: Position) {
        self.bot_moves
            .push(format!("The bot fired at {}", moves::format_move(pos)));
    }

    fn on_player_move(&mut self, pos: Position) {
        println!("You fired at {}", moves::format_move(pos));
    }

    fn on_invalid_move(&mut self) {
        println!("That cell was already attacked. Try again.");
    }

    fn on_parse_error(&mut self, error: MoveParseError) {
        match error {
            MoveParseError::InvalidFormat => {
                println!("Invalid move. Use a column letter and a row number, e.g. B7.");
            }
            MoveParseError::OutOfBounds => {
                println!("That move is off the board. Try again.");
            }
        }
    }

    fn on_game_over(&mut self, winner: Option<Side>) {
        println!();
        match winner {
            Some(Side::Player) => println!("Victory! The enemy fleet is at the bottom of the sea."),
            Some(Side::Bot) => println!("Defeat. Your fleet has been destroyed."),
            None => println!("The battle ended with no winner."),
        }
    }
}
