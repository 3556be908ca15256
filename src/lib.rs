mod bot;
mod cell;
mod config;
mod console;
mod fleet;
mod game;
mod geometry;
mod grid;
mod logging;
mod moves;
mod session;
mod ship;
mod ui;

pub use bot::*;
pub use cell::*;
pub use config::*;
pub use console::*;
pub use fleet::*;
pub use game::*;
pub use geometry::*;
pub use grid::*;
pub use logging::init_logging;
pub use moves::*;
pub use session::*;
pub use ship::*;
pub use ui::*;
