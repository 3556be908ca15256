//! The computer opponent: a search/target/finish state machine.
//!
//! The bot fires blind until it hits a ship, then probes the four neighbors
//! of that first hit, and once a second hit fixes the ship's axis it walks
//! the run to the end, doubling back past the first hit when the run
//! continues the other way. Sinking the ship resets it to blind search; the
//! game logic drives that reset because only it resolves attacks.

use rand::Rng;

use crate::cell::CellKind;
use crate::geometry::{Direction, Position};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BotState {
    Searching,
    Targeting,
    Finishing,
}

/// Move chooser for the bot side. Targeting memory persists across turns and
/// never outlives the ship it hunts; see [`BotAi::notify_ship_sunk`].
#[derive(Debug)]
pub struct BotAi {
    state: BotState,
    initial_hit: Position,
    last_pos: Position,
    ship_direction: Direction,
    remaining_directions: Vec<Direction>,
}

impl Default for BotAi {
    fn default() -> Self {
        Self::new()
    }
}

impl BotAi {
    /// Create a bot in blind-search mode.
    pub fn new() -> BotAi {
        BotAi {
            state: BotState::Searching,
            initial_hit: Position::default(),
            last_pos: Position::default(),
            ship_direction: Direction::Right,
            remaining_directions: Vec::new(),
        }
    }

    /// Choose the next cell to attack on the opponent grid.
    ///
    /// The grid must still have an attackable cell, which holds whenever the
    /// game is not over.
    pub fn next_move<R: Rng>(&mut self, rng: &mut R, grid: &Grid) -> Position {
        match self.state {
            BotState::Searching => self.searching_move(rng, grid),
            BotState::Targeting => self.targeting_move(rng, grid),
            BotState::Finishing => self.finishing_move(grid),
        }
    }

    /// Forget the current target. Called by the game logic when the bot's
    /// hit sank a ship.
    pub fn notify_ship_sunk(&mut self) {
        log::debug!("bot target sunk, back to searching");
        self.state = BotState::Searching;
    }

    fn searching_move<R: Rng>(&mut self, rng: &mut R, grid: &Grid) -> Position {
        let pos = pick_attackable_cell(rng, grid);
        if grid.is_kind(pos, CellKind::Ship) {
            log::debug!("bot found a target at ({}, {})", pos.x, pos.y);
            self.state = BotState::Targeting;
            self.initial_hit = pos;
            self.remaining_directions = Direction::ALL.to_vec();
        }
        pos
    }

    fn targeting_move<R: Rng>(&mut self, rng: &mut R, grid: &Grid) -> Position {
        self.remaining_directions
            .retain(|&direction| grid.is_attackable(self.initial_hit.step(direction)));
        if self.remaining_directions.is_empty() {
            // all four neighbors probed without a second hit
            self.state = BotState::Searching;
            return self.searching_move(rng, grid);
        }
        let pick = rng.random_range(0..self.remaining_directions.len());
        let direction = self.remaining_directions.swap_remove(pick);
        self.last_pos = self.initial_hit.step(direction);
        if grid.is_kind(self.last_pos, CellKind::Ship) {
            self.state = BotState::Finishing;
            self.ship_direction = direction;
        }
        self.last_pos
    }

    fn finishing_move(&mut self, grid: &Grid) -> Position {
        self.last_pos = self.last_pos.step(self.ship_direction);
        if !grid.is_kind(self.last_pos, CellKind::Ship) {
            // ran past the ship's end; resume on the other side of the
            // first hit
            self.ship_direction = self.ship_direction.inverse();
            self.last_pos = self.initial_hit.step(self.ship_direction);
        }
        self.last_pos
    }
}

/// Sample random positions until one is still attackable.
fn pick_attackable_cell<R: Rng>(rng: &mut R, grid: &Grid) -> Position {
    loop {
        let pos = grid.random_position(rng);
        if grid.is_attackable(pos) {
            return pos;
        }
    }
}
