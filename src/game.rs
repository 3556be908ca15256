//! Turn engine: attack resolution, turn switching and win detection.

use rand::Rng;
use thiserror::Error;

use crate::bot::BotAi;
use crate::cell::CellKind;
use crate::config::{GRID_HEIGHT, GRID_WIDTH, SHIPS_PER_SIDE};
use crate::fleet::{self, SetupError};
use crate::geometry::Position;
use crate::grid::{Grid, GridView};
use crate::moves::{self, MoveParseError};
use crate::ship::{self, Ship};

/// One of the two competing parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    /// The other party.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }
}

/// What an attack did to the targeted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Kind of the cell after the attack.
    pub kind: CellKind,
    /// Whether the attack changed the cell; `false` on repeat attacks.
    pub changed: bool,
    /// Whether this attack finished off the covering ship.
    pub sunk: bool,
}

/// Errors from resolving an attack.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// The attack position was off the grid. Parsed player moves are
    /// bounds-checked and the bot only picks cells it can see, so hitting
    /// this means an engine invariant broke.
    #[error("attack position is outside the grid")]
    OutOfBounds,
}

/// Everything one match owns: both boards, both fleets and the shared
/// total-size target.
pub struct Game {
    player_grid: Grid,
    bot_grid: Grid,
    player_ships: Vec<Ship>,
    bot_ships: Vec<Ship>,
    target_total_size: i32,
    ships_per_side: usize,
}

impl Game {
    /// Create an empty match on `width` by `height` grids with
    /// `ships_per_side` ships a side. Fleets are drawn and placed by
    /// [`GameLogic::setup`].
    pub fn new(width: i32, height: i32, ships_per_side: usize) -> Game {
        Game {
            player_grid: Grid::new(width, height),
            bot_grid: Grid::new(width, height),
            player_ships: Vec::new(),
            bot_ships: Vec::new(),
            target_total_size: 0,
            ships_per_side,
        }
    }

    /// The default match: 10x10 grids, six ships a side.
    pub fn standard() -> Game {
        Game::new(GRID_WIDTH, GRID_HEIGHT, SHIPS_PER_SIDE)
    }
}

/// Drives a match: owns the [`Game`] state, the bot, the per-side hit
/// counters and the turn marker.
pub struct GameLogic {
    game: Game,
    bot: BotAi,
    turn: Side,
    player_hits: i32,
    bot_hits: i32,
}

impl GameLogic {
    /// Wrap a match; the player moves first.
    pub fn new(game: Game) -> GameLogic {
        GameLogic {
            game,
            bot: BotAi::new(),
            turn: Side::Player,
            player_hits: 0,
            bot_hits: 0,
        }
    }

    /// Build both fleets, equalize their total size and place them.
    ///
    /// The bot fleet is drawn first and fixes the target; the player fleet
    /// is re-drawn slot by slot until its total matches exactly.
    pub fn setup<R: Rng>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        let bot_ships = fleet::select_random_ships(rng, self.game.ships_per_side);
        let mut player_ships = fleet::select_random_ships(rng, self.game.ships_per_side);
        let target = ship::total_ship_size(&bot_ships);
        fleet::equalize_total_size(rng, &mut player_ships, target)?;
        fleet::place_fleet(rng, &mut self.game.bot_grid, &bot_ships)?;
        fleet::place_fleet(rng, &mut self.game.player_grid, &player_ships)?;
        log::info!(
            "fleets placed: {} ships a side, {} cells to sink",
            self.game.ships_per_side,
            target
        );
        self.game.bot_ships = bot_ships;
        self.game.player_ships = player_ships;
        self.game.target_total_size = target;
        self.turn = Side::Player;
        Ok(())
    }

    /// Grid the player owns and the bot attacks.
    pub fn player_grid(&self) -> &Grid {
        &self.game.player_grid
    }

    /// Grid the bot owns and the player attacks.
    pub fn bot_grid(&self) -> &Grid {
        &self.game.bot_grid
    }

    /// Render view of the player grid.
    pub fn player_view(&self) -> GridView<'_> {
        self.game.player_grid.view()
    }

    /// Render view of the bot grid.
    pub fn bot_view(&self) -> GridView<'_> {
        self.game.bot_grid.view()
    }

    /// The player's fleet as drawn at setup.
    pub fn player_ships(&self) -> &[Ship] {
        &self.game.player_ships
    }

    /// The bot's fleet as drawn at setup.
    pub fn bot_ships(&self) -> &[Ship] {
        &self.game.bot_ships
    }

    /// Hit cells both sides need to win.
    pub fn target_total_size(&self) -> i32 {
        self.game.target_total_size
    }

    /// Hits the player has landed on the bot grid.
    pub fn player_hits(&self) -> i32 {
        self.player_hits
    }

    /// Hits the bot has landed on the player grid.
    pub fn bot_hits(&self) -> i32 {
        self.bot_hits
    }

    /// Side allowed to attack next.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    /// Whether either side has reached the hit target.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The side that reached the hit target, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.player_hits == self.game.target_total_size {
            Some(Side::Player)
        } else if self.bot_hits == self.game.target_total_size {
            Some(Side::Bot)
        } else {
            None
        }
    }

    /// Parse raw player input against the board dimensions.
    pub fn parse_player_move(&self, input: &str) -> Result<Position, MoveParseError> {
        moves::parse_move(input, self.game.bot_grid.dimension())
    }

    /// Resolve the player's attack at `pos` on the bot grid. An outcome with
    /// `changed == false` means the cell was attacked before and the move
    /// did not count.
    pub fn player_move(&mut self, pos: Position) -> Result<AttackOutcome, AttackError> {
        let outcome = self.process_move(Side::Bot, pos)?;
        log::debug!(
            "player attacked ({}, {}): {:?}",
            pos.x,
            pos.y,
            outcome.kind
        );
        Ok(outcome)
    }

    /// Let the bot pick and resolve its attack on the player grid.
    pub fn bot_move<R: Rng>(&mut self, rng: &mut R) -> Result<(Position, AttackOutcome), AttackError> {
        let pos = self.bot.next_move(rng, &self.game.player_grid);
        let outcome = self.process_move(Side::Player, pos)?;
        log::debug!("bot attacked ({}, {}): {:?}", pos.x, pos.y, outcome.kind);
        Ok((pos, outcome))
    }

    /// Commit an attack on `defender`'s grid and apply the turn policy: the
    /// attacker keeps the turn only on a hit that does not sink, and a sink
    /// by the bot resets its targeting memory.
    fn process_move(&mut self, defender: Side, pos: Position) -> Result<AttackOutcome, AttackError> {
        let grid = match defender {
            Side::Player => &mut self.game.player_grid,
            Side::Bot => &mut self.game.bot_grid,
        };
        let (kind, changed) = grid.attack(pos).ok_or(AttackError::OutOfBounds)?;
        if !changed {
            return Ok(AttackOutcome {
                kind,
                changed,
                sunk: false,
            });
        }
        let hit = kind == CellKind::AttackedShip;
        let sunk = hit && grid.is_ship_sunk(pos);
        if hit {
            match self.turn {
                Side::Player => self.player_hits += 1,
                Side::Bot => self.bot_hits += 1,
            }
        }
        if self.turn == Side::Bot && sunk {
            self.bot.notify_ship_sunk();
        }
        // a hit on a still-floating ship earns another shot
        if !hit || sunk {
            self.turn = self.turn.opponent();
        }
        Ok(AttackOutcome { kind, changed, sunk })
    }
}

impl Default for GameLogic {
    fn default() -> Self {
        GameLogic::new(Game::standard())
    }
}
