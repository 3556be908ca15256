//! The boundary between the engine and whatever renders it.

use crate::game::Side;
use crate::geometry::Position;
use crate::grid::GridView;
use crate::moves::MoveParseError;

/// One frame of state handed to [`GameUi::render`].
pub struct RenderFrame<'a> {
    /// The player's own board, ships visible.
    pub player_grid: GridView<'a>,
    /// The bot's board as the player may see it.
    pub bot_grid: GridView<'a>,
    /// Whether any grid changed since the last render. Renderers that
    /// repaint on their own clock may ignore it.
    pub grids_changed: bool,
}

/// Capability interface every front end implements: a terminal, a window,
/// or a test double. The session drives it and never assumes which one is
/// behind the trait.
pub trait GameUi {
    /// A new match is starting.
    fn on_new_game(&mut self);

    /// The session finished or was abandoned; nothing follows.
    fn on_game_closed(&mut self);

    /// Whether the front end can still interact with the user.
    fn is_open(&self) -> bool;

    /// Pump the front end's input once. When `expect_move` is set the
    /// session is waiting on the player; return the raw move text when one
    /// arrives.
    fn process_input(&mut self, expect_move: bool) -> Option<String>;

    /// Present the current boards.
    fn render(&mut self, frame: &RenderFrame<'_>);

    /// The bot resolved an attack at `pos`.
    fn on_bot_move(&mut self, pos: Position);

    /// The player's attack at `pos` was accepted.
    fn on_player_move(&mut self, pos: Position);

    /// The player re-attacked a known cell; the turn did not advance.
    fn on_invalid_move(&mut self);

    /// The player's move text was rejected before reaching the board.
    fn on_parse_error(&mut self, error: MoveParseError);

    /// The match ended. `winner` is `None` only when no side reached the
    /// target, which normal play never produces.
    fn on_game_over(&mut self, winner: Option<Side>);
}
