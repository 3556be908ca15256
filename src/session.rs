//! Drives a match against an abstract front end, one cooperative step at a
//! time.

use rand::Rng;

use crate::game::{AttackError, GameLogic, Side};
use crate::ui::{GameUi, RenderFrame};

/// Turn scheduler between the game logic and a [`GameUi`].
///
/// The session never blocks. [`GameSession::tick`] performs at most one
/// scheduling step and returns; while a player move is pending, the front
/// end (or any outer event loop) hands input over through
/// [`GameSession::submit_move`] and the next tick consumes it. Synchronous
/// front ends can instead let [`GameSession::run`] drive the whole match.
pub struct GameSession {
    logic: GameLogic,
    pending_move: Option<String>,
    waiting_move: bool,
    new_player_turn: bool,
    grids_dirty: bool,
    finished: bool,
}

impl GameSession {
    /// Wrap a set-up match.
    pub fn new(logic: GameLogic) -> GameSession {
        GameSession {
            logic,
            pending_move: None,
            waiting_move: false,
            new_player_turn: true,
            grids_dirty: true,
            finished: false,
        }
    }

    /// The wrapped game logic.
    pub fn logic(&self) -> &GameLogic {
        &self.logic
    }

    /// Whether the session is parked on player input.
    pub fn awaiting_move(&self) -> bool {
        self.waiting_move && self.pending_move.is_none() && !self.finished
    }

    /// Whether the game-over notification has been delivered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Hand in the player's raw move text. The next tick consumes it; a
    /// second submission before that replaces the first.
    pub fn submit_move(&mut self, input: impl Into<String>) {
        self.pending_move = Some(input.into());
    }

    /// Run one scheduling step: observe game over, resolve one bot attack,
    /// or consume a pending player move. Does nothing while a move is still
    /// awaited.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, ui: &mut dyn GameUi) -> Result<(), AttackError> {
        if self.finished {
            return Ok(());
        }
        // game over is observed one tick after the winning move so the
        // final board state reaches the renderer first
        if self.logic.is_game_over() {
            self.finish(ui);
            return Ok(());
        }
        match self.logic.current_turn() {
            Side::Player => self.player_turn(ui),
            Side::Bot => self.bot_turn(rng, ui)?,
        }
        Ok(())
    }

    /// Present the current boards, flagging whether they changed since the
    /// previous render.
    pub fn render(&mut self, ui: &mut dyn GameUi) {
        let frame = RenderFrame {
            player_grid: self.logic.player_view(),
            bot_grid: self.logic.bot_view(),
            grids_changed: self.grids_dirty,
        };
        ui.render(&frame);
        self.grids_dirty = false;
    }

    /// Convenience driver for synchronous front ends: bracket the match with
    /// the new-game/closed notifications and pump input, tick and render
    /// until the match ends or the front end closes.
    pub fn run<R: Rng>(&mut self, rng: &mut R, ui: &mut dyn GameUi) -> Result<(), AttackError> {
        ui.on_new_game();
        while ui.is_open() && !self.finished {
            if let Some(input) = ui.process_input(self.awaiting_move()) {
                self.submit_move(input);
            }
            self.tick(rng, ui)?;
            self.render(ui);
        }
        ui.on_game_closed();
        Ok(())
    }

    fn finish(&mut self, ui: &mut dyn GameUi) {
        self.finished = true;
        self.waiting_move = false;
        let winner = self.logic.winner();
        log::info!("game over, winner: {:?}", winner);
        ui.on_game_over(winner);
    }

    fn player_turn(&mut self, ui: &mut dyn GameUi) {
        if self.new_player_turn {
            self.new_player_turn = false;
            self.waiting_move = true;
        }
        let Some(input) = self.pending_move.take() else {
            return;
        };
        let pos = match self.logic.parse_player_move(&input) {
            Ok(pos) => pos,
            Err(error) => {
                ui.on_parse_error(error);
                return;
            }
        };
        match self.logic.player_move(pos) {
            Ok(outcome) if outcome.changed => {
                self.grids_dirty = true;
                self.waiting_move = false;
                self.new_player_turn = true;
                ui.on_player_move(pos);
            }
            // repeat attacks and out-of-range positions both bounce back
            // to the prompt
            _ => ui.on_invalid_move(),
        }
    }

    fn bot_turn<R: Rng>(&mut self, rng: &mut R, ui: &mut dyn GameUi) -> Result<(), AttackError> {
        let (pos, _outcome) = self.logic.bot_move(rng)?;
        self.grids_dirty = true;
        self.new_player_turn = true;
        ui.on_bot_move(pos);
        Ok(())
    }
}
