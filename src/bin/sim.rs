//! Headless bot-vs-bot harness: a second targeting machine drives the
//! player side, and the result is printed as one JSON line.

use naval_battle::{BotAi, Game, GameLogic, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng)?;

    let mut challenger = BotAi::new();
    let mut player_moves = 0usize;
    let mut bot_moves = 0usize;

    while !logic.is_game_over() {
        match logic.current_turn() {
            Side::Bot => {
                logic.bot_move(&mut rng)?;
                bot_moves += 1;
            }
            Side::Player => {
                let pos = challenger.next_move(&mut rng, logic.bot_grid());
                let outcome = logic.player_move(pos)?;
                player_moves += 1;
                if outcome.sunk {
                    challenger.notify_ship_sunk();
                }
            }
        }
    }

    let winner = match logic.winner() {
        Some(Side::Player) => "player",
        Some(Side::Bot) => "bot",
        None => "none",
    };

    let result = json!({
        "seed": seed,
        "winner": winner,
        "target_size": logic.target_total_size(),
        "player_moves": player_moves,
        "bot_moves": bot_moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
