use clap::Parser;
use naval_battle::{init_logging, ConsoleUi, Game, GameLogic, GameSession};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng)?;

    let mut session = GameSession::new(logic);
    let mut ui = ConsoleUi::new();
    session.run(&mut rng, &mut ui)?;
    Ok(())
}
