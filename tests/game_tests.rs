use naval_battle::{
    total_ship_size, AttackOutcome, CellKind, Game, GameLogic, Grid, MoveParseError, Position,
    Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Run cells of the first ship found on the bot grid.
fn bot_ship_run(logic: &GameLogic) -> Vec<Position> {
    let grid = logic.bot_grid();
    let dim = grid.dimension();
    for y in 0..dim.height {
        for x in 0..dim.width {
            if let Some(body) = grid.cell(Position::new(x, y)).and_then(|cell| cell.body()) {
                return body.run().collect();
            }
        }
    }
    panic!("no ship on the bot grid");
}

fn first_cell_of_kind(grid: &Grid, kind: CellKind) -> Position {
    let dim = grid.dimension();
    for y in 0..dim.height {
        for x in 0..dim.width {
            let pos = Position::new(x, y);
            if grid.is_kind(pos, kind) {
                return pos;
            }
        }
    }
    panic!("no {kind:?} cell left");
}

fn first_attackable(grid: &Grid) -> Position {
    let dim = grid.dimension();
    for y in 0..dim.height {
        for x in 0..dim.width {
            let pos = Position::new(x, y);
            if grid.is_attackable(pos) {
                return pos;
            }
        }
    }
    panic!("no attackable cell left");
}

fn count_ship_cells(grid: &Grid) -> i32 {
    let dim = grid.dimension();
    let mut count = 0;
    for y in 0..dim.height {
        for x in 0..dim.width {
            if grid.is_kind(Position::new(x, y), CellKind::Ship) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn setup_builds_equal_fleets() {
    for seed in [0u64, 1, 2, 3, 4] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut logic = GameLogic::new(Game::standard());
        logic.setup(&mut rng).unwrap();

        assert_eq!(logic.bot_ships().len(), 6, "seed {seed}");
        assert_eq!(logic.player_ships().len(), 6, "seed {seed}");
        let target = logic.target_total_size();
        assert_eq!(total_ship_size(logic.bot_ships()), target);
        assert_eq!(total_ship_size(logic.player_ships()), target);
        assert_eq!(count_ship_cells(logic.bot_grid()), target);
        assert_eq!(count_ship_cells(logic.player_grid()), target);

        assert_eq!(logic.current_turn(), Side::Player);
        assert_eq!(logic.player_hits(), 0);
        assert_eq!(logic.bot_hits(), 0);
        assert!(!logic.is_game_over());
        assert_eq!(logic.winner(), None);
    }
}

#[test]
fn hits_keep_the_turn_until_the_ship_sinks() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut logic = GameLogic::new(Game::new(10, 10, 1));
    logic.setup(&mut rng).unwrap();

    let run = bot_ship_run(&logic);
    assert!(run.len() >= 2, "catalogue has no size-1 ships");
    let (&last, rest) = run.split_last().unwrap();

    for &pos in rest {
        let outcome = logic.player_move(pos).unwrap();
        assert_eq!(outcome.kind, CellKind::AttackedShip);
        assert!(outcome.changed);
        assert!(!outcome.sunk);
        assert_eq!(logic.current_turn(), Side::Player);
        assert!(!logic.is_game_over());
    }

    // the sinking hit ends the game mid-turn-sequence
    let outcome = logic.player_move(last).unwrap();
    assert!(outcome.sunk);
    assert_eq!(logic.current_turn(), Side::Bot);
    assert!(logic.is_game_over());
    assert_eq!(logic.winner(), Some(Side::Player));
    assert_eq!(logic.player_hits(), logic.target_total_size());
}

#[test]
fn a_miss_hands_the_turn_over() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng).unwrap();

    let miss = first_cell_of_kind(logic.bot_grid(), CellKind::Water);
    let outcome = logic.player_move(miss).unwrap();
    assert_eq!(outcome.kind, CellKind::AttackedWater);
    assert!(outcome.changed);
    assert!(!outcome.sunk);
    assert_eq!(logic.current_turn(), Side::Bot);
}

#[test]
fn repeat_attacks_change_nothing() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut logic = GameLogic::new(Game::new(10, 10, 1));
    logic.setup(&mut rng).unwrap();

    let run = bot_ship_run(&logic);
    logic.player_move(run[0]).unwrap();
    assert_eq!(logic.player_hits(), 1);
    assert_eq!(logic.current_turn(), Side::Player);

    let outcome = logic.player_move(run[0]).unwrap();
    assert_eq!(
        outcome,
        AttackOutcome {
            kind: CellKind::AttackedShip,
            changed: false,
            sunk: false,
        }
    );
    // no double count and no turn switch
    assert_eq!(logic.player_hits(), 1);
    assert_eq!(logic.current_turn(), Side::Player);
}

#[test]
fn out_of_bounds_attacks_are_errors() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng).unwrap();
    assert!(logic.player_move(Position::new(-1, 3)).is_err());
    assert!(logic.player_move(Position::new(3, 10)).is_err());
    // failed attacks leave the turn alone
    assert_eq!(logic.current_turn(), Side::Player);
}

#[test]
fn parse_player_move_checks_the_board() {
    let logic = GameLogic::new(Game::standard());
    assert_eq!(logic.parse_player_move("A5"), Ok(Position::new(0, 4)));
    assert_eq!(
        logic.parse_player_move("K1"),
        Err(MoveParseError::OutOfBounds)
    );
    assert_eq!(
        logic.parse_player_move("5A"),
        Err(MoveParseError::InvalidFormat)
    );
}

#[test]
fn bot_turns_run_until_a_miss_or_sink() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng).unwrap();

    // hand the bot the turn with a deliberate miss
    let miss = first_cell_of_kind(logic.bot_grid(), CellKind::Water);
    logic.player_move(miss).unwrap();
    assert_eq!(logic.current_turn(), Side::Bot);

    let mut moves = 0;
    while logic.current_turn() == Side::Bot && !logic.is_game_over() {
        let (pos, outcome) = logic.bot_move(&mut rng).unwrap();
        assert!(logic.player_grid().contains(pos));
        assert!(outcome.changed, "bot repeated a move");
        moves += 1;
        assert!(moves <= 100, "bot never yielded the turn");
    }
    assert!(moves >= 1);
}

#[test]
fn full_game_respects_the_hit_target() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut logic = GameLogic::new(Game::standard());
    logic.setup(&mut rng).unwrap();
    let target = logic.target_total_size();

    let mut turns = 0;
    while !logic.is_game_over() {
        turns += 1;
        if turns > 200 {
            panic!("game took too many turns");
        }
        match logic.current_turn() {
            Side::Bot => {
                logic.bot_move(&mut rng).unwrap();
            }
            Side::Player => {
                // a sweep player: attack the first fresh cell every turn
                let pos = first_attackable(logic.bot_grid());
                let outcome = logic.player_move(pos).unwrap();
                assert!(outcome.changed);
            }
        }
        assert!(logic.player_hits() <= target);
        assert!(logic.bot_hits() <= target);
    }

    match logic.winner().expect("game over without a winner") {
        Side::Player => assert_eq!(logic.player_hits(), target),
        Side::Bot => assert_eq!(logic.bot_hits(), target),
    }
}
