use naval_battle::{BotAi, CellKind, Direction, Grid, Position, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Drive one bot move against `grid` the way the game logic would: choose,
/// attack, and deliver the sink notification. Returns the position and
/// whether it was a fresh ship hit.
fn drive_move(bot: &mut BotAi, rng: &mut SmallRng, grid: &mut Grid) -> (Position, bool) {
    let pos = bot.next_move(rng, grid);
    let was_ship = grid.is_kind(pos, CellKind::Ship);
    let (_, changed) = grid.attack(pos).unwrap();
    assert!(changed, "bot re-attacked ({}, {})", pos.x, pos.y);
    if grid.is_ship_sunk(pos) {
        bot.notify_ship_sunk();
    }
    (pos, was_ship)
}

fn count_live_ship_cells(grid: &Grid) -> usize {
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
fn follow_up_moves_stay_on_the_target_ship_line() {
    for seed in [5u64, 77, 1234, 98765] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 10);
        grid.place_ship(Ship::new("Battleship", 4), Position::new(3, 5), Direction::Right);

        let mut bot = BotAi::new();
        let mut first_hit: Option<Position> = None;
        let mut sunk = false;
        for _ in 0..100 {
            let (pos, was_ship) = drive_move(&mut bot, &mut rng, &mut grid);
            if let Some(hit) = first_hit {
                // every follow-up shares the first hit's row or column
                assert!(
                    pos.x == hit.x || pos.y == hit.y,
                    "seed {seed}: ({}, {}) strays from the target at ({}, {})",
                    pos.x,
                    pos.y,
                    hit.x,
                    hit.y
                );
                let adjacent = (pos.x - hit.x).abs() + (pos.y - hit.y).abs() == 1;
                let collinear = pos.y == hit.y;
                assert!(adjacent || collinear, "seed {seed}");
            }
            if was_ship && first_hit.is_none() {
                first_hit = Some(pos);
            }
            if count_live_ship_cells(&grid) == 0 {
                sunk = true;
                break;
            }
        }
        assert!(sunk, "seed {seed}: ship never sunk");
    }
}

#[test]
fn bot_never_repeats_a_cell_and_sweeps_the_board() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut grid = Grid::new(10, 10);
    grid.place_ship(Ship::new("Carrier", 5), Position::new(0, 0), Direction::Right);
    grid.place_ship(Ship::new("Cruiser", 3), Position::new(4, 4), Direction::Down);
    grid.place_ship(Ship::new("Destroyer", 2), Position::new(8, 8), Direction::Up);

    let mut bot = BotAi::new();
    let mut seen = Vec::new();
    // a fresh cell changes on every attack, so 100 moves exhaust the board
    for turn in 0..100 {
        let (pos, _) = drive_move(&mut bot, &mut rng, &mut grid);
        assert!(!seen.contains(&pos), "repeat at turn {turn}");
        seen.push(pos);
        if count_live_ship_cells(&grid) == 0 {
            break;
        }
    }
    assert_eq!(count_live_ship_cells(&grid), 0, "fleet survived the sweep");
}

#[test]
fn sink_notification_resets_the_hunt() {
    // two far-apart ships: after the first sinks, the bot must be free to
    // roam instead of walking the dead ship's line forever
    let mut rng = SmallRng::seed_from_u64(9);
    let mut grid = Grid::new(10, 10);
    grid.place_ship(Ship::new("Destroyer", 2), Position::new(0, 0), Direction::Right);
    grid.place_ship(Ship::new("Destroyer", 2), Position::new(8, 9), Direction::Right);

    let mut bot = BotAi::new();
    for _ in 0..100 {
        drive_move(&mut bot, &mut rng, &mut grid);
        if count_live_ship_cells(&grid) == 0 {
            return;
        }
    }
    panic!("bot failed to sink both ships in 100 moves");
}

#[test]
fn finishing_doubles_back_past_the_first_hit() {
    // ship on a row; force the first hit onto its right end by attacking
    // everything else around, then watch the walk reverse
    let mut grid = Grid::new(10, 10);
    grid.place_ship(Ship::new("Cruiser", 3), Position::new(2, 2), Direction::Right);

    // attack everything except the run, so the search must land on it and
    // the walk has no open water to wander into
    for y in 0..10 {
        for x in 0..10 {
            let pos = Position::new(x, y);
            if y == 2 && (2..=4).contains(&x) {
                continue;
            }
            grid.attack(pos).unwrap();
        }
    }
    let mut bot = BotAi::new();
    let mut rng = SmallRng::seed_from_u64(1);

    let mut hits = Vec::new();
    for _ in 0..3 {
        let (pos, was_ship) = drive_move(&mut bot, &mut rng, &mut grid);
        assert!(was_ship);
        hits.push(pos);
    }
    assert_eq!(count_live_ship_cells(&grid), 0);
    // all three hits are distinct run cells
    hits.sort_by_key(|pos| pos.x);
    assert_eq!(
        hits,
        vec![Position::new(2, 2), Position::new(3, 2), Position::new(4, 2)]
    );
}
