use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use crate::console_interface::parse_grid;
use crate::core::*;

#[test]
fn initialize_places_two_small_tiles() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let session = initialize(&mut rng, 0);
        let tiles: Vec<u32> = session.grid.cells.iter().flatten().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4), "unexpected tiles {:?}", tiles);
        assert_eq!(session.score, 0);
    }
}

#[test]
fn initialize_spawns_twos_nine_times_in_ten() {
    let mut rng = StdRng::seed_from_u64(90);
    let mut twos = 0;
    let mut total = 0;
    for _ in 0..10_000 {
        let session = initialize(&mut rng, 0);
        for &v in session.grid.cells.iter().flatten().filter(|&&v| v != 0) {
            total += 1;
            if v == 2 {
                twos += 1;
            }
        }
    }
    let ratio = twos as f64 / total as f64;
    assert!((0.88..0.92).contains(&ratio), "ratio of twos was {}", ratio);
}

#[test]
fn initialize_keeps_best_score() {
    let mut rng = StdRng::seed_from_u64(3);
    let session = initialize(&mut rng, 4096);
    assert_eq!(session.best_score(), 4096);
    assert_eq!(session.score(), 0);
}

#[test]
fn insert_on_full_grid_is_a_no_op() {
    let mut grid = parse_grid(r#"
        2 4 2 4
        4 2 4 2
        2 4 2 4
        4 2 4 2
    "#);
    let before = grid;
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(insert_random_tile(&mut grid, &mut rng), None);
    assert_eq!(grid, before);
}

#[test]
fn insert_fills_the_only_gap() {
    let mut grid = parse_grid(r#"
        2 4 2 4
        4 2 . 2
        2 4 2 4
        4 2 4 2
    "#);
    let mut rng = StdRng::seed_from_u64(6);
    let (pos, value) = insert_random_tile(&mut grid, &mut rng).unwrap();
    assert_eq!(pos, Vec2 { i: 1, j: 2 });
    assert_eq!(grid[pos], value);
    assert!(grid.empty_cells().is_empty());
}

#[test]
fn insert_reaches_every_empty_cell() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1_000 {
        let mut grid = Grid::empty();
        let (pos, _) = insert_random_tile(&mut grid, &mut rng).unwrap();
        seen.insert(pos);
    }
    assert_eq!(seen.len(), GRID_SIZE * GRID_SIZE);
}

#[test]
fn full_grid_without_pairs_is_terminal() {
    let mut grid = parse_grid(r#"
        2 4 2 4
        4 2 4 2
        2 4 2 4
        4 2 4 2
    "#);
    assert!(grid.is_terminal());

    grid[Vec2 { i: 2, j: 1 }] = 0;
    assert!(!grid.is_terminal());
}

#[test]
fn full_grid_with_a_pair_is_not_terminal() {
    let horizontal = parse_grid(r#"
        2 4 2 4
        4 2 4 2
        2 4 2 4
        4 2 8 8
    "#);
    assert!(!horizontal.is_terminal());

    let vertical = parse_grid(r#"
        2 4 2 16
        4 2 4 16
        2 4 2 4
        4 2 4 2
    "#);
    assert!(!vertical.is_terminal());

    let diagonal_only = parse_grid(r#"
        2 4 8 16
        4 2 16 8
        8 16 2 4
        16 8 4 2
    "#);
    assert!(diagonal_only.is_terminal());
}

#[test]
fn merges_conserve_tile_sum_and_score_tracks_merges() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = initialize(&mut rng, 0);
    let mut accepted = 0;

    for _ in 0..2_000 {
        let &direction = Direction::ALL.choose(&mut rng).unwrap();
        let sum_before = session.grid.tile_sum();
        let score_before = session.score;

        match apply_move(&session, direction, &mut rng) {
            GameUpdate::NextState(next, report) => {
                let (_, inserted) = report.spawned.expect("accepted move leaves room for a tile");
                assert_eq!(next.grid.tile_sum(), sum_before + inserted);
                assert_eq!(next.score, score_before + report.score_gained);
                assert_eq!(report.terminal, next.is_terminal());
                assert!(next.best_score >= next.score);
                session = next;
                accepted += 1;
            }
            GameUpdate::NoChange => {
                assert_eq!(shift(&session.grid, direction).0, session.grid);
            }
        }

        if session.is_terminal() {
            session = initialize(&mut rng, session.best_score);
        }
    }
    assert!(accepted > 100);
}

#[test]
fn grid_values_stay_powers_of_two() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut session = initialize(&mut rng, 0);
    for _ in 0..500 {
        let &direction = Direction::ALL.choose(&mut rng).unwrap();
        if let GameUpdate::NextState(next, _) = apply_move(&session, direction, &mut rng) {
            session = next;
        }
        for &v in session.grid.cells.iter().flatten() {
            assert!(v == 0 || (v >= 2 && v.is_power_of_two()), "bad tile {}", v);
        }
    }
}

#[test]
fn new_game_resets_score_and_keeps_best() {
    let mut rng = StdRng::seed_from_u64(12);
    let session = Session {
        grid: parse_grid(r#"
            2 4 2 4
            4 2 4 2
            2 4 2 4
            4 2 4 2
        "#),
        score: 300,
        best_score: 300,
    };

    let update = step(&session, UserAction::NewGame, &mut rng);
    assert!(update.moved());
    let GameUpdate::NextState(fresh, report) = update else {
        unreachable!();
    };
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.best_score, 300);
    assert_eq!(fresh.grid.count_tiles(), 2);
    assert_eq!(report.direction, None);
    assert!(!report.terminal);
}

#[test]
fn step_move_matches_apply_move() {
    let session = Session {
        grid: parse_grid(r#"
            2 2 . .
            . . . .
            . . . .
            . . . .
        "#),
        score: 0,
        best_score: 0,
    };
    let via_step = step(&session, UserAction::Move(Direction::Left), &mut StdRng::seed_from_u64(1));
    let via_apply = apply_move(&session, Direction::Left, &mut StdRng::seed_from_u64(1));
    match (via_step, via_apply) {
        (GameUpdate::NextState(a, ra), GameUpdate::NextState(b, rb)) => {
            assert_eq!(a, b);
            assert_eq!(ra, rb);
        }
        _ => panic!("both should move"),
    }
}

#[test]
fn directions_know_their_axis_and_end() {
    assert!(Direction::Left.toward_start() && Direction::Up.toward_start());
    assert!(!Direction::Right.toward_start() && !Direction::Down.toward_start());
    assert!(Direction::Left.is_horizontal() && !Direction::Down.is_horizontal());
}

#[test]
fn grid_queries() {
    let grid = parse_grid(r#"
        2 . . 2048
        . . . .
        . 16 . .
        . . . 4
    "#);
    assert_eq!(grid.count_tiles(), 4);
    assert_eq!(grid.empty_cells().len(), 12);
    assert_eq!(grid.tile_sum(), 2070);
    assert_eq!(grid.max_tile(), 2048);
    assert_eq!(grid.row(0), [2, 0, 0, 2048]);
    assert_eq!(grid.column(3), [2048, 0, 0, 4]);
}
