use log::{debug, info, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::{
    Direction, GRID_SIZE, GameUpdate, Grid, Line, MoveReport, STARTING_TILES, Session,
    TWO_PROBABILITY, UserAction, Vec2,
};

pub fn step<R: Rng + ?Sized>(session: &Session, action: UserAction, rng: &mut R) -> GameUpdate {
    match action {
        UserAction::Move(direction) => apply_move(session, direction, rng),
        UserAction::NewGame => {
            let fresh = initialize(rng, session.best_score);
            let terminal = fresh.is_terminal();
            GameUpdate::NextState(
                fresh,
                MoveReport {
                    direction: None,
                    score_gained: 0,
                    spawned: None,
                    new_best: false,
                    terminal,
                },
            )
        }
    }
}

/// Empty grid with the starting tiles placed. `best_score` carries over from earlier sessions.
pub fn initialize<R: Rng + ?Sized>(rng: &mut R, best_score: u32) -> Session {
    let mut grid = Grid::empty();
    for _ in 0..STARTING_TILES {
        insert_random_tile(&mut grid, rng);
    }
    debug!("new session, best score {}", best_score);
    Session {
        grid,
        score: 0,
        best_score,
    }
}

/// Places a 2 (or rarely a 4) on a uniformly chosen empty cell.
/// A full grid is left untouched and yields `None`.
pub fn insert_random_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(Vec2, u32)> {
    let empty = grid.empty_cells();
    let &pos = empty.choose(rng)?;
    let value = if rng.r#gen::<f64>() < TWO_PROBABILITY { 2 } else { 4 };
    grid[pos] = value;
    trace!("spawned {} at ({}, {})", value, pos.i, pos.j);
    Some((pos, value))
}

pub fn apply_move<R: Rng + ?Sized>(session: &Session, direction: Direction, rng: &mut R) -> GameUpdate {
    let (grid, score_gained) = shift(&session.grid, direction);
    if grid == session.grid {
        debug!("{:?} changes nothing", direction);
        return GameUpdate::NoChange;
    }

    let mut next = Session {
        grid,
        score: session.score + score_gained,
        best_score: session.best_score,
    };
    let spawned = insert_random_tile(&mut next.grid, rng);

    let new_best = next.score > next.best_score;
    if new_best {
        next.best_score = next.score;
    }

    let terminal = next.is_terminal();
    debug!(
        "{:?} accepted, +{} (score {}, best {})",
        direction, score_gained, next.score, next.best_score
    );
    if terminal {
        info!("no moves left, final score {}", next.score);
    }

    GameUpdate::NextState(
        next,
        MoveReport {
            direction: Some(direction),
            score_gained,
            spawned,
            new_best,
            terminal,
        },
    )
}

/// Collapses every row or column of `grid` in `direction` without spawning.
/// Returns the new grid and the sum of the merged values.
pub fn shift(grid: &Grid, direction: Direction) -> (Grid, u32) {
    let toward_start = direction.toward_start();
    let mut shifted = *grid;
    let mut score_gained = 0;
    for k in 0..GRID_SIZE {
        if direction.is_horizontal() {
            let (line, gained) = collapse_line(grid.row(k), toward_start);
            shifted.set_row(k, line);
            score_gained += gained;
        } else {
            let (line, gained) = collapse_line(grid.column(k), toward_start);
            shifted.set_column(k, line);
            score_gained += gained;
        }
    }
    (shifted, score_gained)
}

/// Packs the non-zero tiles of `line` toward index 0 (or index 3 when `toward_start` is false),
/// merging equal neighbours in one pass. A merged tile never merges again in the same call.
pub fn collapse_line(line: Line, toward_start: bool) -> (Line, u32) {
    let mut tiles: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();
    if !toward_start {
        tiles.reverse();
    }

    let mut collapsed = [0; GRID_SIZE];
    let mut score_gained = 0;
    let mut out = 0;
    let mut k = 0;
    while k < tiles.len() {
        if k + 1 < tiles.len() && tiles[k] == tiles[k + 1] {
            let merged = tiles[k] * 2;
            collapsed[out] = merged;
            score_gained += merged;
            k += 2;
        } else {
            collapsed[out] = tiles[k];
            k += 1;
        }
        out += 1;
    }

    if !toward_start {
        collapsed.reverse();
    }
    (collapsed, score_gained)
}
