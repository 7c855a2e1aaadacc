mod consts;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use models::{Direction, GameUpdate, Grid, Line, MoveReport, Session, UserAction, Vec2};
pub use update::{apply_move, collapse_line, initialize, insert_random_tile, shift, step};
