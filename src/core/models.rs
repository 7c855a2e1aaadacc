use crate::core::GRID_SIZE;

pub type Line = [u32; GRID_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: usize,
    pub j: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    NewGame,
}

/// 4x4 tile values, `0` is an empty cell. Rows are indexed by `i`, columns by `j`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    pub cells: [Line; GRID_SIZE],
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Session {
    pub grid: Grid,
    pub score: u32,
    pub best_score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// `None` for a new game
    pub direction: Option<Direction>,
    pub score_gained: u32,
    pub spawned: Option<(Vec2, u32)>,
    pub new_best: bool,
    pub terminal: bool,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(Session, MoveReport),
    NoChange,
}
