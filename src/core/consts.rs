pub const GRID_SIZE: usize = 4;
pub const STARTING_TILES: usize = 2;
/// Chance that a spawned tile is a 2 rather than a 4
pub const TWO_PROBABILITY: f64 = 0.9;
