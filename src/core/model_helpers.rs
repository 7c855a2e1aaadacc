use crate::core::{Direction, GRID_SIZE, GameUpdate, Grid, Line, Session, Vec2};

impl Grid {
    pub fn empty() -> Grid {
        Grid::default()
    }

    pub fn from_rows(cells: [Line; GRID_SIZE]) -> Grid {
        Grid { cells }
    }

    pub fn row(&self, i: usize) -> Line {
        self.cells[i]
    }

    pub fn set_row(&mut self, i: usize, line: Line) {
        self.cells[i] = line;
    }

    pub fn column(&self, j: usize) -> Line {
        std::array::from_fn(|i| self.cells[i][j])
    }

    pub fn set_column(&mut self, j: usize, line: Line) {
        for (i, value) in line.into_iter().enumerate() {
            self.cells[i][j] = value;
        }
    }

    pub fn positions() -> impl Iterator<Item = Vec2> {
        (0..GRID_SIZE).flat_map(|i| (0..GRID_SIZE).map(move |j| Vec2 { i, j }))
    }

    pub fn empty_cells(&self) -> Vec<Vec2> {
        Grid::positions().filter(|pos| self[*pos] == 0).collect()
    }

    pub fn count_tiles(&self) -> usize {
        Grid::positions().filter(|pos| self[*pos] != 0).count()
    }

    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// True when the grid is full and no two orthogonal neighbours are equal.
    pub fn is_terminal(&self) -> bool {
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                let value = self.cells[i][j];
                if value == 0 {
                    return false;
                }
                if i + 1 < GRID_SIZE && value == self.cells[i + 1][j] {
                    return false;
                }
                if j + 1 < GRID_SIZE && value == self.cells[i][j + 1] {
                    return false;
                }
            }
        }
        true
    }
}

impl std::ops::Index<Vec2> for Grid {
    type Output = u32;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.cells[index.i][index.j]
    }
}

impl std::ops::IndexMut<Vec2> for Grid {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        &mut self.cells[index.i][index.j]
    }
}

impl Session {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Left and Up pack tiles toward index 0 of each line.
    pub fn toward_start(self) -> bool {
        match self {
            Direction::Left | Direction::Up => true,
            Direction::Right | Direction::Down => false,
        }
    }

    pub fn is_horizontal(self) -> bool {
        match self {
            Direction::Left | Direction::Right => true,
            Direction::Up | Direction::Down => false,
        }
    }
}

impl GameUpdate {
    pub fn moved(&self) -> bool {
        matches!(self, GameUpdate::NextState(..))
    }
}
