/// State of a single grid cell.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// 1 for a live cell, 0 otherwise. Used when summing a neighborhood.
    pub fn weight(self) -> u8 {
        self.is_alive() as u8
    }

    /// Applies the Life rule to a cell with `neighbors` live Moore neighbors.
    pub fn next(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            // underpopulation
            (Cell::Alive, n) if n < 2 => Cell::Dead,
            // reproduction
            (Cell::Dead, 3) => Cell::Alive,
            // overpopulation
            (Cell::Alive, n) if n > 3 => Cell::Dead,
            (cell, _) => cell,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
