use std::fmt;

use serde::Serialize;

pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 10;
pub const DEFAULT_GRID_SIZE: usize = 3;

/// Clamp a requested grid size into the playable range.
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single square: empty or holding a mark.
pub type Cell = Option<Mark>;

/// One immutable grid snapshot, stored row-major (`index = row * size + col`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board of `size * size` cells.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a mark.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Cell at `index`; indices past the end read as empty.
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    pub fn get_at(&self, row: usize, col: usize) -> Cell {
        self.get(row * self.size + col)
    }

    pub fn is_vacant(&self, index: usize) -> bool {
        index < self.cells.len() && self.cells[index].is_none()
    }

    /// Copy of this board with `mark` placed at `index`. The original is untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells.clone();
        if let Some(cell) = cells.get_mut(index) {
            *cell = Some(mark);
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map(|m| m.symbol()).unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
