//! Cell coordinates and the wall grid
//!
//! Walls live on cell edges, stored as two boolean matrices:
//! - `horizontal[r][c]`: top edge of cell (r, c), shape (rows + 1) x cols
//! - `vertical[r][c]`: left edge of cell (r, c), shape rows x (cols + 1)
//!
//! A fresh grid is fully walled. Only the maze generator opens edges.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A grid cell, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Orthogonal direction from a cell toward a neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour inspection order used by the generator
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Wall presence on every cell edge of a rows x cols grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallGrid {
    rows: usize,
    cols: usize,
    horizontal: Vec<Vec<bool>>,
    vertical: Vec<Vec<bool>>,
}

impl WallGrid {
    /// Fully walled grid. Dimensions below 1 are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            horizontal: vec![vec![true; cols]; rows + 1],
            vertical: vec![vec![true; cols + 1]; rows],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Start cell (top-left)
    pub fn start(&self) -> Cell {
        Cell::ORIGIN
    }

    /// Goal cell (bottom-right)
    pub fn goal(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Clamp a cell into the grid
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(cell.row.min(self.rows - 1), cell.col.min(self.cols - 1))
    }

    /// Raw horizontal edge: top edge of (row, col). `row` may equal `rows` (bottom boundary).
    #[inline]
    pub fn horizontal(&self, row: usize, col: usize) -> bool {
        self.horizontal[row][col]
    }

    /// Raw vertical edge: left edge of (row, col). `col` may equal `cols` (right boundary).
    #[inline]
    pub fn vertical(&self, row: usize, col: usize) -> bool {
        self.vertical[row][col]
    }

    /// Wall on the given side of a cell (cell must be inside the grid)
    pub fn has_wall(&self, cell: Cell, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.horizontal[cell.row][cell.col],
            Direction::Down => self.horizontal[cell.row + 1][cell.col],
            Direction::Left => self.vertical[cell.row][cell.col],
            Direction::Right => self.vertical[cell.row][cell.col + 1],
        }
    }

    /// Neighbouring cell in `dir`, if it is inside the grid
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        match dir {
            Direction::Up if cell.row > 0 => Some(Cell::new(cell.row - 1, cell.col)),
            Direction::Down if cell.row + 1 < self.rows => Some(Cell::new(cell.row + 1, cell.col)),
            Direction::Left if cell.col > 0 => Some(Cell::new(cell.row, cell.col - 1)),
            Direction::Right if cell.col + 1 < self.cols => Some(Cell::new(cell.row, cell.col + 1)),
            _ => None,
        }
    }

    /// Neighbours reachable through an open edge
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            self.neighbor(cell, dir)
                .filter(|_| !self.has_wall(cell, dir))
        })
    }

    /// Clear the edge between `cell` and its neighbour in `dir`
    pub(crate) fn open(&mut self, cell: Cell, dir: Direction) {
        self.set(cell, dir, false);
    }

    /// Put back a wall on a boundary edge of the origin cell
    pub(crate) fn seal(&mut self, cell: Cell, dir: Direction) {
        self.set(cell, dir, true);
    }

    fn set(&mut self, cell: Cell, dir: Direction, value: bool) {
        match dir {
            Direction::Up => self.horizontal[cell.row][cell.col] = value,
            Direction::Down => self.horizontal[cell.row + 1][cell.col] = value,
            Direction::Left => self.vertical[cell.row][cell.col] = value,
            Direction::Right => self.vertical[cell.row][cell.col + 1] = value,
        }
    }

    /// Number of open (cleared) edges
    pub fn cleared_segments(&self) -> usize {
        let h = self.horizontal.iter().flatten().filter(|w| !**w).count();
        let v = self.vertical.iter().flatten().filter(|w| !**w).count();
        h + v
    }

    /// Whether every outer edge is walled
    pub fn boundary_intact(&self) -> bool {
        let top_bottom = self.horizontal[0].iter().all(|w| *w)
            && self.horizontal[self.rows].iter().all(|w| *w);
        let left_right = self
            .vertical
            .iter()
            .all(|row| row[0] && row[self.cols]);
        top_bottom && left_right
    }

    /// Number of cells reachable from `from` through open edges
    pub fn reachable_count(&self, from: Cell) -> usize {
        if !self.contains(from) {
            return 0;
        }
        let mut seen = vec![vec![false; self.cols]; self.rows];
        let mut queue = VecDeque::from([from]);
        seen[from.row][from.col] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(cell) {
                if !seen[next.row][next.col] {
                    seen[next.row][next.col] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// A connected grid with cells - 1 open edges is a spanning tree
    pub fn is_perfect(&self) -> bool {
        self.boundary_intact()
            && self.cleared_segments() == self.cell_count() - 1
            && self.reachable_count(self.start()) == self.cell_count()
    }
}
