//! Perfect maze generation
//!
//! Randomized depth-first backtracking with an explicit stack:
//! - Start cell is marked visited and pushed
//! - Top of stack picks a random unvisited neighbour, opens the shared edge, pushes it
//! - No unvisited neighbour: pop (backtrack)
//!
//! Only unvisited cells are ever linked, so the result is a spanning tree.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction, WallGrid};

/// Carve a perfect maze over a rows x cols grid, starting the walk at `start`.
///
/// The random source is injected so callers can seed it. A start outside the
/// grid is clamped into it.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, start: Cell, rng: &mut R) -> WallGrid {
    let mut walls = WallGrid::new(rows, cols);
    let start = walls.clamp(start);

    let mut visited = vec![vec![false; walls.cols()]; walls.rows()];
    let mut stack = Vec::with_capacity(walls.cell_count());
    let mut candidates: Vec<(Direction, Cell)> = Vec::with_capacity(4);

    visited[start.row][start.col] = true;
    stack.push(start);

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(Direction::ALL.into_iter().filter_map(|dir| {
            walls
                .neighbor(current, dir)
                .filter(|n| !visited[n.row][n.col])
                .map(|n| (dir, n))
        }));

        let Some(&(dir, next)) = candidates.choose(rng) else {
            stack.pop();
            continue;
        };

        walls.open(current, dir);
        visited[next.row][next.col] = true;
        stack.push(next);
    }

    // The origin's outer edges stay closed no matter where the walk went
    walls.seal(Cell::ORIGIN, Direction::Up);
    walls.seal(Cell::ORIGIN, Direction::Left);

    log::debug!(
        "Generated {}x{} maze from ({}, {}): {} passages",
        walls.rows(),
        walls.cols(),
        start.row,
        start.col,
        walls.cleared_segments()
    );

    walls
}

/// Generate from a fixed seed (reproducible)
pub fn generate_seeded(rows: usize, cols: usize, seed: u64) -> WallGrid {
    let mut rng = Pcg32::seed_from_u64(seed);
    generate(rows, cols, Cell::ORIGIN, &mut rng)
}
