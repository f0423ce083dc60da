//! Text rendering of a frame, for terminals and logs
//!
//! Each cell is drawn 3 characters wide between `+` corners:
//!
//! ```text
//! +---+---+
//! | S     |
//! +   +---+
//! |     G |
//! +---+---+
//! ```

use super::FrameSink;
use super::snapshot::RenderSnapshot;
use crate::sim::Cell;

/// Draw the maze with start (`S`), goal (`G`, `*` once reached) and ball (`o`)
pub fn render_ascii(snapshot: &RenderSnapshot<'_>) -> String {
    let walls = snapshot.walls;
    let (rows, cols) = (walls.rows(), walls.cols());
    let start = walls.start();
    let goal = walls.goal();
    let ball = snapshot
        .layout
        .is_established()
        .then(|| snapshot.layout.cell_at(snapshot.ball_pos));

    let content = |cell: Cell| -> &'static str {
        if ball == Some(cell) {
            " o "
        } else if cell == goal {
            if snapshot.reached_goal { " * " } else { " G " }
        } else if cell == start {
            " S "
        } else {
            "   "
        }
    };

    let mut out = String::with_capacity((2 * rows + 1) * (4 * cols + 2));
    for row in 0..=rows {
        for col in 0..cols {
            out.push('+');
            out.push_str(if walls.horizontal(row, col) { "---" } else { "   " });
        }
        out.push('+');
        out.push('\n');

        if row == rows {
            break;
        }
        for col in 0..=cols {
            out.push(if walls.vertical(row, col) { '|' } else { ' ' });
            if col < cols {
                out.push_str(content(Cell::new(row, col)));
            }
        }
        out.push('\n');
    }
    out
}

/// Frame sink that prints every `every`-th frame to stdout
#[derive(Debug, Clone)]
pub struct AsciiPrinter {
    every: u64,
    frames: u64,
    announced_goal: bool,
}

impl AsciiPrinter {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            announced_goal: false,
        }
    }
}

impl FrameSink for AsciiPrinter {
    fn present(&mut self, snapshot: &RenderSnapshot<'_>) {
        let first_goal_frame = snapshot.reached_goal && !self.announced_goal;
        if self.frames % self.every == 0 || first_goal_frame {
            println!("{}", render_ascii(snapshot));
        }
        if first_goal_frame {
            println!("GOAL!");
            self.announced_goal = true;
        }
        self.frames += 1;
    }
}
