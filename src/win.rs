//! Win detection for N×N boards.

use tracing::instrument;

use crate::board::{Cell, Mark};

/// A set of cell indices that wins when uniformly marked.
pub type Line = Vec<usize>;

/// All winning lines for a `grid_size`×`grid_size` board, in check order:
/// rows, columns, main diagonal, anti-diagonal.
pub fn winning_lines(grid_size: usize) -> Vec<Line> {
    let n = grid_size;
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }

    for col in 0..n {
        lines.push((0..n).map(|row| row * n + col).collect());
    }

    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// Returns the mark of the first complete line together with that line.
///
/// Cells missing from a short board count as empty.
#[instrument(level = "trace", skip(cells))]
pub fn winning_line(cells: &[Cell], grid_size: usize) -> Option<(Mark, Line)> {
    let at = |index: usize| cells.get(index).copied().flatten();

    winning_lines(grid_size).into_iter().find_map(|line| {
        let (&first, rest) = line.split_first()?;
        let mark = at(first)?;
        rest.iter()
            .all(|&index| at(index) == Some(mark))
            .then_some((mark, line))
    })
}

/// The winning mark on `cells`, if any. A full board with no line is not
/// distinguished from a game in progress.
pub fn detect(cells: &[Cell], grid_size: usize) -> Option<Mark> {
    winning_line(cells, grid_size).map(|(mark, _)| mark)
}
