//! Span detection: whether one player's pieces form a connected chain
//! between two opposite board edges.

use std::collections::VecDeque;

use super::board::Board;
use super::player::Player;

/// The pair of opposite edges a winning chain must connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Column 0 to column `size - 1` (White's winning direction).
    LeftToRight,
    /// Row 0 to row `size - 1` (Black's winning direction).
    TopToBottom,
}

/// Offsets of the six hex neighbors of `(row, col)`: both orthogonal pairs
/// plus the two diagonals along the board's skew.
const HEX_NEIGHBORS: [(i32, i32); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Check whether `player`'s pieces connect the two edges of `axis`.
///
/// Iterative breadth-first search over same-coloured, hex-adjacent cells,
/// seeded from every piece on the starting edge. Read-only; linear in the
/// number of occupied cells. On a size-1 board the single cell lies on both
/// edges, so one piece of the target colour spans immediately.
pub fn spans(board: &Board, player: Player, axis: Axis) -> bool {
    let size = board.size();
    let colour = player.to_cell();

    let mut visited = vec![false; size * size];
    let mut frontier = VecDeque::new();

    // Seed from the starting edge
    for i in 0..size {
        let (row, col) = match axis {
            Axis::LeftToRight => (i, 0),
            Axis::TopToBottom => (0, i),
        };
        if board.at(row, col) == colour {
            visited[row * size + col] = true;
            frontier.push_back((row, col));
        }
    }

    while let Some((row, col)) = frontier.pop_front() {
        let reached = match axis {
            Axis::LeftToRight => col == size - 1,
            Axis::TopToBottom => row == size - 1,
        };
        if reached {
            return true;
        }

        for (dr, dc) in HEX_NEIGHBORS {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr < 0 || nr >= size as i32 || nc < 0 || nc >= size as i32 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if !visited[nr * size + nc] && board.at(nr, nc) == colour {
                visited[nr * size + nc] = true;
                frontier.push_back((nr, nc));
            }
        }
    }

    false
}
