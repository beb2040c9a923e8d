use crate::error::GameError;

use super::board::{Board, Cell};
use super::path::{spans, Axis};
use super::player::Player;

/// A target cell for a move. The acting colour is whoever is to move when
/// the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The game state machine: one exclusively-owned board plus the player to
/// move. White always moves first.
///
/// Termination is derived from the board on every query, never stored, so it
/// cannot drift from the cell contents. Cloning yields a fully independent
/// game line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
}

impl Game {
    /// Create a game on a fresh `size x size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Game {
            board: Board::new(size)?,
            current_player: Player::White,
        })
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, if either side has completed its span.
    ///
    /// White's left-to-right span is checked before Black's top-to-bottom
    /// span; a position spanning for both reports White.
    pub fn winner(&self) -> Option<Player> {
        if spans(&self.board, Player::White, Axis::LeftToRight) {
            return Some(Player::White);
        }
        if spans(&self.board, Player::Black, Axis::TopToBottom) {
            return Some(Player::Black);
        }
        None
    }

    /// True once a winner exists or no legal moves remain.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.moves().is_empty()
    }

    /// The derived outcome: a winner, a draw on a full board with no span,
    /// or `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            return Some(GameOutcome::Winner(winner));
        }
        if self.board.is_full() {
            return Some(GameOutcome::Draw);
        }
        None
    }

    /// All empty cells in row-major order.
    ///
    /// Empty the instant a winner exists, even while empty cells remain.
    pub fn moves(&self) -> Vec<Move> {
        if self.winner().is_some() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for row in 0..self.board.size() {
            for col in 0..self.board.size() {
                if self.board.at(row, col) == Cell::Empty {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Place the current player's piece on `mv` and pass the turn.
    ///
    /// Fails without touching any state if the target is out of bounds or
    /// occupied. Whether the game has already ended is not checked here;
    /// callers gate on [`Game::is_over`].
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if self.board.get(mv.row, mv.col)? != Cell::Empty {
            return Err(GameError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }

        self.board.set(mv.row, mv.col, self.current_player.to_cell())?;
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// A snapshot of the board. Later moves never alter a returned snapshot.
    pub fn grid(&self) -> Board {
        self.board.clone()
    }
}
