use super::board::Board;
use super::player::Player;
use super::win;
use crate::error::RoundError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        self != RoundState::InProgress
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::Human => RoundState::PlayerWon,
            Player::Computer => RoundState::ComputerWon,
        }
    }
}

/// Where a tile landed and what the round looks like afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub state: RoundState,
}

/// One round of play: a board, whose turn it is, and the outcome so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    board: Board,
    to_move: Player,
    state: RoundState,
}

impl Round {
    /// Fresh empty board with `first` to move
    pub fn new(first: Player) -> Self {
        Round {
            board: Board::new(),
            to_move: first,
            state: RoundState::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Legal columns, empty once the round is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current mover's tile in `col` and advance the round.
    ///
    /// A win is checked before the full-board draw, so the move that fills the
    /// last slot with a fourth in a row is a win.
    pub fn play(&mut self, col: usize) -> Result<Placement, RoundError> {
        if self.is_over() {
            return Err(RoundError::RoundOver);
        }

        let player = self.to_move;
        let row = self.board.place(col, player)?;

        if win::has_won(&self.board, player) {
            self.state = RoundState::won_by(player);
        } else if self.board.is_full() {
            self.state = RoundState::Draw;
        }

        log::debug!(
            "{} placed at row {}, column {} -> {:?}",
            player.name(),
            row,
            col,
            self.state
        );

        self.to_move = player.other();

        Ok(Placement {
            player,
            row,
            col,
            state: self.state,
        })
    }
}
