use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::BOARD_SIZE;

/// Why a proposed move was refused. Rejection is ordinary control flow for
/// the caller: the board and turn it passed in are untouched.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("source square does not hold a piece of the side to move")]
    NotOwnPiece,
    #[error("pieces may only land on dark squares")]
    WrongColorSquare,
    #[error("destination square is occupied")]
    DestinationOccupied,
    #[error("move is neither a single diagonal step nor a two-square jump")]
    IllegalGeometry,
    #[error("jumped square does not hold an enemy piece")]
    InvalidCaptureTarget,
}

#[derive(Debug, Error)]
pub enum DamaError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: usize, col: usize },
    #[error("piece on light square ({row}, {col})")]
    PieceOnLightSquare { row: usize, col: usize },
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    #[error("move rejected: {0}")]
    Rejected(#[from] Rejection),
}
