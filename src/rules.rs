// =============================================================================
// Move rules
//
// Validation, execution and promotion for a single move. Every function here
// is pure: boards come in by reference and leave as new values, so a rejected
// move cannot disturb the caller's state.
//
// The rule set is deliberately the limited one: single diagonal steps (men
// forward only, kings in all four directions) and single jumps over one
// adjacent enemy. Jumps are allowed backwards for men too. There is no
// mandatory capture and no multi-jump continuation.
// =============================================================================

use crate::board::{Board, Coord, GameState};
use crate::error::Rejection;
use crate::moves::{Move, MoveKind};
use crate::piece::{Cell, Color};

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn is_owned_by(cell: Cell, turn: Color) -> bool {
    cell.is_owned_by(turn)
}

/// Decide whether `from -> to` is legal for `turn` and what kind of move it is.
/// Checks run in a fixed order and the first failure is reported.
pub fn classify(board: &Board, turn: Color, from: Coord, to: Coord) -> Result<MoveKind, Rejection> {
    let piece = board.get(from);
    if !is_owned_by(piece, turn) {
        return Err(Rejection::NotOwnPiece);
    }
    if !to.is_dark() {
        return Err(Rejection::WrongColorSquare);
    }
    if !board.get(to).is_empty() {
        return Err(Rejection::DestinationOccupied);
    }

    let row_delta = to.row() as i32 - from.row() as i32;
    let col_delta = to.col().abs_diff(from.col());

    match (row_delta.abs(), col_delta) {
        (1, 1) if piece.is_king() || row_delta == turn.forward() => Ok(MoveKind::Simple),
        (2, 2) => {
            let captured = from
                .offset(row_delta / 2, (to.col() as i32 - from.col() as i32) / 2)
                .ok_or(Rejection::IllegalGeometry)?;
            if board.get(captured).is_owned_by(turn.opposite()) {
                Ok(MoveKind::Jump { captured })
            } else {
                Err(Rejection::InvalidCaptureTarget)
            }
        }
        _ => Err(Rejection::IllegalGeometry),
    }
}

/// Crown a man that lands on its promotion row. Kings never change.
pub fn promote(cell: Cell, landing: Coord) -> Cell {
    match cell.color() {
        Some(color) if landing.row() == color.promotion_row() => cell.promoted(),
        _ => cell,
    }
}

/// Apply an already-classified move to a copy of `board`.
pub(crate) fn execute(board: &Board, mv: Move, kind: MoveKind) -> Board {
    let mut next = *board;
    let piece = promote(next.get(mv.from), mv.to);
    next.set(mv.from, Cell::Empty);
    if let MoveKind::Jump { captured } = kind {
        next.set(captured, Cell::Empty);
    }
    next.set(mv.to, piece);
    next
}

/// Validate and execute in one step. On success the returned state carries
/// the new board and the other side to move.
pub fn try_move(board: &Board, turn: Color, from: Coord, to: Coord) -> Result<GameState, Rejection> {
    let kind = classify(board, turn, from, to)?;
    Ok(GameState {
        board: execute(board, Move::new(from, to), kind),
        turn: turn.opposite(),
    })
}

/// Every move `try_move` would accept for the piece on `from`.
pub fn legal_destinations(board: &Board, turn: Color, from: Coord) -> Vec<Move> {
    if !is_owned_by(board.get(from), turn) {
        return Vec::new();
    }
    DIAGONALS
        .iter()
        .flat_map(|&(dr, dc)| [from.offset(dr, dc), from.offset(dr * 2, dc * 2)])
        .flatten()
        .filter(|&to| classify(board, turn, from, to).is_ok())
        .map(|to| Move::new(from, to))
        .collect()
}

pub fn legal_moves(board: &Board, turn: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, cell)| cell.is_owned_by(turn))
        .flat_map(|(sq, _)| legal_destinations(board, turn, sq))
        .collect()
}
