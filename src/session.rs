use serde::{Deserialize, Serialize};

use crate::board::{Coord, GameState};
use crate::error::Rejection;
use crate::moves::Move;

/// What a single press did, for the UI to react to.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum PressEvent {
    Selected(Coord),
    Moved(Move),
    /// A selection existed but the press was not a legal destination.
    Deselected(Rejection),
    Ignored,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Press {
    pub state: GameState,
    pub selection: Option<Coord>,
    pub event: PressEvent,
}

/// Feed one square press through the select-then-move protocol.
///
/// Pressing a piece of the side to move always (re)selects it. Otherwise an
/// armed selection is tried as a move to the pressed square; success adopts
/// the new state, failure just drops the selection. With nothing selected
/// the press is ignored.
pub fn select_or_move(state: GameState, selection: Option<Coord>, pressed: Coord) -> Press {
    if state.board.get(pressed).is_owned_by(state.turn) {
        return Press { state, selection: Some(pressed), event: PressEvent::Selected(pressed) };
    }

    let Some(from) = selection else {
        return Press { state, selection: None, event: PressEvent::Ignored };
    };

    match state.try_move(from, pressed) {
        Ok(next) => Press {
            state: next,
            selection: None,
            event: PressEvent::Moved(Move::new(from, pressed)),
        },
        Err(reason) => Press { state, selection: None, event: PressEvent::Deselected(reason) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::{Cell, Color};

    fn sq(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn opponent_piece_without_selection_is_ignored() {
        let state = GameState::new();
        let press = select_or_move(state, None, sq(2, 1));
        assert_eq!(press.event, PressEvent::Ignored);
        assert_eq!(press.state, state);
        assert_eq!(press.selection, None);
    }

    #[test]
    fn own_piece_reselects_mid_selection() {
        let state = GameState::new();
        let first = select_or_move(state, None, sq(5, 0));
        assert_eq!(first.selection, Some(sq(5, 0)));
        let second = select_or_move(first.state, first.selection, sq(5, 2));
        assert_eq!(second.selection, Some(sq(5, 2)));
        assert_eq!(second.event, PressEvent::Selected(sq(5, 2)));
        assert_eq!(second.state, state);
    }

    #[test]
    fn legal_destination_moves_and_clears_selection() {
        let state = GameState::new();
        let press = select_or_move(state, Some(sq(5, 2)), sq(4, 3));
        assert_eq!(press.event, PressEvent::Moved(Move::new(sq(5, 2), sq(4, 3))));
        assert_eq!(press.selection, None);
        assert_eq!(press.state.turn, Color::Black);
        assert_eq!(press.state.board.get(sq(4, 3)), Cell::WhiteMan);
    }

    #[test]
    fn illegal_destination_deselects_without_moving() {
        let state = GameState::new();
        let press = select_or_move(state, Some(sq(5, 2)), sq(3, 4));
        assert_eq!(press.event, PressEvent::Deselected(Rejection::InvalidCaptureTarget));
        assert_eq!(press.selection, None);
        assert_eq!(press.state, state);
    }

    #[test]
    fn pressing_an_opponent_with_selection_deselects() {
        let mut board = Board::empty();
        board.squares[5][2] = Cell::WhiteMan;
        board.squares[4][3] = Cell::BlackMan;
        let state = GameState { board, turn: Color::White };
        let press = select_or_move(state, Some(sq(5, 2)), sq(4, 3));
        assert_eq!(press.event, PressEvent::Deselected(Rejection::DestinationOccupied));
        assert_eq!(press.state, state);
    }
}
