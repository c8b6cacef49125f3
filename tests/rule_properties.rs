//! Property-based tests for move validation invariants

use dama::board::{reset_game, Board, Coord, GameState};
use dama::error::Rejection;
use dama::piece::{Cell, Color};
use dama::rules::{legal_destinations, legal_moves, try_move};
use dama::moves::Move;
use dama::session::{select_or_move, PressEvent};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        6 => Just(Cell::Empty),
        2 => Just(Cell::WhiteMan),
        2 => Just(Cell::BlackMan),
        1 => Just(Cell::WhiteKing),
        1 => Just(Cell::BlackKing),
    ]
}

// Random positions with pieces only on dark squares
fn random_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell(), 32).prop_map(|cells| {
        let mut board = Board::empty();
        let dark = Coord::all().filter(|sq| sq.is_dark());
        for (sq, cell) in dark.zip(cells) {
            board.squares[sq.row()][sq.col()] = cell;
        }
        board
    })
}

fn turn() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn coord() -> impl Strategy<Value = Coord> {
    (0usize..8, 0usize..8).prop_map(|(r, c)| Coord::new(r, c).unwrap())
}

proptest! {
    #[test]
    fn light_or_occupied_destinations_always_reject(
        board in random_board(), turn in turn(), from in coord()
    ) {
        for to in Coord::all() {
            if !to.is_dark() || !board.get(to).is_empty() {
                prop_assert!(try_move(&board, turn, from, to).is_err());
            }
        }
    }

    #[test]
    fn rejected_press_keeps_state_and_drops_selection(board in random_board(), turn in turn()) {
        let state = GameState { board, turn };
        for (from, _) in board.pieces().filter(|(_, cell)| cell.is_owned_by(turn)) {
            for to in Coord::all().filter(|&to| !board.get(to).is_owned_by(turn)) {
                let press = select_or_move(state, Some(from), to);
                match try_move(&board, turn, from, to) {
                    Ok(next) => {
                        prop_assert_eq!(press.event, PressEvent::Moved(Move::new(from, to)));
                        prop_assert_eq!(press.state, next);
                    }
                    Err(reason) => {
                        prop_assert_eq!(press.event, PressEvent::Deselected(reason));
                        prop_assert_eq!(press.state, state);
                    }
                }
                prop_assert_eq!(press.selection, None);
            }
        }
    }

    #[test]
    fn accepted_moves_flip_turn_once(board in random_board(), turn in turn()) {
        for mv in legal_moves(&board, turn) {
            let next = try_move(&board, turn, mv.from, mv.to).unwrap();
            prop_assert_eq!(next.turn, turn.opposite());
            prop_assert!(next.board.get(mv.from).is_empty());
            prop_assert!(next.board.get(mv.to).is_owned_by(turn));
            prop_assert_eq!(next.board.count(turn), board.count(turn));
            let captured = board.count(turn.opposite()) - next.board.count(turn.opposite());
            prop_assert_eq!(captured, usize::from(mv.is_jump()));
        }
    }

    #[test]
    fn only_owned_pieces_move(
        board in random_board(), turn in turn(), from in coord(), to in coord()
    ) {
        prop_assume!(!board.get(from).is_owned_by(turn));
        prop_assert_eq!(try_move(&board, turn, from, to), Err(Rejection::NotOwnPiece));
    }

    #[test]
    fn kings_are_never_demoted(board in random_board(), turn in turn()) {
        for (from, piece) in board.pieces().filter(|(_, cell)| cell.is_king()) {
            for mv in legal_destinations(&board, turn, from) {
                let next = try_move(&board, turn, mv.from, mv.to).unwrap();
                prop_assert_eq!(next.board.get(mv.to), piece);
            }
        }
    }

    #[test]
    fn destinations_agree_with_try_move(board in random_board(), turn in turn(), from in coord()) {
        let listed: Vec<Coord> = legal_destinations(&board, turn, from).iter().map(|m| m.to).collect();
        for to in Coord::all() {
            prop_assert_eq!(listed.contains(&to), try_move(&board, turn, from, to).is_ok());
        }
    }

    #[test]
    fn reset_after_any_presses_is_canonical(presses in prop::collection::vec(coord(), 0..60)) {
        let mut state = GameState::new();
        let mut selection = None;
        for pressed in presses {
            let press = select_or_move(state, selection, pressed);
            state = press.state;
            selection = press.selection;
        }
        prop_assert!(state.board.pieces().all(|(sq, _)| sq.is_dark()));
        prop_assert!(state.board.count(Color::White) <= 12);
        prop_assert!(state.board.count(Color::Black) <= 12);
        prop_assert!(selection.map_or(true, |sq| state.board.get(sq).is_owned_by(state.turn)));

        let (fresh, none) = reset_game();
        prop_assert_eq!(fresh.board, Board::new());
        prop_assert_eq!(fresh.turn, Color::White);
        prop_assert_eq!(none, None);
    }
}
