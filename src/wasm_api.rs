use crate::board::{reset_game, Coord, GameState};
use crate::moves::Move;
use crate::piece::{Cell, Color};
use crate::rules::{legal_destinations, try_move};
use crate::session::{select_or_move, PressEvent};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    color: String,
    king: bool,
}

#[derive(Serialize)]
struct MoveJson {
    from: [usize; 2],
    to: [usize; 2],
    jump: bool,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    current_turn: String,
    selected: Option<[usize; 2]>,
    /// Destinations of the selected piece, for highlighting.
    targets: Vec<MoveJson>,
    white_pieces: usize,
    black_pieces: usize,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    last_move: Option<MoveJson>,
    error: Option<String>,
}

fn color_to_string(c: Color) -> String {
    match c {
        Color::White => "White".to_string(),
        Color::Black => "Black".to_string(),
    }
}

fn cell_to_piece(cell: Cell) -> Option<SquarePiece> {
    cell.color().map(|color| SquarePiece {
        color: color_to_string(color),
        king: cell.is_king(),
    })
}

fn move_to_json(m: &Move) -> MoveJson {
    MoveJson {
        from: [m.from.row(), m.from.col()],
        to: [m.to.row(), m.to.col()],
        jump: m.is_jump(),
    }
}

fn coord(row: usize, col: usize) -> Result<Coord, JsValue> {
    Coord::new(row, col).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

fn build_board_state(state: &GameState, selection: Option<Coord>) -> BoardState {
    let squares: Vec<Vec<Option<SquarePiece>>> = state
        .board
        .squares
        .iter()
        .map(|row| row.iter().map(|&cell| cell_to_piece(cell)).collect())
        .collect();

    let targets: Vec<MoveJson> = selection
        .map(|from| legal_destinations(&state.board, state.turn, from))
        .unwrap_or_default()
        .iter()
        .map(move_to_json)
        .collect();

    BoardState {
        squares,
        current_turn: color_to_string(state.turn),
        selected: selection.map(|sq| [sq.row(), sq.col()]),
        targets,
        white_pieces: state.board.count(Color::White),
        black_pieces: state.board.count(Color::Black),
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Browser-side handle. Holds the current state and selection and swaps them
/// wholesale on every accepted press.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    selection: Option<Coord>,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        let (state, selection) = reset_game();
        Game { state, selection }
    }

    pub fn reset(&mut self) -> JsValue {
        let (state, selection) = reset_game();
        self.state = state;
        self.selection = selection;
        self.get_board_state()
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.state, self.selection))
    }

    /// A click on square `(row, col)`.
    pub fn press(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let pressed = coord(row, col)?;
        let press = select_or_move(self.state, self.selection, pressed);
        self.state = press.state;
        self.selection = press.selection;

        let (last_move, error) = match press.event {
            PressEvent::Moved(m) => (Some(move_to_json(&m)), None),
            PressEvent::Deselected(reason) => (None, Some(reason.to_string())),
            PressEvent::Selected(_) | PressEvent::Ignored => (None, None),
        };
        Ok(to_js(&MoveResult {
            board_state: Some(build_board_state(&self.state, self.selection)),
            last_move,
            error,
        }))
    }

    pub fn try_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<JsValue, JsValue> {
        let from = coord(from_row, from_col)?;
        let to = coord(to_row, to_col)?;

        let result = match try_move(&self.state.board, self.state.turn, from, to) {
            Ok(next) => {
                self.state = next;
                self.selection = None;
                MoveResult {
                    board_state: Some(build_board_state(&self.state, None)),
                    last_move: Some(move_to_json(&Move::new(from, to))),
                    error: None,
                }
            }
            Err(reason) => MoveResult {
                board_state: None,
                last_move: None,
                error: Some(reason.to_string()),
            },
        };
        Ok(to_js(&result))
    }

    pub fn get_legal_destinations(&self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let from = coord(row, col)?;
        let moves: Vec<MoveJson> = legal_destinations(&self.state.board, self.state.turn, from)
            .iter()
            .map(move_to_json)
            .collect();
        Ok(to_js(&moves))
    }
}
