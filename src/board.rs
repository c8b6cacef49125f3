use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DamaError, Rejection};
use crate::piece::{Cell, Color};
use crate::rules;

pub const BOARD_SIZE: usize = 8;

/// A square on the board. Always within bounds: the only constructors
/// (deserialization included) check the range and fail with `OutOfBounds`
/// instead of clamping.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "CoordRepr", into = "CoordRepr")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Coord, DamaError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Coord { row, col })
        } else {
            Err(DamaError::OutOfBounds { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Pieces only ever stand on dark squares.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `(dr, dc)` away, or `None` if that falls off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Coord> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&r) && (0..BOARD_SIZE as i32).contains(&c) {
            Some(Coord { row: r as usize, col: c as usize })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = DamaError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

/// Wire shape of a `Coord`, unchecked until converted.
#[derive(Serialize, Deserialize)]
struct CoordRepr {
    row: usize,
    col: usize,
}

impl TryFrom<CoordRepr> for Coord {
    type Error = DamaError;

    fn try_from(repr: CoordRepr) -> Result<Self, Self::Error> {
        Coord::new(repr.row, repr.col)
    }
}

impl From<Coord> for CoordRepr {
    fn from(sq: Coord) -> Self {
        CoordRepr { row: sq.row, col: sq.col }
    }
}

/// The 8x8 grid. A `Board` is a plain value: moves produce a new one and
/// leave the previous board untouched. Deserialized boards must keep every
/// light square empty.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    pub squares: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    squares: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl TryFrom<BoardRepr> for Board {
    type Error = DamaError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Board { squares: repr.squares };
        let light = board.pieces().find(|(sq, _)| !sq.is_dark());
        match light {
            Some((sq, _)) => Err(DamaError::PieceOnLightSquare { row: sq.row, col: sq.col }),
            None => Ok(board),
        }
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        BoardRepr { squares: board.squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board { squares: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE] }
    }

    /// The starting layout: Black men on the dark squares of rows 0-2,
    /// White men on the dark squares of rows 5-7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Coord::all().filter(|sq| sq.is_dark()) {
            match sq.row {
                0..=2 => board.set(sq, Cell::BlackMan),
                5..=7 => board.set(sq, Cell::WhiteMan),
                _ => {}
            }
        }
        board
    }

    pub fn get(&self, sq: Coord) -> Cell {
        self.squares[sq.row][sq.col]
    }

    pub(crate) fn set(&mut self, sq: Coord, cell: Cell) {
        self.squares[sq.row][sq.col] = cell;
    }

    /// Occupied squares with their contents, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(|(_, cell)| !cell.is_empty())
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, cell)| cell.is_owned_by(color)).count()
    }
}

/// Renders row 0 at the top, labelled `1`, with files `a`-`h` underneath.
/// Light squares print as `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let sq = Coord { row, col };
                let ch = if sq.is_dark() { self.get(sq).symbol() } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

pub fn initial_board() -> Board {
    Board::new()
}

/// Board plus the side to move.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState { board: Board::new(), turn: Color::White }
    }

    pub fn try_move(&self, from: Coord, to: Coord) -> Result<GameState, Rejection> {
        rules::try_move(&self.board, self.turn, from, to)
    }
}

pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// Fresh game with nothing selected. Always yields the same layout.
pub fn reset_game() -> (GameState, Option<Coord>) {
    (GameState::new(), None)
}
