use serde::{Deserialize, Serialize};

use crate::board::{Coord, BOARD_SIZE};
use crate::error::DamaError;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple,
    Jump { captured: Coord },
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

fn square_name(sq: Coord) -> String {
    let file = (b'a' + sq.col() as u8) as char;
    let rank = (b'1' + sq.row() as u8) as char;
    format!("{file}{rank}")
}

fn parse_square(bytes: &[u8], text: &str) -> Result<Coord, DamaError> {
    let bad = || DamaError::InvalidNotation(text.to_string());
    let (file, rank) = match bytes {
        [f, r] => (*f, *r),
        _ => return Err(bad()),
    };
    if !file.is_ascii_lowercase() || !rank.is_ascii_digit() || rank == b'0' {
        return Err(bad());
    }
    let col = (file - b'a') as usize;
    let row = (rank - b'1') as usize;
    if col >= BOARD_SIZE || row >= BOARD_SIZE {
        return Err(DamaError::OutOfBounds { row, col });
    }
    Coord::new(row, col)
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// Geometric jump test; does not look at what stands on the board.
    pub fn is_jump(&self) -> bool {
        self.from.row().abs_diff(self.to.row()) == 2 && self.from.col().abs_diff(self.to.col()) == 2
    }

    /// Notation such as `c6-d5` or, for a jump, `c6xe4`. File `a` is column 0,
    /// rank `1` is row 0.
    pub fn to_notation(&self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{sep}{}", square_name(self.from), square_name(self.to))
    }

    /// Parse `c6-d5`, `c6xe4` or the bare `c6d5`.
    pub fn from_notation(s: &str) -> Result<Move, DamaError> {
        let bytes = s.trim().as_bytes();
        let (from, to) = match bytes.len() {
            4 => (&bytes[0..2], &bytes[2..4]),
            5 if matches!(bytes[2], b'-' | b'x') => (&bytes[0..2], &bytes[3..5]),
            _ => return Err(DamaError::InvalidNotation(s.to_string())),
        };
        Ok(Move {
            from: parse_square(from, s)?,
            to: parse_square(to, s)?,
        })
    }
}
