use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a man of this color. White advances toward row 0.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    WhiteMan,
    BlackMan,
    WhiteKing,
    BlackKing,
}

impl Cell {
    pub fn man(color: Color) -> Cell {
        match color {
            Color::White => Cell::WhiteMan,
            Color::Black => Cell::BlackMan,
        }
    }

    pub fn king(color: Color) -> Cell {
        match color {
            Color::White => Cell::WhiteKing,
            Color::Black => Cell::BlackKing,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Color of the piece on this cell, `None` when empty. Kings share
    /// the color of the man they were promoted from.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::WhiteMan | Cell::WhiteKing => Some(Color::White),
            Cell::BlackMan | Cell::BlackKing => Some(Color::Black),
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Cell::WhiteKing | Cell::BlackKing)
    }

    pub fn is_owned_by(self, turn: Color) -> bool {
        self.color() == Some(turn)
    }

    /// The crowned version of a man. Kings and empty cells are returned as-is.
    pub fn promoted(self) -> Cell {
        match self {
            Cell::WhiteMan => Cell::WhiteKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// Single-character symbol used by the text rendering: `w`/`b` men,
    /// `W`/`B` kings, `-` empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::WhiteMan => 'w',
            Cell::BlackMan => 'b',
            Cell::WhiteKing => 'W',
            Cell::BlackKing => 'B',
        }
    }
}
