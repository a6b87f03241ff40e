use std::fmt;

use super::{Bitboard, Position, Square};

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
const FILES: &str = "    a   b   c   d   e   f   g   h";

/// Draw an 8x8 grid with rank 8 at the top, one character per square.
fn write_grid(f: &mut fmt::Formatter<'_>, cell: impl Fn(Square) -> char) -> fmt::Result {
    writeln!(f, "{BORDER}")?;
    for rank in (0..8).rev() {
        write!(f, "{} |", rank + 1)?;
        for file in 0..8 {
            let ch = Square::new(rank, file).map_or(' ', &cell);
            write!(f, " {ch} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{BORDER}")?;
    }
    write!(f, "{FILES}")
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:#018x}", self.0)?;
        write_grid(f, |sq| if self.contains(sq) { '1' } else { '.' })
    }
}

/// Board diagram of a position, as returned by [`Position::board_view`].
pub struct BoardView<'a>(&'a Position);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |sq| {
            self.0
                .piece_at(sq)
                .map_or('.', |(color, piece)| piece.to_fen_char(color))
        })
    }
}

impl Position {
    /// Printable diagram: uppercase White, lowercase Black, `.` for empty.
    #[must_use]
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView(self)
    }
}
