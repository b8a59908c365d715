use core::fmt;

use crate::*;

/// Text drawing of the grid, row labels on the left and column labels below.
///
/// ```text
///  0 |     |  1  |  F  |  ?  |     |
///  1 |     |     |     |     |     |
///       0     1     2     3     4
/// ```
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a> {
    engine: &'a MinefieldEngine,
    no_fog: bool,
}

impl<'a> GridView<'a> {
    pub fn new(engine: &'a MinefieldEngine) -> Self {
        Self {
            engine,
            no_fog: false,
        }
    }

    /// Same grid, with every mine bracketed as `<   >`.
    pub fn no_fog(engine: &'a MinefieldEngine) -> Self {
        Self {
            engine,
            no_fog: true,
        }
    }
}

fn cell_text(display: CellDisplay) -> &'static str {
    match display {
        CellDisplay::Blank => " ",
        CellDisplay::Count(0) => "0",
        CellDisplay::Count(1) => "1",
        CellDisplay::Count(2) => "2",
        CellDisplay::Count(3) => "3",
        CellDisplay::Count(4) => "4",
        CellDisplay::Count(5) => "5",
        CellDisplay::Count(6) => "6",
        CellDisplay::Count(7) => "7",
        CellDisplay::Count(_) => "8",
        CellDisplay::Mark => "F",
        CellDisplay::Guess => "?",
        CellDisplay::Blasted => "*",
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.engine.grid();
        let (rows, cols) = self.engine.size();
        let label_width = rows
            .saturating_sub(1)
            .checked_ilog10()
            .map_or(1, |digits| digits as usize + 1);

        for row in 0..rows {
            write!(f, " {row:>label_width$} |")?;
            for col in 0..cols {
                let cell = &grid[(row, col).to_nd_index()];
                let text = cell_text(cell.display());
                if self.no_fog && cell.has_mine {
                    write!(f, "< {text} >")?;
                } else {
                    write!(f, "  {text}  ")?;
                }
                f.write_str("|")?;
            }
            writeln!(f)?;
        }

        write!(f, " {:label_width$}  ", "")?;
        for col in 0..cols {
            write!(f, "{col:^6}")?;
        }
        writeln!(f)
    }
}
