use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::SplitAsciiWhitespace;
use serde::{Deserialize, Serialize};

use crate::*;

/// Raw seed values, checked for integer syntax and minimum side length only.
///
/// The remaining range checks belong to [`MinefieldEngine::from_seed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub rows: i64,
    pub cols: i64,
    pub total_mines: i64,
    pub mines: Vec<(i64, i64)>,
}

impl Seed {
    pub fn new(rows: i64, cols: i64, mines: Vec<(i64, i64)>) -> Self {
        Self {
            rows,
            cols,
            total_mines: mines.len() as i64,
            mines,
        }
    }

    /// Parses `rows cols total_mines` followed by `total_mines` pairs of `row col`.
    ///
    /// A side shorter than [`MIN_SIDE`] stops parsing as soon as it is read, so
    /// it is reported even when later values are missing or malformed.
    pub fn parse(text: &str) -> core::result::Result<Self, SeedError> {
        let mut tokens = SeedTokens(text.split_ascii_whitespace());

        let rows = tokens.next_side("row count")?;
        let cols = tokens.next_side("column count")?;
        let total_mines = tokens.next_int("mine count")?;

        let mut mines = Vec::new();
        for _ in 0..total_mines.max(0) {
            let row = tokens.next_int("mine row")?;
            let col = tokens.next_int("mine column")?;
            mines.push((row, col));
        }

        if tokens.0.next().is_some() {
            log::debug!("Ignoring trailing seed values");
        }

        Ok(Self {
            rows,
            cols,
            total_mines,
            mines,
        })
    }
}

struct SeedTokens<'a>(SplitAsciiWhitespace<'a>);

impl SeedTokens<'_> {
    fn next_int(&mut self, what: &'static str) -> core::result::Result<i64, SeedError> {
        let token = self.0.next().ok_or(SeedError::MissingValue(what))?;
        token
            .parse()
            .map_err(|_| SeedError::NotAnInteger(token.to_string()))
    }

    fn next_side(&mut self, what: &'static str) -> core::result::Result<i64, SeedError> {
        let side = self.next_int(what)?;
        if side < i64::from(MIN_SIDE) {
            return Err(SeedError::SideTooShort(side));
        }
        Ok(side)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.rows, self.cols, self.total_mines)?;
        for (row, col) in &self.mines {
            writeln!(f, "{row} {col}")?;
        }
        Ok(())
    }
}
