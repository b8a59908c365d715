#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use seed::*;
pub use types::*;

mod cell;
mod command;
mod engine;
mod error;
mod generator;
mod render;
mod seed;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealResult {
    NoChange,
    Revealed,
    Blasted,
}

/// Which cells have to be revealed before the game counts as won.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinRule {
    /// Every cell, mined or not, is revealed. A mined cell can only be revealed by
    /// blasting it, so any field with mines can never be won under this rule.
    #[default]
    AllCellsRevealed,
    /// Every safe cell is revealed.
    SafeCellsRevealed,
    /// Every safe cell is revealed and every mined cell is marked.
    MinesMarkedRestRevealed,
}

impl WinRule {
    /// Whether a single cell satisfies the rule.
    pub(crate) const fn is_settled(self, cell: &Cell) -> bool {
        let revealed = cell.visibility.is_revealed();
        match self {
            Self::AllCellsRevealed => revealed,
            Self::SafeCellsRevealed => cell.has_mine || revealed,
            Self::MinesMarkedRestRevealed => {
                if cell.has_mine {
                    matches!(cell.visibility, Visibility::Marked)
                } else {
                    revealed
                }
            }
        }
    }
}
