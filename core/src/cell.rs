use serde::{Deserialize, Serialize};

/// Player-facing state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Marked,
    Guessed,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What a cell shows when drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    Blank,
    Count(u8),
    Mark,
    Guess,
    Blasted,
}

/// One grid position: the mine flag and everything the player has done to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) visibility: Visibility,
    pub(crate) adjacent: Option<u8>,
    pub(crate) blasted: bool,
}

impl Cell {
    pub(crate) const fn mined() -> Self {
        Self {
            has_mine: true,
            visibility: Visibility::Hidden,
            adjacent: None,
            blasted: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn display(&self) -> CellDisplay {
        if self.blasted {
            return CellDisplay::Blasted;
        }

        match (self.visibility, self.adjacent) {
            (Visibility::Hidden, _) => CellDisplay::Blank,
            (Visibility::Revealed, Some(count)) => CellDisplay::Count(count),
            (Visibility::Revealed, None) => CellDisplay::Blank,
            (Visibility::Marked, _) => CellDisplay::Mark,
            (Visibility::Guessed, _) => CellDisplay::Guess,
        }
    }

    /// The view handed to renderers; the mine flag stays private.
    pub fn view(&self) -> CellView {
        CellView {
            visibility: self.visibility,
            display: self.display(),
        }
    }
}

/// Cell state safe to expose while the game runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub visibility: Visibility,
    pub display: CellDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blasted_overrides_visibility() {
        let mut cell = Cell::mined();
        cell.visibility = Visibility::Marked;
        cell.blasted = true;
        assert_eq!(cell.display(), CellDisplay::Blasted);
    }

    #[test]
    fn revealed_cell_shows_count() {
        let cell = Cell {
            visibility: Visibility::Revealed,
            adjacent: Some(3),
            ..Default::default()
        };
        assert_eq!(cell.view().display, CellDisplay::Count(3));
    }
}
