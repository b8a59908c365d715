/// One player command, already split from the raw input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    NoFog,
    Reveal { row: i64, col: i64 },
    Mark { row: i64, col: i64 },
    Guess { row: i64, col: i64 },
    Unrecognized,
}

impl Command {
    /// Parses a prompt line such as `r 2 3` or `help`.
    ///
    /// Anything that does not fit the grammar becomes [`Command::Unrecognized`].
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_ascii_whitespace();
        let Some(word) = tokens.next() else {
            return Self::Unrecognized;
        };

        let coords = |tokens: &mut core::str::SplitAsciiWhitespace<'_>| {
            let row: i64 = tokens.next()?.parse().ok()?;
            let col: i64 = tokens.next()?.parse().ok()?;
            Some((row, col))
        };

        match word {
            "h" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            "nofog" => Self::NoFog,
            "r" | "reveal" => coords(&mut tokens)
                .map(|(row, col)| Self::Reveal { row, col })
                .unwrap_or(Self::Unrecognized),
            "m" | "mark" => coords(&mut tokens)
                .map(|(row, col)| Self::Mark { row, col })
                .unwrap_or(Self::Unrecognized),
            "g" | "guess" => coords(&mut tokens)
                .map(|(row, col)| Self::Guess { row, col })
                .unwrap_or(Self::Unrecognized),
            _ => Self::Unrecognized,
        }
    }

    /// Row and column for the commands that target a cell.
    pub const fn target(self) -> Option<(i64, i64)> {
        match self {
            Self::Reveal { row, col } | Self::Mark { row, col } | Self::Guess { row, col } => {
                Some((row, col))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Command::parse("r 1 2"), Command::Reveal { row: 1, col: 2 });
        assert_eq!(Command::parse("reveal 1 2"), Command::Reveal { row: 1, col: 2 });
        assert_eq!(Command::parse("m 0 4"), Command::Mark { row: 0, col: 4 });
        assert_eq!(Command::parse("  guess   3 3 "), Command::Guess { row: 3, col: 3 });
        assert_eq!(Command::parse("h"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("nofog"), Command::NoFog);
    }

    #[test]
    fn negative_coordinates_still_parse() {
        assert_eq!(Command::parse("g -1 2"), Command::Guess { row: -1, col: 2 });
    }

    #[test]
    fn malformed_input_is_unrecognized() {
        assert_eq!(Command::parse(""), Command::Unrecognized);
        assert_eq!(Command::parse("r 1"), Command::Unrecognized);
        assert_eq!(Command::parse("r one 2"), Command::Unrecognized);
        assert_eq!(Command::parse("flag 1 2"), Command::Unrecognized);
        assert_eq!(Command::parse("NOFOG"), Command::Unrecognized);
    }

    #[test]
    fn target_only_for_cell_commands() {
        assert_eq!(Command::Mark { row: 2, col: 1 }.target(), Some((2, 1)));
        assert_eq!(Command::Help.target(), None);
    }
}
