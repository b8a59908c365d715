use std::io::{self, BufRead, Write};

use minesweeper_alpha_core::*;

use crate::banner;

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ending {
    Won { score: f64 },
    Lost,
    Quit,
}

/// Drives one game: prompt, apply, redraw, until a terminal turn or end of input.
pub fn play<R: BufRead, W: Write>(
    engine: &mut MinefieldEngine,
    mut input: R,
    out: &mut W,
) -> io::Result<Ending> {
    writeln!(out, "{}", banner::WELCOME)?;
    print_rounds(engine, out)?;
    write!(out, "{}", GridView::new(engine))?;

    let mut line = String::new();
    loop {
        write!(out, "{}", banner::PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::info!("End of input, leaving the game");
            writeln!(out)?;
            writeln!(out, "{}", banner::QUIT)?;
            return Ok(Ending::Quit);
        }

        let command = Command::parse(&line);
        log::debug!("command: {command:?}");
        let turn = engine.apply(command);

        match turn.effect {
            TurnEffect::ShowHelp => {
                writeln!(out, "{}", banner::HELP)?;
                print_rounds(engine, out)?;
                write!(out, "{}", GridView::new(engine))?;
            }
            TurnEffect::ShowNoFog => {
                print_rounds(engine, out)?;
                write!(out, "{}", GridView::no_fog(engine))?;
                writeln!(out)?;
            }
            TurnEffect::Quit => {
                writeln!(out, "{}", banner::QUIT)?;
                return Ok(Ending::Quit);
            }
            TurnEffect::Rejected => {
                writeln!(out)?;
                writeln!(out, "{}", banner::INPUT_ERROR)?;
                write!(out, "{}", GridView::new(engine))?;
            }
            TurnEffect::Revealed(_) | TurnEffect::Marked(_) | TurnEffect::Guessed(_) => {
                print_rounds(engine, out)?;
                write!(out, "{}", GridView::new(engine))?;
            }
        }

        match turn.state {
            EngineState::Lost => {
                writeln!(out, "{}", banner::LOSS)?;
                return Ok(Ending::Lost);
            }
            EngineState::Won => {
                let score = engine.score();
                writeln!(out, "{}", banner::WIN)?;
                writeln!(out, "{score:?}")?;
                return Ok(Ending::Won { score });
            }
            EngineState::InProgress => {}
        }
    }
}

fn print_rounds<W: Write>(engine: &MinefieldEngine, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Rounds Completed: {}", engine.rounds_completed())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(mines: &[(i64, i64)], rule: WinRule, script: &str) -> (Ending, String, MinefieldEngine) {
        let mut engine = MinefieldEngine::new(5, 5, mines.len() as i64, mines)
            .unwrap()
            .with_win_rule(rule);
        let mut out = Vec::new();
        let ending = play(&mut engine, Cursor::new(script), &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap(), engine)
    }

    #[test]
    fn revealing_a_mine_ends_in_a_loss() {
        let (ending, out, engine) = run(&[(2, 2)], WinRule::default(), "r 0 0\nr 2 2\nr 1 1\n");

        assert_eq!(ending, Ending::Lost);
        assert!(out.contains("You revealed a mine"));
        assert!(out.contains(" Rounds Completed: 1"));
        assert_eq!(engine.rounds_completed(), 1);
    }

    #[test]
    fn quit_stops_without_spending_rounds() {
        let (ending, out, engine) = run(&[(2, 2)], WinRule::default(), "q\nr 0 0\n");

        assert_eq!(ending, Ending::Quit);
        assert!(out.contains("Bye!"));
        assert_eq!(engine.rounds_completed(), 0);
    }

    #[test]
    fn end_of_input_counts_as_quit() {
        let (ending, _, _) = run(&[], WinRule::default(), "m 0 0\n");
        assert_eq!(ending, Ending::Quit);
    }

    #[test]
    fn rejected_commands_are_reported_and_free() {
        let (_, out, engine) = run(&[], WinRule::default(), "x\nr 5 0\nr 1\nnofog\n");

        assert_eq!(out.matches(banner::INPUT_ERROR).count(), 3);
        assert_eq!(engine.rounds_completed(), 0);
    }

    #[test]
    fn help_lists_commands_and_costs_a_round() {
        let (_, out, engine) = run(&[], WinRule::default(), "help\n");

        assert!(out.contains("Commands Available..."));
        assert_eq!(engine.rounds_completed(), 1);
    }

    #[test]
    fn win_score_prints_as_a_full_double() {
        let mut script = String::new();
        for row in 0..5 {
            for col in 0..5 {
                script.push_str(&format!("r {row} {col}\n"));
            }
        }

        let (ending, out, _) = run(&[], WinRule::default(), &script);

        assert_eq!(ending, Ending::Won { score: 100.0 });
        assert!(out.ends_with(" SCORE: \n100.0\n"));
    }

    #[test]
    fn no_fog_shows_mines() {
        let (_, out, _) = run(&[(0, 0)], WinRule::default(), "nofog\n");
        assert!(out.contains(" 0 |<   >|"));
    }

    #[test]
    fn clearing_every_safe_cell_wins_with_the_corrected_rule() {
        let mut script = String::new();
        for row in 0..5 {
            for col in 0..5 {
                if (row, col) != (4, 4) {
                    script.push_str(&format!("r {row} {col}\n"));
                }
            }
        }

        let (ending, out, _) = run(&[(4, 4)], WinRule::SafeCellsRevealed, &script);

        assert_eq!(ending, Ending::Won { score: 2500.0 / 24.0 });
        assert!(out.contains("YOU HAVE WON!"));
        assert!(out.contains(r#""So Doge""#));
        assert!(out.contains(" SCORE: \n104.16666666666667\n"));
    }
}
