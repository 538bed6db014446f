use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::*;

use crate::session::Session;

const HELP: &str = "\
commands:
  r ROW COL      reveal a cell
  f ROW COL      flag or unflag a cell
  new [LEVEL]    new game, optionally switching to easy, normal or hard
  restart        new game with the current board size
  status         print the board again
  help           show this message
  quit           leave";

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New(Option<Difficulty>),
    Restart,
    Status,
    Help,
    Quit,
}

fn parse_coords<'a>(mut words: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let (Some(row), Some(col), None) = (words.next(), words.next(), words.next()) else {
        bail!("expected ROW COL");
    };
    let row = row.parse().with_context(|| format!("invalid row {:?}", row))?;
    let col = col.parse().with_context(|| format!("invalid column {:?}", col))?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::Status);
        };

        Ok(match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(words)?),
            "f" | "flag" => Self::Flag(parse_coords(words)?),
            "new" => match words.next() {
                Some(level) => Self::New(Some(level.parse()?)),
                None => Self::New(None),
            },
            "restart" => Self::Restart,
            "s" | "status" => Self::Status,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {:?}, try help", other),
        })
    }
}

fn print_board(session: &Session, out: &mut impl Write, json: bool) -> anyhow::Result<()> {
    let status = session.status();
    if json {
        writeln!(out, "{}", serde_json::to_string(&status)?)?;
        return Ok(());
    }

    let board = session.board();
    write!(out, "    ")?;
    for col in 0..board.cols() {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;
    for (row, symbols) in board.render_rows().iter().enumerate() {
        write!(out, "{:>3} ", row)?;
        for symbol in symbols.chars() {
            let symbol = match symbol {
                'H' => '#',
                '0' => '.',
                other => other,
            };
            write!(out, "{:>3}", symbol)?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "mines left: {} | time: {}s | revealed: {}/{}",
        status.mines_left(),
        session.elapsed_secs(),
        status.revealed_count,
        board.safe_cell_count(),
    )?;
    Ok(())
}

/// Reads commands line by line until `quit` or end of input.
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut out: impl Write,
    json: bool,
) -> anyhow::Result<()> {
    let mut announced = false;
    print_board(session, &mut out, json)?;

    for line in input.lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{:#}", e)?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Reveal(coords) => {
                if !session.reveal(coords).has_update() {
                    writeln!(out, "cannot reveal {:?}", coords)?;
                }
            }
            Command::Flag(coords) => {
                if !session.toggle_flag(coords).has_update() {
                    writeln!(out, "cannot flag {:?}", coords)?;
                }
            }
            Command::New(Some(difficulty)) => {
                session.change_difficulty(difficulty);
                announced = false;
            }
            Command::New(None) | Command::Restart => {
                session.restart();
                announced = false;
            }
            Command::Status => {}
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        print_board(session, &mut out, json)?;
        if !announced {
            match session.outcome() {
                Some(GameOutcome::Won) => writeln!(out, "You Won")?,
                Some(GameOutcome::Lost) => writeln!(out, "You Lost")?,
                None => continue,
            }
            announced = true;
        }
    }

    out.flush()?;
    Ok(())
}
