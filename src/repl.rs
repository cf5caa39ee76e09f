//! Line-oriented explorer for a fixed `FretBoard`.

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::music::scales;
use crate::{Error, FretBoard, Note, Result, Scale, Sink};


const PROMPT: &str = "fretboard> ";

const HELP: &str = "\
commands:
  scale <notes...>    highlight the given notes, e.g. 'scale C D E F G A B'
  major <root>        highlight the major scale built on <root>
  plain               print the board without highlighting
  <note> <interval>   transpose a note, e.g. 'A0 +13' or 'C2 -10'
  help                show this message
  q                   quit
";


#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Highlight(Scale),
    Plain,
    Transpose(Note, i32),
    Help,
    Quit,
}


impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };
        match (keyword.to_ascii_lowercase().as_str(), rest) {
            ("q", "") | ("quit", "") | ("exit", "") => Ok(Command::Quit),
            ("help", "") | ("?", "") => Ok(Command::Help),
            ("plain", "") => Ok(Command::Plain),
            ("scale", notes) => Ok(Command::Highlight(notes.parse()?)),
            ("major", root) if !root.is_empty() => Ok(Command::Highlight(scales::major(root.parse()?)?)),
            (_, interval) if !interval.is_empty() && !interval.contains(char::is_whitespace) => {
                let note = keyword.parse::<Note>()?;
                let interval = interval
                    .parse::<i32>()
                    .map_err(|_| Error::InvalidInterval(interval.to_string()))?;
                Ok(Command::Transpose(note, interval))
            },
            _ => Err(Error::UnknownCommand(line.to_string())),
        }
    }
}


pub struct Repl<'a> {
    board: &'a FretBoard,
    fret_width: usize,
}


impl<'a> Repl<'a> {
    pub fn new(board: &'a FretBoard, fret_width: usize) -> Self {
        Self { board, fret_width }
    }

    pub fn execute<S: Sink + ?Sized>(&self, command: &Command, sink: &mut S) -> Result<()> {
        match command {
            Command::Highlight(scale) => self.board.render_highlighted(sink, self.fret_width, scale),
            Command::Plain => self.board.render(sink, self.fret_width),
            Command::Transpose(note, interval) => {
                let result = note.checked_transpose(*interval)?;
                sink.write(&format!(
                    "{} octave {} {:+} -> {} octave {}\n",
                    note, note.octave(), interval, result, result.octave(),
                ))?;
                Ok(())
            },
            Command::Help => Ok(sink.write(HELP)?),
            Command::Quit => Ok(()),
        }
    }

    /// Read commands until `q` or end of input. Bad input is reported and skipped.
    pub fn run<S: Sink + ?Sized>(&self, sink: &mut S) -> anyhow::Result<()> {
        let mut reader = DefaultEditor::new()?;
        loop {
            match reader.readline(PROMPT) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    reader.add_history_entry(line.as_str())?;
                    let command = match Command::parse(&line) {
                        Ok(command) => command,
                        Err(e) => {
                            eprintln!("{}, try again ('help' lists commands)", e);
                            continue;
                        },
                    };
                    debug!("executing {:?}", command);
                    if command == Command::Quit {
                        break;
                    }
                    match self.execute(&command, sink) {
                        Err(Error::Io(e)) => return Err(e.into()),
                        Err(e) => eprintln!("{}", e),
                        Ok(()) => {},
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
