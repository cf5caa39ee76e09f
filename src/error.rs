use std::io;


pub type Result<T> = std::result::Result<T, Error>;


#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("pitch class {0} is out of range, expected 0-11")]
    InvalidPitchClass(u8),
    #[error("'{0}' is not a note name")]
    InvalidNoteName(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' is not an interval")]
    InvalidInterval(String),
    #[error("octave {0} is out of range")]
    OctaveOutOfRange(i64),
    #[error("a fretboard needs at least one fret")]
    NoFrets,
    #[error("{0} frets is more than a fretboard can hold")]
    TooManyFrets(usize),
    #[error("fret width {width} is too narrow, at least {required} columns are needed")]
    FretTooNarrow { width: usize, required: usize },
    #[error("failed to write to sink: {0}")]
    Io(#[from] io::Error),
}
