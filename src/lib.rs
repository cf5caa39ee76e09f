pub mod error;
pub mod fretboard;
pub mod music;
pub mod repl;
pub mod sinks;

pub use error::{Error, Result};
pub use fretboard::FretBoard;
pub use music::notes::{Note, PitchClass};
pub use music::scales::Scale;
pub use music::tunings::Tuning;


/// Output target for a rendered `FretBoard`.
///
/// Text arrives in render order through `write`. Highlighting is signalled out-of-band with
/// `begin_highlight`/`end_highlight` so that a terminal can emit escape codes while a plain text
/// target simply ignores them.
///
/// Renderers call `end_highlight` after every cell whether or not `begin_highlight` was called for
/// it, so implementations that track mode must tolerate an unmatched `end_highlight`.
pub trait Sink {
    fn write(&mut self, text: &str) -> std::io::Result<()>;
    fn begin_highlight(&mut self) -> std::io::Result<()>;
    fn end_highlight(&mut self) -> std::io::Result<()>;
}

