use crate::music::notes::{Note, PitchClass};


/// Common open-string tunings, listed highest string first.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tuning {
    StandardGuitar,
    DropD,
    StandardBass,
}


impl Tuning {
    pub fn open_notes(self) -> Vec<Note> {
        use PitchClass::*;
        let strings: &[(PitchClass, i32)] = match self {
            Tuning::StandardGuitar => &[(E, 4), (B, 4), (G, 3), (D, 3), (A, 3), (E, 2)],
            Tuning::DropD => &[(E, 4), (B, 4), (G, 3), (D, 3), (A, 3), (D, 2)],
            Tuning::StandardBass => &[(G, 3), (D, 3), (A, 2), (E, 2)],
        };
        strings.iter().map(|&(pc, octave)| Note::new(pc, octave)).collect()
    }
}
