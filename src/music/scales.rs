use std::str::FromStr;

use crate::music::notes::{Note, PitchClass};
use crate::{Error, Result};


/// Whole/half steps of the major scale, root excluded.
const MAJOR_STEPS: [i32; 6] = [2, 2, 1, 2, 2, 2];


/// A set of reference notes. Membership only looks at pitch class, so the octaves of the
/// reference notes are irrelevant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scale {
    notes: Vec<Note>,
}


impl Scale {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.iter().any(|n| n.eq_pitch_class(note))
    }
}


impl FromIterator<Note> for Scale {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


/// Whitespace and/or comma separated notes, e.g. `"C D E F G A B"` or `"A,C#,E"`.
impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<Note>())
            .collect()
    }
}


/// Major scale built upward from `root`, seven notes.
pub fn major(root: Note) -> Result<Scale> {
    let mut notes = Vec::with_capacity(MAJOR_STEPS.len() + 1);
    notes.push(root);
    let mut current = root;
    for step in MAJOR_STEPS.iter() {
        current = current.checked_transpose(*step)?;
        notes.push(current);
    }
    Ok(Scale::new(notes))
}


/// `C D E F G A B`, all labelled with the same `octave`.
pub fn c_major(octave: i32) -> Scale {
    [PitchClass::C, PitchClass::D, PitchClass::E, PitchClass::F, PitchClass::G, PitchClass::A, PitchClass::B]
        .iter()
        .map(|&pc| Note::new(pc, octave))
        .collect()
}
