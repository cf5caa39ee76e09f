use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{Error, Result};


pub const NOTES_PER_OCTAVE: i32 = 12;


/// One of the twelve equal-tempered pitch classes, counted in semitones up from `A`.
///
/// Sharp and flat spellings of the same pitch share a single variant; the flat spelling is only
/// an input alias (see the `FromStr` impl) and part of the display name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PitchClass {
    A = 0,
    ASharp = 1,
    B = 2,
    C = 3,
    CSharp = 4,
    D = 5,
    DSharp = 6,
    E = 7,
    F = 8,
    FSharp = 9,
    G = 10,
    GSharp = 11,
}


impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];

    const NAMES: [&'static str; 12] = [
        "A",
        "A#:Bb",
        "B",
        "C",
        "C#:Db",
        "D",
        "D#:Eb",
        "E",
        "F",
        "F#:Gb",
        "G",
        "G#:Ab",
    ];

    /// Wrap any semitone count onto a pitch class using floored modulo, so `-1` is `GSharp`.
    pub fn from_semitones(semitones: i32) -> Self {
        Self::ALL[semitones.rem_euclid(NOTES_PER_OCTAVE) as usize]
    }

    /// Canonical display name, with both enharmonic spellings joined by `:` where they differ.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    pub fn display_len(self) -> usize {
        self.name().len()
    }

    fn natural_semitones(letter: char) -> Option<i32> {
        match letter.to_ascii_uppercase() {
            'A' => Some(0),
            'B' => Some(2),
            'C' => Some(3),
            'D' => Some(5),
            'E' => Some(7),
            'F' => Some(8),
            'G' => Some(10),
            _ => None,
        }
    }

    fn parse_spelling(spelling: &str) -> Option<Self> {
        let mut chars = spelling.chars();
        let natural = Self::natural_semitones(chars.next()?)?;
        let accidental = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return None,
        };
        match chars.next() {
            None => Some(Self::from_semitones(natural + accidental)),
            Some(_) => None,
        }
    }
}


impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Accepts `C`, `c#`, `Db`, `E♭` and also the joined display form (`"A#:Bb"`), as long as
/// every spelling in it names the same pitch class.
impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidNoteName(s.to_string());
        let mut parsed = None;
        for spelling in s.trim().split(':') {
            let pitch_class = Self::parse_spelling(spelling).ok_or_else(invalid)?;
            match parsed {
                Some(prev) if prev != pitch_class => return Err(invalid()),
                _ => parsed = Some(pitch_class),
            }
        }
        parsed.ok_or_else(invalid)
    }
}


/// A pitch class together with an octave label.
///
/// The octave counts how many whole 12-semitone cycles separate this note from `A` at octave 0;
/// it rolls over between `G#:Ab` and `A`, not between `B` and `C`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Note {
    pitch_class: PitchClass,
    octave: i32,
}


impl Note {
    pub fn new(pitch_class: PitchClass, octave: i32) -> Self {
        Self { pitch_class, octave }
    }

    /// Build a note from a raw pitch class index, rejecting anything outside `0..12`.
    pub fn try_new(pitch_class: u8, octave: i32) -> Result<Self> {
        let pitch_class = PitchClass::try_from(pitch_class)
            .map_err(|e| Error::InvalidPitchClass(e.number))?;
        Ok(Self::new(pitch_class, octave))
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Inverse of `semitones` for any `i32` count.
    pub fn from_semitones(semitones: i32) -> Self {
        Self {
            pitch_class: PitchClass::from_semitones(semitones),
            octave: semitones.div_euclid(NOTES_PER_OCTAVE),
        }
    }

    /// Absolute distance in semitones from `A` at octave 0.
    pub fn semitones(&self) -> i64 {
        self.octave as i64 * NOTES_PER_OCTAVE as i64 + self.pitch_class as i64
    }

    /// Shift by `interval` semitones in either direction, carrying whole cycles into the octave.
    ///
    /// Fails with `Error::OctaveOutOfRange` if the resulting octave does not fit in an `i32`.
    pub fn checked_transpose(&self, interval: i32) -> Result<Self> {
        let raw = self.pitch_class as i64 + interval as i64;
        let octave = self.octave as i64 + raw.div_euclid(NOTES_PER_OCTAVE as i64);
        Ok(Self {
            pitch_class: PitchClass::ALL[raw.rem_euclid(NOTES_PER_OCTAVE as i64) as usize],
            octave: i32::try_from(octave).map_err(|_| Error::OctaveOutOfRange(octave))?,
        })
    }

    /// Infallible form of `checked_transpose`, for notes known to be far from the octave limits.
    ///
    /// Panics if the resulting octave does not fit in an `i32`.
    pub fn transpose(&self, interval: i32) -> Self {
        match self.checked_transpose(interval) {
            Ok(note) => note,
            Err(e) => panic!("cannot transpose {} octave {} by {}: {}", self, self.octave, interval, e),
        }
    }

    pub fn transpose_down(&self, interval: i32) -> Self {
        self.transpose(-interval)
    }

    /// Same pitch class, octave ignored.
    pub fn eq_pitch_class(&self, other: &Note) -> bool {
        self.pitch_class == other.pitch_class
    }

    pub fn name(&self) -> &'static str {
        self.pitch_class.name()
    }

    pub fn display_len(&self) -> usize {
        self.pitch_class.display_len()
    }
}


impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


impl Add<i32> for Note {
    type Output = Note;

    fn add(self, interval: i32) -> Note {
        self.transpose(interval)
    }
}


impl Sub<i32> for Note {
    type Output = Note;

    fn sub(self, interval: i32) -> Note {
        self.transpose_down(interval)
    }
}


/// Parses `<pitch class>[octave]`, e.g. `E4`, `Bb-1` or `C`. A missing octave means 0.
impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .unwrap_or_else(|| s.len());
        let (pitch, octave) = s.split_at(split);
        let pitch_class = pitch.parse::<PitchClass>()
            .map_err(|_| Error::InvalidNoteName(s.to_string()))?;
        let octave = match octave {
            "" => 0,
            o => o.parse::<i32>().map_err(|_| Error::InvalidNoteName(s.to_string()))?,
        };
        Ok(Self::new(pitch_class, octave))
    }
}
