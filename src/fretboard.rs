//! Text rendering of a fretted instrument's neck.

use log::{debug, trace};

use crate::{Error, Note, Result, Scale, Sink};


const PLAIN_DIVIDER: &str = "|-";
const HIGHLIGHT_DIVIDER: &str = "|";
const FILL: &str = "-";
const ROW_END: &str = "\n";


/// Every note reachable on every string, one semitone per fret.
///
/// `strings()[i][0]` is the open note of string `i` and fret `k` holds that note transposed up by
/// `k` semitones. Strings keep the order of the open notes they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FretBoard {
    strings: Vec<Vec<Note>>,
    num_frets: usize,
}


impl FretBoard {
    pub fn new(open_notes: &[Note], num_frets: usize) -> Result<Self> {
        if num_frets == 0 {
            return Err(Error::NoFrets);
        }
        let frets = i32::try_from(num_frets).map_err(|_| Error::TooManyFrets(num_frets))?;
        let strings = open_notes
            .iter()
            .map(|open| (0..frets).map(|fret| open.checked_transpose(fret)).collect::<Result<Vec<Note>>>())
            .collect::<Result<Vec<Vec<Note>>>>()?;
        debug!("built fretboard with {} strings of {} frets", strings.len(), num_frets);
        Ok(Self { strings, num_frets })
    }

    pub fn strings(&self) -> impl Iterator<Item = &[Note]> {
        self.strings.iter().map(Vec::as_slice)
    }

    pub fn string(&self, index: usize) -> Option<&[Note]> {
        self.strings.get(index).map(Vec::as_slice)
    }

    pub fn note(&self, string: usize, fret: usize) -> Option<Note> {
        self.string(string)?.get(fret).copied()
    }

    pub fn num_strings(&self) -> usize {
        self.strings.len()
    }

    pub fn num_frets(&self) -> usize {
        self.num_frets
    }

    /// `(string, fret, note)` for every cell whose note is in `scale`, in render order.
    pub fn positions<'a>(&'a self, scale: &'a Scale) -> impl Iterator<Item = (usize, usize, Note)> + 'a {
        self.strings.iter().enumerate().flat_map(move |(s, string)| {
            string
                .iter()
                .enumerate()
                .filter(move |(_, note)| scale.contains(note))
                .map(move |(f, note)| (s, f, *note))
        })
    }

    /// One row per string, each cell `|-<note>` padded with `-` out to `fret_width` columns.
    pub fn render<S: Sink + ?Sized>(&self, sink: &mut S, fret_width: usize) -> Result<()> {
        self.check_width(fret_width, PLAIN_DIVIDER.len())?;
        for (i, string) in self.strings.iter().enumerate() {
            trace!("rendering string {}", i);
            for note in string.iter() {
                sink.write(PLAIN_DIVIDER)?;
                sink.write(note.name())?;
                sink.write(&fill(fret_width - PLAIN_DIVIDER.len() - note.display_len()))?;
            }
            sink.write(ROW_END)?;
        }
        Ok(())
    }

    /// Like `render`, but cells holding a note of `scale` are wrapped in a highlight.
    ///
    /// The divider counts as a single column here and sits outside the highlight. `end_highlight`
    /// is sent after every cell, highlighted or not.
    pub fn render_highlighted<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        fret_width: usize,
        scale: &Scale,
    ) -> Result<()> {
        self.check_width(fret_width, HIGHLIGHT_DIVIDER.len())?;
        for (i, string) in self.strings.iter().enumerate() {
            trace!("rendering string {} against {} scale notes", i, scale.len());
            for note in string.iter() {
                sink.write(HIGHLIGHT_DIVIDER)?;
                if scale.contains(note) {
                    sink.begin_highlight()?;
                }
                sink.write(FILL)?;
                sink.write(note.name())?;
                sink.write(&fill(fret_width - HIGHLIGHT_DIVIDER.len() - note.display_len()))?;
                sink.end_highlight()?;
            }
            sink.write(ROW_END)?;
        }
        Ok(())
    }

    pub fn render_to_string(&self, fret_width: usize) -> Result<String> {
        let mut out = String::new();
        self.render(&mut out, fret_width)?;
        Ok(out)
    }

    /// Fail up front, before anything reaches the sink, if any note would overflow its cell.
    fn check_width(&self, fret_width: usize, divider_len: usize) -> Result<()> {
        let widest = self.strings.iter().flatten().map(Note::display_len).max();
        match widest {
            Some(widest) if fret_width < divider_len + widest => Err(Error::FretTooNarrow {
                width: fret_width,
                required: divider_len + widest,
            }),
            _ => Ok(()),
        }
    }
}


fn fill(count: usize) -> String {
    FILL.repeat(count)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::music::scales;
    use crate::sinks::SinkEvent;
    use crate::{PitchClass, Tuning};

    fn demo_board() -> FretBoard {
        FretBoard::new(&Tuning::StandardGuitar.open_notes(), 12).unwrap()
    }

    /// Flatten recorded events into text, marking highlight signals with `<` and `>`.
    fn markup(events: &[SinkEvent]) -> String {
        events
            .iter()
            .map(|e| match e {
                SinkEvent::Text(t) => t.as_str(),
                SinkEvent::BeginHighlight => "<",
                SinkEvent::EndHighlight => ">",
            })
            .collect()
    }

    #[test]
    fn test_dimensions() {
        let board = demo_board();
        assert_eq!(board.num_strings(), 6);
        assert_eq!(board.num_frets(), 12);
        assert!(board.strings().all(|s| s.len() == 12));
        assert_eq!(board.note(0, 0), Some(Note::new(PitchClass::E, 4)));
        assert_eq!(board.note(0, 1), Some(Note::new(PitchClass::F, 4)));
        assert_eq!(board.note(0, 5), Some(Note::new(PitchClass::A, 5)));
        assert_eq!(board.note(5, 0), Some(Note::new(PitchClass::E, 2)));
        assert_eq!(board.note(0, 12), None);
        assert_eq!(board.note(6, 0), None);
    }

    #[test]
    fn test_frets_are_transpositions() {
        let board = demo_board();
        for string in board.strings() {
            for (fret, note) in string.iter().enumerate() {
                assert_eq!(*note, string[0] + fret as i32);
            }
        }
    }

    #[test]
    fn test_no_frets() {
        match FretBoard::new(&Tuning::StandardGuitar.open_notes(), 0) {
            Err(Error::NoFrets) => {},
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_too_many_frets() {
        match FretBoard::new(&[], i32::MAX as usize + 1) {
            Err(Error::TooManyFrets(n)) => assert_eq!(n, i32::MAX as usize + 1),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_open_note_at_octave_limit() {
        let top = Note::new(PitchClass::G, i32::MAX);
        match FretBoard::new(&[top], 12) {
            Err(Error::OctaveOutOfRange(_)) => {},
            other => panic!("unexpected: {:?}", other),
        }
        // G, G#:Ab still fit below the rollover
        let board = FretBoard::new(&[top], 2).unwrap();
        assert_eq!(board.note(0, 1), Some(Note::new(PitchClass::GSharp, i32::MAX)));
    }

    #[test]
    fn test_empty_board() {
        let board = FretBoard::new(&[], 12).unwrap();
        assert_eq!(board.num_strings(), 0);
        assert_eq!(board.render_to_string(0).unwrap(), "");
        let mut events: Vec<SinkEvent> = Vec::new();
        board.render_highlighted(&mut events, 0, &scales::c_major(0)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_render_plain() {
        let board = FretBoard::new(&[Note::new(PitchClass::E, 4)], 12).unwrap();
        assert_eq!(
            board.render_to_string(7).unwrap(),
            "|-E----|-F----|-F#:Gb|-G----|-G#:Ab|-A----|-A#:Bb|-B----|-C----|-C#:Db|-D----|-D#:Eb\n",
        );
    }

    #[test]
    fn test_render_plain_rows_in_order() {
        let rendered = demo_board().render_to_string(7).unwrap();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 12 * 7));
        assert!(rows[1].starts_with("|-B----|-C----"));
        assert!(rows[5].starts_with("|-E----|-F----"));
    }

    #[test]
    fn test_render_highlighted() {
        let board = FretBoard::new(&[Note::new(PitchClass::E, 4)], 12).unwrap();
        let mut events: Vec<SinkEvent> = Vec::new();
        board.render_highlighted(&mut events, 7, &scales::c_major(0)).unwrap();
        let expected = concat!(
            "|<-E----->",
            "|<-F----->",
            "|-F#:Gb->",
            "|<-G----->",
            "|-G#:Ab->",
            "|<-A----->",
            "|-A#:Bb->",
            "|<-B----->",
            "|<-C----->",
            "|-C#:Db->",
            "|<-D----->",
            "|-D#:Eb->",
            "\n",
        );
        assert_eq!(markup(&events), expected);
    }

    #[test]
    fn test_highlight_always_reset() {
        let board = demo_board();
        let mut events: Vec<SinkEvent> = Vec::new();
        board.render_highlighted(&mut events, 7, &Scale::default()).unwrap();
        let begins = events.iter().filter(|e| **e == SinkEvent::BeginHighlight).count();
        let ends = events.iter().filter(|e| **e == SinkEvent::EndHighlight).count();
        assert_eq!(begins, 0);
        assert_eq!(ends, 6 * 12);
    }

    #[test]
    fn test_demo_highlights_match_scale() {
        let board = demo_board();
        let scale = scales::c_major(0);
        let mut events: Vec<SinkEvent> = Vec::new();
        board.render_highlighted(&mut events, 7, &scale).unwrap();

        let begins = events.iter().filter(|e| **e == SinkEvent::BeginHighlight).count();
        assert_eq!(begins, board.positions(&scale).count());
        // 7 of every 12 semitones are in C major, one full octave per string
        assert_eq!(begins, 6 * 7);

        let mut highlighted = Vec::new();
        let mut pending = false;
        for event in events.iter() {
            match event {
                SinkEvent::BeginHighlight => pending = true,
                SinkEvent::Text(t) if pending && t != FILL => {
                    highlighted.push(t.clone());
                    pending = false;
                },
                _ => {},
            }
        }
        let allowed = ["C", "D", "E", "F", "G", "A", "B"];
        assert!(highlighted.iter().all(|name| allowed.contains(&name.as_str())));
    }

    #[test]
    fn test_render_idempotent() {
        let board = demo_board();
        let scale = scales::c_major(0);
        let mut first: Vec<SinkEvent> = Vec::new();
        let mut second: Vec<SinkEvent> = Vec::new();
        board.render_highlighted(&mut first, 7, &scale).unwrap();
        board.render_highlighted(&mut second, 7, &scale).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fret_too_narrow() {
        let board = demo_board();
        let mut out = String::new();
        match board.render(&mut out, 6) {
            Err(Error::FretTooNarrow { width: 6, required: 7 }) => {},
            other => panic!("unexpected: {:?}", other),
        }
        assert!(out.is_empty());

        let mut events: Vec<SinkEvent> = Vec::new();
        assert!(board.render_highlighted(&mut events, 6, &scales::c_major(0)).is_ok());
        match board.render_highlighted(&mut events, 5, &scales::c_major(0)) {
            Err(Error::FretTooNarrow { width: 5, required: 6 }) => {},
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_narrow_board_without_accidentals() {
        // a single fret never shows a two-spelling name
        let board = FretBoard::new(&[Note::new(PitchClass::E, 4), Note::new(PitchClass::A, 3)], 1).unwrap();
        assert_eq!(board.render_to_string(3).unwrap(), "|-E\n|-A\n");
    }

    #[test]
    fn test_positions() {
        let board = FretBoard::new(&[Note::new(PitchClass::A, 3)], 5).unwrap();
        let scale: Scale = "A C".parse().unwrap();
        let positions: Vec<(usize, usize, Note)> = board.positions(&scale).collect();
        assert_eq!(positions, vec![(0, 0, Note::new(PitchClass::A, 3)), (0, 3, Note::new(PitchClass::C, 3))]);
    }
}
