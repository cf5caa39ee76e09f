use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use fretboard::music::scales;
use fretboard::repl::Repl;
use fretboard::sinks::{PlainSink, TerminalSink};
use fretboard::{FretBoard, Note, Scale, Sink, Tuning};


#[derive(Debug, Copy, Clone, ValueEnum)]
enum TuningArg {
    StandardGuitar,
    DropD,
    StandardBass,
}


impl From<TuningArg> for Tuning {
    fn from(arg: TuningArg) -> Self {
        match arg {
            TuningArg::StandardGuitar => Tuning::StandardGuitar,
            TuningArg::DropD => Tuning::DropD,
            TuningArg::StandardBass => Tuning::StandardBass,
        }
    }
}


#[derive(Debug, Copy, Clone, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}


#[derive(Parser, Debug)]
#[command(name = "fretboard")]
#[command(about = "Print a fretboard with the notes of a scale highlighted", long_about = None)]
struct Args {
    /// Number of frets per string, counting the open string
    #[arg(short, long, default_value = "12")]
    frets: usize,

    /// Columns per fret cell
    #[arg(short = 'w', long, default_value = "7")]
    fret_width: usize,

    #[arg(short, long, value_enum, default_value = "standard-guitar")]
    tuning: TuningArg,

    /// Open strings, highest first (e.g. "E4 B4 G3 D3 A3 E2"). Overrides --tuning
    #[arg(long)]
    strings: Option<String>,

    /// Notes to highlight (default: C major)
    #[arg(short, long, conflicts_with = "major")]
    scale: Option<String>,

    /// Highlight the major scale on this root
    #[arg(short, long)]
    major: Option<String>,

    /// Don't highlight anything
    #[arg(long)]
    plain: bool,

    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Explore the board from a prompt instead of printing once
    #[arg(short, long, conflicts_with_all = ["scale", "major", "plain"])]
    interactive: bool,
}


fn parse_notes(s: &str) -> fretboard::Result<Vec<Note>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}


fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let open_notes = match &args.strings {
        Some(strings) => parse_notes(strings).context("bad --strings")?,
        None => Tuning::from(args.tuning).open_notes(),
    };
    let board = FretBoard::new(&open_notes, args.frets).context("failed to build fretboard")?;

    let scale: Scale = match (&args.scale, &args.major) {
        (Some(notes), _) => notes.parse().context("bad --scale")?,
        (None, Some(root)) => scales::major(root.parse().context("bad --major")?).context("bad --major")?,
        (None, None) => scales::c_major(0),
    };

    let color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    debug!("strings: {:?}, scale: {:?}, color: {}", open_notes, scale.notes(), color);

    let mut sink: Box<dyn Sink> = if color {
        Box::new(TerminalSink::new(io::stdout().lock()))
    } else {
        Box::new(PlainSink::new(io::stdout().lock()))
    };

    if args.interactive {
        return Repl::new(&board, args.fret_width).run(&mut *sink);
    }

    print_board(&board, &mut *sink, args.fret_width, (!args.plain).then(|| &scale))
}


fn print_board(board: &FretBoard, sink: &mut dyn Sink, fret_width: usize, scale: Option<&Scale>) -> Result<()> {
    let rendered = match scale {
        Some(scale) => board.render_highlighted(sink, fret_width, scale),
        None => board.render(sink, fret_width),
    };
    rendered.context("failed to render fretboard")
}
