use std::io::{self, Write};

use crate::Sink;


const HIGHLIGHT_ON: &str = "\x1b[31;1m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";


/// Writes to a terminal, highlighting in bold red via ANSI escape codes.
pub struct TerminalSink<W: Write> {
    out: W,
}


impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}


impl<W: Write> Sink for TerminalSink<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn begin_highlight(&mut self) -> io::Result<()> {
        self.out.write_all(HIGHLIGHT_ON.as_bytes())
    }

    fn end_highlight(&mut self) -> io::Result<()> {
        self.out.write_all(HIGHLIGHT_OFF.as_bytes())
    }
}


/// Writes text only, highlight signals are dropped.
pub struct PlainSink<W: Write> {
    out: W,
}


impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}


impl<W: Write> Sink for PlainSink<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn begin_highlight(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end_highlight(&mut self) -> io::Result<()> {
        Ok(())
    }
}


/// Collect plain text in memory.
impl Sink for String {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }

    fn begin_highlight(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end_highlight(&mut self) -> io::Result<()> {
        Ok(())
    }
}


#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SinkEvent {
    Text(String),
    BeginHighlight,
    EndHighlight,
}


/// Record every call verbatim, for inspecting exactly what a renderer asked for.
impl Sink for Vec<SinkEvent> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.push(SinkEvent::Text(text.to_string()));
        Ok(())
    }

    fn begin_highlight(&mut self) -> io::Result<()> {
        self.push(SinkEvent::BeginHighlight);
        Ok(())
    }

    fn end_highlight(&mut self) -> io::Result<()> {
        self.push(SinkEvent::EndHighlight);
        Ok(())
    }
}
