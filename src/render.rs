// File: src/render.rs
//! Terminal rendering for messages that carry `\c[n]` color tokens.

use crate::host::{DisplayMessage, MessageSink};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// A run of text drawn in one color. `None` means the window's default color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub color: Option<u32>,
    pub text: String,
}

/// Splits `text` at every well-formed `\c[n]` token.
/// Anything that looks like a token but does not parse stays literal.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut current = Segment { color: None, text: String::new() };
    let mut rest = text;

    while let Some(start) = rest.find("\\c[") {
        let after = &rest[start + 3..];
        let token = after
            .find(']')
            .and_then(|end| after[..end].parse::<u32>().ok().map(|n| (n, end)));

        match token {
            Some((color, end)) => {
                current.text.push_str(&rest[..start]);
                if !current.text.is_empty() {
                    out.push(current);
                }
                current = Segment { color: Some(color), text: String::new() };
                rest = &after[end + 1..];
            }
            None => {
                current.text.push_str(&rest[..start + 3]);
                rest = after;
            }
        }
    }

    current.text.push_str(rest);
    if !current.text.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// Maps a message-window color index onto the terminal palette.
fn terminal_color(index: u32) -> Color {
    match index % 8 {
        0 => Color::White,
        1 => Color::Blue,
        2 => Color::Red,
        3 => Color::Green,
        4 => Color::Cyan,
        5 => Color::Magenta,
        6 => Color::Yellow,
        _ => Color::Grey,
    }
}

pub fn write_message<W: Write>(out: &mut W, message: &DisplayMessage) -> io::Result<()> {
    for segment in segments(&message.text) {
        match segment.color {
            Some(index) => out.queue(SetForegroundColor(terminal_color(index)))?,
            None => out.queue(ResetColor)?,
        };
        out.queue(Print(segment.text))?;
    }
    out.queue(ResetColor)?;
    out.queue(Print("\n"))?;
    out.flush()
}

/// Draws messages straight onto stdout.
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn show(&mut self, message: DisplayMessage) {
        let mut stdout = io::stdout();
        println!(
            "--- [position {} | background {}] ---",
            message.position.code(),
            message.background.code()
        );
        if let Err(e) = write_message(&mut stdout, &message) {
            log::error!("Could not draw message: {}", e);
        }
    }
}
