// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A character as it appears in the undecoded source text.
pub type CodedLetter = char;
/// The real-alphabet letter a coded letter maps to once learned.
pub type DecodedLetter = char;

/// Identifier of a slot in the host's variable store.
pub type VariableId = u32;

/// Characters that are never decoded nor counted, regardless of configuration.
pub const NO_DECODING: [char; 7] = [' ', ',', '.', ';', '?', '!', '\''];

/// What the previous decodable character on the current line looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// No decodable character has been classified on this line yet.
    #[default]
    Unset,
    Code,
    Decode,
}

/// The four outcomes of classifying a decodable character against its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    KnownInDecodeContext,
    KnownInCodeContext,
    UnknownInCodeContext,
    UnknownInDecodeContext,
}

impl LetterCase {
    /// The classification table. An `Unset` context flags the letter as a
    /// transition either way, so the first decodable letter of a line always
    /// carries color markup.
    pub fn classify(known: bool, context: Context) -> Self {
        match (known, context) {
            (true, Context::Decode) => LetterCase::KnownInDecodeContext,
            (true, Context::Code | Context::Unset) => LetterCase::KnownInCodeContext,
            (false, Context::Code) => LetterCase::UnknownInCodeContext,
            (false, Context::Decode | Context::Unset) => LetterCase::UnknownInDecodeContext,
        }
    }

    /// Whether this case marks a color transition.
    pub fn needs_markup(self) -> bool {
        matches!(
            self,
            LetterCase::KnownInCodeContext | LetterCase::UnknownInDecodeContext
        )
    }
}

/// Where the message window is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePosition {
    Top,
    Middle,
    Bottom,
}

impl MessagePosition {
    pub fn code(self) -> u8 {
        match self {
            MessagePosition::Top => 0,
            MessagePosition::Middle => 1,
            MessagePosition::Bottom => 2,
        }
    }
}

/// How the message window background is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBackground {
    Opaque,
    Transparent,
    Invisible,
}

impl MessageBackground {
    pub fn code(self) -> u8 {
        match self {
            MessageBackground::Opaque => 0,
            MessageBackground::Transparent => 1,
            MessageBackground::Invisible => 2,
        }
    }
}

/// A value held in the host's variable store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Number(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Outcome of decoding one whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub lines: Vec<String>,
    /// Decodable character occurrences across the message.
    pub eligible: usize,
    /// Occurrences among `eligible` whose coded form is known.
    pub decoded: usize,
}

impl DecodeResult {
    /// Percentage of eligible occurrences that are known, rounded half up.
    /// A message with nothing to decode has a rate of 0.
    pub fn rate(&self) -> u32 {
        if self.eligible == 0 {
            return 0;
        }
        ((200 * self.decoded + self.eligible) / (2 * self.eligible)) as u32
    }

    /// The lines joined the way the message window expects them.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
