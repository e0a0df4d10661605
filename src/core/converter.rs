// File: src/core/converter.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::{CodedLetter, Context, LetterCase, NO_DECODING};
use std::collections::BTreeSet;

/// Output of decoding a single wrapped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    pub text: String,
    pub eligible: usize,
    pub decoded: usize,
}

/// Turns coded lines into partially decoded, color-flagged lines.
pub struct DecodeEngine {
    coded_color: u32,
    decoded_color: u32,
    extra_non_decode: BTreeSet<char>,
}

impl DecodeEngine {
    pub fn new(coded_color: u32, decoded_color: u32, extra_non_decode: BTreeSet<char>) -> Self {
        Self { coded_color, decoded_color, extra_non_decode }
    }

    /// Punctuation and configured characters are left alone and not counted.
    pub fn is_decodable(&self, c: char) -> bool {
        !NO_DECODING.contains(&c) && !self.extra_non_decode.contains(&c)
    }

    /// Decodes one line. The context starts unset on every line.
    pub fn decode_line(&self, line: &str, dictionary: &Dictionary) -> DecodedLine {
        let mut text = String::with_capacity(line.len());
        let mut context = Context::Unset;
        let mut eligible = 0;
        let mut decoded = 0;

        for c in line.chars() {
            if !self.is_decodable(c) {
                text.push(c);
                continue;
            }

            let known = dictionary.lookup(c);
            let case = LetterCase::classify(known.is_some(), context);
            self.push_letter(&mut text, case, c, known);

            eligible += 1;
            if known.is_some() {
                decoded += 1;
                context = Context::Decode;
            } else {
                context = Context::Code;
            }
        }

        DecodedLine { text, eligible, decoded }
    }

    fn push_letter(
        &self,
        out: &mut String,
        case: LetterCase,
        coded: CodedLetter,
        decoded: Option<char>,
    ) {
        let (letter, color) = match decoded {
            Some(d) => (d, self.decoded_color),
            None => (coded, self.coded_color),
        };
        if case.needs_markup() {
            push_color(out, color);
        }
        out.push(letter);
    }
}

/// Appends the message window's `\c[n]` color token.
fn push_color(out: &mut String, color: u32) {
    out.push_str(&format!("\\c[{}]", color));
}
