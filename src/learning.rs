// File: src/learning.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::{CodedLetter, DecodedLetter};
use log::{info, warn};

/// A letter pairing the player has just discovered.
pub struct LetterConfirmation {
    pub coded: CodedLetter,
    pub decoded: DecodedLetter,
}

pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Records the pairing. A previously learned letter is overwritten.
    pub fn learn(&self, dictionary: &mut Dictionary, confirmation: &LetterConfirmation) {
        match dictionary.learn(confirmation.coded, confirmation.decoded) {
            Some(previous) if previous != confirmation.decoded => warn!(
                "Relearned '{}': '{}' replaced by '{}'",
                confirmation.coded, previous, confirmation.decoded
            ),
            Some(_) => {}
            None => info!(
                "Learned '{}' = '{}' ({} letters known)",
                confirmation.coded,
                confirmation.decoded,
                dictionary.len()
            ),
        }
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
