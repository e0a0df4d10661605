// --- File: src/core/dictionary.rs
use crate::core::types::{CodedLetter, DecodedLetter};
use std::collections::BTreeMap;

/// The exported form of a dictionary, as stored in a save payload.
pub type DictionarySnapshot = BTreeMap<CodedLetter, DecodedLetter>;

/// Letters the player has learned so far.
/// This is the structure the engine mutates during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    letters: BTreeMap<CodedLetter, DecodedLetter>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mapping, returning the one it replaced.
    pub fn learn(&mut self, coded: CodedLetter, decoded: DecodedLetter) -> Option<DecodedLetter> {
        self.letters.insert(coded, decoded)
    }

    pub fn is_known(&self, coded: CodedLetter) -> bool {
        self.letters.contains_key(&coded)
    }

    pub fn lookup(&self, coded: CodedLetter) -> Option<DecodedLetter> {
        self.letters.get(&coded).copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn snapshot(&self) -> DictionarySnapshot {
        self.letters.clone()
    }

    /// Replaces everything learned so far with `snapshot`.
    pub fn restore(&mut self, snapshot: DictionarySnapshot) {
        self.letters = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_and_lookup() {
        let mut dict = Dictionary::new();
        assert!(!dict.is_known('Y'));
        assert_eq!(dict.learn('Y', 'A'), None);
        assert!(dict.is_known('Y'));
        assert_eq!(dict.lookup('Y'), Some('A'));
        assert!(!dict.is_known('y'));
    }

    #[test]
    fn test_relearn_replaces() {
        let mut dict = Dictionary::new();
        dict.learn('Y', 'A');
        assert_eq!(dict.learn('Y', 'B'), Some('A'));
        assert_eq!(dict.lookup('Y'), Some('B'));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_restore_replaces_instead_of_merging() {
        let mut dict = Dictionary::new();
        dict.learn('Y', 'A');
        dict.learn('D', 'T');

        let mut snapshot = DictionarySnapshot::new();
        snapshot.insert('R', 'H');
        dict.restore(snapshot.clone());

        assert!(!dict.is_known('Y'));
        assert!(!dict.is_known('D'));
        assert_eq!(dict.snapshot(), snapshot);
    }
}
