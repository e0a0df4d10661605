use crate::command::Command;
use crate::config::DecoderConfig;
use crate::core::{converter::DecodeEngine, dictionary::Dictionary, wrap::wrap_words};
use crate::core::types::{CodedLetter, DecodeResult, DecodedLetter, Value};
use crate::error::{CipherError, PersistenceError, Result};
use crate::host::{DisplayMessage, MessageSink, VariableStore, Variables};
use crate::learning::{LearningEngine, LetterConfirmation};
use crate::persistence::{load_from_disk, save_to_disk, SaveContents, SaveHook};
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// The engine owns the session's dictionary; the host owns everything else.
pub struct CipherEngine {
    config: DecoderConfig,
    pub dictionary: Dictionary,
    converter: DecodeEngine,
    learning_engine: LearningEngine,
    save_path: Option<PathBuf>,
}

impl CipherEngine {
    pub fn new(config: DecoderConfig) -> Self {
        let converter = DecodeEngine::new(
            config.coded_color,
            config.decoded_color,
            config.extra_non_decode.clone(),
        );
        Self {
            config,
            dictionary: Dictionary::new(),
            converter,
            learning_engine: LearningEngine::new(),
            save_path: None,
        }
    }

    /// Loads a save slot if there is one, otherwise starts a fresh session.
    /// Returns the engine together with the host variables from the save.
    pub fn from_file_or_new(config: DecoderConfig, path: &Path) -> (Self, Variables) {
        let mut engine = Self::new(config);
        engine.save_path = Some(path.to_path_buf());

        let variables = match engine.load_game() {
            Ok(variables) => variables,
            Err(CipherError::Persistence(PersistenceError::Io(e)))
                if e.kind() == ErrorKind::NotFound =>
            {
                Variables::new()
            }
            Err(e) => {
                warn!("Could not load '{}', starting fresh: {}", path.display(), e);
                Variables::new()
            }
        };
        (engine, variables)
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn learn(&mut self, coded: CodedLetter, decoded: DecodedLetter) {
        self.learning_engine
            .learn(&mut self.dictionary, &LetterConfirmation { coded, decoded });
    }

    /// Wraps, decodes and measures `source` against the current dictionary.
    /// Depends only on the source, the dictionary and the configuration.
    pub fn decode_text(&self, source: &str) -> DecodeResult {
        let mut result = DecodeResult { lines: Vec::new(), eligible: 0, decoded: 0 };

        for line in wrap_words(source, self.config.line_width) {
            let decoded = self.converter.decode_line(&line, &self.dictionary);
            result.eligible += decoded.eligible;
            result.decoded += decoded.decoded;
            result.lines.push(decoded.text);
        }

        debug!(
            "Decoded {} of {} letters over {} lines",
            result.decoded,
            result.eligible,
            result.lines.len()
        );
        result
    }

    /// Decodes the configured source variable, publishes the rate and shows
    /// the message.
    pub fn decode(
        &self,
        variables: &mut dyn VariableStore,
        sink: &mut dyn MessageSink,
    ) -> DecodeResult {
        let source = match variables.value(self.config.source_variable) {
            Some(value) => value.to_string(),
            None => {
                warn!("Source variable {} is not set", self.config.source_variable);
                String::new()
            }
        };

        let result = self.decode_text(&source);
        variables.set_value(self.config.rate_variable, Value::Number(result.rate() as i64));

        sink.show(DisplayMessage {
            text: result.text(),
            position: self.config.position,
            background: self.config.background,
        });
        result
    }

    /// Runs one plugin command.
    pub fn execute(
        &mut self,
        command: Command,
        variables: &mut dyn VariableStore,
        sink: &mut dyn MessageSink,
    ) -> Option<DecodeResult> {
        match command {
            Command::Decode => Some(self.decode(variables, sink)),
            Command::Learn { coded, decoded } => {
                self.learn(coded, decoded);
                None
            }
        }
    }

    /// Handles a raw plugin command. Returns `false` when the command is not
    /// one of ours so the host can pass it along.
    pub fn handle_plugin_command(
        &mut self,
        name: &str,
        args: &[&str],
        variables: &mut dyn VariableStore,
        sink: &mut dyn MessageSink,
    ) -> Result<bool> {
        match Command::parse(name, args)? {
            Some(command) => {
                self.execute(command, variables, sink);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save_game(&self, variables: &Variables) -> Result<()> {
        if let Some(path) = &self.save_path {
            let mut contents = SaveContents { variables: variables.clone(), dictionary: None };
            self.make_save_contents(&mut contents);
            save_to_disk(&contents, path)?;
            Ok(())
        } else {
            Ok(())
        }
    }

    /// Restores the dictionary from the save slot and hands back its variables.
    pub fn load_game(&mut self) -> Result<Variables> {
        match &self.save_path {
            Some(path) => {
                let contents = load_from_disk(path)?;
                self.extract_save_contents(&contents);
                Ok(contents.variables)
            }
            None => Ok(Variables::new()),
        }
    }
}

impl SaveHook for CipherEngine {
    fn make_save_contents(&self, contents: &mut SaveContents) {
        contents.dictionary = Some(self.dictionary.snapshot());
    }

    fn extract_save_contents(&mut self, contents: &SaveContents) {
        self.dictionary.restore(contents.dictionary.clone().unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{MessageBackground, MessagePosition};
    use crate::host::MessageLog;

    fn engine_with(pairs: &[(char, char)]) -> CipherEngine {
        let mut engine = CipherEngine::new(DecoderConfig::default());
        for &(c, d) in pairs {
            engine.learn(c, d);
        }
        engine
    }

    #[test]
    fn test_decode_publishes_rate_and_message() {
        let engine = engine_with(&[('y', 'a')]);
        let mut vars = Variables::new();
        vars.set_value(1, Value::Text("Dra lyd".to_string()));
        let mut sink = MessageLog::default();

        let result = engine.decode(&mut vars, &mut sink);

        assert_eq!(result.rate(), 17); // 1 of 6
        assert_eq!(vars.value(3), Some(Value::Number(17)));
        assert_eq!(
            sink.messages,
            vec![DisplayMessage {
                text: "\\c[5]Dra l\\c[0]a\\c[5]d".to_string(),
                position: MessagePosition::Middle,
                background: MessageBackground::Transparent,
            }]
        );
    }

    #[test]
    fn test_missing_source_decodes_as_empty() {
        let engine = engine_with(&[]);
        let mut vars = Variables::new();
        let mut sink = MessageLog::default();
        let result = engine.decode(&mut vars, &mut sink);
        assert_eq!(result.lines, vec![String::new()]);
        assert_eq!(vars.value(3), Some(Value::Number(0)));
        assert_eq!(sink.messages[0].text, "");
    }

    #[test]
    fn test_numeric_source_is_decoded_as_text() {
        let engine = engine_with(&[('4', 'x')]);
        let mut vars = Variables::new();
        vars.set_value(1, Value::Number(42));
        let mut sink = MessageLog::default();
        engine.decode(&mut vars, &mut sink);
        assert_eq!(sink.messages[0].text, "\\c[0]x\\c[5]2");
    }

    #[test]
    fn test_plugin_commands() {
        let mut engine = engine_with(&[]);
        let mut vars = Variables::new();
        vars.set_value(1, Value::Text("Y".to_string()));
        let mut sink = MessageLog::default();

        assert!(engine.handle_plugin_command("MooseLearn", &["Y", "A"], &mut vars, &mut sink).unwrap());
        assert!(engine.handle_plugin_command("MooseDecode", &[], &mut vars, &mut sink).unwrap());
        assert!(!engine.handle_plugin_command("Wait", &["60"], &mut vars, &mut sink).unwrap());

        assert_eq!(sink.messages.len(), 1);
        assert_eq!(sink.messages[0].text, "\\c[0]A");
        assert_eq!(vars.value(3), Some(Value::Number(100)));
    }

    #[test]
    fn test_malformed_plugin_command_is_a_command_error() {
        let mut engine = engine_with(&[]);
        let mut vars = Variables::new();
        let mut sink = MessageLog::default();

        let err = engine
            .handle_plugin_command("MooseLearn", &["Y"], &mut vars, &mut sink)
            .unwrap_err();
        assert!(matches!(err, CipherError::Command(_)));
        assert!(engine.dictionary.is_empty());
    }

    #[test]
    fn test_load_without_save_path_is_empty() {
        let mut engine = engine_with(&[('Y', 'A')]);
        assert_eq!(engine.load_game().unwrap(), Variables::new());
        engine.save_game(&Variables::new()).unwrap();
        assert!(engine.dictionary.is_known('Y'));
    }

    #[test]
    fn test_save_hook_round_trip_replaces_state() {
        let source = engine_with(&[('Y', 'A'), ('D', 'T')]);
        let mut contents = SaveContents::default();
        source.make_save_contents(&mut contents);

        let mut target = engine_with(&[('Q', 'Z')]);
        target.extract_save_contents(&contents);
        assert_eq!(target.dictionary, source.dictionary);
        assert!(!target.dictionary.is_known('Q'));
    }

    #[test]
    fn test_save_without_dictionary_clears() {
        let mut engine = engine_with(&[('Y', 'A')]);
        engine.extract_save_contents(&SaveContents::default());
        assert!(engine.dictionary.is_empty());
    }
}
