// File: src/persistence.rs
use crate::core::dictionary::DictionarySnapshot;
use crate::error::PersistenceError;
use crate::host::Variables;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Everything written into one save slot.
/// The dictionary is optional so saves made before any decoding load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveContents {
    pub variables: Variables,
    pub dictionary: Option<DictionarySnapshot>,
}

/// Something that stores its own state inside a save payload.
pub trait SaveHook {
    fn make_save_contents(&self, contents: &mut SaveContents);
    fn extract_save_contents(&mut self, contents: &SaveContents);
}

pub fn save_to_disk(contents: &SaveContents, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, contents)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!("Saved game to '{}'", path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<SaveContents, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let contents: SaveContents = bincode::deserialize_from(reader)?;
    info!("Loaded game from '{}'", path.display());
    Ok(contents)
}
