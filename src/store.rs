use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::profile::Profile;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot access profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Where a [`Profile`] lives between sessions.
pub trait ProfileStore {
    /// `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// If the stored profile exists but cannot be read.
    fn load(&self) -> Result<Option<Profile>, StoreError>;

    ///
    /// # Errors
    /// If the profile cannot be written.
    fn save(&self, profile: &Profile) -> Result<(), StoreError>;
}

/// Stores the profile as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        debug!("Loading profile from {}", self.path.display());
        Ok(Some(serde_json::from_reader(BufReader::new(file))?))
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, profile)?;
        writer.flush()?;
        debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lift::Lift;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn round_trips_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("profile.json"));

        let mut profile = Profile::default();
        profile.set_training_max(Lift::Deadlift, 150_000);
        store.save(&profile).unwrap();

        assert_eq!(store.load().unwrap(), Some(profile));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::new(path).load(),
            Err(StoreError::Format(_))
        ));
    }
}
