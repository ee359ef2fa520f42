//! JSONL (JSON Lines) storage.
//!
//! Each line is a valid JSON object representing one entity. Writes always
//! replace the whole file through a temporary sibling and a rename, so a
//! reader never sees a half-written or newline-less last record.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::PlayerProfile;

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            for entity in entities {
                serde_json::to_writer(&mut writer, entity)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        info!("Wrote {} entities to {:?}", entities.len(), self.path);
        Ok(entities.len())
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Read all entities from the file. A missing file is empty, malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entities = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => warn!("Skipping line {} in {:?}: {}", i + 1, self.path, e),
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Read every stored profile.
pub fn read_profiles(config: &StorageConfig) -> Result<Vec<PlayerProfile>, StorageError> {
    JsonlReader::new(config.profiles_path()).read_all()
}

/// Insert a profile, or merge it into the stored profile with the same ID.
///
/// Returns the profile as stored and whether an existing one was updated.
pub fn upsert_profile(
    config: &StorageConfig,
    profile: PlayerProfile,
) -> Result<(PlayerProfile, bool), StorageError> {
    let mut profiles = read_profiles(config)?;

    let (stored, updated) = match profiles.iter_mut().find(|p| p.id == profile.id) {
        Some(existing) => {
            existing.merge(profile);
            (existing.clone(), true)
        }
        None => {
            profiles.push(profile.clone());
            (profile, false)
        }
    };

    JsonlWriter::new(config.profiles_path()).write_all(&profiles)?;
    Ok((stored, updated))
}
