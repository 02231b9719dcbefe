use super::snapshot::StoreSnapshot;
use crate::ports::outbound::{AdvisoryStore, AdvisoryTransaction};
use crate::shared::error::VulnDbError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DATABASE_FILE_SIZE};
use crate::shared::Result;
use std::cell::RefCell;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// JsonFileAdvisoryStore adapter persisting the database as one JSON document
///
/// The file is loaded once on open. Each successful batch is written to a
/// temporary file next to the database and renamed over it, so readers see
/// either the old or the new content, never a partial write.
#[derive(Debug)]
pub struct JsonFileAdvisoryStore {
    path: PathBuf,
    committed: RefCell<StoreSnapshot>,
}

impl JsonFileAdvisoryStore {
    /// Opens the database at `path`; a missing file is an empty database
    ///
    /// # Errors
    /// Returns `VulnDbError::Storage` if the file exists but cannot be read
    /// or does not contain a valid database.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let committed = if path.exists() {
            Self::load(&path)?
        } else {
            StoreSnapshot::default()
        };

        Ok(Self {
            path,
            committed: RefCell::new(committed),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        VulnDbError::Storage {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    fn load(path: &Path) -> Result<StoreSnapshot> {
        validate_regular_file(path, "advisory database")
            .map_err(|e| Self::storage_error(path, e.to_string()))?;

        let metadata = fs::metadata(path).map_err(|e| Self::storage_error(path, e.to_string()))?;
        validate_file_size(metadata.len(), path, MAX_DATABASE_FILE_SIZE)
            .map_err(|e| Self::storage_error(path, e.to_string()))?;

        let bytes = fs::read(path).map_err(|e| Self::storage_error(path, e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Self::storage_error(path, format!("Corrupt database: {}", e)))
    }

    /// Writes `snapshot` to a temp file in the database directory, then renames it into place
    fn persist(&self, snapshot: &StoreSnapshot) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let write_error = |e: std::io::Error| Self::storage_error(&self.path, e.to_string());

        let tmp = NamedTempFile::new_in(&dir).map_err(write_error)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, snapshot)
                .map_err(|e| Self::storage_error(&self.path, e.to_string()))?;
            writer.write_all(b"\n").map_err(write_error)?;
            writer.flush().map_err(write_error)?;
        }
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(&self.path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

impl AdvisoryStore for JsonFileAdvisoryStore {
    fn batch_update(
        &self,
        update: &mut dyn FnMut(&mut dyn AdvisoryTransaction) -> Result<()>,
    ) -> Result<()> {
        let mut transaction = self.committed.borrow().clone();
        update(&mut transaction)?;

        self.persist(&transaction)?;
        *self.committed.borrow_mut() = transaction;
        Ok(())
    }

    fn for_each_advisory(&self, bucket_path: &[&str], package_name: &str) -> Result<Vec<(String, Vec<u8>)>> {
        self.committed.borrow().advisories_for(bucket_path, package_name)
    }
}
