use crate::advisory_generation::domain::oval::{DefinitionsFile, ObjectsFile, StatesFile, TestsFile};
use crate::advisory_generation::domain::OvalFeed;
use crate::ports::outbound::FeedReader;
use crate::shared::error::VulnDbError;
use crate::shared::security::{
    validate_directory, validate_file_size, validate_regular_file, MAX_FEED_FILE_SIZE,
};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const OBJECTS_FILE: &str = "objects.json";
pub const STATES_FILE: &str = "states.json";
pub const TESTS_FILE: &str = "tests.json";
pub const DEFINITIONS_FILE: &str = "definitions.json";

/// FileSystemFeedReader adapter reading a vuln-list-alt checkout from disk
pub struct FileSystemFeedReader;

impl FileSystemFeedReader {
    pub fn new() -> Self {
        Self
    }

    /// Lists sub-directory names of `dir`, sorted byte-wise
    ///
    /// Regular files and symlinks are skipped.
    fn list_directories(dir: &Path) -> Result<Vec<String>> {
        validate_directory(dir)?;

        let io_error = |e: std::io::Error| VulnDbError::Io {
            path: dir.to_path_buf(),
            details: format!("Failed to list directory: {}", e),
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if entry.file_type().map_err(io_error)?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    /// Safely reads a feed file with security checks:
    /// - Reject symbolic links and non-regular files
    /// - Check file size limits
    fn safe_read_file(path: &Path) -> Result<Vec<u8>> {
        validate_regular_file(path, "feed file")?;

        let metadata = fs::metadata(path).map_err(|e| VulnDbError::Io {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FEED_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            VulnDbError::Io {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
        let path = dir.join(file_name);
        let bytes = Self::safe_read_file(&path)?;

        serde_json::from_slice(&bytes).map_err(|e| {
            VulnDbError::Decode {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemFeedReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedReader for FileSystemFeedReader {
    fn branches(&self, oval_root: &Path) -> Result<Vec<String>> {
        Self::list_directories(oval_root)
    }

    fn products(&self, oval_root: &Path, branch: &str) -> Result<Vec<String>> {
        Self::list_directories(&oval_root.join(branch))
    }

    fn read_product(&self, oval_root: &Path, branch: &str, product: &str) -> Result<OvalFeed> {
        let dir = oval_root.join(branch).join(product);

        let objects: ObjectsFile = Self::read_json(&dir, OBJECTS_FILE)?;
        let states: StatesFile = Self::read_json(&dir, STATES_FILE)?;
        let tests: TestsFile = Self::read_json(&dir, TESTS_FILE)?;
        let definitions: DefinitionsFile = Self::read_json(&dir, DEFINITIONS_FILE)?;

        Ok(OvalFeed {
            objects: objects.rpm_info_objects,
            states: states.rpm_info_states,
            tests: tests.rpm_info_tests,
            definitions: definitions.definitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_product(root: &Path, branch: &str, product: &str) -> PathBuf {
        let dir = root.join(branch).join(product);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(OBJECTS_FILE),
            r#"{"RPMInfoObjects":[{"ID":"obj:1","Name":"libfoo"}]}"#,
        )
        .unwrap();
        fs::write(dir.join(STATES_FILE), r#"{"RPMInfoStates":[]}"#).unwrap();
        fs::write(
            dir.join(TESTS_FILE),
            r#"{"RPMInfoTests":[{"ID":"tst:1","Object":{"ObjectRef":"obj:1"}}]}"#,
        )
        .unwrap();
        fs::write(dir.join(DEFINITIONS_FILE), r#"{"Definition":[{"ID":"def:1"}]}"#).unwrap();
        dir
    }

    #[test]
    fn test_branches_sorted_and_directories_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("p10")).unwrap();
        fs::create_dir(temp_dir.path().join("c9f2")).unwrap();
        fs::create_dir(temp_dir.path().join("p9")).unwrap();
        fs::write(temp_dir.path().join("README"), "").unwrap();

        let branches = FileSystemFeedReader::new().branches(temp_dir.path()).unwrap();
        assert_eq!(branches, vec!["c9f2", "p10", "p9"]);
    }

    #[test]
    fn test_branches_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemFeedReader::new()
            .branches(&temp_dir.path().join("vuln-list-alt/oval"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VulnDbError>(),
            Some(VulnDbError::InvalidFeedRoot { .. })
        ));
    }

    #[test]
    fn test_read_product() {
        let temp_dir = TempDir::new().unwrap();
        write_product(temp_dir.path(), "p10", "kworkstation");

        let reader = FileSystemFeedReader::new();
        assert_eq!(
            reader.products(temp_dir.path(), "p10").unwrap(),
            vec!["kworkstation"]
        );

        let feed = reader.read_product(temp_dir.path(), "p10", "kworkstation").unwrap();
        assert_eq!(feed.objects[0].name, "libfoo");
        assert!(feed.states.is_empty());
        assert_eq!(feed.tests[0].object_ref(), "obj:1");
        assert_eq!(feed.definitions[0].id, "def:1");
    }

    #[test]
    fn test_read_product_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = write_product(temp_dir.path(), "p10", "server");
        fs::remove_file(dir.join(TESTS_FILE)).unwrap();

        let err = FileSystemFeedReader::new()
            .read_product(temp_dir.path(), "p10", "server")
            .unwrap_err();
        match err.downcast_ref::<VulnDbError>() {
            Some(VulnDbError::Io { path, .. }) => assert!(path.ends_with(TESTS_FILE)),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_product_malformed_json_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = write_product(temp_dir.path(), "p10", "server");
        fs::write(dir.join(STATES_FILE), "{not json").unwrap();

        let err = FileSystemFeedReader::new()
            .read_product(temp_dir.path(), "p10", "server")
            .unwrap_err();
        match err.downcast_ref::<VulnDbError>() {
            Some(VulnDbError::Decode { path, .. }) => assert!(path.ends_with(STATES_FILE)),
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_product_null_lists_decode_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dir = write_product(temp_dir.path(), "p10", "server");
        fs::write(dir.join(STATES_FILE), r#"{"RPMInfoStates":null}"#).unwrap();
        fs::write(
            dir.join(DEFINITIONS_FILE),
            r#"{"Definition":[{"ID":"def:1","Metadata":{"References":null,"Advisory":{"BDUs":null}}}]}"#,
        )
        .unwrap();

        let feed = FileSystemFeedReader::new()
            .read_product(temp_dir.path(), "p10", "server")
            .unwrap();
        assert!(feed.states.is_empty());
        assert!(feed.definitions[0].metadata.references.is_empty());
        assert!(feed.definitions[0].metadata.advisory.bulletins.is_empty());
    }
}
