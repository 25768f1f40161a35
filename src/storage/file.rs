//! Whole-collection reads and writes against a single file.
//!
//! The file handle lives only for the duration of one call. Encoding is
//! compact JSON; callers treat the bytes as opaque.

use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads every record stored at `path`.
///
/// A missing file, or one holding nothing but whitespace, yields
/// [`StorageError::NoData`].
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::NoData(path.to_path_buf()));
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(StorageError::NoData(path.to_path_buf()));
    }

    serde_json::from_slice(&bytes).map_err(|source| StorageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites `path` with `items`, creating the parent directory if needed.
pub fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec(items).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn create_test_subjects() -> Vec<Subject> {
        vec![
            Subject::new("CCPG1052", "PROGRAMACIÓN ORIENTADA A OBJETOS", 3).unwrap(),
            Subject::new("CCPG1000", "ÁLGEBRA LINEAL", 2).unwrap(),
        ]
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materias.json");
        let subjects = create_test_subjects();

        write_collection(&path, &subjects).unwrap();
        let loaded: Vec<Subject> = read_collection(&path).unwrap();

        assert_eq!(loaded, subjects);
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_collection::<Subject>(&dir.path().join("nonexistent.json"));

        assert!(matches!(result, Err(ref e) if e.is_no_data()));
    }

    #[test]
    fn test_empty_file_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        let result = read_collection::<Subject>(&path);
        assert!(matches!(result, Err(StorageError::NoData(_))));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = read_collection::<Subject>(&path);
        assert!(matches!(result, Err(StorageError::Decode { .. })));
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archivo").join("materias.json");

        write_collection(&path, &create_test_subjects()).unwrap();

        assert!(fs::metadata(&path).is_ok(), "File should exist");
    }

    #[test]
    fn test_write_into_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = write_collection(dir.path(), &create_test_subjects());
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }
}
