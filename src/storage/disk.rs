use super::base::StorageError;
use crate::model::Course;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_COURSES_FILE: &str = "golf_courses.json";

/// Whole-file JSON storage for the course collection.
#[derive(Debug, Clone)]
pub struct DiskStorage {
    path: PathBuf,
}

impl DiskStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file with `courses`. The new content is written next to
    /// the target and renamed over it, so readers never see a half file.
    pub fn save(&self, courses: &[Course]) -> Result<(), StorageError> {
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(courses)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        info!("Saved {} courses to {}", courses.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<Course>, StorageError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
            _ => StorageError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let courses: Vec<Course> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} courses from {}", courses.len(), self.path.display());
        Ok(courses)
    }
}
