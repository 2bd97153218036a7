use super::{DiskStorage, StorageError};
use crate::model::Course;
use std::collections::BTreeSet;
use std::path::Path;

/// Read-only view of a loaded course file. Lives for one search session.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let courses = DiskStorage::new(path).load()?;
        Ok(Self { courses })
    }

    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Every tee name in the collection, sorted and deduplicated.
    pub fn tee_names(&self) -> Vec<String> {
        self.courses
            .iter()
            .flat_map(|c| c.holes.iter())
            .flat_map(|h| h.tees.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a CourseStore {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
