pub mod base;
pub mod disk;
pub mod store;

pub use base::StorageError;
pub use disk::{DiskStorage, DEFAULT_COURSES_FILE};
pub use store::CourseStore;
