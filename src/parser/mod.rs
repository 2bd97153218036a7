mod base;
mod course;
mod listing;

#[cfg(test)]
pub(crate) mod fixtures;

pub use base::{ParseError, Selectors};
pub use course::CourseParser;
pub use listing::{ListingEntry, ListingPage, ListingParser};
