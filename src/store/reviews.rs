//! Loader for the movie review source.

use std::path::Path;

use crate::models::Review;

use super::source::{read_records, LoadError, Loaded};

/// Column that makes a file recognizably the review source. A header row
/// without it means the file is something else entirely, and deserializing it
/// would only produce rows of empty strings.
const REQUIRED_COLUMN: &str = "title";

/// Read `reviews.csv` in file order. Field values are carried verbatim;
/// columns absent from the header come back as empty strings.
pub fn load_reviews(path: &Path) -> Result<Loaded<Review>, LoadError> {
    read_records(path, REQUIRED_COLUMN)
}
