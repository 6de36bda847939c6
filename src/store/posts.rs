//! Loader for the music post source.

use std::path::Path;

use crate::models::Post;

use super::source::{read_records, LoadError, Loaded};

/// Column that makes a file recognizably the post source.
const REQUIRED_COLUMN: &str = "caption";

/// Read `instagram_links.csv` in file order.
pub fn load_posts(path: &Path) -> Result<Loaded<Post>, LoadError> {
    read_records(path, REQUIRED_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_posts_load_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("instagram_links.csv");
        fs::write(
            &path,
            "caption,url\n\
             Cover night,https://instagram.com/p/1\n\
             Riyaz clip,https://instagram.com/p/2\n",
        )
        .unwrap();

        let loaded = load_posts(&path).unwrap();
        assert_eq!(loaded.skipped, 0);
        let captions: Vec<&str> = loaded
            .records
            .iter()
            .map(|post| post.caption.as_str())
            .collect();
        assert_eq!(captions, vec!["Cover night", "Riyaz clip"]);
        assert_eq!(loaded.records[0].url, "https://instagram.com/p/1");
    }

    #[test]
    fn test_url_only_header_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("instagram_links.csv");
        fs::write(&path, "url\nhttps://instagram.com/p/1\n").unwrap();

        match load_posts(&path) {
            Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "caption"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_url_cells_become_empty_strings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("instagram_links.csv");
        fs::write(&path, "caption,url\nNo link yet,\n").unwrap();

        let loaded = load_posts(&path).unwrap();
        assert_eq!(loaded.records[0].caption, "No link yet");
        assert_eq!(loaded.records[0].url, "");
    }
}
