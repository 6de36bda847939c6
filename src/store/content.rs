//! The in-memory content store. Loaded once at startup, immutable afterwards;
//! every collection it exposes always exists, even if loading went badly.

use std::path::Path;

use crate::models::{Post, Review};

use super::paths::ContentPaths;
use super::posts::load_posts;
use super::reviews::load_reviews;

/// Both content collections plus advisory notes about anything that degraded
/// while loading. The notes are footer material, not errors: by the time a
/// store exists, every problem has already been reduced to "some content is
/// not here".
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    reviews: Vec<Review>,
    posts: Vec<Post>,
    notes: Vec<String>,
}

impl ContentStore {
    /// Load both sources. This never fails and never panics: a source that is
    /// missing, unreadable, or malformed contributes an empty collection and
    /// a note, and the other source is loaded regardless.
    pub fn load(paths: &ContentPaths) -> Self {
        let mut notes = Vec::new();

        let reviews = match load_reviews(&paths.reviews) {
            Ok(loaded) => {
                push_skip_note(&mut notes, loaded.skipped, &paths.reviews);
                loaded.records
            }
            Err(err) => {
                notes.push(format!("{err}. Showing no movie reviews."));
                Vec::new()
            }
        };

        let posts = match load_posts(&paths.posts) {
            Ok(loaded) => {
                push_skip_note(&mut notes, loaded.skipped, &paths.posts);
                loaded.records
            }
            Err(err) => {
                notes.push(format!("{err}. Showing no music posts."));
                Vec::new()
            }
        };

        Self {
            reviews,
            posts,
            notes,
        }
    }

    /// Build a store from already-materialized collections. Used by tests and
    /// by anything embedding the library without files on disk.
    pub fn from_parts(reviews: Vec<Review>, posts: Vec<Post>) -> Self {
        Self {
            reviews,
            posts,
            notes: Vec::new(),
        }
    }

    /// All movie reviews in source order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// All music posts in source order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Human-readable load degradations, empty when both sources loaded clean.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// Record how many rows the skip-and-continue policy dropped for one source.
fn push_skip_note(notes: &mut Vec<String>, skipped: usize, path: &Path) {
    if skipped == 0 {
        return;
    }
    let rows = if skipped == 1 { "row" } else { "rows" };
    notes.push(format!(
        "Skipped {skipped} unreadable {rows} in {}.",
        path.display()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_nothing_on_disk_yields_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::load(&ContentPaths::in_dir(dir.path()));

        assert!(store.reviews().is_empty());
        assert!(store.posts().is_empty());
        assert_eq!(store.notes().len(), 2);
        assert!(store.notes()[0].contains("reviews.csv"));
        assert!(store.notes()[1].contains("instagram_links.csv"));
    }

    #[test]
    fn test_sources_degrade_independently() {
        let dir = TempDir::new().unwrap();
        // A file that is clearly not the review source.
        fs::write(dir.path().join("reviews.csv"), "name,street\nAda,1 Main St\n").unwrap();
        fs::write(
            dir.path().join("instagram_links.csv"),
            "caption,url\nStill here,https://instagram.com/p/9\n",
        )
        .unwrap();

        let store = ContentStore::load(&ContentPaths::in_dir(dir.path()));

        assert!(store.reviews().is_empty());
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].caption, "Still here");
        assert_eq!(store.notes().len(), 1);
        assert!(store.notes()[0].contains("missing its 'title' column"));
    }

    #[test]
    fn test_skipped_rows_are_noted_without_losing_the_file() {
        let dir = TempDir::new().unwrap();
        let mut contents = Vec::new();
        contents.extend_from_slice(b"caption,url\n");
        contents.extend_from_slice(b"Fine,https://instagram.com/p/1\n");
        contents.extend_from_slice(b"Broken \xff,https://instagram.com/p/2\n");
        fs::write(dir.path().join("instagram_links.csv"), contents).unwrap();

        let store = ContentStore::load(&ContentPaths::in_dir(dir.path()));

        assert_eq!(store.posts().len(), 1);
        let skip_note = store
            .notes()
            .iter()
            .find(|note| note.contains("Skipped 1 unreadable row"))
            .expect("skip note missing");
        assert!(skip_note.contains("instagram_links.csv"));
    }

    #[test]
    fn test_from_parts_carries_collections_and_no_notes() {
        let store = ContentStore::from_parts(
            vec![Review {
                title: "Up".to_string(),
                ..Review::default()
            }],
            Vec::new(),
        );

        assert_eq!(store.reviews().len(), 1);
        assert!(store.posts().is_empty());
        assert!(store.notes().is_empty());
    }
}
