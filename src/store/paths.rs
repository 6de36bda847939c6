//! Where the two content files live. Resolution never fails: the paths may
//! point at files that do not exist, because loading treats a missing file
//! as an ordinary empty source.

use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Environment variable naming the directory that holds both content files.
/// Takes precedence over every other location when set.
const DATA_DIR_ENV: &str = "BLOG_CORNER_DATA";
/// Folder name used beneath the user's home directory for content files.
const DATA_DIR_NAME: &str = ".blog-corner";
/// File holding movie reviews.
const REVIEWS_FILE_NAME: &str = "reviews.csv";
/// File holding music posts.
const POSTS_FILE_NAME: &str = "instagram_links.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Absolute or relative locations of the two sources. Built once at startup
/// and handed to [`ContentStore::load`](super::ContentStore::load).
pub struct ContentPaths {
    /// Location of the review source.
    pub reviews: PathBuf,
    /// Location of the post source.
    pub posts: PathBuf,
}

impl ContentPaths {
    /// Both files inside one directory, the layout the original site used.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            reviews: dir.join(REVIEWS_FILE_NAME),
            posts: dir.join(POSTS_FILE_NAME),
        }
    }

    /// Both files as bare names relative to the working directory.
    fn local() -> Self {
        Self {
            reviews: PathBuf::from(REVIEWS_FILE_NAME),
            posts: PathBuf::from(POSTS_FILE_NAME),
        }
    }

    /// Pick the content directory. An explicit `BLOG_CORNER_DATA` wins, then
    /// the working directory when either file is already sitting there (the
    /// run-next-to-your-files workflow), then `~/.blog-corner`. When even the
    /// home directory is unknown the paths stay relative, which later loads
    /// as two missing sources rather than an error.
    pub fn resolve() -> Self {
        let env_dir = env::var(DATA_DIR_ENV).ok();
        let local = Self::local();
        let cwd_has_files = local.reviews.exists() || local.posts.exists();
        let home = BaseDirs::new().map(|base_dirs| base_dirs.home_dir().to_path_buf());
        Self::resolve_from(env_dir.as_deref(), cwd_has_files, home.as_deref())
    }

    /// The precedence decision itself, with every piece of process state
    /// passed in. A blank or unset `env_dir` falls through to the next tier.
    fn resolve_from(env_dir: Option<&str>, cwd_has_files: bool, home: Option<&Path>) -> Self {
        if let Some(dir) = env_dir {
            if !dir.trim().is_empty() {
                return Self::in_dir(Path::new(dir));
            }
        }

        if cwd_has_files {
            return Self::local();
        }

        match home {
            Some(home) => Self::in_dir(&home.join(DATA_DIR_NAME)),
            None => Self::local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_dir_joins_both_file_names() {
        let paths = ContentPaths::in_dir(Path::new("/tmp/corner"));
        assert_eq!(paths.reviews, PathBuf::from("/tmp/corner/reviews.csv"));
        assert_eq!(paths.posts, PathBuf::from("/tmp/corner/instagram_links.csv"));
    }

    #[test]
    fn test_env_override_beats_every_other_tier() {
        let paths =
            ContentPaths::resolve_from(Some("/srv/corner"), true, Some(Path::new("/home/h")));
        assert_eq!(paths, ContentPaths::in_dir(Path::new("/srv/corner")));
    }

    #[test]
    fn test_blank_env_override_falls_through() {
        let paths = ContentPaths::resolve_from(Some("   "), true, Some(Path::new("/home/h")));
        assert_eq!(paths.reviews, PathBuf::from("reviews.csv"));
        assert_eq!(paths.posts, PathBuf::from("instagram_links.csv"));
    }

    #[test]
    fn test_working_directory_wins_when_a_file_is_present() {
        let paths = ContentPaths::resolve_from(None, true, Some(Path::new("/home/h")));
        assert_eq!(paths.reviews, PathBuf::from("reviews.csv"));
    }

    #[test]
    fn test_home_directory_is_the_default_location() {
        let home = TempDir::new().unwrap();
        let paths = ContentPaths::resolve_from(None, false, Some(home.path()));
        assert_eq!(
            paths,
            ContentPaths::in_dir(&home.path().join(".blog-corner"))
        );
    }

    #[test]
    fn test_unknown_home_leaves_relative_paths() {
        let paths = ContentPaths::resolve_from(None, false, None);
        assert_eq!(paths.reviews, PathBuf::from("reviews.csv"));
        assert_eq!(paths.posts, PathBuf::from("instagram_links.csv"));
    }
}
