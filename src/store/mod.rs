//! Content loading split across logical submodules. Everything under here
//! shares one promise: loading never fails the application. A broken or
//! absent source degrades to an empty collection plus an advisory note, and
//! the rest of the program works with whatever survived.

mod content;
mod paths;
mod posts;
mod reviews;
mod source;

pub use content::ContentStore;
pub use paths::ContentPaths;
pub use posts::load_posts;
pub use reviews::load_reviews;
pub use source::{LoadError, Loaded};
