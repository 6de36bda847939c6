//! Binary entry point that glues the file-backed content store to the TUI:
//! resolve where the content files live, load whatever is readable, pick the
//! starting view from the command line, and drive the Ratatui event loop
//! until the user exits.

use std::env;

use blog_corner::{run_app, App, ContentPaths, ContentStore, SiteInfo, View};

/// Load content and launch the Ratatui event loop.
///
/// Content problems never land here; the store degrades to empty collections
/// and footer notes instead, leaving the `Result` to terminal setup failures.
/// An optional first argument names the starting tab; anything unrecognized
/// starts on Home, so a stale bookmark like `blog-corner blog` still opens
/// the app.
fn main() -> anyhow::Result<()> {
    let view = match env::args().nth(1) {
        Some(token) => View::resolve(&token),
        None => View::default(),
    };

    let paths = ContentPaths::resolve();
    let store = ContentStore::load(&paths);

    let mut app = App::new(store, SiteInfo::default(), view);
    run_app(&mut app)
}
