//! Core library surface for the Blog Corner TUI application.
//!
//! The content pipeline (store -> view -> renderer) is kept separate from the
//! terminal code so the same pieces could back another front end, or be
//! exercised in tests without a terminal attached. The re-exports below are
//! the small API the `bin` target and external tooling actually need.

pub mod models;
pub mod render;
pub mod site;
pub mod store;
pub mod ui;
pub mod view;

/// The two record types every layer passes around.
pub use models::{Post, Review};

/// The pure renderer and its block vocabulary.
pub use render::{render, DisplayBlock};

/// Static site text supplied to the renderer and the banner.
pub use site::SiteInfo;

/// Content loading. `ContentPaths` decides where the files live and
/// `ContentStore::load` reads them without ever failing the application.
pub use store::{ContentPaths, ContentStore};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

/// The closed set of navigable views.
pub use view::View;
