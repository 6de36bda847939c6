//! Terminal presentation split across logical submodules. Everything here is
//! an adapter over the pure content pipeline: the store loads, the renderer
//! maps records to blocks, and this layer only decides how blocks look on a
//! terminal and which keys do what.

mod app;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
