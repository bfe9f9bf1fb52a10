//! Terminal front end: one list page per domain, a sidebar and overlays.

pub mod actions;
pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod page;
pub mod renderer;

pub use actions::{Action, InputMode};
pub use app::App;
pub use events::map_key;
pub use layout::LayoutManager;
pub use renderer::{render_ui, run_app};
