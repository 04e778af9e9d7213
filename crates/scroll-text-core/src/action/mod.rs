//! Host-facing glue for the scrolling-text key
//!
//! Turns host lifecycle events and persisted settings into engine
//! construction, start/stop and title updates.

mod controller;
pub mod host;
mod plugin;
mod settings;
pub mod title;

pub use controller::ScrollTextAction;
pub use host::{ActionHandle, ContextHandle, JsonLineHost};
pub use plugin::Plugin;
pub use settings::ScrollTextSettings;
pub use title::{HttpTitleSource, TitleSource};
