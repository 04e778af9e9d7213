pub mod action;
pub mod config;
pub mod error;
pub mod protocol;
pub mod scroll;

pub use config::{AppConfig, TitleConfig};
pub use error::{Error, Result};
pub use scroll::{preview_frame, ScrollDirection, ScrollEngine, ScrollMode, ScrollOptions};
