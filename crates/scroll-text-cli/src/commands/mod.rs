pub mod config;
pub mod plugin;
pub mod preview;
pub mod watch;
