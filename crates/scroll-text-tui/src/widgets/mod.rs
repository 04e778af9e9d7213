mod key_face;
mod status_bar;

pub use key_face::KeyFaceWidget;
pub use status_bar::StatusBarWidget;
