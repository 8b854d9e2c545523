//! Feature-Handler: führen Commands auf dem AppState aus.

pub mod category;
pub mod markers;
pub mod view;
