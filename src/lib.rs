//! Pourvoirie Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, Notification, NotificationFeed,
    NotificationKind, SessionState, ViewState,
};
pub use core::{MapImage, PointOfInterest, SurfaceMapper, SurfaceRect};
pub use shared::{CategoryContent, MapContent, WidgetOptions};
