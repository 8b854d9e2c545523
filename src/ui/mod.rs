//! UI-Komponenten: Filter-Leiste, Kartenansicht, Benachrichtigungs-Overlay.

pub mod filter_bar;
pub mod map_view;
pub mod notifications;

pub use filter_bar::render_filter_bar;
pub use map_view::MapView;
pub use notifications::render_notifications;
