//! Geteilte Konfiguration: Content-Daten und Laufzeit-Optionen.

pub mod content;
pub mod options;

pub use content::{CategoryContent, MapContent};
pub use options::WidgetOptions;
