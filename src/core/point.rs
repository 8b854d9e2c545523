//! Point-of-Interest-Datenmodell.

use glam::Vec2;
use serde::Deserialize;

/// Ein Punkt auf der Karte: vordefiniert aus dem Content oder per Klick erstellt.
///
/// Die Position liegt im nativen Pixelraum des Kartenbilds (unskaliert).
#[derive(Debug, Clone, Deserialize)]
pub struct PointOfInterest {
    /// Eindeutige ID (stabil für vordefinierte Punkte, Session-Zähler für neue)
    pub id: u64,
    /// Position in nativen Kartenpixeln
    pub position: Vec2,
    /// Anzeigename
    pub name: String,
    /// Referenz auf das Marker-Icon (Asset-Pfad)
    pub icon: String,
    /// Zugeordnete Aktivitäts-Tags (nicht leer)
    pub activities: Vec<String>,
}

impl PointOfInterest {
    /// Erstellt einen neuen Punkt.
    pub fn new(
        id: u64,
        position: Vec2,
        name: String,
        icon: String,
        activities: Vec<String>,
    ) -> Self {
        Self {
            id,
            position,
            name,
            icon,
            activities,
        }
    }
}
