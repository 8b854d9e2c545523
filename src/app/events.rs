//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

use crate::core::SurfaceRect;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kategorie-Filter-Button angeklickt
    CategorySelected { key: String },
    /// Klick auf die Kartenfläche (erstellt einen neuen Marker)
    SurfaceClicked {
        pointer_pos: Vec2,
        surface_rect: SurfaceRect,
    },
    /// Klick auf eine Marker-Glyphe
    MarkerClicked { id: u64 },
    /// Reset-Button angeklickt
    ResetRequested,
    /// Kartenbild fertig geladen, native Größe bekannt
    MapImageLoaded { native_size: Vec2 },
    /// Gerenderte Größe der Kartenfläche hat sich geändert
    SurfaceResized { size: Vec2 },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Aktive Kategorie wechseln (leert Session-Marker still)
    SelectCategory { key: String },
    /// Neuen Session-Marker an nativen Koordinaten anhängen
    AddSessionMarker { native_pos: Vec2 },
    /// Auswahl eines Markers melden (keine Zustandsänderung)
    AnnounceMarker { id: u64 },
    /// Session-Marker leeren; `announce` steuert die Reset-Benachrichtigung
    ClearSessionMarkers { announce: bool },
    /// Native Kartenbildgröße setzen
    SetNativeSize { size: Vec2 },
    /// Gerenderte Flächengröße setzen
    SetRenderedSize { size: Vec2 },
}
