//! Application State — zentrale Datenhaltung.

use glam::Vec2;

use super::notifications::NotificationFeed;
use super::CommandLog;
use crate::core::{PointOfInterest, SurfaceMapper};
use crate::shared::options::CUSTOM_ACTIVITY_TAG;
use crate::shared::{MapContent, WidgetOptions};

/// Session-lokaler Marker-Zustand der aktiven Kategorie.
///
/// Per Klick erstellte Punkte leben nur bis zum nächsten Kategorie-Wechsel
/// oder expliziten Reset; nichts davon wird persistiert.
pub struct SessionState {
    /// Key der aktiven Kategorie
    pub active_category: String,
    /// Per Klick erstellte Punkte in Erstellungs-Reihenfolge
    pub markers: Vec<PointOfInterest>,
    /// Monoton wachsender ID-Zähler für neue Punkte.
    /// Startet oberhalb der höchsten konfigurierten ID und wird nie
    /// zurückgesetzt, damit IDs auch über Kategorie-Wechsel eindeutig bleiben.
    next_marker_id: u64,
}

impl SessionState {
    /// Erstellt den Session-Zustand für die Start-Kategorie.
    pub fn new(active_category: String, first_free_id: u64) -> Self {
        Self {
            active_category,
            markers: Vec::new(),
            next_marker_id: first_free_id,
        }
    }

    /// Erstellt einen neuen Session-Marker an nativen Koordinaten und hängt
    /// ihn an die Liste an. Gibt die ID des neuen Punkts zurück.
    pub fn create_marker(&mut self, native_pos: Vec2, icon: String) -> u64 {
        let id = self.next_marker_id;
        self.next_marker_id += 1;

        let name = format!("New Point {}", self.markers.len() + 1);
        self.markers.push(PointOfInterest::new(
            id,
            native_pos,
            name,
            icon,
            vec![CUSTOM_ACTIVITY_TAG.to_string()],
        ));
        id
    }

    /// Entfernt alle Session-Marker. Der ID-Zähler läuft weiter.
    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Default)]
pub struct ViewState {
    /// Native Größe des Kartenbilds in Pixeln (None = Bild noch nicht geladen)
    pub map_native_size: Option<Vec2>,
    /// Aktuell gerenderte Größe der Kartenfläche in Screen-Pixeln
    pub rendered_size: Vec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Fläche noch nicht bereit).
    pub fn new() -> Self {
        Self {
            map_native_size: None,
            rendered_size: Vec2::ZERO,
        }
    }
}

/// Hauptzustand der Karten-Komponente.
pub struct AppState {
    /// Injizierter Content (Kategorien + vordefinierte Punkte), read-only
    pub content: MapContent,
    /// Laufzeit-Optionen (Marker-Größen, Anzeigedauern)
    pub options: WidgetOptions,
    /// Session-Marker der aktiven Kategorie
    pub session: SessionState,
    /// View-State
    pub view: ViewState,
    /// Benachrichtigungs-Feed
    pub notifications: NotificationFeed,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den App-State aus injiziertem Content.
    ///
    /// Der Content muss validiert sein (mindestens eine Kategorie); die
    /// erste Kategorie ist beim Start aktiv.
    pub fn new(content: MapContent, options: WidgetOptions) -> Self {
        let active = content
            .first_category_key()
            .unwrap_or_default()
            .to_string();
        let first_free_id = content.max_point_id() + 1;
        // Auch direkt konstruierte Optionen dürfen hier nicht panicen:
        // negative/NaN-Dauer fällt auf den Standardwert zurück.
        let ttl = std::time::Duration::try_from_secs_f32(options.notification_ttl_secs)
            .unwrap_or_else(|_| {
                log::warn!(
                    "Unplausibler notification_ttl_secs ({}), verwende Standardwert",
                    options.notification_ttl_secs
                );
                std::time::Duration::from_secs_f32(
                    crate::shared::options::NOTIFICATION_TTL_SECS,
                )
            });

        Self {
            session: SessionState::new(active, first_free_id),
            content,
            options,
            view: ViewState::new(),
            notifications: NotificationFeed::with_ttl(ttl),
            command_log: CommandLog::new(),
        }
    }

    /// Gibt alle sichtbaren Punkte zurück: vordefinierte Punkte der aktiven
    /// Kategorie in konfigurierter Reihenfolge, danach Session-Marker in
    /// Erstellungs-Reihenfolge.
    pub fn visible_points(&self) -> impl Iterator<Item = &PointOfInterest> {
        let predefined = self
            .content
            .category(&self.session.active_category)
            .map(|c| c.points.as_slice())
            .unwrap_or_default();
        predefined.iter().chain(self.session.markers.iter())
    }

    /// Sucht einen sichtbaren Punkt per ID.
    pub fn visible_point(&self, id: u64) -> Option<&PointOfInterest> {
        self.visible_points().find(|p| p.id == id)
    }

    /// Baut den Koordinaten-Mapper, sofern die native Bildgröße bekannt ist.
    pub fn surface_mapper(&self) -> Option<SurfaceMapper> {
        let native = self.view.map_native_size?;
        SurfaceMapper::new(native, self.options.marker_radius_px)
    }
}
