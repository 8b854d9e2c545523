//! Koordinaten-Mapping zwischen nativem Kartenpixelraum und gerenderter Fläche.

use glam::Vec2;

/// Rechteck der gerenderten Kartenfläche in Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Ursprung (linke obere Ecke) in Screen-Pixeln
    pub origin: Vec2,
    /// Gerenderte Größe in Screen-Pixeln
    pub size: Vec2,
}

impl SurfaceRect {
    /// Erstellt ein Surface-Rechteck.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Gibt `true` zurück, wenn die Fläche keine darstellbare Ausdehnung hat.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

/// Mapper zwischen nativem Pixelraum und aktuell gerenderter Größe.
///
/// Beide Richtungen sind referentiell transparent: der Mapper hält nur die
/// native Bildgröße, die gerenderte Größe kommt pro Aufruf herein und wird
/// bei jedem Frame neu aus dem Layout gelesen.
#[derive(Debug, Clone)]
pub struct SurfaceMapper {
    /// Native Bildgröße in Pixeln (Breite/Höhe > 0)
    native_size: Vec2,
    /// Marker-Radius in Screen-Pixeln für das Render-Clamping
    marker_radius: f32,
}

impl SurfaceMapper {
    /// Erstellt einen Mapper. Gibt `None` zurück, wenn die native Größe
    /// keine gültige Ausdehnung hat (Bild noch nicht geladen).
    pub fn new(native_size: Vec2, marker_radius: f32) -> Option<Self> {
        if native_size.x <= 0.0 || native_size.y <= 0.0 {
            return None;
        }
        Some(Self {
            native_size,
            marker_radius,
        })
    }

    /// Gibt die native Bildgröße zurück.
    pub fn native_size(&self) -> Vec2 {
        self.native_size
    }

    /// Konvertiert eine Klickposition (Screen) in native Kartenkoordinaten.
    ///
    /// Ursprung der Fläche wird abgezogen, dann komponentenweise mit
    /// `native / gerendert` skaliert.
    pub fn to_native(&self, pointer_pos: Vec2, surface: SurfaceRect) -> Vec2 {
        let local = pointer_pos - surface.origin;
        local * (self.native_size / surface.size)
    }

    /// Konvertiert native Kartenkoordinaten in eine Renderposition.
    ///
    /// Skaliert komponentenweise mit `gerendert / native` und clampt jede
    /// Achse auf `[0, gerendert - marker_radius]`, damit das Glyphenzentrum
    /// nie außerhalb der sichtbaren Fläche liegt.
    pub fn to_render_position(&self, native: Vec2, rendered_size: Vec2) -> Vec2 {
        let scaled = native * (rendered_size / self.native_size);
        Vec2::new(
            scaled.x.clamp(0.0, (rendered_size.x - self.marker_radius).max(0.0)),
            scaled.y.clamp(0.0, (rendered_size.y - self.marker_radius).max(0.0)),
        )
    }
}
