//! Zentrale Konfiguration für die Karten-Komponente.
//!
//! `WidgetOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker ──────────────────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln (Clamping-Rand am Flächenrand).
pub const MARKER_RADIUS_PX: f32 = 10.0;
/// Kantenlänge der Marker-Glyphen in Screen-Pixeln.
pub const MARKER_GLYPH_SIZE_PX: f32 = 32.0;
/// Dauer der Einblend-Animation neuer Marker in Sekunden.
pub const MARKER_FADE_IN_SECS: f32 = 0.25;
/// Skalierungsfaktor für Glyphen unter dem Mauszeiger.
pub const MARKER_HOVER_SCALE: f32 = 1.1;
/// Skalierungsfaktor für gedrückte Glyphen (Tap-Puls).
pub const MARKER_PRESS_SCALE: f32 = 1.2;
/// Rotation gedrückter Glyphen in Radiant (Tap-Puls, ca. 10 Grad).
pub const MARKER_PRESS_ROTATION_RAD: f32 = 0.1745;
/// Aktivitäts-Tag für per Klick erstellte Punkte.
pub const CUSTOM_ACTIVITY_TAG: &str = "Custom Activity";

// ── Benachrichtigungen ──────────────────────────────────────────────

/// Anzeigedauer einer Benachrichtigung in Sekunden.
pub const NOTIFICATION_TTL_SECS: f32 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Darstellungsoptionen.
/// Wird als `pourvoirie_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Kantenlänge der Marker-Glyphen in Screen-Pixeln
    pub marker_glyph_size_px: f32,
    /// Anzeigedauer von Benachrichtigungen in Sekunden
    pub notification_ttl_secs: f32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            marker_radius_px: MARKER_RADIUS_PX,
            marker_glyph_size_px: MARKER_GLYPH_SIZE_PX,
            notification_ttl_secs: NOTIFICATION_TTL_SECS,
        }
    }
}

impl WidgetOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    /// Unplausible Werte fallen feldweise auf die Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unplausible Werte durch die Standardwerte.
    ///
    /// Die Datei ist benutzer-editierbar: negative, NaN- oder
    /// Null-Werte dürfen nie in den State gelangen (eine Duration aus
    /// negativem f32 würde panicen).
    pub fn sanitized(mut self) -> Self {
        if !self.marker_radius_px.is_finite() || self.marker_radius_px < 0.0 {
            log::warn!(
                "Unplausibler marker_radius_px ({}), verwende Standardwert",
                self.marker_radius_px
            );
            self.marker_radius_px = MARKER_RADIUS_PX;
        }
        if !self.marker_glyph_size_px.is_finite() || self.marker_glyph_size_px <= 0.0 {
            log::warn!(
                "Unplausibler marker_glyph_size_px ({}), verwende Standardwert",
                self.marker_glyph_size_px
            );
            self.marker_glyph_size_px = MARKER_GLYPH_SIZE_PX;
        }
        if !self.notification_ttl_secs.is_finite() || self.notification_ttl_secs <= 0.0 {
            log::warn!(
                "Unplausibler notification_ttl_secs ({}), verwende Standardwert",
                self.notification_ttl_secs
            );
            self.notification_ttl_secs = NOTIFICATION_TTL_SECS;
        }
        self
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pourvoirie_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pourvoirie_map.toml")
    }
}
