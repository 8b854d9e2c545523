//! Content-Konfiguration: Kategorien und vordefinierte Points of Interest.
//!
//! Der Content wird der Komponente beim Start injiziert statt im Code zu
//! liegen; Tests arbeiten mit beliebigen Fixtures.

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::PointOfInterest;

/// Content einer einzelnen Kategorie.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryContent {
    /// Anzeigename des Filter-Buttons
    pub label: String,
    /// Icon des Filter-Buttons (Asset-Pfad)
    pub filter_icon: String,
    /// Icon für Marker dieser Kategorie (Asset-Pfad)
    pub marker_icon: String,
    /// Vordefinierte Punkte in fester Reihenfolge
    #[serde(default)]
    pub points: Vec<PointOfInterest>,
}

/// Gesamter Karten-Content: Hintergrundbild plus Kategorien.
///
/// Die Reihenfolge der Kategorien ist signifikant: die erste Kategorie ist
/// beim Start aktiv, daher `IndexMap` statt `HashMap`.
#[derive(Debug, Clone, Deserialize)]
pub struct MapContent {
    /// Pfad zum Karten-Hintergrundbild
    pub map_image: String,
    /// Kategorien in konfigurierter Reihenfolge, Schlüssel = Kategorie-Key
    pub categories: IndexMap<String, CategoryContent>,
}

impl MapContent {
    /// Lädt den Content aus einer TOML-Datei und validiert ihn.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Content-Datei nicht gefunden: {}", path.display()))?;
        let content: Self = toml::from_str(&raw)
            .with_context(|| format!("Content-Datei fehlerhaft: {}", path.display()))?;
        content.validate()?;
        log::info!(
            "Content geladen: {} Kategorien, {} vordefinierte Punkte",
            content.categories.len(),
            content.point_count()
        );
        Ok(content)
    }

    /// Prüft die Invarianten des Contents.
    ///
    /// Mindestens eine Kategorie muss existieren (die erste ist der
    /// Startzustand). Eine Kategorie ohne Punkte ist gültig.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            bail!("Content enthält keine Kategorien");
        }
        for (key, category) in &self.categories {
            for point in &category.points {
                if point.activities.is_empty() {
                    bail!(
                        "Punkt '{}' in Kategorie '{}' hat keine Aktivitäts-Tags",
                        point.name,
                        key
                    );
                }
            }
        }
        Ok(())
    }

    /// Gibt den Key der ersten konfigurierten Kategorie zurück.
    pub fn first_category_key(&self) -> Option<&str> {
        self.categories.keys().next().map(String::as_str)
    }

    /// Gibt die Kategorie zu einem Key zurück.
    pub fn category(&self, key: &str) -> Option<&CategoryContent> {
        self.categories.get(key)
    }

    /// Gibt die Gesamtzahl vordefinierter Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.categories.values().map(|c| c.points.len()).sum()
    }

    /// Gibt die höchste vordefinierte Punkt-ID zurück (0 bei leerem Content).
    ///
    /// Session-IDs starten oberhalb davon, damit sie mit keiner
    /// konfigurierten ID kollidieren.
    pub fn max_point_id(&self) -> u64 {
        self.categories
            .values()
            .flat_map(|c| c.points.iter())
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
    }
}
