//! Lädt das Karten-Hintergrundbild für die Interaktionsfläche.

use anyhow::{Context, Result};
use glam::Vec2;
use image::{DynamicImage, GenericImageView};

/// Dekodiertes Karten-Hintergrundbild inklusive nativer Größe.
pub struct MapImage {
    /// Bilddaten
    image_data: DynamicImage,
    /// Native Größe in Pixeln
    native_size: Vec2,
}

impl MapImage {
    /// Lädt das Kartenbild aus einer Datei.
    ///
    /// Unterstützte Formate: PNG, JPG, JPEG.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Kartenbild konnte nicht geladen werden: {}", path))?;

        let (width, height) = image.dimensions();
        log::info!("Kartenbild geladen: {}x{} Pixel von '{}'", width, height, path);

        Ok(Self {
            native_size: Vec2::new(width as f32, height as f32),
            image_data: image,
        })
    }

    /// Gibt die native Bildgröße in Pixeln zurück.
    pub fn native_size(&self) -> Vec2 {
        self.native_size
    }

    /// Konvertiert die Bilddaten in ein `egui::ColorImage` für den Textur-Upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        let rgba = self.image_data.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
    }
}
