//! Interaktionsfläche: Kartenbild, Marker-Glyphen, Detail-Panel, Reset.

use std::collections::HashMap;

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::{MapImage, PointOfInterest, SurfaceRect};
use crate::shared::options::{
    MARKER_FADE_IN_SECS, MARKER_HOVER_SCALE, MARKER_PRESS_ROTATION_RAD, MARKER_PRESS_SCALE,
};

/// Zustand der Kartenansicht: Textur-Upload und Glyphen-Animation.
///
/// Alles hier ist reine Präsentation; der fachliche Zustand liegt im
/// `AppState` und wird ausschließlich über Intents verändert.
pub struct MapView {
    /// Dekodiertes Bild, das noch auf den Textur-Upload wartet
    pending_image: Option<MapImage>,
    /// Hochgeladene Karten-Textur
    texture: Option<egui::TextureHandle>,
    /// Erstes Render-Frame pro Marker-ID (Einblend-Animation)
    first_seen: HashMap<u64, f64>,
}

impl MapView {
    /// Erstellt die Kartenansicht. `None` lässt die Fläche im
    /// "unready"-Zustand (Klicks werden verworfen).
    pub fn new(map_image: Option<MapImage>) -> Self {
        Self {
            pending_image: map_image,
            texture: None,
            first_seen: HashMap::new(),
        }
    }

    /// Rendert die Kartenfläche und gibt erzeugte Events zurück.
    pub fn render(&mut self, ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.upload_pending_texture(ui.ctx(), &mut events);

            let Some(texture) = self.texture.clone() else {
                ui.painter().text(
                    ui.max_rect().center(),
                    egui::Align2::CENTER_CENTER,
                    "Map image not available",
                    egui::FontId::proportional(20.0),
                    ui.visuals().weak_text_color(),
                );
                return;
            };

            // Proportionale Skalierung auf die verfügbare Panelfläche
            let avail = ui.available_size();
            let tex_size = texture.size_vec2();
            let scale = (avail.x / tex_size.x).min(avail.y / tex_size.y).max(0.0);
            let rendered = tex_size * scale;

            let (rect, response) = ui.allocate_exact_size(rendered, egui::Sense::click());
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
            let response = response.on_hover_cursor(egui::CursorIcon::Crosshair);

            events.push(AppIntent::SurfaceResized {
                size: Vec2::new(rect.width(), rect.height()),
            });

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    events.push(AppIntent::SurfaceClicked {
                        pointer_pos: Vec2::new(pointer.x, pointer.y),
                        surface_rect: SurfaceRect::new(
                            Vec2::new(rect.min.x, rect.min.y),
                            Vec2::new(rect.width(), rect.height()),
                        ),
                    });
                }
            }

            self.render_markers(ui, state, rect, &mut events);
            self.render_legend(ctx, rect);
            self.render_reset_button(ctx, rect, &mut events);
        });

        events
    }

    /// Lädt das dekodierte Kartenbild als Textur hoch und meldet die native
    /// Größe (einmalig).
    fn upload_pending_texture(&mut self, ctx: &egui::Context, events: &mut Vec<AppIntent>) {
        let Some(image) = self.pending_image.take() else {
            return;
        };
        let native_size = image.native_size();
        self.texture = Some(ctx.load_texture(
            "map_background",
            image.to_color_image(),
            egui::TextureOptions::LINEAR,
        ));
        events.push(AppIntent::MapImageLoaded { native_size });
    }

    /// Zeichnet alle sichtbaren Marker-Glyphen über die Kartenfläche.
    fn render_markers(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        surface: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(mapper) = state.surface_mapper() else {
            return;
        };
        let rendered_size = Vec2::new(surface.width(), surface.height());
        let glyph_size = state.options.marker_glyph_size_px;
        let now = ui.input(|i| i.time);

        for point in state.visible_points() {
            let render_pos = mapper.to_render_position(point.position, rendered_size);
            let center = egui::pos2(surface.min.x + render_pos.x, surface.min.y + render_pos.y);

            // Einblend-Animation ab dem ersten Frame des Markers
            let first = *self.first_seen.entry(point.id).or_insert(now);
            let fade_in = (((now - first) as f32) / MARKER_FADE_IN_SECS).clamp(0.0, 1.0);
            if fade_in < 1.0 {
                ui.ctx().request_repaint();
            }

            let probe_rect =
                egui::Rect::from_center_size(center, egui::Vec2::splat(glyph_size));
            let hovered = ui.rect_contains_pointer(probe_rect);
            let pressed = hovered && ui.input(|i| i.pointer.primary_down());
            let (pulse_scale, rotation) = glyph_pulse(hovered, pressed);

            let glyph_rect = egui::Rect::from_center_size(
                center,
                egui::Vec2::splat(glyph_size * fade_in * pulse_scale),
            );

            let response = ui.interact(
                glyph_rect,
                egui::Id::new(("marker", point.id)),
                egui::Sense::click(),
            );
            Self::paint_glyph(ui, point, glyph_rect, fade_in, rotation);

            if response.clicked() {
                events.push(AppIntent::MarkerClicked { id: point.id });
            }
            response.on_hover_ui(|ui| Self::detail_panel(ui, point));
        }

        // Animations-Zustand verlassener Marker aufräumen
        let visible: std::collections::HashSet<u64> =
            state.visible_points().map(|p| p.id).collect();
        self.first_seen.retain(|id, _| visible.contains(id));
    }

    /// Zeichnet eine Glyphe: Icon aus dem Content, Kreis als Fallback.
    /// Die Tap-Rotation wirkt nur auf Icons; am Kreis ist sie unsichtbar.
    fn paint_glyph(
        ui: &egui::Ui,
        point: &PointOfInterest,
        rect: egui::Rect,
        fade_in: f32,
        rotation: f32,
    ) {
        if point.icon.is_empty() {
            ui.painter().circle_filled(
                rect.center(),
                rect.width() / 2.0,
                egui::Color32::from_rgb(242, 84, 45).gamma_multiply(fade_in),
            );
            return;
        }
        egui::Image::from_uri(format!("file://{}", point.icon))
            .tint(egui::Color32::WHITE.gamma_multiply(fade_in))
            .rotate(rotation, egui::Vec2::splat(0.5))
            .paint_at(ui, rect);
    }

    /// Hover-Detail-Panel: Name, native Koordinaten, Aktivitäten,
    /// statische Miet-Vorschläge.
    fn detail_panel(ui: &mut egui::Ui, point: &PointOfInterest) {
        ui.set_max_width(220.0);
        ui.label(format!("Name: {}", point.name));
        ui.label(format!(
            "Position: x={:.0}, y={:.0}",
            point.position.x, point.position.y
        ));
        ui.label(format!("Activities: {}", point.activities.join(", ")));
        ui.label("Rental Suggestions: House A, House B, House C");
    }

    /// Legenden-Badge oben links auf der Karte.
    fn render_legend(&self, ctx: &egui::Context, surface: egui::Rect) {
        egui::Area::new(egui::Id::new("map_legend"))
            .fixed_pos(surface.min + egui::vec2(16.0, 16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label("Emplacement");
                });
            });
    }

    /// Reset-Button unten links auf der Karte.
    fn render_reset_button(
        &self,
        ctx: &egui::Context,
        surface: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        egui::Area::new(egui::Id::new("map_reset"))
            .fixed_pos(egui::pos2(surface.min.x + 16.0, surface.max.y - 44.0))
            .show(ctx, |ui| {
                if ui.button("Reset").clicked() {
                    events.push(AppIntent::ResetRequested);
                }
            });
    }
}

/// Skalierung und Rotation einer Glyphe aus dem Zeiger-Zustand.
/// Der Tap-Puls (Skalierung + Rotation) schlägt den Hover-Effekt.
fn glyph_pulse(hovered: bool, pressed: bool) -> (f32, f32) {
    if pressed {
        (MARKER_PRESS_SCALE, MARKER_PRESS_ROTATION_RAD)
    } else if hovered {
        (MARKER_HOVER_SCALE, 0.0)
    } else {
        (1.0, 0.0)
    }
}
