//! Filter-Leiste für die Kategorie-Auswahl.

use crate::app::{AppIntent, AppState};

const ICON_SIZE: egui::Vec2 = egui::Vec2::new(20.0, 20.0);

/// Erstellt ein `egui::Image` aus einem Asset-Pfad in der gewünschten Größe.
///
/// Die Auflösung des Pfads übernimmt der Image-Loader (egui_extras).
fn asset_icon(path: &str, size: egui::Vec2) -> egui::Image<'static> {
    egui::Image::from_uri(format!("file://{}", path)).fit_to_exact_size(size)
}

/// Rendert die Kategorie-Buttons und gibt erzeugte Events zurück.
///
/// Genau ein Button ist als aktiv markiert; die Button-Menge kommt aus dem
/// injizierten Content, eine Auswahl ist daher immer gültig.
pub fn render_filter_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.session.active_category.as_str();

    egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (key, category) in &state.content.categories {
                let icon = asset_icon(&category.filter_icon, ICON_SIZE);
                let button = egui::Button::image_and_text(icon, &category.label);

                if ui.add(button.selected(key == active)).clicked() {
                    events.push(AppIntent::CategorySelected { key: key.clone() });
                }
            }
        });
    });

    events
}
