//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CategorySelected { key } => {
            // Erneute Auswahl der aktiven Kategorie ist ein No-op:
            // Session-Marker bleiben erhalten.
            if key == state.session.active_category {
                return Vec::new();
            }
            if state.content.category(&key).is_none() {
                log::warn!("Unbekannte Kategorie ignoriert: {}", key);
                return Vec::new();
            }
            vec![AppCommand::SelectCategory { key }]
        }
        AppIntent::SurfaceClicked {
            pointer_pos,
            surface_rect,
        } => {
            // Fläche noch nicht bereit (Bild nicht geladen oder Layout leer)
            // → Klick still verwerfen, kein Marker.
            if surface_rect.is_empty() {
                return Vec::new();
            }
            let Some(mapper) = state.surface_mapper() else {
                log::debug!("Klick vor Bild-Load ignoriert");
                return Vec::new();
            };
            let native_pos = mapper.to_native(pointer_pos, surface_rect);
            vec![AppCommand::AddSessionMarker { native_pos }]
        }
        AppIntent::MarkerClicked { id } => vec![AppCommand::AnnounceMarker { id }],
        AppIntent::ResetRequested => vec![AppCommand::ClearSessionMarkers { announce: true }],
        AppIntent::MapImageLoaded { native_size } => {
            vec![AppCommand::SetNativeSize { size: native_size }]
        }
        AppIntent::SurfaceResized { size } => {
            if size == state.view.rendered_size {
                return Vec::new();
            }
            vec![AppCommand::SetRenderedSize { size }]
        }
    }
}
