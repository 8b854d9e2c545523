//! Handler für Bild-Load und Flächen-Layout.

use glam::Vec2;

use crate::app::AppState;

/// Übernimmt die native Kartenbildgröße nach dem Bild-Load.
pub fn set_native_size(state: &mut AppState, size: Vec2) {
    log::info!("Native Kartengröße: {}x{}", size.x, size.y);
    state.view.map_native_size = Some(size);
}

/// Aktualisiert die gerenderte Flächengröße im State.
pub fn set_rendered_size(state: &mut AppState, size: Vec2) {
    state.view.rendered_size = size;
}
