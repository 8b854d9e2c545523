//! Handler für Session-Marker: Erstellen, Auswahl melden, Leeren.

use glam::Vec2;

use crate::app::notifications::NotificationKind;
use crate::app::AppState;

/// Hängt einen neuen Session-Marker an und meldet die Erstellung.
///
/// Das Marker-Icon kommt aus der aktiven Kategorie; ohne Kategorie-Content
/// bleibt die Icon-Referenz leer und die Glyphe fällt auf die
/// Standard-Darstellung zurück.
pub fn add(state: &mut AppState, native_pos: Vec2) {
    let icon = state
        .content
        .category(&state.session.active_category)
        .map(|c| c.marker_icon.clone())
        .unwrap_or_default();

    let id = state.session.create_marker(native_pos, icon);
    log::info!(
        "Neuer Punkt id {} bei ({:.1}, {:.1})",
        id,
        native_pos.x,
        native_pos.y
    );

    state
        .notifications
        .push(NotificationKind::Success, "New point marked!");
}

/// Meldet die Auswahl eines sichtbaren Markers. Keine Zustandsänderung.
pub fn announce(state: &mut AppState, id: u64) {
    let Some(point) = state.visible_point(id) else {
        log::warn!("Marker-Klick auf unbekannte ID ignoriert: {}", id);
        return;
    };
    let text = format!("You selected: {}", point.name);
    state.notifications.push(NotificationKind::Info, text);
}

/// Leert die Session-Marker.
///
/// `announce = true` beim expliziten Reset (meldet sich auch, wenn die Liste
/// bereits leer war), `false` beim impliziten Clear durch Kategorie-Wechsel.
pub fn clear(state: &mut AppState, announce: bool) {
    state.session.clear();
    if announce {
        state
            .notifications
            .push(NotificationKind::Info, "Map has been reset.");
    }
}
