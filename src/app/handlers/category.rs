//! Handler für die Kategorie-Filter-Auswahl.

use crate::app::AppState;

/// Setzt die aktive Kategorie und leert die Session-Marker.
///
/// Der implizite Clear beim Kategorie-Wechsel erzeugt keine Benachrichtigung;
/// nur der explizite Reset meldet sich.
pub fn select(state: &mut AppState, key: String) {
    log::debug!(
        "Kategorie-Wechsel: {} -> {} ({} Session-Marker verworfen)",
        state.session.active_category,
        key,
        state.session.markers.len()
    );
    state.session.active_category = key;
    state.session.clear();
}
