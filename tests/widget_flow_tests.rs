//! Integrationstests für den Intent/Command-Fluss der Karten-Komponente.

use approx::assert_relative_eq;
use glam::Vec2;
use pourvoirie_map::{
    AppCommand, AppController, AppIntent, AppState, MapContent, NotificationKind, SurfaceRect,
    WidgetOptions,
};

/// Content-Fixture: zwei Kategorien, Kategorie A mit zwei Punkten.
const FIXTURE: &str = r#"
map_image = "assets/map.png"

[categories.mountain]
label = "Mountain"
filter_icon = "assets/icon/mountains.svg"
marker_icon = "assets/icon/mountain-marked.png"

[[categories.mountain.points]]
id = 1
position = [809.0, 566.0]
name = "Pourvoirie Mountain 1"
icon = "assets/icon/mountain-marked.png"
activities = ["Mountain Climbing Activity"]

[[categories.mountain.points]]
id = 2
position = [1232.0, 900.0]
name = "Pourvoirie Mountain 2"
icon = "assets/icon/mountain-marked.png"
activities = ["Mountain Climbing Activity"]

[categories.fish]
label = "Fish"
filter_icon = "assets/icon/fishing.svg"
marker_icon = "assets/icon/fish-marked.png"

[[categories.fish.points]]
id = 3
position = [1500.0, 750.0]
name = "Pourvoirie Fishing 1"
icon = "assets/icon/fish-marked.png"
activities = ["Fishing Activity"]
"#;

fn test_state() -> AppState {
    let content: MapContent = toml::from_str(FIXTURE).expect("Fixture sollte parsen");
    content.validate().expect("Fixture sollte gültig sein");
    AppState::new(content, WidgetOptions::default())
}

/// Meldet der Komponente ein geladenes Bild von 1600x1200 nativen Pixeln.
fn load_map(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::MapImageLoaded {
                native_size: Vec2::new(1600.0, 1200.0),
            },
        )
        .expect("MapImageLoaded sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, pointer: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::SurfaceClicked {
                pointer_pos: pointer,
                surface_rect: SurfaceRect::new(Vec2::ZERO, Vec2::new(800.0, 600.0)),
            },
        )
        .expect("SurfaceClicked sollte ohne Fehler durchlaufen");
}

#[test]
fn test_initial_state_uses_first_category() {
    let state = test_state();
    assert_eq!(state.session.active_category, "mountain");
    assert!(state.session.markers.is_empty());
    assert!(state.view.map_native_size.is_none());
}

#[test]
fn test_click_creates_marker_in_native_coordinates() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    // Klick bei (100, 50) auf 800x600 gerendert aus 1600x1200 nativ
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));

    assert_eq!(state.session.markers.len(), 1);
    let marker = &state.session.markers[0];
    assert_relative_eq!(marker.position.x, 200.0);
    assert_relative_eq!(marker.position.y, 100.0);
    assert_eq!(marker.name, "New Point 1");
    assert_eq!(marker.icon, "assets/icon/mountain-marked.png");
    assert!(!marker.activities.is_empty());

    // Sichtbar als dritter Punkt nach den zwei vordefinierten
    let visible: Vec<_> = state.visible_points().collect();
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[2].name, "New Point 1");

    let last = state
        .notifications
        .entries()
        .last()
        .expect("Erstellung sollte gemeldet werden");
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.text, "New point marked!");
}

#[test]
fn test_click_before_image_load_is_a_noop() {
    let mut controller = AppController::new();
    let mut state = test_state();

    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));

    assert!(state.session.markers.is_empty());
    assert!(state.notifications.is_empty());
    // Kein Command ausgeführt: das Mapping verwirft den Klick
    assert!(state.command_log.is_empty());
}

#[test]
fn test_category_round_trip_discards_session_markers() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));
    assert_eq!(state.session.markers.len(), 1);

    for key in ["fish", "mountain"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CategorySelected {
                    key: key.to_string(),
                },
            )
            .expect("Kategorie-Wechsel sollte ohne Fehler durchlaufen");
    }

    // Zurück in Kategorie A: nur die zwei vordefinierten Punkte
    assert_eq!(state.session.active_category, "mountain");
    assert!(state.session.markers.is_empty());
    let names: Vec<_> = state.visible_points().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pourvoirie Mountain 1", "Pourvoirie Mountain 2"]);

    // Impliziter Clear meldet sich nicht
    let reset_notices = state
        .notifications
        .entries()
        .iter()
        .filter(|n| n.text == "Map has been reset.")
        .count();
    assert_eq!(reset_notices, 0);
}

#[test]
fn test_reselecting_active_category_keeps_session_markers() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::CategorySelected {
                key: "mountain".to_string(),
            },
        )
        .expect("Erneute Auswahl sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.markers.len(), 1);
}

#[test]
fn test_visible_points_contain_only_active_category() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CategorySelected {
                key: "fish".to_string(),
            },
        )
        .expect("Kategorie-Wechsel sollte ohne Fehler durchlaufen");

    let ids: Vec<_> = state.visible_points().map(|p| p.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_session_marker_ids_are_unique_across_categories() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));
    let first_id = state.session.markers[0].id;
    assert!(first_id > 3, "Session-IDs starten oberhalb der Content-IDs");

    for key in ["fish", "mountain"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CategorySelected {
                    key: key.to_string(),
                },
            )
            .expect("Kategorie-Wechsel sollte ohne Fehler durchlaufen");
    }
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));

    // Zähler läuft über Kategorie-Wechsel hinweg weiter
    assert!(state.session.markers[0].id > first_id);
    // Der Anzeigename zählt dagegen pro Session-Liste
    assert_eq!(state.session.markers[0].name, "New Point 1");
}

#[test]
fn test_rapid_clicks_yield_distinct_ids_and_names() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));

    assert_eq!(state.session.markers.len(), 2);
    assert_ne!(state.session.markers[0].id, state.session.markers[1].id);
    assert_eq!(state.session.markers[1].name, "New Point 2");
}

#[test]
fn test_marker_click_announces_selection_without_mutation() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { id: 2 })
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");

    assert!(state.session.markers.is_empty());
    let last = state
        .notifications
        .entries()
        .last()
        .expect("Auswahl sollte gemeldet werden");
    assert_eq!(last.kind, NotificationKind::Info);
    assert_eq!(last.text, "You selected: Pourvoirie Mountain 2");
}

#[test]
fn test_marker_click_on_unknown_id_is_ignored() {
    let mut controller = AppController::new();
    let mut state = test_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { id: 999 })
        .expect("Unbekannte ID sollte robust sein");

    assert!(state.notifications.is_empty());
}

#[test]
fn test_reset_on_empty_session_is_idempotent_but_announced() {
    let mut controller = AppController::new();
    let mut state = test_state();

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");

    assert!(state.session.markers.is_empty());
    let reset_notices = state
        .notifications
        .entries()
        .iter()
        .filter(|n| n.text == "Map has been reset.")
        .count();
    assert_eq!(reset_notices, 1);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::ClearSessionMarkers { announce } => assert!(announce),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_reset_clears_existing_session_markers() {
    let mut controller = AppController::new();
    let mut state = test_state();
    load_map(&mut controller, &mut state);
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));
    click(&mut controller, &mut state, Vec2::new(300.0, 200.0));

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");

    assert!(state.session.markers.is_empty());
    assert_eq!(state.visible_points().count(), 2);
}

#[test]
fn test_surface_resize_is_recorded_once_per_size() {
    let mut controller = AppController::new();
    let mut state = test_state();

    for _ in 0..3 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SurfaceResized {
                    size: Vec2::new(800.0, 600.0),
                },
            )
            .expect("SurfaceResized sollte ohne Fehler durchlaufen");
    }

    assert_relative_eq!(state.view.rendered_size.x, 800.0);
    // Unveränderte Größe erzeugt keinen weiteren Command
    assert_eq!(state.command_log.len(), 1);
}

#[test]
fn test_implausible_notification_ttl_falls_back_to_default() {
    let content: MapContent = toml::from_str(FIXTURE).expect("Fixture sollte parsen");
    let options = WidgetOptions {
        notification_ttl_secs: -1.0,
        ..WidgetOptions::default()
    };

    // Darf nicht panicen; der Feed läuft mit der Standard-Anzeigedauer
    let mut state = AppState::new(content, options);
    let mut controller = AppController::new();

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.notifications.entries().len(), 1);
}

#[test]
fn test_unknown_category_selection_is_ignored() {
    let mut controller = AppController::new();
    let mut state = test_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CategorySelected {
                key: "unknown".to_string(),
            },
        )
        .expect("Unbekannte Kategorie sollte robust sein");

    assert_eq!(state.session.active_category, "mountain");
    assert!(state.command_log.is_empty());
}
