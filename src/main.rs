//! Pourvoirie Map.
//!
//! Interaktive Karten-Komponente auf egui-Basis: vordefinierte Points of
//! Interest pro Aktivitäts-Kategorie plus per Klick erstellte Session-Marker.

use std::time::Instant;

use eframe::egui;
use pourvoirie_map::{ui, AppController, AppState, MapContent, MapImage, WidgetOptions};

/// Standard-Pfad zur Content-Datei (überschreibbar per erstem CLI-Argument).
const DEFAULT_CONTENT_PATH: &str = "assets/map_content.toml";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Pourvoirie Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Pourvoirie Map"),
            ..Default::default()
        };

        eframe::run_native(
            "Pourvoirie Map",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                let app = MapApp::new()?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur.
struct MapApp {
    state: AppState,
    controller: AppController,
    map_view: ui::MapView,
}

impl MapApp {
    fn new() -> anyhow::Result<Self> {
        let widget_options = WidgetOptions::load_from_file(&WidgetOptions::config_path());

        let content_path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string());
        let content = MapContent::load_from_file(std::path::Path::new(&content_path))?;

        // Fehlendes Kartenbild ist kein Startfehler: die Fläche bleibt im
        // "unready"-Zustand und Klicks werden verworfen.
        let map_image = match MapImage::load_from_file(&content.map_image) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Kartenbild nicht ladbar: {:#}", e);
                None
            }
        };

        Ok(Self {
            state: AppState::new(content, widget_options),
            controller: AppController::new(),
            map_view: ui::MapView::new(map_image),
        })
    }

    fn process_events(&mut self, events: Vec<pourvoirie_map::AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.notifications.prune(Instant::now());

        let mut events = ui::render_filter_bar(ctx, &self.state);
        events.extend(self.map_view.render(ctx, &self.state));

        self.process_events(events);

        ui::render_notifications(ctx, &self.state.notifications);
    }
}
