//! Toast-Overlay für den Benachrichtigungs-Feed.

use std::time::Instant;

use crate::app::{NotificationFeed, NotificationKind};

/// Rendert die sichtbaren Benachrichtigungen oben rechts.
///
/// Plant zusätzlich den nächsten Repaint, damit abgelaufene Einträge auch
/// ohne weitere Eingaben verschwinden.
pub fn render_notifications(ctx: &egui::Context, feed: &NotificationFeed) {
    if feed.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notification_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            for notification in feed.entries() {
                let color = match notification.kind {
                    NotificationKind::Success => egui::Color32::from_rgb(80, 200, 120),
                    NotificationKind::Info => ui.visuals().text_color(),
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&notification.text).color(color));
                });
                ui.add_space(4.0);
            }
        });

    if let Some(remaining) = feed.next_expiry(Instant::now()) {
        ctx.request_repaint_after(remaining);
    }
}
