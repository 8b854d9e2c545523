//! Transienter Benachrichtigungs-Kanal (Toast-Meldungen).
//!
//! Die Kernlogik meldet Ereignisse als `notify(kind, text)`; die UI-Schicht
//! rendert den Feed und die Einträge verfallen nach fester Anzeigedauer.

use std::time::{Duration, Instant};

use crate::shared::options::NOTIFICATION_TTL_SECS;

/// Darstellungsart einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Erfolgsmeldung (Marker erstellt)
    Success,
    /// Informationsmeldung (Auswahl, Reset)
    Info,
}

/// Einzelne kurzlebige Benachrichtigung.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Darstellungsart
    pub kind: NotificationKind,
    /// Anzeigetext
    pub text: String,
    /// Erstellungszeitpunkt (für Auto-Dismiss)
    pub created: Instant,
}

/// Geordneter Feed aller aktuell sichtbaren Benachrichtigungen.
pub struct NotificationFeed {
    entries: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationFeed {
    /// Erstellt einen leeren Feed mit Standard-Anzeigedauer.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs_f32(NOTIFICATION_TTL_SECS))
    }

    /// Erstellt einen leeren Feed mit expliziter Anzeigedauer.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    /// Fügt eine Benachrichtigung hinzu.
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Benachrichtigung: {}", text);
        self.entries.push(Notification {
            kind,
            text,
            created: Instant::now(),
        });
    }

    /// Entfernt alle Einträge, deren Anzeigedauer zum Zeitpunkt `now`
    /// abgelaufen ist.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|n| now.duration_since(n.created) < ttl);
    }

    /// Restliche Anzeigedauer des ältesten Eintrags, `None` bei leerem Feed.
    /// Die UI nutzt das, um den nächsten Repaint zu planen.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.entries
            .iter()
            .map(|n| self.ttl.saturating_sub(now.duration_since(n.created)))
            .min()
    }

    /// Liefert eine read-only Sicht auf alle sichtbaren Einträge.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Gibt `true` zurück, wenn keine Benachrichtigung sichtbar ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
