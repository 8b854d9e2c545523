//! Chronologisches Log ausgeführter Commands.
//!
//! Dient Diagnose und Tests: Integrationstests prüfen darüber, welche
//! Mutationen ein Intent tatsächlich ausgelöst hat. Kein Undo-Mechanismus.

use super::AppCommand;

/// Bounded-Verlauf der ausgeführten Commands in Ausführungs-Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Obergrenze; beim Erreichen wird die ältere Hälfte verworfen.
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch kein Command ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
