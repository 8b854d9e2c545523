//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            AppCommand::SelectCategory { key } => handlers::category::select(state, key),
            AppCommand::AddSessionMarker { native_pos } => {
                handlers::markers::add(state, native_pos)
            }
            AppCommand::AnnounceMarker { id } => handlers::markers::announce(state, id),
            AppCommand::ClearSessionMarkers { announce } => {
                handlers::markers::clear(state, announce)
            }
            AppCommand::SetNativeSize { size } => handlers::view::set_native_size(state, size),
            AppCommand::SetRenderedSize { size } => handlers::view::set_rendered_size(state, size),
        }

        Ok(())
    }
}
