//! Zellij plugin wrapper and entry point.
//!
//! Thin host layer around the countyflow library: it maps keys onto library
//! events, keeps the navigation history, and applies the returned actions
//! (history pushes, pane title, focus).
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← Controller, HistoryStack, key mapping
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ CountyflowWorker │   │  ← reads and decodes the datasets
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Search view:
//! - type to search, `Backspace` deletes
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move over matches
//! - `Enter`: open the selected match
//! - `Esc`: hide the matches, or close the plugin
//! - `F1`–`F9`: featured counties
//!
//! County view:
//! - `j`/`Down`, `k`/`Up`: move over flow rows
//! - `Enter`: follow the selected row's county
//! - `Esc`/`Backspace`/`/`: back to search
//! - `q`: close
//!
//! Anywhere: `Alt+Left` / `Alt+Right` step back / forward through history.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use countyflow::app::HistoryStack;
use countyflow::worker::{CountyflowWorker, WorkerMessage, WorkerResponse};
use countyflow::{Action, Config, Controller, Direction, Event};

register_plugin!(State);
register_worker!(CountyflowWorker, countyflow_worker, COUNTYFLOW_WORKER);

const WORKER_NAME: &str = "countyflow";

struct State {
    controller: Controller,
    history: HistoryStack,
    county_list_path: String,
    migration_data_path: String,
    data_dir: String,
    trace_level: Option<String>,
    load_requested: bool,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            controller: countyflow::initialize(&config),
            history: HistoryStack::default(),
            county_list_path: config.county_list_path().display().to_string(),
            migration_data_path: config.migration_data_path().display().to_string(),
            data_dir: config.data_dir.display().to_string(),
            trace_level: config.trace_level,
            load_requested: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        countyflow::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.controller = countyflow::initialize(&config);
        self.history = HistoryStack::new(config.initial_county.clone().unwrap_or_default());
        self.county_list_path = config.county_list_path().display().to_string();
        self.migration_data_path = config.migration_data_path().display().to_string();
        self.data_dir = config.data_dir.display().to_string();
        self.trace_level = config.trace_level.clone();

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        let (should_render, actions) = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                let Some(our_event) = self.map_key_event(key) else {
                    return false;
                };
                match self.controller.dispatch(&our_event) {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!(error = %e, event = ?our_event, "error handling event");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                let Some(response) = Self::parse_worker_response(&message, &payload) else {
                    return false;
                };
                self.controller.handle_worker_response(response)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        tracing::debug!(action_count = actions.len(), should_render, "event handled");
        for action in actions {
            self.execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        countyflow::ui::render(&self.controller, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(name, _) => format!("CustomMessage({name})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn on_search_view(&self) -> bool {
        self.controller.state().map_or(true, |state| state.view.is_search())
    }

    fn map_key_event(&mut self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Alt]) {
            if !self.controller.is_ready() {
                return None;
            }
            let fragment = match key.bare_key {
                BareKey::Left => self.history.back(),
                BareKey::Right => self.history.forward(),
                _ => None,
            }?;
            return Some(Event::HistoryChanged(fragment.to_string()));
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::MoveCursor(Direction::Down)),
                BareKey::Char('p') => Some(Event::MoveCursor(Direction::Up)),
                _ => None,
            };
        }

        if !key.has_no_modifiers() && !key.has_modifiers(&[KeyModifier::Shift]) {
            return None;
        }

        if self.on_search_view() {
            Some(match key.bare_key {
                BareKey::Down => Event::MoveCursor(Direction::Down),
                BareKey::Up => Event::MoveCursor(Direction::Up),
                BareKey::Enter => Event::CommitSelection,
                BareKey::Esc => Event::DismissSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::F(n @ 1..=9) => Event::SelectFeatured(usize::from(n) - 1),
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        } else {
            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::MoveCursor(Direction::Down),
                BareKey::Up | BareKey::Char('k') => Event::MoveCursor(Direction::Up),
                BareKey::Enter => Event::FollowLink,
                BareKey::Esc | BareKey::Backspace | BareKey::Char('/') => Event::NavigateBack,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }
    }

    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                if self.load_requested {
                    return false;
                }
                self.load_requested = true;
                tracing::debug!("permissions granted - requesting datasets");
                let message = WorkerMessage::load_datasets(
                    self.county_list_path.clone(),
                    self.migration_data_path.clone(),
                    self.data_dir.clone(),
                    self.trace_level.clone(),
                );
                self.execute_action(Action::PostToWorker(message));
                false
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - datasets cannot be read");
                self.controller.load_failed("permissions denied")
            }
        }
    }

    fn parse_worker_response(message: &str, payload: &str) -> Option<WorkerResponse> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        serde_json::from_str::<WorkerResponse>(payload)
            .inspect_err(|e| tracing::error!(error = %e, "failed to deserialize worker response"))
            .ok()
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::PushHistory { fragment } => self.history.push(fragment),
            Action::SetTitle(title) => rename_plugin_pane(get_plugin_ids().plugin_id, title),
            Action::FocusSearch => show_self(false),
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(&message),
        }
    }
}
