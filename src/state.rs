//! Whole-screen state and the transitions between states.
//!
//! Every user interaction and every loader outcome is an [`AppAction`];
//! [`AppState::reduce`] returns the next state without touching the old one.

use crate::calc::calculate;
use crate::config::LOAD_ERROR_MESSAGE;
use crate::form::{FormState, Slot};
use crate::loader::LoadError;
use crate::reference::ReferenceTables;
use log::error;
use std::rc::Rc;

#[derive(Debug)]
pub enum AppAction {
    /// A fetch of the reference tables has started.
    LoadStarted,
    /// The fetch has finished, successfully or not.
    LoadFinished(Result<ReferenceTables, LoadError>),
    /// The user changed a slot.
    Edit(Slot, String),
    /// The user pressed "Calculate".
    Calculate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub form: FormState,
    pub error: Option<String>,
    pub loading: bool,
    pub tables: Rc<ReferenceTables>,
}

impl AppState {
    pub fn reduce(&self, action: AppAction) -> AppState {
        match action {
            AppAction::LoadStarted => AppState {
                loading: true,
                error: None,
                ..self.clone()
            },
            AppAction::LoadFinished(Ok(tables)) => AppState {
                loading: false,
                tables: Rc::new(tables),
                ..self.clone()
            },
            AppAction::LoadFinished(Err(err)) => {
                error!("Failed to load reference tables: {}", err);
                AppState {
                    loading: false,
                    error: Some(LOAD_ERROR_MESSAGE.to_string()),
                    ..self.clone()
                }
            }
            AppAction::Edit(slot, value) => {
                let (form, err) = self.form.edit(slot, &value, &self.tables);
                AppState {
                    form,
                    error: err.map(|e| e.to_string()),
                    ..self.clone()
                }
            }
            AppAction::Calculate => AppState {
                form: calculate(&self.form, &self.tables),
                error: None,
                ..self.clone()
            },
        }
    }

    /// Tables are missing, so the form cannot do anything useful until a
    /// reload succeeds.
    pub fn needs_reload(&self) -> bool {
        !self.loading && self.tables.is_empty()
    }
}
