use serde::{Deserialize, Serialize};

use super::catalog::BikeCatalog;
use super::entities::{BrokerContact, FinancingParams};

/// Session-wide state shared through a Dioxus context signal.
///
/// The catalog is filled once at startup and treated as immutable after
/// that. Quotes are recomputed from scratch on every Predict press and
/// never stored here.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: BikeCatalog,
    pub financing: FinancingParams,
    pub broker: BrokerContact,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.financing = persisted.financing;
        self.broker = persisted.broker;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            financing: self.financing,
            broker: self.broker.clone(),
        }
    }
}

/// The slice of state worth keeping between sessions: user preferences
/// only, never quote results.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub financing: FinancingParams,
    #[serde(default)]
    pub broker: BrokerContact,
}
