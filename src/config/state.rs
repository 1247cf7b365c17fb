// Application state module
// Everything a request needs, built once before the listener starts

use super::types::Config;
use crate::motivation::MessagePicker;

/// Application state shared read-only across connection tasks
pub struct AppState {
    pub config: Config,
    pub picker: MessagePicker,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_picker(config, MessagePicker::new())
    }

    pub fn with_picker(config: &Config, picker: MessagePicker) -> Self {
        Self {
            config: config.clone(),
            picker,
        }
    }
}
