// src/config/state.rs
use super::options::LookupOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the Riot ID field, "Name#TAG"
    pub riot_id_text: String,

    /// Unmask the API key field
    pub show_api_key: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            riot_id_text: s!(),
            show_api_key: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: LookupOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Startup state: options pre-filled from the environment.
    pub fn from_env() -> Self {
        Self {
            options: LookupOptions::from_env(),
            gui: GuiState::default(),
        }
    }
}
