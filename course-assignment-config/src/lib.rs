use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "course-assignment.toml";
pub const ENV_PREFIX: &str = "CA_";

/// Names and knobs shared between the page markup, the drag handlers and the
/// priority input. The defaults match the markup the server renders.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Key under which the dragged element id travels in the drag data.
    pub drag_data_key: String,
    /// Class put on a drop target while something hovers it.
    pub drop_ready_class: String,
    /// Drop target id meaning "remove the current assignment".
    pub unassigned_id: String,
    /// Name of the hidden fields the priority input owns inside its form.
    pub priority_field_name: String,
    pub placeholder: String,
    pub clear_input_on_add: bool,
    pub max_priorities: Option<usize>,
    pub confirm_unload: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            drag_data_key: "css-id".to_owned(),
            drop_ready_class: "drop-ready".to_owned(),
            unassigned_id: "not-assigned".to_owned(),
            priority_field_name: "prio[]".to_owned(),
            placeholder: "Namen der priorisierten Kurse eingeben...".to_owned(),
            clear_input_on_add: false,
            max_priorities: None,
            confirm_unload: true,
        }
    }
}

fn default_assignments_path() -> String {
    "/assignments".to_owned()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base url of the server, e.g. `http://localhost:8080`.
    pub url: String,
    #[serde(default = "default_assignments_path")]
    pub assignments_path: String,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            assignments_path: default_assignments_path(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[must_use]
pub fn config_sources() -> Figment {
    Figment::new()
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(config_sources().extract()?)
}
