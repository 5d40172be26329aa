use core::str::FromStr;
use std::convert::Infallible;

use course_assignment_config::UiConfig;

/// How the current document was reached, as reported by the navigation
/// timing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationType {
    Navigate,
    Reload,
    BackForward,
    Prerender,
    Other(String),
}

impl FromStr for NavigationType {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "navigate" => Self::Navigate,
            "reload" => Self::Reload,
            "back_forward" => Self::BackForward,
            "prerender" => Self::Prerender,
            other => Self::Other(other.to_owned()),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationGuard {
    enabled: bool,
}

impl NavigationGuard {
    #[must_use]
    pub const fn new(ui: &UiConfig) -> Self {
        Self {
            enabled: ui.confirm_unload,
        }
    }

    /// Whether unloading should ask for confirmation. `None` means the
    /// navigation type is unknown.
    #[must_use]
    pub const fn should_confirm(&self, navigation: Option<&NavigationType>) -> bool {
        self.enabled
            && matches!(
                navigation,
                Some(NavigationType::Navigate | NavigationType::BackForward)
            )
    }
}
