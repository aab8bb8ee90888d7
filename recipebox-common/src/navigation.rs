//! Tab navigation shell
//!
//! Three destinations. Activating a tab, including the one already shown,
//! produces a [`FocusEvent`] that the owning session dispatches to the
//! screen behind that tab.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const SEARCH_PLACEHOLDER: &str = "Search is not available yet.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Browse,
    Submit,
    Search,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Browse, Tab::Submit, Tab::Search];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Browse => "browse",
            Tab::Submit => "submit",
            Tab::Search => "search",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browse" => Ok(Tab::Browse),
            "submit" => Ok(Tab::Submit),
            "search" => Ok(Tab::Search),
            other => Err(Error::InvalidInput(format!("unknown tab '{}'", other))),
        }
    }
}

/// A screen became the active, visible destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent(pub Tab);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabShell {
    active: Tab,
}

impl TabShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) -> FocusEvent {
        self.active = tab;
        FocusEvent(tab)
    }
}
