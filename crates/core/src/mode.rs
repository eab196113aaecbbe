//! Project mode: the category a project is planned for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The category of a planning project, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectMode {
    Contest,
    Education,
    Startup,
}

/// All valid mode strings, in declaration order.
pub const VALID_MODES: &[&str] = &["contest", "education", "startup"];

impl ProjectMode {
    /// Convert to the string stored in the `mode` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contest => "contest",
            Self::Education => "education",
            Self::Startup => "startup",
        }
    }
}

impl FromStr for ProjectMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contest" => Ok(Self::Contest),
            "education" => Ok(Self::Education),
            "startup" => Ok(Self::Startup),
            _ => Err(CoreError::Validation(format!(
                "Invalid mode '{s}'. Must be one of: {}",
                VALID_MODES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for ProjectMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ProjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
