//! Gender selector options.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The options offered by the gender selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All selectable options, in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The value submitted by the selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// The option label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    /// Parse a selector value. Matching is exact: `"Male"` is not an option.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ValidationError::InvalidGender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
