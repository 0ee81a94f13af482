use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Category of distributed work whose placement can be restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskRole {
    /// Map tasks.
    Map,
    /// Reduce tasks.
    Reduce,
}

impl TaskRole {
    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskRole::Map => "map",
            TaskRole::Reduce => "reduce",
        }
    }
}

impl FromStr for TaskRole {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "map" => Ok(Self::Map),
            "reduce" => Ok(Self::Reduce),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for TaskRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("map".parse::<TaskRole>().unwrap(), TaskRole::Map);
        assert_eq!(" REDUCE ".parse::<TaskRole>().unwrap(), TaskRole::Reduce);
    }

    #[test]
    fn rejects_unknown_role() {
        for input in ["", "mapper", "combine"] {
            let err = input.parse::<TaskRole>().unwrap_err();
            assert!(matches!(err, ModelError::UnknownRole(_)), "input {input:?}");
        }
    }

    #[test]
    fn display_matches_serde() {
        for role in [TaskRole::Map, TaskRole::Reduce] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
