//! Visibility enum for project access levels.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GitLab project visibility levels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[sea_orm(string_value = "public")]
    #[default]
    Public,
    /// Visible to logged-in users within the instance.
    #[sea_orm(string_value = "internal")]
    Internal,
    #[sea_orm(string_value = "private")]
    Private,
}

/// Error for visibility strings the API should never produce.
#[derive(Debug, Error)]
#[error("unknown visibility level: {0}")]
pub struct UnknownVisibility(pub String);

impl std::str::FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "internal" => Ok(Visibility::Internal),
            "private" => Ok(Visibility::Private),
            other => Err(UnknownVisibility(other.to_string())),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Internal => write!(f, "internal"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
        assert_eq!(
            "internal".parse::<Visibility>().unwrap(),
            Visibility::Internal
        );
        assert_eq!(
            "private".parse::<Visibility>().unwrap(),
            Visibility::Private
        );
    }

    #[test]
    fn rejects_unknown_levels() {
        let err = "secret".parse::<Visibility>().unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn display_outputs_expected_strings() {
        assert_eq!(Visibility::Public.to_string(), "public");
        assert_eq!(Visibility::Internal.to_string(), "internal");
        assert_eq!(Visibility::Private.to_string(), "private");
    }
}
