use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::decode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ChallengeCategory {
    #[serde(alias = "physical", alias = "PHYSICAL")]
    Physical,
    #[serde(alias = "mental", alias = "MENTAL")]
    Mental,
    #[serde(alias = "extra", alias = "EXTRA")]
    Extra,
}

impl ChallengeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Extra => "extra",
        }
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "physical" | "fisico" => Ok(Self::Physical),
            "mental" => Ok(Self::Mental),
            "extra" | "extras" => Ok(Self::Extra),
            other => Err(format!(
                "unknown category '{other}', expected physical, mental or extra"
            )),
        }
    }
}

/// Selects the point table applied to an extra challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExtraKind {
    #[serde(rename = "opcional", alias = "optional")]
    Optional,
    #[serde(rename = "obligatoria", alias = "mandatory")]
    Mandatory,
}

/// A challenge ("game") participants compete in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ChallengeCategory,

    /// Only meaningful for extra challenges. Unknown stored values decode to `None`.
    #[serde(
        default,
        rename = "extraType",
        alias = "extraKind",
        deserialize_with = "decode::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra_kind: Option<ExtraKind>,
}

impl Challenge {
    pub fn is_extra(&self) -> bool {
        self.category == ChallengeCategory::Extra
    }
}
