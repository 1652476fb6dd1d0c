use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common::PaginationParams;
use crate::models::{LeaderboardSummary, PointsDistribution};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Rank,
    Name,
    Year,
    Physical,
    Mental,
    Extra,
    Total,
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "rank" => Ok(Self::Rank),
            "name" => Ok(Self::Name),
            "year" => Ok(Self::Year),
            "physical" => Ok(Self::Physical),
            "mental" => Ok(Self::Mental),
            "extra" => Ok(Self::Extra),
            "total" => Ok(Self::Total),
            other => Err(format!("unknown sort column '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Query string of `GET /api/leaderboard`
#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub sort: SortColumn,
    #[serde(default)]
    pub direction: SortDirection,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl LeaderboardQuery {
    pub fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    #[serde(default = "default_category_limit")]
    pub limit: usize,
}

pub const DEFAULT_CATEGORY_LIMIT: usize = 8;

fn default_category_limit() -> usize {
    DEFAULT_CATEGORY_LIMIT
}

impl CategoryQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardSummaryResponse {
    pub summary: LeaderboardSummary,
    pub distribution: PointsDistribution,
}
