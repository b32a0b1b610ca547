// 🎖️ Rank - Ordered seniority of a contact
//
// Four closed labels, each with a numeric weight. Higher weight = more senior.
// Text input is normalized (uppercase, spaces → '_') and matched exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// PARSE ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid Rank. Valid options are: {}", .valid.join(", "))]
pub struct RankParseError {
    /// The text the caller supplied, before normalization
    pub value: String,

    /// Every label the parser accepts
    pub valid: Vec<String>,
}

// ============================================================================
// RANK
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Ceo,
    OperationalManager,
    Finance,
    Administrative,
}

impl Rank {
    /// All ranks, most senior first
    pub const ALL: [Rank; 4] = [
        Rank::Ceo,
        Rank::OperationalManager,
        Rank::Finance,
        Rank::Administrative,
    ];

    pub fn weight(&self) -> u8 {
        match self {
            Rank::Ceo => 4,
            Rank::OperationalManager => 3,
            Rank::Finance => 2,
            Rank::Administrative => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ceo => "CEO",
            Rank::OperationalManager => "OPERATIONAL_MANAGER",
            Rank::Finance => "FINANCE",
            Rank::Administrative => "ADMINISTRATIVE",
        }
    }

    /// Parse free-form text into a rank
    ///
    /// "Operational Manager", "operational_manager" and "OPERATIONAL MANAGER"
    /// all resolve to `Rank::OperationalManager`. Each space becomes one '_',
    /// so runs of spaces do not collapse.
    pub fn parse(text: &str) -> Result<Rank, RankParseError> {
        let normalized = text.to_uppercase().replace(' ', "_");

        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.as_str() == normalized)
            .ok_or_else(|| RankParseError {
                value: text.to_string(),
                valid: Rank::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::parse(s)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
