// 👤 Contact Entity - A person belonging to exactly one account
//
// Identity: integer id assigned by the directory (never changes)
// Relationship: account_id → owning Account (set once, never reassigned)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::AccountId;
use super::rank::Rank;

pub type ContactId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    pub id: ContactId,

    // ========================================================================
    // VALUES
    // ========================================================================
    pub first_name: String,
    pub last_name: String,

    /// Free text ("Mr.", "Dr.", "Mx.")
    pub salutation: String,

    pub rank: Rank,
    pub years_of_service: u32,

    /// Owning account (foreign key, non-owning back-reference)
    pub account_id: AccountId,

    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(
        id: ContactId,
        first_name: String,
        last_name: String,
        salutation: String,
        rank: Rank,
        years_of_service: u32,
        account_id: AccountId,
    ) -> Self {
        Contact {
            id,
            first_name,
            last_name,
            salutation,
            rank,
            years_of_service,
            account_id,
            created_at: Utc::now(),
        }
    }

    /// "Mr. John Doe"
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.salutation, self.first_name, self.last_name)
    }

    /// Key used to rank contacts when picking a main contact.
    /// Compared lexicographically: rank weight first, then tenure.
    pub fn seniority(&self) -> (u8, u32) {
        (self.rank.weight(), self.years_of_service)
    }

    pub fn is_finance(&self) -> bool {
        self.rank == Rank::Finance
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact(id={}, name='{}', position={}, years={}, account_id={})",
            self.id,
            self.full_name(),
            self.rank,
            self.years_of_service,
            self.account_id
        )
    }
}
