// Entity Models
//
// Each entity has:
// - Stable integer identity assigned by the directory
// - Plain values set at creation
// - Rank is the ordered classification shared by contacts

pub mod rank;
pub mod contact;
pub mod account;

pub use rank::{Rank, RankParseError};
pub use contact::{Contact, ContactId};
pub use account::{Account, AccountId};
