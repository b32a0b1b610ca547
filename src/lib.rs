// Business Directory - Core Library
// Accounts, their contacts, and the in-memory directory that links them

pub mod entities;
pub mod directory;

// Re-export commonly used types
pub use entities::{
    Account, AccountId,
    Contact, ContactId,
    Rank, RankParseError,
};
pub use directory::DirectoryService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
