// 📇 Directory Service - In-memory registry of accounts and contacts
//
// Owns both registries and both id counters. Ids start at 1, grow by one per
// successful creation and are never reused. Expected failures (unknown
// account, unparseable rank) surface as None and leave every registry and
// counter untouched.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::entities::{Account, AccountId, Contact, ContactId, Rank};

// ============================================================================
// DIRECTORY SERVICE
// ============================================================================

#[derive(Debug)]
pub struct DirectoryService {
    accounts: HashMap<AccountId, Account>,
    contacts: HashMap<ContactId, Contact>,
    next_account_id: AccountId,
    next_contact_id: ContactId,
}

impl DirectoryService {
    /// Create an empty directory
    pub fn new() -> Self {
        DirectoryService {
            accounts: HashMap::new(),
            contacts: HashMap::new(),
            next_account_id: 1,
            next_contact_id: 1,
        }
    }

    /// Register a new, empty account. Always succeeds.
    pub fn create_account(&mut self, name: &str, account_number: u64) -> Account {
        let id = self.next_account_id;
        self.next_account_id += 1;

        let account = Account::new(id, name.to_string(), account_number);
        self.accounts.insert(id, account.clone());

        debug!(account_id = id, name, account_number, "account created");
        account
    }

    pub fn get_account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    pub fn get_contact(&self, contact_id: ContactId) -> Option<&Contact> {
        self.contacts.get(&contact_id)
    }

    /// Create a contact under an existing account.
    ///
    /// Returns None when the account is unknown or `rank_text` is not a valid
    /// rank. Nothing is allocated or mutated in either case.
    pub fn create_contact(
        &mut self,
        account_id: AccountId,
        first_name: &str,
        last_name: &str,
        salutation: &str,
        rank_text: &str,
        years_of_service: u32,
    ) -> Option<Contact> {
        let Some(account) = self.accounts.get_mut(&account_id) else {
            warn!(account_id, "contact not created: account not found");
            return None;
        };

        let rank = match Rank::parse(rank_text) {
            Ok(rank) => rank,
            Err(e) => {
                warn!(account_id, error = %e, "contact not created: invalid rank");
                return None;
            }
        };

        let id = self.next_contact_id;
        self.next_contact_id += 1;

        let contact = Contact::new(
            id,
            first_name.to_string(),
            last_name.to_string(),
            salutation.to_string(),
            rank,
            years_of_service,
            account.id,
        );

        self.contacts.insert(id, contact.clone());
        account.add_contact(contact.clone());

        debug!(
            contact_id = id,
            account_id,
            rank = %rank,
            total = account.total_number_of_contacts(),
            finance = account.number_of_finance_employees(),
            "contact created"
        );
        Some(contact)
    }

    /// Elect and store the main contact of an account.
    ///
    /// Highest rank wins, then most years of service, then earliest added.
    /// An account without contacts gets its main contact cleared and yields
    /// None; an unknown account yields None without any mutation.
    pub fn set_main_contact_on_account(&mut self, account_id: AccountId) -> Option<Contact> {
        let account = self.accounts.get_mut(&account_id)?;

        let main = account.most_senior_contact().cloned();
        account.set_main_contact_id(main.as_ref().map(|c| c.id));

        match &main {
            Some(contact) => debug!(account_id, contact_id = contact.id, "main contact set"),
            None => debug!(account_id, "main contact cleared: account has no contacts"),
        }
        main
    }

    /// Resolve the stored main contact id of an account
    pub fn main_contact(&self, account_id: AccountId) -> Option<&Contact> {
        let contact_id = self.get_account(account_id)?.main_contact_id()?;
        self.get_contact(contact_id)
    }

    /// All accounts, ordered by id
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|a| a.id);
        accounts
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

impl Default for DirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
