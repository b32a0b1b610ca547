// 🏢 Account Entity - An organization and the contacts it owns
//
// Identity: integer id assigned by the directory (never changes)
// Values: name, account_number
// Aggregates: contact sequence (append-only) + counters derived from it
//
// Counters are private and only touched through add_contact(), so
// total_number_of_contacts == contacts.len() and
// number_of_finance_employees == #FINANCE contacts always hold.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::contact::{Contact, ContactId};

pub type AccountId = u64;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    pub id: AccountId,

    // ========================================================================
    // VALUES
    // ========================================================================
    pub name: String,

    /// Caller-supplied, not checked for uniqueness
    pub account_number: u64,

    pub created_at: DateTime<Utc>,

    // ========================================================================
    // AGGREGATES (maintained by the directory)
    // ========================================================================
    main_contact_id: Option<ContactId>,
    total_number_of_contacts: usize,
    number_of_finance_employees: usize,
    contacts: Vec<Contact>,
}

impl Account {
    /// Create an empty account
    pub fn new(id: AccountId, name: String, account_number: u64) -> Self {
        Account {
            id,
            name,
            account_number,
            created_at: Utc::now(),
            main_contact_id: None,
            total_number_of_contacts: 0,
            number_of_finance_employees: 0,
            contacts: Vec::new(),
        }
    }

    pub fn main_contact_id(&self) -> Option<ContactId> {
        self.main_contact_id
    }

    pub fn total_number_of_contacts(&self) -> usize {
        self.total_number_of_contacts
    }

    pub fn number_of_finance_employees(&self) -> usize {
        self.number_of_finance_employees
    }

    /// Owned contacts in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Share of FINANCE contacts, in percent (0.0 for an empty account)
    pub fn get_percentage_of_finance_employees(&self) -> f64 {
        if self.total_number_of_contacts == 0 {
            return 0.0;
        }
        100.0 * self.number_of_finance_employees as f64 / self.total_number_of_contacts as f64
    }

    /// Pick the most senior contact.
    ///
    /// Stable sort, descending on (rank weight, years of service), then take
    /// the head: contacts sharing the top key keep insertion order, so the
    /// earliest one wins.
    pub fn most_senior_contact(&self) -> Option<&Contact> {
        let mut ranked: Vec<&Contact> = self.contacts.iter().collect();
        ranked.sort_by(|a, b| b.seniority().cmp(&a.seniority()));
        ranked.first().copied()
    }

    pub(crate) fn add_contact(&mut self, contact: Contact) {
        if contact.is_finance() {
            self.number_of_finance_employees += 1;
        }
        self.total_number_of_contacts += 1;
        self.contacts.push(contact);
    }

    pub(crate) fn set_main_contact_id(&mut self, contact_id: Option<ContactId>) {
        self.main_contact_id = contact_id;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = match self.main_contact_id {
            Some(id) => id.to_string(),
            None => "None".to_string(),
        };
        write!(
            f,
            "Account(id={}, name='{}', number={}, main_contact_id={}, total_contacts={}, finance_employees={})",
            self.id,
            self.name,
            self.account_number,
            main,
            self.total_number_of_contacts,
            self.number_of_finance_employees
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
