use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

use super::{account::Account, category::Category, money};

/// In-memory set of registered users, keyed by login.
#[derive(Debug, Default, Clone)]
pub struct LedgerStore {
    accounts: BTreeMap<String, Account>,
}

/// At-rest shape of one account inside the snapshot document.
#[derive(Debug, Serialize, Deserialize)]
struct AccountRecord {
    password: String,
    revenue: BTreeMap<String, String>,
    spending: BTreeMap<String, String>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account; false (and no overwrite) when the login is taken.
    pub fn add(&mut self, account: Account) -> bool {
        if self.accounts.contains_key(account.login()) {
            return false;
        }
        self.accounts.insert(account.login().to_string(), account);
        true
    }

    pub fn is_present(&self, login: &str) -> bool {
        self.accounts.contains_key(login)
    }

    pub fn get(&self, login: &str) -> Option<&Account> {
        self.accounts.get(login)
    }

    pub fn get_mut(&mut self, login: &str) -> Option<&mut Account> {
        self.accounts.get_mut(login)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rebuilds the store from a snapshot document. Any malformed entry fails
    /// the whole load; a partially usable store is never returned.
    pub fn from_json_str(data: &str) -> Result<Self, StoreError> {
        let records: BTreeMap<String, AccountRecord> = serde_json::from_str(data)?;
        let mut store = Self::new();
        for (login, record) in records {
            let mut account = Account::new(&login, &record.password);
            for (name, text) in &record.revenue {
                account.credit(name, parse_stored_amount(&login, name, text)?);
            }
            for (name, text) in &record.spending {
                account.debit(name, parse_stored_amount(&login, name, text)?);
            }
            store.accounts.insert(login, account);
        }
        Ok(store)
    }

    /// Renders the snapshot document with two-digit decimal strings.
    pub fn to_json_string(&self) -> String {
        let mut records = BTreeMap::new();
        for (login, account) in &self.accounts {
            records.insert(login, AccountRecord::from(account));
        }
        serde_json::to_string_pretty(&records).expect("serialize user snapshot")
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            password: account.password().to_string(),
            revenue: side_to_map(account.income()),
            spending: side_to_map(account.expense()),
        }
    }
}

fn side_to_map(categories: &[Category]) -> BTreeMap<String, String> {
    categories
        .iter()
        .map(|category| (category.name.clone(), money::format_amount(category.value)))
        .collect()
}

fn parse_stored_amount(login: &str, category: &str, text: &str) -> Result<f64, StoreError> {
    money::parse_amount(text).map_err(|_| StoreError::InvalidAmount {
        login: login.to_string(),
        category: category.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{DEPOSIT, WITHDRAWAL};

    #[test]
    fn add_rejects_duplicate_logins() {
        let mut store = LedgerStore::new();
        assert!(store.add(Account::new("alice", "pw1")));
        assert!(!store.add(Account::new("alice", "pw2")));
        assert_eq!(store.len(), 1);
        assert!(store.get("alice").unwrap().check_password("pw1"));
    }

    #[test]
    fn snapshot_round_trip_preserves_balances() {
        let mut store = LedgerStore::new();
        let mut account = Account::new("alice", "pw");
        account.credit(DEPOSIT, 100.0);
        account.credit("Bonus", 12.34);
        account.debit(WITHDRAWAL, 40.0);
        let expected = account.balance();
        store.add(account);
        store.add(Account::new("bob", "secret"));

        let restored = LedgerStore::from_json_str(&store.to_json_string()).unwrap();
        assert_eq!(restored.len(), 2);
        let alice = restored.get("alice").unwrap();
        assert!((alice.balance() - expected).abs() < 0.01);
        assert!(alice.check_password("pw"));
    }

    #[test]
    fn loads_decimal_strings_with_either_separator() {
        let data = r#"{
            "alice": {
                "password": "pw",
                "revenue": { "Deposit": "10,50", "Bonus": "1.25" },
                "spending": { "Withdrawal": "0.75" }
            }
        }"#;
        let store = LedgerStore::from_json_str(data).unwrap();
        let alice = store.get("alice").unwrap();
        assert_eq!(alice.balance(), 11.0);
        assert!(!alice.income_category(DEPOSIT).unwrap().erasable);
        assert!(alice.income_category("Bonus").unwrap().erasable);
    }

    #[test]
    fn malformed_documents_fail_the_whole_load() {
        assert!(LedgerStore::from_json_str("not json").is_err());

        let bad_amount = r#"{
            "alice": {
                "password": "pw",
                "revenue": { "Deposit": "lots" },
                "spending": {}
            }
        }"#;
        let err = LedgerStore::from_json_str(bad_amount).unwrap_err();
        assert!(matches!(err, StoreError::InvalidAmount { .. }));
    }

    #[test]
    fn written_amounts_always_carry_two_fraction_digits() {
        let mut store = LedgerStore::new();
        let mut account = Account::new("alice", "pw");
        account.credit(DEPOSIT, 5.0);
        store.add(account);

        let json = store.to_json_string();
        assert!(json.contains("\"5.00\""));
        assert!(json.contains("\"0.00\""));
    }
}
