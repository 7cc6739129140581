//! Identity-keyed set of payment accounts.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map::Values;
use tpost_domain::PaymentAccount;

/// Payment accounts keyed by [`PaymentAccount::id`].
///
/// At most one account per id. Iteration is in ascending id order, which keeps the
/// encoded form deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentAccounts {
    inner: BTreeMap<String, PaymentAccount>,
}

impl PaymentAccounts {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: BTreeMap::new() }
    }

    /// Inserts an account, returning the one it replaced.
    pub fn insert(&mut self, account: PaymentAccount) -> Option<PaymentAccount> {
        self.inner.insert(account.identity().to_owned(), account)
    }

    pub fn remove(&mut self, id: &str) -> Option<PaymentAccount> {
        self.inner.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PaymentAccount> {
        self.inner.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Values<'_, String, PaymentAccount> {
        self.inner.values()
    }
}

impl<'a> IntoIterator for &'a PaymentAccounts {
    type Item = &'a PaymentAccount;
    type IntoIter = Values<'a, String, PaymentAccount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Later accounts replace earlier ones with the same id.
impl FromIterator<PaymentAccount> for PaymentAccounts {
    fn from_iter<I: IntoIterator<Item = PaymentAccount>>(iter: I) -> Self {
        let mut accounts = Self::new();
        accounts.extend(iter);
        accounts
    }
}

impl Extend<PaymentAccount> for PaymentAccounts {
    fn extend<I: IntoIterator<Item = PaymentAccount>>(&mut self, iter: I) {
        for account in iter {
            self.insert(account);
        }
    }
}

impl Serialize for PaymentAccounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
