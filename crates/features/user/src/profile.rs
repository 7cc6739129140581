use crate::account::AccountId;
use crate::accounts::PaymentAccounts;
use crate::error::{UserError, UserErrorExt};
use serde::Serialize;
use std::mem;
use tpost_domain::{Alert, Arbitrator, Filter, Mediator, NodeAddress, PaymentAccount};
use tpost_wire::WireCodec;
use tracing::debug;

/// The user profile aggregate.
///
/// Owns every collection and optional sub-entity by value. The profile never persists
/// itself; see [`UserProfile::encode`] and [`UserProfile::to_bytes`].
///
/// Mutators that take a sub-entity check it with [`WireCodec::validate`], so every
/// profile built through this API decodes back from its own envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub(crate) account_id: AccountId,
    pub(crate) payment_accounts: PaymentAccounts,
    pub(crate) current_payment_account: Option<PaymentAccount>,
    pub(crate) accepted_language_locale_codes: Vec<String>,
    pub(crate) developers_alert: Option<Alert>,
    pub(crate) displayed_alert: Option<Alert>,
    pub(crate) developers_filter: Option<Filter>,
    pub(crate) registered_arbitrator: Option<Arbitrator>,
    pub(crate) registered_mediator: Option<Mediator>,
    pub(crate) accepted_arbitrators: Vec<Arbitrator>,
    pub(crate) accepted_mediators: Vec<Mediator>,
}

impl UserProfile {
    /// Creates an empty profile for the given account.
    #[must_use]
    pub const fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            payment_accounts: PaymentAccounts::new(),
            current_payment_account: None,
            accepted_language_locale_codes: Vec::new(),
            developers_alert: None,
            displayed_alert: None,
            developers_filter: None,
            registered_arbitrator: None,
            registered_mediator: None,
            accepted_arbitrators: Vec::new(),
            accepted_mediators: Vec::new(),
        }
    }

    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    // --- Payment accounts ---

    #[must_use]
    pub const fn payment_accounts(&self) -> &PaymentAccounts {
        &self.payment_accounts
    }

    #[must_use]
    pub fn payment_account(&self, id: &str) -> Option<&PaymentAccount> {
        self.payment_accounts.get(id)
    }

    /// Adds an account, replacing and returning any account with the same id.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an empty id or payment method id.
    pub fn add_payment_account(
        &mut self,
        account: PaymentAccount,
    ) -> Result<Option<PaymentAccount>, UserError> {
        account.validate().context("payment account")?;
        Ok(self.payment_accounts.insert(account))
    }

    /// Removes an account. The current selection is cleared when it refers to the same id.
    pub fn remove_payment_account(&mut self, id: &str) -> Option<PaymentAccount> {
        let removed = self.payment_accounts.remove(id)?;
        if self.current_payment_account.as_ref().is_some_and(|current| current.id == id) {
            debug!(id, "Current payment account cleared on removal");
            self.current_payment_account = None;
        }
        Some(removed)
    }

    #[must_use]
    pub const fn current_payment_account(&self) -> Option<&PaymentAccount> {
        self.current_payment_account.as_ref()
    }

    /// Selects one of the profile's payment accounts as current.
    ///
    /// # Errors
    /// Returns [`UserError::UnknownPaymentAccount`] if no account has this id.
    pub fn select_current_payment_account(
        &mut self,
        id: &str,
    ) -> Result<&PaymentAccount, UserError> {
        let account = self.payment_accounts.get(id).cloned().ok_or_else(|| {
            UserError::UnknownPaymentAccount {
                message: format!("no payment account with id `{id}`").into(),
                context: Some(self.account_id.to_string().into()),
            }
        })?;
        Ok(self.current_payment_account.insert(account))
    }

    pub fn clear_current_payment_account(&mut self) -> Option<PaymentAccount> {
        self.current_payment_account.take()
    }

    // --- Languages ---

    #[must_use]
    pub fn accepted_language_locale_codes(&self) -> &[String] {
        &self.accepted_language_locale_codes
    }

    /// Appends a locale code. Returns `false` if it was already accepted.
    pub fn add_accepted_language(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.accepted_language_locale_codes.contains(&code) {
            return false;
        }
        self.accepted_language_locale_codes.push(code);
        true
    }

    pub fn remove_accepted_language(&mut self, code: &str) -> bool {
        let before = self.accepted_language_locale_codes.len();
        self.accepted_language_locale_codes.retain(|c| c != code);
        before != self.accepted_language_locale_codes.len()
    }

    // --- Alerts and filter ---

    #[must_use]
    pub const fn developers_alert(&self) -> Option<&Alert> {
        self.developers_alert.as_ref()
    }

    /// Replaces the developers alert and returns the previous one.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an alert with an empty message.
    pub fn set_developers_alert(&mut self, alert: Option<Alert>) -> Result<Option<Alert>, UserError> {
        let alert = validated(alert, "developers alert")?;
        Ok(mem::replace(&mut self.developers_alert, alert))
    }

    #[must_use]
    pub const fn displayed_alert(&self) -> Option<&Alert> {
        self.displayed_alert.as_ref()
    }

    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an alert with an empty message.
    pub fn set_displayed_alert(&mut self, alert: Option<Alert>) -> Result<Option<Alert>, UserError> {
        let alert = validated(alert, "displayed alert")?;
        Ok(mem::replace(&mut self.displayed_alert, alert))
    }

    #[must_use]
    pub const fn developers_filter(&self) -> Option<&Filter> {
        self.developers_filter.as_ref()
    }

    /// # Errors
    /// Returns [`UserError::InvalidEntity`] if a banned payment account lacks its method id.
    pub fn set_developers_filter(
        &mut self,
        filter: Option<Filter>,
    ) -> Result<Option<Filter>, UserError> {
        let filter = validated(filter, "developers filter")?;
        Ok(mem::replace(&mut self.developers_filter, filter))
    }

    // --- Dispute agents ---

    #[must_use]
    pub const fn registered_arbitrator(&self) -> Option<&Arbitrator> {
        self.registered_arbitrator.as_ref()
    }

    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an unusable node address or a missing signature.
    pub fn set_registered_arbitrator(
        &mut self,
        arbitrator: Option<Arbitrator>,
    ) -> Result<Option<Arbitrator>, UserError> {
        let arbitrator = validated(arbitrator, "registered arbitrator")?;
        Ok(mem::replace(&mut self.registered_arbitrator, arbitrator))
    }

    #[must_use]
    pub const fn registered_mediator(&self) -> Option<&Mediator> {
        self.registered_mediator.as_ref()
    }

    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an unusable node address or a missing signature.
    pub fn set_registered_mediator(
        &mut self,
        mediator: Option<Mediator>,
    ) -> Result<Option<Mediator>, UserError> {
        let mediator = validated(mediator, "registered mediator")?;
        Ok(mem::replace(&mut self.registered_mediator, mediator))
    }

    /// Arbitrators in acceptance order.
    #[must_use]
    pub fn accepted_arbitrators(&self) -> &[Arbitrator] {
        &self.accepted_arbitrators
    }

    /// Appends an arbitrator unless one with the same node address is already accepted.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an unusable node address or a missing signature.
    pub fn accept_arbitrator(&mut self, arbitrator: Arbitrator) -> Result<bool, UserError> {
        arbitrator.validate().context("accepted arbitrator")?;
        if self.accepted_arbitrators.iter().any(|a| a.node_address == arbitrator.node_address) {
            return Ok(false);
        }
        self.accepted_arbitrators.push(arbitrator);
        Ok(true)
    }

    pub fn remove_accepted_arbitrator(&mut self, address: &NodeAddress) -> Option<Arbitrator> {
        let index = self.accepted_arbitrators.iter().position(|a| &a.node_address == address)?;
        Some(self.accepted_arbitrators.remove(index))
    }

    /// Mediators in acceptance order.
    #[must_use]
    pub fn accepted_mediators(&self) -> &[Mediator] {
        &self.accepted_mediators
    }

    /// Appends a mediator unless one with the same node address is already accepted.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] for an unusable node address or a missing signature.
    pub fn accept_mediator(&mut self, mediator: Mediator) -> Result<bool, UserError> {
        mediator.validate().context("accepted mediator")?;
        if self.accepted_mediators.iter().any(|m| m.node_address == mediator.node_address) {
            return Ok(false);
        }
        self.accepted_mediators.push(mediator);
        Ok(true)
    }

    pub fn remove_accepted_mediator(&mut self, address: &NodeAddress) -> Option<Mediator> {
        let index = self.accepted_mediators.iter().position(|m| &m.node_address == address)?;
        Some(self.accepted_mediators.remove(index))
    }
}

fn validated<T: WireCodec>(value: Option<T>, field: &'static str) -> Result<Option<T>, UserError> {
    if let Some(inner) = &value {
        inner.validate().context(field)?;
    }
    Ok(value)
}
