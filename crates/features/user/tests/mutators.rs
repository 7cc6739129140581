mod fixtures;

use fixtures::*;
use tpost_domain::constants::ARBITRATOR;
use tpost_domain::{
    Alert, Arbitrator, Filter, Mediator, NodeAddress, PaymentAccount, PaymentAccountFilter,
};
use tpost_user::{UserError, UserProfile};
use tpost_wire::{EnvelopeError, PayloadCodec};

#[test]
fn removing_current_account_clears_selection() {
    let mut profile = UserProfile::new(account_id("acc"));
    profile.add_payment_account(payment_account("a")).unwrap();
    profile.add_payment_account(payment_account("b")).unwrap();
    profile.select_current_payment_account("a").unwrap();

    assert!(profile.remove_payment_account("b").is_some());
    assert_eq!(profile.current_payment_account().map(|p| p.id.as_str()), Some("a"));

    assert!(profile.remove_payment_account("a").is_some());
    assert!(profile.current_payment_account().is_none());
    assert!(profile.remove_payment_account("a").is_none());
}

#[test]
fn selecting_unknown_account_fails() {
    let mut profile = UserProfile::new(account_id("acc"));
    let result = profile.select_current_payment_account("missing");

    assert!(matches!(result, Err(UserError::UnknownPaymentAccount { .. })));
    assert!(profile.current_payment_account().is_none());
}

#[test]
fn clear_current_account_returns_previous() {
    let mut profile = UserProfile::new(account_id("acc"));
    profile.add_payment_account(payment_account("a")).unwrap();
    profile.select_current_payment_account("a").unwrap();

    assert_eq!(profile.clear_current_payment_account().map(|p| p.id), Some("a".to_owned()));
    assert!(profile.clear_current_payment_account().is_none());
}

#[test]
fn add_payment_account_replaces_same_id() {
    let mut profile = UserProfile::new(account_id("acc"));
    assert!(profile.add_payment_account(payment_account("a")).unwrap().is_none());

    let mut renamed = payment_account("a");
    renamed.account_name = "renamed".to_owned();
    let previous = profile.add_payment_account(renamed).unwrap().unwrap();

    assert_eq!(previous.account_name, "Account a");
    assert_eq!(profile.payment_accounts().len(), 1);
    assert_eq!(profile.payment_account("a").unwrap().account_name, "renamed");
}

#[test]
fn languages_are_deduplicated() {
    let mut profile = UserProfile::new(account_id("acc"));
    assert!(profile.add_accepted_language("en"));
    assert!(profile.add_accepted_language("de"));
    assert!(!profile.add_accepted_language("en"));
    assert_eq!(profile.accepted_language_locale_codes(), ["en", "de"]);

    assert!(profile.remove_accepted_language("en"));
    assert!(!profile.remove_accepted_language("en"));
    assert_eq!(profile.accepted_language_locale_codes(), ["de"]);
}

#[test]
fn dispute_agents_are_deduplicated_by_node_address() {
    let mut profile = UserProfile::new(account_id("acc"));
    assert!(profile.accept_arbitrator(arbitrator(1)).unwrap());

    let mut same_node = arbitrator(1);
    same_node.btc_address = "other".to_owned();
    assert!(!profile.accept_arbitrator(same_node).unwrap());
    assert_eq!(profile.accepted_arbitrators().len(), 1);

    assert!(profile.accept_mediator(mediator(1)).unwrap());
    assert!(!profile.accept_mediator(mediator(1)).unwrap());

    let removed = profile.remove_accepted_mediator(&NodeAddress::new("mediator1.onion", 8001));
    assert_eq!(removed, Some(mediator(1)));
    assert!(profile.accepted_mediators().is_empty());

    assert!(profile.remove_accepted_arbitrator(&NodeAddress::new("nowhere.onion", 1)).is_none());
}

#[test]
fn setters_return_previous_value() {
    let mut profile = UserProfile::new(account_id("acc"));
    assert!(profile.set_developers_alert(Some(alert("first"))).unwrap().is_none());
    assert_eq!(
        profile.set_developers_alert(None).unwrap().map(|a| a.message),
        Some("first".to_owned())
    );

    assert!(profile.set_registered_mediator(Some(mediator(2))).unwrap().is_none());
    assert_eq!(profile.set_registered_mediator(Some(mediator(3))).unwrap(), Some(mediator(2)));
    assert!(profile.developers_alert().is_none());
}

#[test]
fn accept_payloads_narrow_to_expected_kind() {
    let mut profile = UserProfile::new(account_id("acc"));

    assert!(profile.accept_arbitrator_payload(arbitrator(4).to_payload()).unwrap());
    assert!(!profile.accept_arbitrator_payload(arbitrator(4).to_payload()).unwrap());
    assert!(profile.accept_mediator_payload(mediator(4).to_payload()).unwrap());

    let err = profile.accept_arbitrator_payload(mediator(5).to_payload()).unwrap_err();
    assert!(matches!(
        err,
        UserError::InvalidEntity { source: EnvelopeError::MalformedEnvelope { .. }, .. }
    ));
    assert!(err.to_string().contains(ARBITRATOR));

    let err = profile.accept_mediator_payload(alert("not an agent").to_payload()).unwrap_err();
    assert!(matches!(
        err,
        UserError::InvalidEntity { source: EnvelopeError::MalformedEnvelope { .. }, .. }
    ));

    assert_eq!(profile.accepted_arbitrators().len(), 1);
    assert_eq!(profile.accepted_mediators().len(), 1);
}

#[test]
fn undecodable_sub_entities_are_rejected_on_entry() {
    let mut profile = UserProfile::new(account_id("acc"));
    let before = profile.clone();

    let err = profile.add_payment_account(PaymentAccount::new("", "SEPA")).unwrap_err();
    assert!(matches!(err, UserError::InvalidEntity { .. }));
    assert!(err.to_string().contains("payment account"));
    assert!(profile.add_payment_account(PaymentAccount::new("pa", " ")).is_err());

    assert!(profile.set_displayed_alert(Some(Alert::new("", "1.0"))).is_err());
    assert!(profile.set_developers_alert(Some(Alert::new("  ", "1.0"))).is_err());

    let filter = Filter {
        banned_payment_accounts: vec![PaymentAccountFilter {
            payment_method_id: String::new(),
            field: "iban".to_owned(),
            value: "DE00".to_owned(),
        }],
        ..Filter::default()
    };
    assert!(profile.set_developers_filter(Some(filter)).is_err());

    let unsigned = Mediator { registration_signature: String::new(), ..mediator(1) };
    assert!(profile.set_registered_mediator(Some(unsigned.clone())).is_err());
    assert!(profile.accept_mediator(unsigned).is_err());

    let portless = Arbitrator { node_address: NodeAddress::new("x.onion", 0), ..arbitrator(1) };
    assert!(profile.set_registered_arbitrator(Some(portless.clone())).is_err());
    assert!(profile.accept_arbitrator(portless).is_err());

    let hostless = Arbitrator { node_address: NodeAddress::new(" ", 9999), ..arbitrator(2) };
    assert!(profile.accept_arbitrator(hostless).is_err());

    assert_eq!(profile, before);
    assert_eq!(UserProfile::decode(profile.encode()).unwrap(), profile);
}

#[test]
fn rejected_setter_keeps_previous_value() {
    let mut profile = UserProfile::new(account_id("acc"));
    profile.set_displayed_alert(Some(alert("kept"))).unwrap();

    assert!(profile.set_displayed_alert(Some(Alert::new("", "2.0"))).is_err());
    assert_eq!(profile.displayed_alert(), Some(&alert("kept")));
}
