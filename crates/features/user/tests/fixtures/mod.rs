#![allow(dead_code)]

use tpost_domain::{
    Alert, Arbitrator, Filter, Mediator, NodeAddress, PaymentAccount, PaymentAccountFilter,
};
use tpost_user::{AccountId, UserProfile};

pub fn account_id(id: &str) -> AccountId {
    AccountId::new(id).expect("valid account id")
}

pub fn payment_account(id: &str) -> PaymentAccount {
    PaymentAccount {
        id: id.to_owned(),
        creation_date: 1_690_000_000_000,
        payment_method_id: "SEPA".to_owned(),
        account_name: format!("Account {id}"),
        trade_currencies: vec!["EUR".to_owned()],
        selected_trade_currency: Some("EUR".to_owned()),
    }
}

pub fn alert(message: &str) -> Alert {
    Alert { update_info: true, signature: Some("alert-sig".to_owned()), ..Alert::new(message, "1.9.0") }
}

pub fn filter() -> Filter {
    Filter {
        banned_offer_ids: vec!["offer-13".to_owned()],
        banned_node_addresses: vec!["bad.onion:9999".to_owned()],
        banned_payment_accounts: vec![PaymentAccountFilter {
            payment_method_id: "SEPA".to_owned(),
            field: "iban".to_owned(),
            value: "DE89370400440532013000".to_owned(),
        }],
        signature: Some("filter-sig".to_owned()),
        owner_pub_key: vec![9, 9],
    }
}

pub fn arbitrator(n: u16) -> Arbitrator {
    Arbitrator {
        node_address: NodeAddress::new(format!("arbitrator{n}.onion"), 9000 + n),
        btc_pub_key: vec![1, 2, 3],
        btc_address: format!("bc1q-arbitrator-{n}"),
        language_codes: vec!["en".to_owned()],
        registration_date: 1_600_000_000_000,
        registration_pub_key: vec![4, 5],
        registration_signature: format!("arb-sig-{n}"),
        email_address: None,
    }
}

pub fn mediator(n: u16) -> Mediator {
    Mediator {
        node_address: NodeAddress::new(format!("mediator{n}.onion"), 8000 + n),
        pub_key: vec![6, 7],
        language_codes: vec!["en".to_owned(), "es".to_owned()],
        registration_date: 1_600_000_000_001,
        registration_pub_key: vec![8],
        registration_signature: format!("med-sig-{n}"),
        email_address: Some(format!("mediator{n}@example.org")),
    }
}

/// A profile with every field populated.
pub fn full_profile() -> UserProfile {
    let mut profile = UserProfile::new(account_id("acc-full"));
    for id in ["pa-2", "pa-1", "pa-3"] {
        profile.add_payment_account(payment_account(id)).expect("valid account");
    }
    profile.select_current_payment_account("pa-1").expect("account exists");
    for code in ["de", "en", "fr"] {
        profile.add_accepted_language(code);
    }
    profile.set_developers_alert(Some(alert("developers"))).expect("valid alert");
    profile.set_displayed_alert(Some(alert("displayed"))).expect("valid alert");
    profile.set_developers_filter(Some(filter())).expect("valid filter");
    profile.set_registered_arbitrator(Some(arbitrator(0))).expect("valid arbitrator");
    profile.set_registered_mediator(Some(mediator(0))).expect("valid mediator");
    for n in [3, 1, 2] {
        profile.accept_arbitrator(arbitrator(n)).expect("valid arbitrator");
        profile.accept_mediator(mediator(n)).expect("valid mediator");
    }
    profile
}
