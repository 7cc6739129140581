use anyhow::Context;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tpost_domain::config::CodecConfig;
use tpost_domain::{
    Alert, Arbitrator, Filter, Mediator, NodeAddress, PaymentAccount, PaymentAccountFilter,
};
use tpost_user::{AccountId, UserProfile};
use tpost_wire::frame::FrameHeader;
use tracing::info;

/// Writes a populated sample profile framed with `codec`.
pub fn sample(out: &Path, account_id: &str, codec: &CodecConfig) -> anyhow::Result<String> {
    let account_id = AccountId::new(account_id)?;
    let profile = sample_profile(account_id)?;

    let bytes = profile.to_bytes(codec)?;
    fs::write(out, &bytes).with_context(|| format!("Failed to write {}", out.display()))?;

    info!(
        path = %out.display(),
        len = bytes.len(),
        compressed = codec.compression,
        "Sample profile written"
    );
    Ok(format!("Wrote {} bytes to {}", bytes.len(), out.display()))
}

/// Decodes a framed profile and renders it.
pub fn show(input: &Path, json: bool, codec: &CodecConfig) -> anyhow::Result<String> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let profile = UserProfile::from_bytes(&bytes, codec)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    if json {
        return serde_json::to_string_pretty(&profile).context("Failed to render JSON");
    }

    let header = FrameHeader::peek(&bytes).context("Frame header missing")?;
    Ok(summary(&profile, header, bytes.len()))
}

fn summary(profile: &UserProfile, header: FrameHeader, len: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "frame: v{} {} ({len} bytes)",
        header.version,
        if header.is_compressed() { "lz4" } else { "plain" }
    );
    let _ = writeln!(out, "account: {}", profile.account_id());

    let ids: Vec<&str> = profile.payment_accounts().iter().map(PaymentAccount::identity).collect();
    let _ = writeln!(out, "payment accounts: {} [{}]", ids.len(), ids.join(", "));
    let _ = writeln!(
        out,
        "current payment account: {}",
        profile.current_payment_account().map_or("-", |p| p.id.as_str())
    );
    let _ = writeln!(out, "languages: {}", profile.accepted_language_locale_codes().join(", "));
    let _ = writeln!(
        out,
        "developers alert: {}",
        profile.developers_alert().map_or("-", |a| a.message.as_str())
    );
    let _ = writeln!(
        out,
        "displayed alert: {}",
        profile.displayed_alert().map_or("-", |a| a.message.as_str())
    );
    let _ = writeln!(
        out,
        "developers filter: {}",
        profile.developers_filter().map_or_else(
            || "-".to_owned(),
            |f| format!("{} banned offers", f.banned_offer_ids.len())
        )
    );
    let arbitrator = profile.registered_arbitrator().map(|a| &a.node_address);
    let _ = writeln!(out, "registered arbitrator: {}", agent(arbitrator));
    let mediator = profile.registered_mediator().map(|m| &m.node_address);
    let _ = writeln!(out, "registered mediator: {}", agent(mediator));

    let arbitrators: Vec<String> =
        profile.accepted_arbitrators().iter().map(|a| a.node_address.to_string()).collect();
    let _ = writeln!(out, "accepted arbitrators: {}", arbitrators.join(", "));
    let mediators: Vec<String> =
        profile.accepted_mediators().iter().map(|m| m.node_address.to_string()).collect();
    let _ = write!(out, "accepted mediators: {}", mediators.join(", "));
    out
}

fn agent(address: Option<&NodeAddress>) -> String {
    address.map_or_else(|| "-".to_owned(), ToString::to_string)
}

fn sample_profile(account_id: AccountId) -> anyhow::Result<UserProfile> {
    let mut profile = UserProfile::new(account_id);

    let mut sepa = PaymentAccount::new("sepa-main", "SEPA");
    sepa.account_name = "Main EUR account".to_owned();
    sepa.trade_currencies = vec!["EUR".to_owned()];
    sepa.selected_trade_currency = Some("EUR".to_owned());
    profile.add_payment_account(sepa)?;

    let mut zelle = PaymentAccount::new("zelle-us", "ZELLE");
    zelle.trade_currencies = vec!["USD".to_owned()];
    profile.add_payment_account(zelle)?;

    profile.select_current_payment_account("sepa-main")?;
    profile.add_accepted_language("en");
    profile.add_accepted_language("de");

    profile.set_developers_alert(Some(Alert::new("Version 1.9.1 is available", "1.9.1")))?;
    profile.set_developers_filter(Some(Filter {
        banned_offer_ids: vec!["offer-7f3a".to_owned()],
        banned_payment_accounts: vec![PaymentAccountFilter {
            payment_method_id: "SEPA".to_owned(),
            field: "iban".to_owned(),
            value: "DE00000000000000000000".to_owned(),
        }],
        ..Filter::default()
    }))?;

    profile.accept_arbitrator(Arbitrator {
        node_address: NodeAddress::new("arbitrator1.onion", 9999),
        btc_pub_key: vec![2; 33],
        btc_address: "bc1qsamplearbitrator".to_owned(),
        language_codes: vec!["en".to_owned()],
        registration_date: 1_700_000_000_000,
        registration_pub_key: vec![3; 33],
        registration_signature: "sample-arbitrator-signature".to_owned(),
        email_address: None,
    })?;
    profile.accept_mediator(Mediator {
        node_address: NodeAddress::new("mediator1.onion", 9999),
        pub_key: vec![4; 33],
        language_codes: vec!["en".to_owned(), "de".to_owned()],
        registration_date: 1_700_000_000_000,
        registration_pub_key: vec![5; 33],
        registration_signature: "sample-mediator-signature".to_owned(),
        email_address: Some("mediator@example.org".to_owned()),
    })?;

    Ok(profile)
}
