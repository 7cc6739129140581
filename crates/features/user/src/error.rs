use std::borrow::Cow;
use tpost_wire::EnvelopeError;

/// A specialized [`UserError`] enum for profile mutations.
#[tpost_derive::tpost_error]
pub enum UserError {
    /// The account id is empty or whitespace.
    #[error("Invalid account id{}: {message}", format_context(.context))]
    InvalidAccountId { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The referenced payment account is not part of the profile.
    #[error("Unknown payment account{}: {message}", format_context(.context))]
    UnknownPaymentAccount { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A sub-entity would not survive the profile's own envelope round trip.
    #[error("Invalid sub-entity{}: {source}", format_context(.context))]
    InvalidEntity { source: EnvelopeError, context: Option<Cow<'static, str>> },
}
