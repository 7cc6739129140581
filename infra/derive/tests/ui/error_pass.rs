use std::borrow::Cow;
use tpost_derive::tpost_error;

#[tpost_error]
pub enum DecodeError {
    #[error("Malformed input{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Number parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn port(raw: &str) -> Result<u16, DecodeError> {
    raw.parse::<u16>().context("port")
}

fn main() {
    let err = port("not-a-port").unwrap_err();
    assert!(matches!(err, DecodeError::Parse { context: Some(_), .. }));
    assert!(err.to_string().contains("(port)"));

    let from_str: DecodeError = "boom".into();
    assert!(matches!(from_str, DecodeError::Internal { .. }));

    let malformed: Result<(), DecodeError> =
        Err(DecodeError::Malformed { message: "short".into(), context: None });
    let malformed = malformed.context("header").unwrap_err();
    assert_eq!(malformed.to_string(), "Malformed input (header): short");
}
