use std::borrow::Cow;
use tpost_derive::tpost_error;

#[tpost_error]
#[derive(Debug)]
pub enum StoreError {
    #[error("Io error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[cfg(any())]
    #[error("Never compiled{}: {message}", format_context(.context))]
    Disabled { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), StoreError> {
    Err(std::io::Error::other("disk gone"))?;
    Ok(())
}

fn main() {
    let err = open().unwrap_err();
    assert!(matches!(err, StoreError::Io { context: None, .. }));
}
