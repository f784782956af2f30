use std::borrow::Cow;
use vitrine_kernel::vitrine_error;

#[vitrine_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<()> {
    Err(std::io::Error::other("disk gone")).context("reading fixture")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading fixture): disk gone");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let failed: Result<()> =
        Err(DemoError::InvalidArgument { message: Cow::Borrowed("empty"), context: None });
    let err = failed.context("parsing").unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument (parsing): empty");
}
