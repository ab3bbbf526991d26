// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong. Only the window can fail;
// the scene itself is total.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Presenting a frame failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_site() {
        let e = Error::WindowInit("no display".into());
        assert_eq!(e.to_string(), "Window init error: no display");

        let e = Error::WindowUpdate("lost surface".into());
        assert_eq!(e.to_string(), "Window update error: lost surface");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<Error>();
    }
}
