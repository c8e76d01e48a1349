use std::borrow::Cow;

/// Errors raised while talking to the operator.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console streams failed.
    #[error("Console I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

pub trait ConsoleErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConsoleError>;
}

impl<T> ConsoleErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConsoleError> {
        self.map_err(|source| ConsoleError::Io { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failure_carries_context() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("pipe closed"));
        let err = res.context("Failed to write to console").expect_err("still an error");
        assert_eq!(err.to_string(), "Console I/O error (Failed to write to console): pipe closed");
    }
}
