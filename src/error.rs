/// Raw input that does not normalize to a [`crate::Choice`].
///
/// Empty lines, misspellings and a closed stream are not distinguished;
/// all of them render as the same fixed message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidChoice {
    input: Option<String>,
}

impl InvalidChoice {
    /// The offending input, or `None` if the stream closed before a line arrived.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl From<&str> for InvalidChoice {
    fn from(input: &str) -> Self {
        Self {
            input: Some(input.to_string()),
        }
    }
}

impl std::fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::INVALID_CHOICE)
    }
}

impl std::error::Error for InvalidChoice {}
