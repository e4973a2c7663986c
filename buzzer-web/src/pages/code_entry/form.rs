use thiserror::Error;

use crate::i18n;
use crate::router::RawPath;

/// Why a code submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeEntryError {
    #[error("no game code entered")]
    MissingCode,
}

impl CodeEntryError {
    /// Translation key of the inline advisory shown for this error.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingCode => "code_entry.missing_code",
        }
    }
}

/// Local state of the code entry screen.
///
/// `form_message` is only ever set by a failed [`CodeEntryForm::submit`] and is
/// cleared at the start of the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntryForm {
    input: Option<String>,
    form_message: Option<CodeEntryError>,
}

impl CodeEntryForm {
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = Some(value.into());
    }

    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    #[must_use]
    pub const fn error(&self) -> Option<CodeEntryError> {
        self.form_message
    }

    /// Localized advisory to render under the input, if any.
    #[must_use]
    pub fn form_message(&self) -> Option<String> {
        self.form_message.map(|err| i18n::t(err.message_key()))
    }

    /// Validate the current input and produce the path to navigate to.
    ///
    /// The code is used verbatim: no trimming, escaping, or encoding.
    ///
    /// # Errors
    /// Returns [`CodeEntryError::MissingCode`] when the input is absent or empty.
    pub fn submit(&mut self) -> Result<String, CodeEntryError> {
        self.form_message = None;

        match self.input.as_deref() {
            Some(code) if !code.is_empty() => Ok(format!("/{code}")),
            _ => {
                self.form_message = Some(CodeEntryError::MissingCode);
                Err(CodeEntryError::MissingCode)
            }
        }
    }

    /// [`submit`](Self::submit), wrapped as the location the Play button pushes.
    ///
    /// # Errors
    /// Same as [`submit`](Self::submit).
    pub fn play_target(&mut self) -> Result<RawPath, CodeEntryError> {
        self.submit().map(RawPath::from)
    }
}
