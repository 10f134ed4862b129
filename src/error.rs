// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only programming-usage errors and I/O/config failures are represented
//! here. Benign races (dismissing a toast that is already gone, publishing
//! with nobody listening) are silent no-ops and never surface as `Error`.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    /// A sidebar message referenced an entry that is not part of the menu tree.
    #[error("unknown menu entry `{id}` in scope `{scope}`")]
    UnknownMenuEntry { scope: String, id: String },

    /// Two sibling menu entries share the same identifier.
    #[error("duplicate menu entry `{id}` in scope `{scope}`")]
    DuplicateMenuEntry { scope: String, id: String },
}

impl Error {
    /// Formats a scope path the way menu errors display it (`/` for the root).
    pub(crate) fn scope_label(scope: &[String]) -> String {
        if scope.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", scope.join("/"))
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
