use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur reading or writing the session state file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize session state: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk session state
///
/// Holds only the advisory authentication flag. The real credential is
/// the session cookie, which lives in the HTTP client's cookie store and
/// is never written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionState {
    #[serde(default)]
    authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logged_in_at: Option<DateTime<Utc>>,
}

/// Persisted advisory authentication flag
///
/// The flag gates client-side navigation only; it grants nothing against
/// the remote service, which validates the session cookie on every call.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> SessionState {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            // A missing file just means "never logged in"
            Err(_) => return SessionState::default(),
        };

        match toml::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Ignoring malformed session file {}: {}", self.path.display(), e);
                SessionState::default()
            }
        }
    }

    fn write_state(&self, state: &SessionState) -> Result<(), SessionError> {
        let contents = toml::to_string(state)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Whether a login has been recorded locally
    pub fn is_authenticated(&self) -> bool {
        self.read_state().authenticated
    }

    /// Record a successful login
    pub fn set_authenticated(&self) -> Result<(), SessionError> {
        self.write_state(&SessionState {
            authenticated: true,
            logged_in_at: Some(Utc::now()),
        })
    }

    /// Clear the flag; runs on every logout path regardless of whether
    /// the remote logout call succeeded
    pub fn clear(&self) -> Result<(), SessionError> {
        self.write_state(&SessionState::default())
    }
}
