use std::path::{Path, PathBuf};

use color_eyre::Result;

use crate::models::AuthSession;
use crate::names;

/// Persistence seam for the authentication token and cached user
/// record. Read once at startup; cleared on logout and on an
/// authorization failure.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed credential store: one JSON document under the data
/// directory.
#[derive(Clone)]
pub struct FsCredentials {
    path: PathBuf,
}

impl FsCredentials {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(names::CREDENTIALS_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FsCredentials {
    fn load(&self) -> Result<Option<AuthSession>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A mangled cache is not worth failing startup over.
                tracing::warn!("discarding unreadable credential cache: {e}");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        tracing::info!("credentials cached for {}", session.user.email);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
