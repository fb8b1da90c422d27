//! JSON file session store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::domain::session::Session;

/// Keeps the session in a JSON file, created on first save.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, e: &std::io::Error) -> SessionStoreError {
        SessionStoreError::Storage {
            message: format!("{}: {e}", self.path.display()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::anonymous()),
            Err(e) => return Err(self.storage_error(&e)),
        };
        if contents.trim().is_empty() {
            return Ok(Session::anonymous());
        }
        serde_json::from_str(&contents).map_err(|e| SessionStoreError::Corrupt {
            message: format!("{}: {e}", self.path.display()),
        })
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(&e))?;
        }
        let json = serde_json::to_string_pretty(session).map_err(|e| {
            SessionStoreError::Storage {
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| self.storage_error(&e))?;
        restrict_permissions(&self.path);
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(&e)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!(path = %path.display(), error = %e, "could not restrict session file permissions");
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::session::User;

    fn logged_in() -> Session {
        Session {
            access_token: Some("tok-123".to_string()),
            user: Some(User {
                username: "admin".to_string(),
                role: None,
            }),
        }
    }

    #[test]
    fn missing_file_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), Session::anonymous());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/dir/session.json"));

        store.save(&logged_in()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), logged_in());
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save(&logged_in()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(!store.load().unwrap().is_admin());
    }

    #[test]
    fn garbage_file_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let store = FileSessionStore::new(path);
        assert!(matches!(store.load(), Err(SessionStoreError::Corrupt { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save(&logged_in()).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
