pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod session;
pub(crate) mod user;

pub use error::{Result as SessionResult, SessionError};
pub use load_result::LoadResult;
pub use session::Session;
pub use user::User;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Stores the logged-in user as JSON on disk.
#[derive(Debug, Clone)]
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

    /// Loads the stored session.
    ///
    /// Returns:
    /// - `Ok(LoadResult { session: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadResult { session: None, corruption_error: None })` - nobody logged in
    /// - `Ok(LoadResult { session: None, corruption_error: Some(...) })` - file exists but corrupted
    pub fn load(&self) -> SessionResult<LoadResult> {
        if !self.path.exists() {
            info!("No session file at {:?}", self.path);
            return Ok(LoadResult {
                session: None,
                corruption_error: None,
            });
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<User>(&contents) {
            Ok(user) => {
                info!("Loaded session for {}", user.name);
                Ok(LoadResult {
                    session: Some(Session::new(user)),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                Ok(LoadResult {
                    session: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Saves the session using temp file + fsync + rename, so a crash
    /// mid-write never leaves a truncated file behind.
    pub fn save(&self, session: &Session) -> SessionResult<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| SessionError::dir_creation(dir.clone(), e))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("user.json"));
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(&session.user)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        info!("Saved session for {}", session.user.name);
        Ok(())
    }

    /// Forget the stored session. Returns whether a file was removed.
    pub fn clear(&self) -> SessionResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session at {:?}", self.path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SessionError::file_write(self.path.clone(), e)),
        }
    }

    /// Renames a corrupted session file to `<name>.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> SessionResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup_name = self.path.clone().into_os_string();
        backup_name.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        fs::rename(&self.path, &backup_path).map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
