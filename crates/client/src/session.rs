use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Who is using the client. Logged in exactly when a user id is held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: Option<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn login(&mut self, user_id: i64) {
        self.user_id = Some(user_id);
    }

    pub fn logout(&mut self) {
        self.user_id = None;
    }
}

/// Keeps a session across restarts ("remember me").
pub trait SessionStore {
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> io::Result<()>;

    fn clear(&self) -> io::Result<()>;
}

/// Stores the session as JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "ignoring unreadable session");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> io::Result<()> {
        let content = serde_json::to_string(session)?;
        fs::write(&self.path, content)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}
