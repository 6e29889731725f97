//! Read-only access to the shared session written by the sign-in flow

use super::traits::SessionAccessor;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that supplies a session token directly
pub const TOKEN_ENV: &str = "SIGNUP_TUI_TOKEN";

#[derive(Debug, Default, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// Session token read from `SIGNUP_TUI_TOKEN` or a JSON session file
#[derive(Debug, Clone)]
pub struct FileSession {
    path: Option<PathBuf>,
    env_token: Option<String>,
}

impl FileSession {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            env_token: std::env::var(TOKEN_ENV).ok(),
        }
    }

    /// Session backed only by a file, ignoring the environment
    #[cfg(test)]
    pub fn from_file(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            env_token: None,
        }
    }

    fn read_file(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<SessionFile>(&content) {
            Ok(session) => session.token,
            Err(err) => {
                debug!("Ignoring unreadable session file {}: {err}", path.display());
                None
            }
        }
    }
}

impl SessionAccessor for FileSession {
    fn token(&self) -> Option<String> {
        self.env_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| self.read_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let session = FileSession::from_file(dir.path().join("session.json"));
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_reads_token_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token": "abc123"}"#).unwrap();
        let session = FileSession::from_file(path);
        assert_eq!(session.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_file_changes_are_seen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = FileSession::from_file(path.clone());
        assert_eq!(session.token(), None);
        fs::write(&path, r#"{"token": "later"}"#).unwrap();
        assert_eq!(session.token(), Some("later".to_string()));
    }

    #[test]
    fn test_malformed_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileSession::from_file(path).token(), None);
    }

    #[test]
    fn test_file_without_token_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"user": "ada"}"#).unwrap();
        assert_eq!(FileSession::from_file(path).token(), None);
    }

    #[test]
    fn test_env_token_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token": "file"}"#).unwrap();
        let session = FileSession {
            path: Some(path),
            env_token: Some("env".to_string()),
        };
        assert_eq!(session.token(), Some("env".to_string()));
    }

    #[test]
    fn test_no_path_no_env() {
        let session = FileSession {
            path: None,
            env_token: None,
        };
        assert_eq!(session.token(), None);
    }
}
