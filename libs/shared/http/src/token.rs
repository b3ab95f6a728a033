use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Storage keys, fixed names shared with the existing mobile client.
pub const TOKEN_KEY: &str = "token";
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Persisted client state. The token is read before every outgoing request;
/// a missing or unreadable store simply yields no token.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> io::Result<()> {
        self.set(TOKEN_KEY, token)
    }

    fn clear_token(&self) -> io::Result<()> {
        self.remove(TOKEN_KEY)
    }

    fn remembered_email(&self) -> Option<String> {
        self.get(REMEMBERED_EMAIL_KEY)
    }

    fn set_remembered_email(&self, email: &str) -> io::Result<()> {
        self.set(REMEMBERED_EMAIL_KEY, email)
    }

    fn clear_remembered_email(&self) -> io::Result<()> {
        self.remove(REMEMBERED_EMAIL_KEY)
    }
}

/// Key/value store backed by a single JSON file on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str(&contents) {
            Ok(values) => values,
            Err(e) => {
                warn!("Session file {} is not valid JSON: {}", self.path.display(), e);
                HashMap::new()
            }
        }
    }

    fn write_all(&self, values: &HashMap<String, String>) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(values)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(&self.path, contents)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut values = self.read_all();
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and short-lived sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .set_token(token)
            .unwrap_or_else(|_| unreachable!("memory store writes cannot fail"));
        store
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_token_and_email() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));

        assert_eq!(store.token(), None);

        store.set_token("abc123").unwrap();
        store.set_remembered_email("ana@example.com").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.remembered_email().as_deref(), Some("ana@example.com"));

        store.clear_token().unwrap();
        assert_eq!(store.token(), None);
        // Clearing the token must not drop the remembered email
        assert_eq!(store.remembered_email().as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn file_store_uses_the_fixed_storage_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(&path);

        store.set_token("abc123").unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let values: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(values.get("token").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn corrupt_session_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.token(), None);
        // And stays writable
        store.set_token("abc123").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::with_token("t1");
        assert_eq!(store.token().as_deref(), Some("t1"));
        store.clear_token().unwrap();
        assert_eq!(store.token(), None);
    }
}
