use crate::error::Result;
use crate::tui::state::UserPreferences;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use tracing::warn;

/// Key/value preference store backed by SQLite.
pub struct PreferenceStore {
    conn: Connection,
}

impl PreferenceStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn save_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    pub fn load_preference(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn load_user_preferences(&self) -> UserPreferences {
        let mut prefs = UserPreferences::default();

        match self.load_preference("last_active_tab") {
            Ok(Some(tab)) => prefs.last_active_tab = tab,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read last_active_tab"),
        }

        if let Ok(Some(interval)) = self.load_preference("refresh_interval") {
            match interval.parse() {
                Ok(interval) => prefs.refresh_interval = interval,
                Err(_) => warn!(value = %interval, "ignoring invalid refresh_interval"),
            }
        }

        prefs
    }

    pub fn save_user_preferences(&self, prefs: &UserPreferences) -> Result<()> {
        self.save_preference("last_active_tab", &prefs.last_active_tab)?;
        self.save_preference("refresh_interval", &prefs.refresh_interval.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(&dir.path().join("preferences.db")).unwrap();
        assert_eq!(store.load_user_preferences(), UserPreferences::default());
    }

    #[test]
    fn preferences_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("preferences.db");
        {
            let store = PreferenceStore::open(&path).unwrap();
            store
                .save_user_preferences(&UserPreferences {
                    last_active_tab: "schedule".to_string(),
                    refresh_interval: 0,
                })
                .unwrap();
        }
        let store = PreferenceStore::open(&path).unwrap();
        let prefs = store.load_user_preferences();
        assert_eq!(prefs.last_active_tab, "schedule");
        assert_eq!(prefs.refresh_interval, 0);
    }

    #[test]
    fn invalid_interval_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(&dir.path().join("preferences.db")).unwrap();
        store.save_preference("refresh_interval", "soon").unwrap();
        assert_eq!(
            store.load_user_preferences().refresh_interval,
            UserPreferences::default().refresh_interval
        );
    }
}
