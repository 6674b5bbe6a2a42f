pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 60_000;

#[derive(Clone, Debug, PartialEq)]
pub struct UserPreferences {
    pub last_active_tab: String,
    /// Auto-refresh period for the active view; 0 disables it.
    pub refresh_interval: u64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            last_active_tab: "dashboard".to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}
