use anyhow::{Context, Result};

/// Read-only access to the sectioned settings store.
///
/// Missing keys are an error: there are no built-in defaults, and callers
/// with an optional field express the default by not asking.
pub trait SettingsProvider: Send + Sync {
    fn get(&self, section: &str, key: &str) -> Result<String>;
}

/// Settings the recorder resolves at invocation time. Checked up front so
/// a broken configuration fails before the schedule starts instead of
/// hours later when the capture fires.
pub const REQUIRED_SETTINGS: &[(&str, &str)] = &[
    ("download", "path"),
    ("recording", "quality"),
    ("recording", "attempts"),
    ("connecting", "wait"),
    ("connecting", "attempts"),
];

/// File-backed settings.
pub struct Settings {
    inner: config::Config,
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let inner = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("Failed to load settings from {}", path))?;

        Ok(Self { inner })
    }
}

impl SettingsProvider for Settings {
    fn get(&self, section: &str, key: &str) -> Result<String> {
        self.inner
            .get_string(&format!("{}.{}", section, key))
            .with_context(|| format!("Missing setting {}.{}", section, key))
    }
}

/// Fail fast when any required setting is absent.
pub fn verify_required(settings: &dyn SettingsProvider) -> Result<()> {
    for (section, key) in REQUIRED_SETTINGS {
        settings.get(section, key)?;
    }

    Ok(())
}
