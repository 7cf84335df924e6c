//! Display theme preference.
//!
//! Stored as the bare string `light` or `dark` under its own key; absent or
//! unrecognized values read as `light`.

use crate::storage::{KeyValueStorage, StorageResult};
use log::{info, warn};

/// Name of the display attribute the theme is applied through.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value; only exact `light`/`dark` are recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute name/value pair applied to the presentation root.
    pub fn display_attribute(self) -> (&'static str, &'static str) {
        (THEME_ATTRIBUTE, self.as_str())
    }
}

/// Reads the theme preference; read failures fall back to the default.
pub fn load_theme<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Theme {
    match storage.get_item(key) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
            warn!("event=theme_load module=store status=unknown_value fallback=light");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("event=theme_load module=store status=error fallback=light error={err}");
            Theme::default()
        }
    }
}

/// Persists the theme preference.
pub fn save_theme<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    theme: Theme,
) -> StorageResult<()> {
    storage.set_item(key, theme.as_str())?;
    info!(
        "event=theme_save module=store status=ok theme={}",
        theme.as_str()
    );
    Ok(())
}
