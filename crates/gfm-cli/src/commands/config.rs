//! `gfm config` command - View or change settings.

use anyhow::{Context, Result};
use gfm_core::Settings;

use crate::commands::ConfigAction;
use crate::output;

/// Run the config command.
pub fn run(action: &ConfigAction) -> Result<()> {
    let path = Settings::path()?;

    match action {
        ConfigAction::Path => output::essential(&path.display().to_string()),
        ConfigAction::Show => {
            let settings = Settings::load(&path)?;
            let rendered = settings.to_toml().context("Failed to render settings")?;
            output::essential(rendered.trim_end());
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load(&path)?;
            settings.set(key, value)?;
            settings
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("Set {key}"));
        }
    }

    Ok(())
}
