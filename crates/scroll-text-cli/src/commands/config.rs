use std::path::Path;

use anyhow::Result;

use scroll_text_core::AppConfig;

pub fn run(config: &AppConfig, path: &Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            AppConfig::default().save_to(path)?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let note = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file: {}{}\n", path.display(), note);
    println!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
