use std::path::Path;

use anyhow::Result;
use eventcal_core::EventcalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventcalConfig, config_file: Option<&Path>) -> Result<()> {
    print!("{}", describe(config, config_file)?);
    Ok(())
}

fn describe(config: &EventcalConfig, config_file: Option<&Path>) -> Result<String> {
    let user_config = EventcalConfig::user_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    let local = config_file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "eventcal.toml".to_string());

    Ok(format!(
        "{} {}\n{} {}\n{} {}\n\n{}",
        "User config: ".dimmed(),
        user_config,
        "Config file: ".dimmed(),
        local,
        "Events dir:  ".dimmed(),
        config.events_path().display(),
        config.to_toml()?
    ))
}
