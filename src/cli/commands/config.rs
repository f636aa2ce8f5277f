use console::style;

use crate::config::{ProviderConfig, API_KEY_ENV, HOST_ENV};
use crate::error::Result;

pub async fn show() -> Result<()> {
    let config_path = ProviderConfig::config_path()?;
    let config = ProviderConfig::load()?;

    if !config_path.exists() && config.host.is_empty() {
        println!("{}", style("No configuration found.").dim());
        println!("Run {} to create one.", style("dokploy init").cyan());
        return Ok(());
    }

    println!("{}", style("Current Configuration").bold().cyan());
    println!();
    print!("  Host:    ");
    if config.host.is_empty() {
        println!("{}", style("(not set)").dim());
    } else {
        println!("{}", style(&config.host).white());
    }
    print!("  API key: ");
    if config.api_key.is_empty() {
        println!("{}", style("(not set)").dim());
    } else {
        println!("{}", style(config.masked_api_key()).dim());
    }
    println!();
    println!("Config file: {}", style(config_path.display()).dim());

    for var in [HOST_ENV, API_KEY_ENV] {
        if std::env::var(var).is_ok_and(|v| !v.is_empty()) {
            println!("{} {} overrides the file", style("!").yellow().bold(), style(var).cyan());
        }
    }

    Ok(())
}

pub async fn set(key: String, value: String) -> Result<()> {
    let path = ProviderConfig::config_path()?;
    let mut config = if path.exists() {
        ProviderConfig::load_from(&path)?
    } else {
        ProviderConfig::default()
    };

    match key.as_str() {
        "host" => config.host = value.trim_end_matches('/').to_string(),
        "api_key" | "api-key" => config.api_key = value.clone(),
        _ => {
            println!(
                "{} Unknown config key: {}",
                style("!").yellow().bold(),
                style(&key).red()
            );
            println!("\nAvailable keys:");
            println!("  host, api_key");
            return Ok(());
        }
    }

    config.save_to(&path)?;

    let shown = if key == "host" { value } else { config.masked_api_key() };
    println!(
        "{} Set {} = {}",
        style("✓").green().bold(),
        style(&key).cyan(),
        style(shown).white()
    );

    Ok(())
}
