use console::style;
use dialoguer::{Input, Password};

use crate::config::ProviderConfig;
use crate::error::Result;

pub async fn execute() -> Result<()> {
    println!("{}", style("Welcome to dokploy!").bold().cyan());
    println!("Let's connect to your Dokploy server.\n");

    let existing = ProviderConfig::load().unwrap_or_default();

    let host: String = Input::new()
        .with_prompt("Dokploy API URL (e.g. https://dokploy.example.com/api)")
        .with_initial_text(existing.host)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://")
            }
        })
        .interact_text()?;

    let api_key = Password::new()
        .with_prompt("API key (Settings > Profile > API/CLI)")
        .interact()?;

    let config = ProviderConfig {
        host: host.trim_end_matches('/').to_string(),
        api_key,
    };
    config.validate()?;
    config.save()?;

    println!("\n{}", style("✓ Configuration saved!").green().bold());
    println!(
        "Config file: {}",
        style(ProviderConfig::config_path()?.display()).dim()
    );
    println!(
        "\nRun {} to verify the connection.",
        style("dokploy request GET user.get").cyan()
    );

    Ok(())
}
