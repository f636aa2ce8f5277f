use console::style;

use crate::cli::{read_json_arg, spinner};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::provider::{registry, State};

pub async fn types() -> Result<()> {
    let registry = registry();

    println!("{}", style("Resources").bold().cyan());
    for name in registry.resource_types() {
        println!("  {}", style(name).white());
    }
    println!();
    println!("{}", style("Data sources").bold().cyan());
    for name in registry.data_source_types() {
        println!("  {}", style(name).white());
    }

    Ok(())
}

fn print_state(state: &State) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}

pub async fn create(config: &ProviderConfig, type_name: &str, plan: &str) -> Result<()> {
    let resource = registry().resource(type_name)?;
    let plan = read_json_arg(plan)?;
    let client = config.client()?;

    let pb = spinner(format!("Creating {}...", type_name));
    let result = resource.create(&client, plan).await;
    pb.finish_and_clear();

    let state = result?;
    eprintln!("{} Created {}", style("✓").green().bold(), style(type_name).cyan());
    print_state(&state)
}

pub async fn read(config: &ProviderConfig, type_name: &str, state: &str) -> Result<()> {
    let resource = registry().resource(type_name)?;
    let state = read_json_arg(state)?;
    let client = config.client()?;

    let pb = spinner(format!("Reading {}...", type_name));
    let result = resource.read(&client, state).await;
    pb.finish_and_clear();

    match result? {
        Some(state) => print_state(&state),
        None => {
            eprintln!(
                "{} {} no longer exists and should be removed from state",
                style("!").yellow().bold(),
                style(type_name).cyan()
            );
            Ok(())
        }
    }
}

pub async fn update(config: &ProviderConfig, type_name: &str, prior: &str, plan: &str) -> Result<()> {
    let resource = registry().resource(type_name)?;
    let prior = read_json_arg(prior)?;
    let plan = read_json_arg(plan)?;
    let client = config.client()?;

    let pb = spinner(format!("Updating {}...", type_name));
    let result = resource.update(&client, prior, plan).await;
    pb.finish_and_clear();

    let state = result?;
    eprintln!("{} Updated {}", style("✓").green().bold(), style(type_name).cyan());
    print_state(&state)
}

pub async fn delete(config: &ProviderConfig, type_name: &str, state: &str) -> Result<()> {
    let resource = registry().resource(type_name)?;
    let state = read_json_arg(state)?;
    let client = config.client()?;

    let pb = spinner(format!("Deleting {}...", type_name));
    let result = resource.delete(&client, state).await;
    pb.finish_and_clear();

    result?;
    eprintln!("{} Deleted {}", style("✓").green().bold(), style(type_name).cyan());
    Ok(())
}

pub async fn import(config: &ProviderConfig, type_name: &str, id: &str) -> Result<()> {
    let resource = registry().resource(type_name)?;
    let client = config.client()?;

    let pb = spinner(format!("Importing {} {}...", type_name, id));
    let result = resource.import(&client, id).await;
    pb.finish_and_clear();

    let state = result?;
    eprintln!(
        "{} Imported {} {}",
        style("✓").green().bold(),
        style(type_name).cyan(),
        style(id).white()
    );
    for warning in resource.import_warnings() {
        eprintln!("{} {}", style("!").yellow().bold(), warning);
    }
    print_state(&state)
}
