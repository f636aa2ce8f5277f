use crate::cli::{parse_assignments, spinner};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::provider::{registry, State};

/// Data-source config from `key=value` pairs; every value is a string.
fn config_from_assignments(set: &[String]) -> Result<State> {
    let map: serde_json::Map<String, State> = parse_assignments(set)?
        .into_iter()
        .map(|(key, value)| (key, State::String(value)))
        .collect();
    Ok(State::Object(map))
}

pub async fn execute(config: &ProviderConfig, type_name: &str, set: &[String]) -> Result<()> {
    let data_source = registry().data_source(type_name)?;
    let input = config_from_assignments(set)?;
    let client = config.client()?;

    let pb = spinner(format!("Reading {}...", type_name));
    let result = data_source.read(&client, input).await;
    pb.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&result?)?);
    Ok(())
}
