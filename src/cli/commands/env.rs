use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use crate::env_vars::{format_env, parse_env, EnvVars};
use crate::error::Result;

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub async fn parse(file: Option<PathBuf>) -> Result<()> {
    let vars = parse_env(&read_input(file)?);
    println!("{}", serde_json::to_string_pretty(&vars)?);
    Ok(())
}

pub async fn format(file: Option<PathBuf>) -> Result<()> {
    let vars: EnvVars = serde_json::from_str(&read_input(file)?)?;
    println!("{}", format_env(&vars));
    Ok(())
}
