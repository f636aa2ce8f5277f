use reqwest::Method;

use crate::cli::{read_json_arg, spinner};
use crate::config::ProviderConfig;
use crate::error::{DokployError, Result};

pub async fn execute(config: &ProviderConfig, method: &str, path: &str, body: Option<&str>) -> Result<()> {
    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .map_err(|_| DokployError::InvalidArgument(format!("invalid HTTP method '{}'", method)))?;
    let body = body.map(read_json_arg).transpose()?;
    let client = config.client()?;

    let pb = spinner(format!("{} {}", method, path));
    let result = client.do_request(method, path, body.as_ref()).await;
    pb.finish_and_clear();

    let bytes = result?;
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", String::from_utf8_lossy(&bytes)),
    }

    Ok(())
}
