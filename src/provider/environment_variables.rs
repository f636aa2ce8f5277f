//! `dokploy_environment_variables` resource.
//!
//! Manages the env block (and, for applications, build args) of exactly one
//! application or compose stack. The resource id is the target's id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode_state, encode_state, non_empty, ProviderError, ProviderResult, Resource, State};
use crate::client::DokployClient;
use crate::env_vars::{normalize_env, parse_env};

const TYPE_NAME: &str = "dokploy_environment_variables";

/// Import ids with this prefix target a compose stack.
const COMPOSE_IMPORT_PREFIX: &str = "compose:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentVariablesModel {
    pub id: Option<String>,
    pub application_id: Option<String>,
    pub compose_id: Option<String>,
    pub env: String,
    pub build_args: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Application(&'a str),
    Compose(&'a str),
}

impl EnvironmentVariablesModel {
    fn target(&self) -> ProviderResult<Target<'_>> {
        match (non_empty(&self.application_id), non_empty(&self.compose_id)) {
            (Some(id), None) => Ok(Target::Application(id)),
            (None, Some(id)) => {
                if non_empty(&self.build_args).is_some() {
                    return Err(ProviderError::invalid_config(
                        "build_args",
                        "build arguments are only supported for applications",
                    ));
                }
                Ok(Target::Compose(id))
            }
            (Some(_), Some(_)) => Err(ProviderError::invalid_config(
                "application_id",
                "only one of application_id or compose_id may be set",
            )),
            (None, None) => Err(ProviderError::missing_filter(&["application_id", "compose_id"])),
        }
    }
}

/// Keep the configured text when it means the same thing as the remote text.
fn reconcile(configured: &str, remote: &str) -> String {
    if parse_env(configured) == parse_env(remote) {
        configured.to_string()
    } else {
        remote.to_string()
    }
}

pub struct EnvironmentVariablesResource;

impl EnvironmentVariablesResource {
    async fn save(&self, client: &DokployClient, model: &EnvironmentVariablesModel) -> ProviderResult<String> {
        let env = normalize_env(&model.env);
        match model.target()? {
            Target::Application(id) => {
                let build_args = model.build_args.as_deref().map(normalize_env);
                client
                    .save_application_environment(id, &env, build_args.as_deref())
                    .await?;
                Ok(id.to_string())
            }
            Target::Compose(id) => {
                client.save_compose_environment(id, &env).await?;
                Ok(id.to_string())
            }
        }
    }
}

#[async_trait]
impl Resource for EnvironmentVariablesResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn create(&self, client: &DokployClient, plan: State) -> ProviderResult<State> {
        let mut plan: EnvironmentVariablesModel = decode_state(TYPE_NAME, plan)?;
        let id = self.save(client, &plan).await?;
        tracing::info!("Saved {} environment variables for {}", parse_env(&plan.env).len(), id);
        plan.id = Some(id);
        encode_state(TYPE_NAME, &plan)
    }

    async fn read(&self, client: &DokployClient, state: State) -> ProviderResult<Option<State>> {
        let mut state: EnvironmentVariablesModel = decode_state(TYPE_NAME, state)?;

        let result = match state.target()? {
            Target::Application(id) => client
                .get_application(id)
                .await
                .map(|app| (app.env.unwrap_or_default(), app.build_args)),
            Target::Compose(id) => client
                .get_compose(id)
                .await
                .map(|compose| (compose.env.unwrap_or_default(), None)),
        };

        let (env, build_args) = match result {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => {
                tracing::warn!("Environment variable target no longer exists, removing from state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        state.env = reconcile(&state.env, &env);
        state.build_args = match (state.build_args.as_deref(), build_args) {
            (Some(configured), Some(remote)) => Some(reconcile(configured, &remote)),
            (None, Some(remote)) if !remote.is_empty() => Some(remote),
            (Some(configured), None) if configured.is_empty() => Some(String::new()),
            _ => None,
        };
        state.id = match state.target()? {
            Target::Application(id) | Target::Compose(id) => Some(id.to_string()),
        };

        encode_state(TYPE_NAME, &state).map(Some)
    }

    async fn update(&self, client: &DokployClient, _prior: State, plan: State) -> ProviderResult<State> {
        self.create(client, plan).await
    }

    async fn delete(&self, client: &DokployClient, state: State) -> ProviderResult<()> {
        let mut state: EnvironmentVariablesModel = decode_state(TYPE_NAME, state)?;
        state.env.clear();
        if state.build_args.is_some() {
            state.build_args = Some(String::new());
        }

        match self.save(client, &state).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// `<application id>` or `compose:<compose id>`.
    async fn import(&self, client: &DokployClient, id: &str) -> ProviderResult<State> {
        let state = match id.strip_prefix(COMPOSE_IMPORT_PREFIX) {
            Some(compose_id) => serde_json::json!({ "compose_id": compose_id }),
            None => serde_json::json!({ "application_id": id }),
        };

        self.read(client, state)
            .await?
            .ok_or_else(|| ProviderError::not_found(TYPE_NAME, id))
    }
}
