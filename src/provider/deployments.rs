//! `dokploy_deployments` data source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode_state, encode_state, non_empty, DataSource, ProviderError, ProviderResult, State};
use crate::client::deployments::DeploymentFilter;
use crate::client::types::Deployment;
use crate::client::DokployClient;

const TYPE_NAME: &str = "dokploy_deployments";
const FILTERS: [&str; 3] = ["application_id", "compose_id", "server_id"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DeploymentsModel {
    application_id: Option<String>,
    compose_id: Option<String>,
    server_id: Option<String>,
    #[serde(skip_deserializing)]
    deployments: Vec<DeploymentModel>,
}

impl DeploymentsModel {
    fn filter(&self) -> ProviderResult<DeploymentFilter> {
        let set: Vec<DeploymentFilter> = [
            non_empty(&self.application_id).map(|id| DeploymentFilter::Application(id.to_string())),
            non_empty(&self.compose_id).map(|id| DeploymentFilter::Compose(id.to_string())),
            non_empty(&self.server_id).map(|id| DeploymentFilter::Server(id.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect();

        match <[DeploymentFilter; 1]>::try_from(set) {
            Ok([filter]) => Ok(filter),
            Err(set) if set.is_empty() => Err(ProviderError::missing_filter(&FILTERS)),
            Err(_) => Err(ProviderError::invalid_config(
                "application_id",
                "only one of application_id, compose_id or server_id may be set",
            )),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeploymentModel {
    id: String,
    title: String,
    description: Option<String>,
    status: String,
    log_path: String,
    application_id: Option<String>,
    compose_id: Option<String>,
    server_id: Option<String>,
    is_preview_deployment: bool,
    preview_deployment_id: Option<String>,
    created_at: String,
    started_at: Option<String>,
    finished_at: Option<String>,
    error_message: Option<String>,
    schedule_id: Option<String>,
    backup_id: Option<String>,
    rollback_id: Option<String>,
    volume_backup_id: Option<String>,
    build_server_id: Option<String>,
}

impl From<Deployment> for DeploymentModel {
    fn from(dep: Deployment) -> Self {
        Self {
            id: dep.deployment_id,
            title: dep.title,
            description: dep.description,
            status: dep.status,
            log_path: dep.log_path,
            application_id: dep.application_id,
            compose_id: dep.compose_id,
            server_id: dep.server_id,
            is_preview_deployment: dep.is_preview_deployment,
            preview_deployment_id: dep.preview_deployment_id,
            created_at: dep.created_at,
            started_at: dep.started_at,
            finished_at: dep.finished_at,
            error_message: dep.error_message,
            schedule_id: dep.schedule_id,
            backup_id: dep.backup_id,
            rollback_id: dep.rollback_id,
            volume_backup_id: dep.volume_backup_id,
            build_server_id: dep.build_server_id,
        }
    }
}

pub struct DeploymentsDataSource;

#[async_trait]
impl DataSource for DeploymentsDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State> {
        let mut data: DeploymentsModel = decode_state(TYPE_NAME, config)?;
        let filter = data.filter()?;

        let deployments = client.list_deployments(&filter).await?;
        tracing::debug!("Found {} deployment(s) for {:?}", deployments.len(), filter);

        data.deployments = deployments.into_iter().map(Into::into).collect();
        encode_state(TYPE_NAME, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(value: serde_json::Value) -> DeploymentsModel {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_filter_selection() {
        assert_eq!(
            config(serde_json::json!({"application_id": "a"})).filter().unwrap(),
            DeploymentFilter::Application("a".to_string())
        );
        assert_eq!(
            config(serde_json::json!({"compose_id": "c", "application_id": ""}))
                .filter()
                .unwrap(),
            DeploymentFilter::Compose("c".to_string())
        );
        assert_eq!(
            config(serde_json::json!({"server_id": "s"})).filter().unwrap(),
            DeploymentFilter::Server("s".to_string())
        );
    }

    #[test]
    fn test_filter_missing() {
        let err = config(serde_json::json!({})).filter().unwrap_err();
        assert!(matches!(err, ProviderError::MissingFilter { .. }));
    }

    #[test]
    fn test_filter_conflict() {
        let err = config(serde_json::json!({"application_id": "a", "server_id": "s"}))
            .filter()
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig { .. }));
    }

    #[tokio::test]
    async fn test_read_server_deployments() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deployment.allByServer"))
            .and(query_param("serverId", "srv-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "deploymentId": "dep-1",
                "title": "Deploy",
                "status": "error",
                "logPath": "/logs/dep-1.log",
                "serverId": "srv-1",
                "isPreviewDeployment": false,
                "createdAt": "2025-01-01T00:00:00.000Z",
                "errorMessage": "build failed"
            }])))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let state = DeploymentsDataSource
            .read(&client, serde_json::json!({"server_id": "srv-1"}))
            .await
            .unwrap();

        assert_eq!(state["server_id"], "srv-1");
        let deployments = state["deployments"].as_array().unwrap();
        assert_eq!(deployments.len(), 1);
        assert_eq!(deployments[0]["id"], "dep-1");
        assert_eq!(deployments[0]["error_message"], "build failed");
        assert!(deployments[0]["finished_at"].is_null());
    }
}
