use super::types::Deployment;
use super::{ClientResult, DokployClient};

/// Which owner to list deployments for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentFilter {
    Application(String),
    Compose(String),
    Server(String),
}

impl DeploymentFilter {
    fn endpoint(&self) -> (&'static str, &'static str, &str) {
        match self {
            Self::Application(id) => ("deployment.all", "applicationId", id.as_str()),
            Self::Compose(id) => ("deployment.allByCompose", "composeId", id.as_str()),
            Self::Server(id) => ("deployment.allByServer", "serverId", id.as_str()),
        }
    }
}

impl DokployClient {
    pub async fn list_deployments(&self, filter: &DeploymentFilter) -> ClientResult<Vec<Deployment>> {
        let (path, key, id) = filter.endpoint();
        self.get_json(path, &[(key, id)]).await
    }

    pub async fn list_application_deployments(&self, application_id: &str) -> ClientResult<Vec<Deployment>> {
        self.list_deployments(&DeploymentFilter::Application(application_id.to_string()))
            .await
    }

    pub async fn list_compose_deployments(&self, compose_id: &str) -> ClientResult<Vec<Deployment>> {
        self.list_deployments(&DeploymentFilter::Compose(compose_id.to_string()))
            .await
    }

    pub async fn list_server_deployments(&self, server_id: &str) -> ClientResult<Vec<Deployment>> {
        self.list_deployments(&DeploymentFilter::Server(server_id.to_string()))
            .await
    }
}
