use super::types::{ContainerConfig, ContainerSummary};
use super::{ClientError, ClientResult, DokployClient};

const GET_CONFIG: &str = "docker.getConfig";

impl DokployClient {
    /// List containers on a server; an empty `server_id` means the local one.
    pub async fn list_docker_containers(&self, server_id: &str) -> ClientResult<Vec<ContainerSummary>> {
        self.get_json("docker.getContainers", &[("serverId", server_id)])
            .await
    }

    pub async fn list_docker_containers_by_app_label(
        &self,
        app_name: &str,
        label_type: &str,
        server_id: &str,
    ) -> ClientResult<Vec<ContainerSummary>> {
        self.get_json(
            "docker.getContainersByAppLabel",
            &[
                ("appName", app_name),
                ("type", label_type),
                ("serverId", server_id),
            ],
        )
        .await
    }

    pub async fn list_docker_containers_by_app_name_match(
        &self,
        app_name: &str,
        app_type: &str,
        server_id: &str,
    ) -> ClientResult<Vec<ContainerSummary>> {
        self.get_json(
            "docker.getContainersByAppNameMatch",
            &[
                ("appName", app_name),
                ("appType", app_type),
                ("serverId", server_id),
            ],
        )
        .await
    }

    /// Inspect output for one container, untyped.
    pub async fn get_docker_container_config_raw(
        &self,
        container_id: &str,
        server_id: &str,
    ) -> ClientResult<serde_json::Value> {
        self.get_value(
            GET_CONFIG,
            &[("containerId", container_id), ("serverId", server_id)],
        )
        .await
    }

    pub async fn get_docker_container_config(
        &self,
        container_id: &str,
        server_id: &str,
    ) -> ClientResult<ContainerConfig> {
        let raw = self
            .get_docker_container_config_raw(container_id, server_id)
            .await?;
        serde_json::from_value(raw).map_err(|e| ClientError::decode(GET_CONFIG, e))
    }
}
