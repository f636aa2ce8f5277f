use super::types::Destination;
use super::{ClientResult, DokployClient};

impl DokployClient {
    pub async fn get_destination(&self, id: &str) -> ClientResult<Destination> {
        self.get_json("destination.one", &[("destinationId", id)])
            .await
    }

    pub async fn list_destinations(&self) -> ClientResult<Vec<Destination>> {
        self.get_json("destination.all", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_destination() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/destination.one"))
            .and(query_param("destinationId", "dest-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "destinationId": "dest-1",
                "name": "backups",
                "provider": "s3",
                "accessKey": "AKIA",
                "secretAccessKey": "secret",
                "bucket": "dokploy-backups",
                "region": "eu-west-1",
                "endpoint": "https://s3.eu-west-1.amazonaws.com",
                "organizationId": "org-1",
                "serverId": null,
                "createdAt": "2025-01-01T00:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let dest = client.get_destination("dest-1").await.unwrap();
        assert_eq!(dest.bucket, "dokploy-backups");
        assert_eq!(dest.server_id, None);
    }

    #[tokio::test]
    async fn test_list_destinations_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/destination.all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        assert!(client.list_destinations().await.unwrap().is_empty());
    }
}
