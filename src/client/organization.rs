use super::types::CurrentUser;
use super::{ClientResult, DokployClient};

impl DokployClient {
    pub async fn get_current_user(&self) -> ClientResult<CurrentUser> {
        self.get_json("user.get", &[]).await
    }

    /// Organization the API key belongs to.
    pub async fn get_current_organization_id(&self) -> ClientResult<String> {
        let user = self.get_current_user().await?;
        tracing::debug!("Resolved organization {}", user.organization_id);
        Ok(user.organization_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_current_organization_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user.get"))
            .and(header("x-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "member-1",
                "userId": "user-1",
                "organizationId": "org-42",
                "role": "owner"
            })))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let org = client.get_current_organization_id().await.unwrap();
        assert_eq!(org, "org-42");
    }

    #[tokio::test]
    async fn test_get_current_organization_id_missing_field() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user.get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "member-1"})))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let err = client.get_current_organization_id().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }
}
