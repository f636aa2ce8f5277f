//! Environment variables attached to applications and compose stacks.

use serde::Serialize;

use super::types::{Application, Compose};
use super::{ClientResult, DokployClient};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveApplicationEnvironment<'a> {
    application_id: &'a str,
    env: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_args: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateComposeEnvironment<'a> {
    compose_id: &'a str,
    env: &'a str,
}

impl DokployClient {
    pub async fn get_application(&self, application_id: &str) -> ClientResult<Application> {
        self.get_json("application.one", &[("applicationId", application_id)])
            .await
    }

    pub async fn save_application_environment(
        &self,
        application_id: &str,
        env: &str,
        build_args: Option<&str>,
    ) -> ClientResult<()> {
        self.post(
            "application.saveEnvironment",
            &SaveApplicationEnvironment {
                application_id,
                env,
                build_args,
            },
        )
        .await
    }

    pub async fn get_compose(&self, compose_id: &str) -> ClientResult<Compose> {
        self.get_json("compose.one", &[("composeId", compose_id)])
            .await
    }

    pub async fn save_compose_environment(&self, compose_id: &str, env: &str) -> ClientResult<()> {
        self.post(
            "compose.update",
            &UpdateComposeEnvironment { compose_id, env },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_save_application_environment_without_build_args() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/application.saveEnvironment"))
            .and(body_json(serde_json::json!({
                "applicationId": "app-1",
                "env": "A=1\nB=2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("true"))
            .expect(1)
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        client
            .save_application_environment("app-1", "A=1\nB=2", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_application_env() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/application.one"))
            .and(query_param("applicationId", "app-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "applicationId": "app-1",
                "name": "api",
                "env": "A=1",
                "buildArgs": null
            })))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let app = client.get_application("app-1").await.unwrap();
        assert_eq!(app.env.as_deref(), Some("A=1"));
        assert_eq!(app.build_args, None);
    }

    #[tokio::test]
    async fn test_save_compose_environment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/compose.update"))
            .and(body_json(serde_json::json!({"composeId": "c-1", "env": "X=y"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"composeId": "c-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        client.save_compose_environment("c-1", "X=y").await.unwrap();
    }
}
