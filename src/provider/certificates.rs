//! `dokploy_certificate` and `dokploy_certificates` data sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode_state, encode_state, required, DataSource, ProviderResult, State};
use crate::client::types::Certificate;
use crate::client::DokployClient;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CertificateDataModel {
    pub id: String,
    pub name: String,
    pub certificate_path: String,
    pub auto_renew: Option<bool>,
    pub organization_id: String,
    pub server_id: Option<String>,
}

impl From<Certificate> for CertificateDataModel {
    fn from(cert: Certificate) -> Self {
        Self {
            id: cert.certificate_id,
            name: cert.name,
            certificate_path: cert.certificate_path,
            auto_renew: cert.auto_renew,
            organization_id: cert.organization_id,
            server_id: cert.server_id.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LookupConfig {
    id: Option<String>,
}

pub struct CertificateDataSource;

#[async_trait]
impl DataSource for CertificateDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_certificate"
    }

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State> {
        let config: LookupConfig = decode_state(self.type_name(), config)?;
        let id = required(&config.id, "id")?;

        let cert = client.get_certificate(id).await?;
        encode_state(self.type_name(), &CertificateDataModel::from(cert))
    }
}

#[derive(Debug, Serialize)]
struct CertificatesDataModel {
    certificates: Vec<CertificateDataModel>,
}

pub struct CertificatesDataSource;

#[async_trait]
impl DataSource for CertificatesDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_certificates"
    }

    async fn read(&self, client: &DokployClient, _config: State) -> ProviderResult<State> {
        let certificates = client.list_certificates().await?;
        tracing::debug!("Found {} certificate(s)", certificates.len());

        encode_state(
            self.type_name(),
            &CertificatesDataModel {
                certificates: certificates.into_iter().map(Into::into).collect(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_certificate_lookup() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates.one"))
            .and(query_param("certificateId", "cert-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "certificateId": "cert-1",
                "name": "wildcard",
                "certificateData": "CERT",
                "privateKey": "KEY",
                "certificatePath": "/certs/wildcard",
                "autoRenew": null,
                "organizationId": "org-1",
                "serverId": ""
            })))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let state = CertificateDataSource
            .read(&client, serde_json::json!({"id": "cert-1"}))
            .await
            .unwrap();

        assert_eq!(state["name"], "wildcard");
        assert!(state["auto_renew"].is_null());
        assert!(state["server_id"].is_null());
        assert!(state.get("private_key").is_none());
    }

    #[tokio::test]
    async fn test_certificate_lookup_requires_id() {
        let server = MockServer::start().await;
        let client = DokployClient::new(&server.uri(), "test-key").unwrap();

        let err = CertificateDataSource
            .read(&client, serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig { .. }));
    }

    #[tokio::test]
    async fn test_certificates_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates.all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"certificateId": "a", "name": "one", "autoRenew": true, "serverId": "srv"},
                {"certificateId": "b", "name": "two"}
            ])))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let state = CertificatesDataSource
            .read(&client, serde_json::json!({}))
            .await
            .unwrap();

        let certs = state["certificates"].as_array().unwrap();
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0]["auto_renew"], true);
        assert_eq!(certs[0]["server_id"], "srv");
        assert!(certs[1]["server_id"].is_null());
    }
}
