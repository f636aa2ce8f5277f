use super::types::{Certificate, NewCertificate};
use super::{ClientResult, DokployClient};

impl DokployClient {
    pub async fn create_certificate(&self, certificate: &NewCertificate) -> ClientResult<Certificate> {
        self.post_json("certificates.create", certificate).await
    }

    pub async fn get_certificate(&self, id: &str) -> ClientResult<Certificate> {
        self.get_json("certificates.one", &[("certificateId", id)])
            .await
    }

    pub async fn list_certificates(&self) -> ClientResult<Vec<Certificate>> {
        self.get_json("certificates.all", &[]).await
    }

    pub async fn delete_certificate(&self, id: &str) -> ClientResult<()> {
        self.post(
            "certificates.remove",
            &serde_json::json!({ "certificateId": id }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn certificate_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "certificateId": id,
            "name": "wildcard",
            "certificateData": "CERT",
            "privateKey": "KEY",
            "certificatePath": "/etc/dokploy/traefik/dynamic/certificates/wildcard",
            "autoRenew": false,
            "organizationId": "org-1",
            "serverId": null
        })
    }

    #[tokio::test]
    async fn test_create_certificate() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/certificates.create"))
            .and(body_json(serde_json::json!({
                "name": "wildcard",
                "certificateData": "CERT",
                "privateKey": "KEY",
                "organizationId": "org-1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json("cert-1")))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let created = client
            .create_certificate(&NewCertificate {
                name: "wildcard".to_string(),
                certificate_data: "CERT".to_string(),
                private_key: "KEY".to_string(),
                organization_id: "org-1".to_string(),
                certificate_path: None,
                auto_renew: None,
                server_id: None,
            })
            .await
            .unwrap();

        assert_eq!(created.certificate_id, "cert-1");
        assert_eq!(created.auto_renew, Some(false));
    }

    #[tokio::test]
    async fn test_get_certificate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates.one"))
            .and(query_param("certificateId", "cert-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json("cert-1")))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let cert = client.get_certificate("cert-1").await.unwrap();
        assert_eq!(cert.name, "wildcard");
        assert_eq!(cert.server_id, None);
    }

    #[tokio::test]
    async fn test_list_certificates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates.all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                certificate_json("cert-1"),
                certificate_json("cert-2")
            ])))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let certs = client.list_certificates().await.unwrap();
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[1].certificate_id, "cert-2");
    }

    #[tokio::test]
    async fn test_delete_certificate_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/certificates.remove"))
            .and(body_json(serde_json::json!({"certificateId": "gone"})))
            .respond_with(ResponseTemplate::new(404).set_body_string("Certificate not found"))
            .mount(&server)
            .await;

        let client = DokployClient::new(&server.uri(), "test-key").unwrap();
        let err = client.delete_certificate("gone").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
