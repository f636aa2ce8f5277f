//! `dokploy_certificate` resource.
//!
//! Certificates are immutable on the Dokploy side: every attribute change
//! forces replacement, so `update` always fails.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode_state, encode_state, non_empty, required, ProviderError, ProviderResult, Resource, State};
use crate::client::types::NewCertificate;
use crate::client::DokployClient;

const TYPE_NAME: &str = "dokploy_certificate";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateModel {
    pub id: Option<String>,
    pub name: String,
    pub certificate_data: String,
    pub private_key: String,
    pub certificate_path: Option<String>,
    pub auto_renew: Option<bool>,
    pub server_id: Option<String>,
    pub organization_id: Option<String>,
}

pub struct CertificateResource;

#[async_trait]
impl Resource for CertificateResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn create(&self, client: &DokployClient, plan: State) -> ProviderResult<State> {
        let mut plan: CertificateModel = decode_state(TYPE_NAME, plan)?;

        let organization_id = client.get_current_organization_id().await?;

        let created = client
            .create_certificate(&NewCertificate {
                name: plan.name.clone(),
                certificate_data: plan.certificate_data.clone(),
                private_key: plan.private_key.clone(),
                organization_id: organization_id.clone(),
                certificate_path: plan.certificate_path.clone(),
                auto_renew: plan.auto_renew,
                server_id: plan.server_id.clone(),
            })
            .await?;

        tracing::info!("Created certificate {} ({})", plan.name, created.certificate_id);

        plan.id = Some(created.certificate_id);
        plan.certificate_path = Some(created.certificate_path);
        plan.organization_id = Some(organization_id);
        encode_state(TYPE_NAME, &plan)
    }

    async fn read(&self, client: &DokployClient, state: State) -> ProviderResult<Option<State>> {
        let mut state: CertificateModel = decode_state(TYPE_NAME, state)?;
        let id = required(&state.id, "id")?;

        let cert = match client.get_certificate(id).await {
            Ok(cert) => cert,
            Err(e) if e.is_not_found() => {
                tracing::warn!("Certificate {} no longer exists, removing from state", id);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // certificate_data and private_key stay as configured
        state.name = cert.name;
        state.certificate_path = Some(cert.certificate_path);
        state.organization_id = Some(cert.organization_id).filter(|o| !o.is_empty());
        if cert.auto_renew.is_some() {
            state.auto_renew = cert.auto_renew;
        }
        if let Some(server_id) = non_empty(&cert.server_id) {
            state.server_id = Some(server_id.to_string());
        }

        encode_state(TYPE_NAME, &state).map(Some)
    }

    async fn update(&self, _client: &DokployClient, _prior: State, _plan: State) -> ProviderResult<State> {
        Err(ProviderError::update_not_supported(
            TYPE_NAME,
            "certificates cannot be updated; any change requires creating a new certificate",
        ))
    }

    async fn delete(&self, client: &DokployClient, state: State) -> ProviderResult<()> {
        let state: CertificateModel = decode_state(TYPE_NAME, state)?;
        let id = required(&state.id, "id")?;

        match client.delete_certificate(id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Certificate {} already deleted", id);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn import_warnings(&self) -> &'static [&'static str] {
        &["After importing, set 'certificate_data' and 'private_key' in your configuration. \
           These values cannot be securely retrieved from the server."]
    }
}
