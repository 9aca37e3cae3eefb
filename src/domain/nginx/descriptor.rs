// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::constants::DEPLOYMENT_NAME;
use crate::infrastructure::kubernetes::client::{NginxKubeClient, NginxKubeClientImpl};
use crate::infrastructure::kubernetes::resources::NginxDeploymentBuilder;
use crate::shared::error::KubeError;
use std::path::Path;
use tracing::{debug, info, Level};

pub struct NginxDeploymentDescriptor {
    client: Box<dyn NginxKubeClient>,
    namespace: String,
}

impl NginxDeploymentDescriptor {
    pub async fn new_with_config(
        namespace: String,
        kubeconfig_path: impl AsRef<Path>,
    ) -> Result<Self, KubeError> {
        let client = NginxKubeClientImpl::new_with_config(namespace.clone(), kubeconfig_path).await?;
        Ok(Self {
            client: Box::new(client),
            namespace,
        })
    }

    /// Uses an already constructed client; the namespace is taken from it.
    pub fn with_client(client: Box<dyn NginxKubeClient>) -> Self {
        let namespace = client.namespace().to_string();
        Self { client, namespace }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Creates the Nginx deployment and returns the name the API server
    /// reports for it.
    ///
    /// Exactly one create request is made. A conflict with an existing
    /// deployment is reported like any other failure.
    pub async fn deploy_nginx(&self, replicas: i32, image: &str) -> Result<String, KubeError> {
        let deployment =
            NginxDeploymentBuilder::new(self.namespace.clone(), replicas, image.to_string())
                .build()?;

        if tracing::enabled!(Level::DEBUG) {
            match serde_yaml::to_string(&deployment) {
                Ok(manifest) => debug!(manifest = %manifest, "Rendered deployment"),
                Err(e) => debug!(error = %e, "Could not render deployment manifest"),
            }
        }
        info!(
            name = DEPLOYMENT_NAME,
            namespace = %self.namespace,
            replicas,
            image,
            "Submitting deployment"
        );

        let created = self.client.create_deployment(&deployment).await?;

        let name = created
            .metadata
            .name
            .unwrap_or_else(|| DEPLOYMENT_NAME.to_string());

        info!(name = %name, namespace = %self.namespace, "Deployment created");
        Ok(name)
    }
}
