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

use crate::shared::error::KubeError;
use k8s_openapi::api::apps::v1::Deployment;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client};
use std::path::Path;
use tracing::{debug, info};

/// Access to the Deployment endpoint of a single namespace.
#[async_trait::async_trait]
pub trait NginxKubeClient: Send + Sync {
    fn namespace(&self) -> &str;

    /// Issues one create request and returns the object echoed back by the
    /// API server. Every failure is a `KubeError::CreationFailed`; errors are
    /// never retried.
    async fn create_deployment(&self, deployment: &Deployment) -> Result<Deployment, KubeError>;
}

pub struct NginxKubeClientImpl {
    client: Client,
    namespace: String,
}

impl NginxKubeClientImpl {
    pub async fn new_with_config(
        namespace: String,
        kubeconfig_path: impl AsRef<Path>,
    ) -> Result<Self, KubeError> {
        let path = kubeconfig_path.as_ref();
        debug!(path = %path.display(), "Reading kubeconfig");

        let kubeconfig =
            Kubeconfig::read_from(path).map_err(|e| KubeError::KubeconfigError(e.to_string()))?;

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| KubeError::KubeconfigError(e.to_string()))?;

        let client = Client::try_from(config).map_err(|e| KubeError::ClientError(e.to_string()))?;

        info!(namespace = %namespace, "Kubernetes client initialized");
        Ok(Self { client, namespace })
    }
}

#[async_trait::async_trait]
impl NginxKubeClient for NginxKubeClientImpl {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn create_deployment(&self, deployment: &Deployment) -> Result<Deployment, KubeError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let pp = kube::api::PostParams::default();

        api.create(&pp, deployment)
            .await
            .map_err(KubeError::creation_failed)
    }
}
