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

//! Configuration domain

use crate::domain::nginx::validator::{
    get_replicas, prepare_nginx_image, validate_kubeconfig_path,
};
use crate::shared::error::Result;
use std::path::PathBuf;

/// Validated deployment settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NginxDeployConfig {
    pub kubeconfig: PathBuf,
    pub namespace: String,
    pub replicas: i32,
    pub image: String,
}

impl NginxDeployConfig {
    /// Checks the raw flag values in order: kubeconfig path, scale, version.
    /// The first failure is returned.
    pub fn from_flags(
        kubeconfig: Option<&str>,
        namespace: &str,
        scale: i32,
        version: Option<&str>,
    ) -> Result<Self> {
        let kubeconfig = validate_kubeconfig_path(kubeconfig)?;
        let replicas = get_replicas(scale)?;
        let image = prepare_nginx_image(version.unwrap_or_default())?;

        Ok(Self {
            kubeconfig,
            namespace: namespace.to_string(),
            replicas,
            image,
        })
    }
}
