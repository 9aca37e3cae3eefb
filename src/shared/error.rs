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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, KubeError>;

#[derive(Error, Debug)]
pub enum KubeError {
    #[error("kubeconfig cannot be empty")]
    MissingKubeconfig,

    #[error("scale must be greater than zero (got {0})")]
    InvalidScale(i32),

    #[error("version is required")]
    MissingVersion,

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Failed to create Kubernetes client: {0}")]
    ClientError(String),

    #[error("failed to create deployment: {0}")]
    CreationFailed(String),
}

impl KubeError {
    pub fn creation_failed(cause: impl std::fmt::Display) -> Self {
        Self::CreationFailed(cause.to_string())
    }
}
