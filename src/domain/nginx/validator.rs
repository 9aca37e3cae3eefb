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

use crate::infrastructure::constants::{IMAGE_TAG_SEPARATOR, NGINX_REPOSITORY};
use crate::shared::error::{KubeError, Result};
use std::path::PathBuf;

/// Validates the --scale flag and returns the replica count for the deployment.
///
/// No upper bound is enforced.
pub fn get_replicas(scale: i32) -> Result<i32> {
    if scale <= 0 {
        return Err(KubeError::InvalidScale(scale));
    }
    Ok(scale)
}

/// Turns the --version flag into a full image reference, `nginx:<version>`.
///
/// The version is used verbatim; only emptiness is rejected.
pub fn prepare_nginx_image(version: &str) -> Result<String> {
    if version.is_empty() {
        return Err(KubeError::MissingVersion);
    }
    Ok(format!("{}{}{}", NGINX_REPOSITORY, IMAGE_TAG_SEPARATOR, version))
}

pub fn validate_kubeconfig_path(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        _ => Err(KubeError::MissingKubeconfig),
    }
}
