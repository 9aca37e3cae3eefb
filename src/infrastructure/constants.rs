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

/// Deployment identity
pub const DEPLOYMENT_NAME: &str = "nginx-deployment";
pub const DEFAULT_NAMESPACE: &str = "default";

/// Image
pub const NGINX_REPOSITORY: &str = "nginx";
pub const IMAGE_TAG_SEPARATOR: char = ':';

/// Resource labels
pub const LABEL_APP: &str = "app";
pub const LABEL_APP_VALUE: &str = "nginx";

/// Container
pub const CONTAINER_NAME_WEB: &str = "web";

/// Ports
pub const PORT_NAME_HTTP: &str = "http";
pub const HTTP_PORT: i32 = 80;
pub const PROTOCOL_TCP: &str = "TCP";

/// Default replica count when --scale is omitted
pub const DEFAULT_SCALE: i32 = 1;
