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

use crate::infrastructure::constants::*;
use crate::infrastructure::kubernetes::resources::traits::LabeledResourceBuilder;
use crate::shared::error::{KubeError, Result};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

/// Builds the single `nginx-deployment` Deployment.
pub struct NginxDeploymentBuilder {
    namespace: String,
    replicas: i32,
    image: String,
}

impl LabeledResourceBuilder for NginxDeploymentBuilder {
    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_APP.to_string(), LABEL_APP_VALUE.to_string());
        labels
    }
}

impl NginxDeploymentBuilder {
    pub fn new(namespace: String, replicas: i32, image: String) -> Self {
        Self {
            namespace,
            replicas,
            image,
        }
    }

    pub fn build(&self) -> Result<Deployment> {
        // replicas > 0 and a non-empty image
        if self.replicas <= 0 {
            return Err(KubeError::InvalidScale(self.replicas));
        }
        if self.image.is_empty() {
            return Err(KubeError::MissingVersion);
        }

        let metadata = ObjectMeta {
            name: Some(DEPLOYMENT_NAME.to_string()),
            namespace: Some(self.namespace.clone()),
            ..Default::default()
        };

        let deployment = Deployment {
            metadata,
            spec: Some(DeploymentSpec {
                replicas: Some(self.replicas),
                selector: LabelSelector {
                    match_labels: Some(self.get_selector_labels()),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.get_labels()),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![self.build_web_container()],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        Ok(deployment)
    }

    fn build_web_container(&self) -> Container {
        Container {
            name: CONTAINER_NAME_WEB.to_string(),
            image: Some(self.image.clone()),
            ports: Some(vec![ContainerPort {
                name: Some(PORT_NAME_HTTP.to_string()),
                protocol: Some(PROTOCOL_TCP.to_string()),
                container_port: HTTP_PORT,
                ..Default::default()
            }]),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(replicas: i32, image: &str) -> Deployment {
        NginxDeploymentBuilder::new("default".to_string(), replicas, image.to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn test_metadata() {
        let deployment = build(1, "nginx:1.13.12");
        assert_eq!(deployment.metadata.name.as_deref(), Some("nginx-deployment"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("default"));
    }

    #[test]
    fn test_replicas_and_image() {
        let deployment = build(4, "nginx:1.25");
        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(4));

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(pod_spec.containers.len(), 1);
        assert_eq!(pod_spec.containers[0].name, "web");
        assert_eq!(pod_spec.containers[0].image.as_deref(), Some("nginx:1.25"));
    }

    #[test]
    fn test_selector_matches_template_labels() {
        let deployment = build(1, "nginx:1.13.12");
        let spec = deployment.spec.unwrap();

        let selector = spec.selector.match_labels.unwrap();
        let template_labels = spec.template.metadata.unwrap().labels.unwrap();

        assert_eq!(selector, template_labels);
        assert_eq!(selector.get("app").map(String::as_str), Some("nginx"));
        assert_eq!(selector.len(), 1);
    }

    #[test]
    fn test_http_port() {
        let deployment = build(1, "nginx:1.13.12");
        let container = &deployment.spec.unwrap().template.spec.unwrap().containers[0];
        let ports = container.ports.as_ref().unwrap();

        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].container_port, 80);
        assert_eq!(ports[0].name.as_deref(), Some("http"));
        assert_eq!(ports[0].protocol.as_deref(), Some("TCP"));
    }

    #[test]
    fn test_rejects_unvalidated_input() {
        let zero = NginxDeploymentBuilder::new("default".to_string(), 0, "nginx:1".to_string());
        assert!(matches!(zero.build(), Err(KubeError::InvalidScale(0))));

        let no_image = NginxDeploymentBuilder::new("default".to_string(), 1, String::new());
        assert!(matches!(no_image.build(), Err(KubeError::MissingVersion)));
    }

    #[test]
    fn test_manifest_wire_format() {
        let json = serde_json::to_value(build(2, "nginx:1.13.12")).unwrap();

        assert_eq!(json["apiVersion"], "apps/v1");
        assert_eq!(json["kind"], "Deployment");
        assert_eq!(json["metadata"]["name"], "nginx-deployment");
        assert_eq!(json["spec"]["replicas"], 2);
        assert_eq!(json["spec"]["selector"]["matchLabels"]["app"], "nginx");
        assert_eq!(json["spec"]["template"]["metadata"]["labels"]["app"], "nginx");

        let container = &json["spec"]["template"]["spec"]["containers"][0];
        assert_eq!(container["name"], "web");
        assert_eq!(container["image"], "nginx:1.13.12");
        assert_eq!(container["ports"][0]["containerPort"], 80);
        assert_eq!(container["ports"][0]["name"], "http");
        assert_eq!(container["ports"][0]["protocol"], "TCP");
    }
}
