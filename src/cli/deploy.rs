//! Nginx deployment command

use crate::cli::display::ColorTheme;
use crate::domain::config::NginxDeployConfig;
use crate::domain::nginx::NginxDeploymentDescriptor;
use crate::infrastructure::constants::{DEFAULT_NAMESPACE, DEFAULT_SCALE};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug, Clone)]
pub struct DeployCommand {
    /// Version of Nginx to deploy (image tag, e.g. 1.13.12)
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Number of replicas to scale to
    #[arg(long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: i32,

    /// Path to kubeconfig file
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<String>,

    /// Kubernetes namespace to deploy into
    #[arg(long, short = 'n', default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

impl DeployCommand {
    pub fn config(&self) -> anyhow::Result<NginxDeployConfig> {
        NginxDeployConfig::from_flags(
            self.kubeconfig.as_deref(),
            &self.namespace,
            self.scale,
            self.version.as_deref(),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let config = self.config()?;

        let descriptor =
            NginxDeploymentDescriptor::new_with_config(config.namespace.clone(), &config.kubeconfig)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

        let mut stdout = std::io::stdout();
        report_deployment(&descriptor, &config, &mut stdout).await
    }
}

/// Submits the deployment and writes the two confirmation lines to `out`.
pub async fn report_deployment<W: Write>(
    descriptor: &NginxDeploymentDescriptor,
    config: &NginxDeployConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let name = descriptor
        .deploy_nginx(config.replicas, &config.image)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let theme = ColorTheme::default();
    writeln!(
        out,
        "Created deployment {:?} in namespace {:?}.",
        name,
        descriptor.namespace()
    )?;
    writeln!(
        out,
        "{}",
        theme.status_line(
            true,
            &format!(
                "Nginx deployed successfully in namespace {}.",
                theme.highlight(descriptor.namespace())
            )
        )
    )?;
    Ok(())
}
