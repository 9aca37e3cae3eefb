// CLI command definitions

use super::deploy::DeployCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nginx-kube",
    about = "Deploy Nginx to Kubernetes",
    long_about = "Creates a single Nginx Deployment (nginx-deployment) in a Kubernetes namespace",
    disable_version_flag = true
)]
pub struct CliArgs {
    #[command(flatten)]
    pub deploy: DeployCommand,
}
