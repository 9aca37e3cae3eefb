//! Build automation for nginx-kube
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the binary
//! - test: Run unit and integration tests (optionally the live-cluster ones)
//! - ci: Run format, clippy and test checks

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for nginx-kube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the binary
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Also run tests that need a live cluster (reads KUBECONFIG)
        #[arg(long)]
        cluster: bool,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { cluster } => test(&sh, cluster),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };
    println!("🔨 Building nginx-kube ({})...", profile);

    if release {
        cmd!(sh, "cargo build --release -p nginx-kube").run()?;
    } else {
        cmd!(sh, "cargo build -p nginx-kube").run()?;
    }

    println!("✅ Build completed: target/{}/nginx-kube", profile);
    Ok(())
}

fn test(sh: &Shell, cluster: bool) -> Result<()> {
    println!("🧪 Running tests...");
    cmd!(sh, "cargo test -p nginx-kube").run()?;

    if cluster {
        let kubeconfig = std::env::var("KUBECONFIG")
            .context("KUBECONFIG must point at a test cluster for --cluster")?;
        if !Path::new(&kubeconfig).exists() {
            bail!("kubeconfig not found: {}", kubeconfig);
        }
        println!("\n☸️  Running live-cluster tests against {}...", kubeconfig);
        cmd!(sh, "cargo test -p nginx-kube --test integration_test -- --ignored").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}
