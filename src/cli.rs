//! # pipelinectl
//!
//! Command-line interface for Pipeline resources.
//!
//! Converts between the resource shape and the service model offline, and
//! lists, reads and applies Pipeline resources in a cluster.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a Pipeline manifest into the service model
//! pipelinectl convert to-model --file pipeline.yaml
//!
//! # Convert a service model record into a Pipeline manifest
//! pipelinectl convert to-resource --file model.json
//!
//! # List Pipeline resources
//! pipelinectl list --namespace ns
//!
//! # Show a Pipeline as a service model record
//! pipelinectl get --name p1 --namespace ns
//!
//! # Apply a service model record as a Pipeline resource
//! pipelinectl apply --file model.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kube::api::{Api, ListParams, Patch, PatchParams};
use kube::{Client, Resource};
use pipeline_crd::config::{load_config, ClientConfig};
use pipeline_crd::model;
use pipeline_crd::observability::init_tracing;
use pipeline_crd::{registry, Pipeline};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Pipeline resource CLI
#[derive(Parser)]
#[command(name = "pipelinectl")]
#[command(about = "Pipeline custom resource CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Kubernetes namespace (defaults to PIPELINECTL_NAMESPACE or "default")
    #[arg(short, long, global = true)]
    namespace: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between the resource shape and the service model without a cluster
    Convert {
        #[command(subcommand)]
        direction: Direction,
    },
    /// List Pipeline resources
    List,
    /// Show a Pipeline resource as a service model record
    Get {
        /// Name of the Pipeline resource
        #[arg(long)]
        name: String,
    },
    /// Apply a service model record as a Pipeline resource
    Apply {
        /// JSON file holding the service model record
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum Direction {
    /// Read a Pipeline manifest (YAML or JSON) and print the model as JSON
    ToModel {
        #[arg(short, long)]
        file: PathBuf,
        /// Fail on a status reason that is not a known pipeline status
        #[arg(long)]
        strict: bool,
    },
    /// Read a model record (JSON) and print the Pipeline manifest as YAML
    ToResource {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config();
    init_tracing(&config.log_filter)?;

    let cli = Cli::parse();

    // Kinds must be registered before any API traffic
    registry::init()?.ensure_registered::<Pipeline>()?;

    match cli.command {
        Commands::Convert { direction } => convert_command(direction),
        Commands::List => {
            let client = connect().await?;
            list_command(client, cli.namespace).await
        }
        Commands::Get { name } => {
            let client = connect().await?;
            let ns = config.namespace_or_default(cli.namespace);
            get_command(client, &ns, &name).await
        }
        Commands::Apply { file } => {
            let client = connect().await?;
            apply_command(client, &config, cli.namespace, &file).await
        }
    }
}

async fn connect() -> Result<Client> {
    // Required for rustls 0.23+ when no default provider is set via features
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    Client::try_default()
        .await
        .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")
}

fn convert_command(direction: Direction) -> Result<()> {
    match direction {
        Direction::ToModel { file, strict } => {
            let resource: Pipeline = read_document(&file)?;
            let model = if strict {
                resource.try_to_model()?
            } else {
                resource.to_model()
            };
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        Direction::ToResource { file } => {
            let model: model::Pipeline = read_document(&file)?;
            let resource = Pipeline::from_model(&model);
            print!("{}", serde_yaml::to_string(&resource)?);
        }
    }
    Ok(())
}

/// Read a YAML or JSON document from disk
fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// List Pipeline resources, in one namespace or across all of them
async fn list_command(client: Client, namespace: Option<String>) -> Result<()> {
    let api: Api<Pipeline> = match namespace.as_deref() {
        Some(ns) => Api::namespaced(client, ns),
        None => Api::all(client),
    };

    let pipelines = api
        .list(&ListParams::default())
        .await
        .context("Failed to list Pipeline resources")?;

    if pipelines.items.is_empty() {
        println!("No Pipeline resources found.");
        return Ok(());
    }

    println!("{:<30} {:<20} {:<20} {:<25}", "NAME", "NAMESPACE", "STATUS", "CREATED");
    println!("{}", "-".repeat(95));

    for pipeline in &pipelines.items {
        let model = pipeline.to_model();
        let created = chrono::DateTime::from_timestamp(model.created_at_in_sec, 0)
            .filter(|_| model.created_at_in_sec != 0)
            .map_or_else(|| "-".to_string(), pipeline_crd::bridge::rfc3339);
        println!(
            "{:<30} {:<20} {:<20} {:<25}",
            model.name, model.namespace, model.status, created
        );
    }

    Ok(())
}

/// Print one Pipeline resource as a model record
async fn get_command(client: Client, ns: &str, name: &str) -> Result<()> {
    let api: Api<Pipeline> = Api::namespaced(client, ns);
    let pipeline = api
        .get(name)
        .await
        .with_context(|| format!("Failed to get Pipeline '{ns}/{name}'"))?;

    let model = pipeline.to_model();
    if !model.status.is_known() {
        warn!(pipeline = %name, namespace = %ns, status = %model.status, "Unrecognized pipeline status");
    }
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

/// Server-side apply the resource projected from a model record, then its status
async fn apply_command(
    client: Client,
    config: &ClientConfig,
    namespace: Option<String>,
    file: &Path,
) -> Result<()> {
    let mut model: model::Pipeline = read_document(file)?;
    if model.namespace.is_empty() {
        model.namespace = config.namespace_or_default(namespace);
    }

    let mut resource = Pipeline::from_model(&model);
    // uid and creationTimestamp are assigned by the API server
    resource.metadata.uid = None;
    resource.metadata.creation_timestamp = None;
    let status = resource.status.take();

    let ns = model.namespace.as_str();
    let name = model.name.as_str();
    let api: Api<Pipeline> = Api::namespaced(client, ns);
    let params = PatchParams::apply(&config.field_manager).force();

    info!(pipeline = %name, namespace = %ns, "Applying Pipeline");
    api.patch(name, &params, &Patch::Apply(&resource))
        .await
        .with_context(|| format!("Failed to apply Pipeline '{ns}/{name}'"))?;

    let status_patch = json!({
        "apiVersion": Pipeline::api_version(&()),
        "kind": Pipeline::kind(&()),
        "status": status,
    });
    let applied = api
        .patch_status(name, &params, &Patch::Apply(&status_patch))
        .await
        .with_context(|| format!("Failed to apply status of Pipeline '{ns}/{name}'"))?;

    println!("{}", serde_json::to_string_pretty(&applied.to_model())?);
    Ok(())
}
