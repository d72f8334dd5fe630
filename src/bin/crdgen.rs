//! # crdgen
//!
//! Prints the Pipeline CustomResourceDefinition manifest as YAML.
//!
//! ```bash
//! crdgen > config/crd/pipeline.yaml
//! ```

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use pipeline_crd::Pipeline;

fn main() -> Result<()> {
    let crd = serde_yaml::to_string(&Pipeline::crd()).context("Failed to serialize Pipeline CRD")?;
    print!("{crd}");
    Ok(())
}
