//! JSON output of the renderer-facing transforms.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use physics::BallTransform;
use serde::{Deserialize, Serialize};

/// One ball as written to a dump file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRecord {
    pub position: [f32; 3],
    pub radius: f32,
    pub rotation: [f32; 3],
    pub scale: f32,
    pub rotation_delta: [f32; 3],
}

impl From<&BallTransform> for TransformRecord {
    fn from(t: &BallTransform) -> Self {
        Self {
            position: t.position.to_array(),
            radius: t.radius,
            rotation: t.rotation.to_array(),
            scale: t.scale,
            rotation_delta: t.rotation_delta.to_array(),
        }
    }
}

/// Write `transforms` to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialisation fails or the file cannot be written.
pub fn write_transforms(path: &Path, transforms: &[BallTransform]) -> Result<()> {
    let records: Vec<TransformRecord> = transforms.iter().map(TransformRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).context("serialising transforms")?;
    fs::write(path, json).with_context(|| format!("writing transforms to {}", path.display()))?;
    tracing::info!(count = records.len(), path = %path.display(), "transforms written");
    Ok(())
}
