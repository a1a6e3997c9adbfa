//! Output document assembly and JSON serialization

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::io::configuration::{
    DEFAULT_ACTOR_COUNT, DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_SATURATION,
    DEFAULT_VEHICLE_COUNT, DEFAULT_WARMTH, DEFAULT_ZOOM,
};
use crate::io::error::{GenerationError, Result};
use crate::spatial::Grid;

/// Colour grading the client applies to the rendered scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualAdjustments {
    /// Brightness multiplier
    pub brightness: f64,
    /// Contrast multiplier
    pub contrast: f64,
    /// Saturation multiplier
    pub saturation: f64,
    /// Colour temperature shift
    pub warmth: f64,
}

impl Default for VisualAdjustments {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            saturation: DEFAULT_SATURATION,
            warmth: DEFAULT_WARMTH,
        }
    }
}

/// Scalar scene parameters shipped with the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    /// Pedestrians to spawn
    pub actor_count: u32,
    /// Vehicles to spawn
    pub vehicle_count: u32,
    /// Initial camera zoom
    pub zoom: f64,
    /// Colour grading
    pub visual_adjustments: VisualAdjustments,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            actor_count: DEFAULT_ACTOR_COUNT,
            vehicle_count: DEFAULT_VEHICLE_COUNT,
            zoom: DEFAULT_ZOOM,
            visual_adjustments: VisualAdjustments::default(),
        }
    }
}

/// The finished layout handed to the rendering client
///
/// Built once after composition; exposes no mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    grid: Grid,
    #[serde(flatten)]
    scene: SceneSettings,
    generated_at: u64,
}

impl Document {
    /// Wrap a finished grid with scene metadata and a timestamp in ms since the Unix epoch
    pub fn assemble(grid: Grid, scene: SceneSettings, generated_at: u64) -> Self {
        Self {
            grid,
            scene,
            generated_at,
        }
    }

    /// Wrap a finished grid, stamped with the current wall-clock time
    pub fn assemble_now(grid: Grid, scene: SceneSettings) -> Self {
        Self::assemble(grid, scene, now_millis())
    }

    /// The composed grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Scene metadata
    pub const fn scene(&self) -> &SceneSettings {
        &self.scene
    }

    /// Generation time in ms since the Unix epoch
    pub const fn generated_at(&self) -> u64 {
        self.generated_at
    }

    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Serialize as JSON into `writer`, followed by a newline
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn write_json<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Write the JSON document to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be created, or writing fails
    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(path).map_err(|e| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        self.write_json(std::io::BufWriter::new(file), pretty)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
