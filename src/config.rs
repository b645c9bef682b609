use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_title")]
    pub title: String,
    #[serde(default = "WindowConfig::default_width")]
    pub width: u32,
    #[serde(default = "WindowConfig::default_height")]
    pub height: u32,
}

impl WindowConfig {
    fn default_title() -> String {
        "Kite Editor".to_string()
    }

    const fn default_width() -> u32 {
        1280
    }

    const fn default_height() -> u32 {
        720
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "CameraConfig::default_fov_y_degrees")]
    pub fov_y_degrees: f32,
    #[serde(default = "CameraConfig::default_near")]
    pub near: f32,
    #[serde(default = "CameraConfig::default_far")]
    pub far: f32,
    #[serde(default = "CameraConfig::default_position")]
    pub position: [f32; 3],
    #[serde(default = "CameraConfig::default_target")]
    pub target: [f32; 3],
}

impl CameraConfig {
    const fn default_fov_y_degrees() -> f32 {
        45.0
    }

    const fn default_near() -> f32 {
        0.1
    }

    const fn default_far() -> f32 {
        1000.0
    }

    const fn default_position() -> [f32; 3] {
        [0.0, 10.0, 20.0]
    }

    const fn default_target() -> [f32; 3] {
        [0.0, 0.0, 0.0]
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: Self::default_fov_y_degrees(),
            near: Self::default_near(),
            far: Self::default_far(),
            position: Self::default_position(),
            target: Self::default_target(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundConfig {
    #[serde(default = "GroundConfig::default_extent")]
    pub extent: f32,
    #[serde(default = "GroundConfig::default_grid_divisions")]
    pub grid_divisions: u32,
}

impl GroundConfig {
    const fn default_extent() -> f32 {
        100.0
    }

    const fn default_grid_divisions() -> u32 {
        20
    }
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self { extent: Self::default_extent(), grid_divisions: Self::default_grid_divisions() }
    }
}

/// Ranges for randomly sized objects spawned by the create tools.
#[derive(Debug, Clone, Deserialize)]
pub struct SpawnConfig {
    #[serde(default = "SpawnConfig::default_box_size_min")]
    pub box_size_min: f32,
    #[serde(default = "SpawnConfig::default_box_size_max")]
    pub box_size_max: f32,
    #[serde(default = "SpawnConfig::default_sphere_radius_min")]
    pub sphere_radius_min: f32,
    #[serde(default = "SpawnConfig::default_sphere_radius_max")]
    pub sphere_radius_max: f32,
}

impl SpawnConfig {
    const fn default_box_size_min() -> f32 {
        1.0
    }

    const fn default_box_size_max() -> f32 {
        5.0
    }

    const fn default_sphere_radius_min() -> f32 {
        0.5
    }

    const fn default_sphere_radius_max() -> f32 {
        3.0
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            box_size_min: Self::default_box_size_min(),
            box_size_max: Self::default_box_size_max(),
            sphere_radius_min: Self::default_sphere_radius_min(),
            sphere_radius_max: Self::default_sphere_radius_max(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub ground: GroundConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
}

impl EditorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor config at {}", path.display()))?;
        let config = serde_json::from_str(&text).context("Failed to parse editor config JSON")?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("[config] load error: {err:?}; falling back to defaults");
                Self::default()
            }
        }
    }
}
