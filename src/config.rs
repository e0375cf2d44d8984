//! Scene configuration
//!
//! The defaults are the shipped constants. Presets can be loaded from YAML,
//! any omitted field falls back to its default.

use serde::Deserialize;

use crate::error::{MorphError, Result};

/// Population sizes and tree geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Number of needle elements
    pub needle_count: usize,
    /// Number of ornament elements
    pub ornament_count: usize,
    /// Cone height (apex at y = tree_height)
    pub tree_height: f32,
    /// Cone radius at y = 0
    pub tree_base_radius: f32,
    /// Radius of the scatter-cloud sphere
    pub scatter_radius: f32,
    /// Seed for the element dataset
    pub seed: u64,
    /// Clamp blend factors to [0, 1]. Disabling allows overshoot on long frames.
    pub clamp_blend: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            needle_count: 1200,
            ornament_count: 150,
            tree_height: 12.0,
            tree_base_radius: 4.5,
            scatter_radius: 15.0,
            seed: 42,
            clamp_blend: true,
        }
    }
}

impl TreeConfig {
    /// Parse a preset from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TreeConfig =
            serde_yaml::from_str(yaml).map_err(|e| MorphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_counts(mut self, needles: usize, ornaments: usize) -> Self {
        self.needle_count = needles;
        self.ornament_count = ornaments;
        self
    }

    /// Reject geometry that would collapse the samplers into NaN positions
    pub fn validate(&self) -> Result<()> {
        check_positive("tree_height", self.tree_height)?;
        check_positive("tree_base_radius", self.tree_base_radius)?;
        check_positive("scatter_radius", self.scatter_radius)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MorphError::InvalidGeometry { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TreeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_height() {
        let config = TreeConfig { tree_height: 0.0, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(MorphError::InvalidGeometry { field: "tree_height", value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_negative_and_nan_radius() {
        let config = TreeConfig { tree_base_radius: -1.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = TreeConfig { scatter_radius: f32::NAN, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scatter_radius"));
    }

    #[test]
    fn test_yaml_partial_preset() {
        let yaml = r#"
needle_count: 300
tree_height: 8.0
clamp_blend: false
"#;
        let config = TreeConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.needle_count, 300);
        assert_eq!(config.tree_height, 8.0);
        assert!(!config.clamp_blend);
        // Untouched fields keep their defaults
        assert_eq!(config.ornament_count, 150);
        assert_eq!(config.scatter_radius, 15.0);
    }

    #[test]
    fn test_yaml_rejects_degenerate_geometry() {
        let result = TreeConfig::from_yaml("tree_base_radius: 0.0\n");
        assert!(matches!(result, Err(MorphError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_yaml_parse_error() {
        let result = TreeConfig::from_yaml("needle_count: [not, a, number]");
        assert!(matches!(result, Err(MorphError::Config(_))));
    }
}
