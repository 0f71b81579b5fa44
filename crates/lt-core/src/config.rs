use crate::error::{ConfigError, check_non_negative};
use crate::layout::{PlacementPolicy, clamp_side};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Operator-facing settings for a new annotation.
///
/// Widths and heights below the 10-unit floor are accepted and clamped when
/// applied; only non-finite or negative values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Number of sample rectangles along the line.
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub policy: PlacementPolicy,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            count: 3,
            width: 60.0,
            height: 40.0,
            policy: PlacementPolicy::Interior,
        }
    }
}

impl AnnotationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        check_non_negative("width", self.width)?;
        check_non_negative("height", self.height)?;
        Ok(())
    }

    /// The shared rectangle size, with the floor applied.
    pub fn size(&self) -> Size {
        Size::new(clamp_side(self.width), clamp_side(self.height))
    }
}
