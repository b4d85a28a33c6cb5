//! Body options - optional named configuration resolved at construction
//!
//! Every field is optional. `None` means "use the default" and is resolved by
//! `Body::new` / `PolygonBody::new` / `CircleBody::new`, never here.
//! Values are taken as-is: no range or geometry checks.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_ELASTICITY: f64 = 0.5;
pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_HAS_PHYSICS: bool = false;
pub const DEFAULT_IS_STATIC: bool = true;
pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_POLYGON_WIDTH: f64 = 0.0;
pub const DEFAULT_POLYGON_HEIGHT: f64 = 0.0;

/// Options shared by every body kind
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_physics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
}

impl BodyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options written by a JS host (camelCase keys, unknown keys ignored)
    pub fn from_json(json: &str) -> Result<Self, String> {
        parse_options(json)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_physics(mut self, has_physics: bool) -> Self {
        self.has_physics = Some(has_physics);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }
}

/// Options for a polygon body: base options plus vertex loop and nominal size
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonBodyOptions {
    #[serde(flatten)]
    pub body: BodyOptions,
    /// Local offsets from `position`, in boundary order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vec2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PolygonBodyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        parse_options(json)
    }

    pub fn with_body(mut self, body: BodyOptions) -> Self {
        self.body = body;
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<Vec2>) -> Self {
        self.vertices = Some(vertices);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

/// Options for a circle body: base options plus radius
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleBodyOptions {
    #[serde(flatten)]
    pub body: BodyOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl CircleBodyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        parse_options(json)
    }

    pub fn with_body(mut self, body: BodyOptions) -> Self {
        self.body = body;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Empty input and `null` mean "no options", like calling the JS constructor bare
fn parse_options<T: DeserializeOwned + Default>(json: &str) -> Result<T, String> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(T::default());
    }
    serde_json::from_str(trimmed).map_err(|e| {
        crate::console_warn!("rejected body options: {}", e);
        format!("invalid body options: {}", e)
    })
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
