//! Body model - plain state for 2D rigid bodies
//!
//! Three kinds share one base record:
//! - `Body`        - position, velocity, material and simulation flags
//! - `PolygonBody` - base + vertex loop + nominal width/height
//! - `CircleBody`  - base + radius
//!
//! There is no stepping here. An engine reads and writes these fields directly.
//! Nothing is validated: zero/negative mass, negative radius, empty vertex
//! lists and non-finite numbers are all stored as given.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

use super::options::{
    BodyOptions, CircleBodyOptions, PolygonBodyOptions, DEFAULT_COLOR, DEFAULT_ELASTICITY,
    DEFAULT_HAS_PHYSICS, DEFAULT_IS_STATIC, DEFAULT_MASS, DEFAULT_POLYGON_HEIGHT,
    DEFAULT_POLYGON_WIDTH, DEFAULT_RADIUS,
};

/// Base body state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Body {
    /// World position
    pub position: Vec2,
    /// World velocity
    pub velocity: Vec2,
    #[serde(with = "crate::core::json_float")]
    pub mass: f64,
    /// Restitution coefficient (unclamped)
    #[serde(with = "crate::core::json_float")]
    pub elasticity: f64,
    /// Presentation only
    pub color: String,
    /// Should an engine integrate this body?
    pub has_physics: bool,
    /// Should an engine treat this body as immovable?
    pub is_static: bool,
}

impl Body {
    pub fn new(options: BodyOptions) -> Self {
        Self {
            position: options.position.unwrap_or_default(),
            velocity: options.velocity.unwrap_or_default(),
            mass: options.mass.unwrap_or(DEFAULT_MASS),
            elasticity: options.elasticity.unwrap_or(DEFAULT_ELASTICITY),
            color: options.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            has_physics: options.has_physics.unwrap_or(DEFAULT_HAS_PHYSICS),
            is_static: options.is_static.unwrap_or(DEFAULT_IS_STATIC),
        }
    }

    /// Axis-aligned rectangle centered at (x, y).
    ///
    /// Vertices: top-left, top-right, bottom-right, bottom-left.
    /// `width`/`height` are stored on the result.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> PolygonBody {
        let hw = width / 2.0;
        let hh = height / 2.0;

        let options = PolygonBodyOptions::new()
            .with_body(BodyOptions::new().with_position(Vec2::new(x, y)))
            .with_vertices(vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ])
            .with_width(width)
            .with_height(height);

        PolygonBody::new(options)
    }

    /// Isosceles triangle centered at (x, y).
    ///
    /// Vertices: apex (top-center), bottom-right, bottom-left.
    /// Unlike `rectangle`, `width`/`height` are NOT stored and stay 0.
    pub fn triangle(x: f64, y: f64, width: f64, height: f64) -> PolygonBody {
        let hw = width / 2.0;
        let hh = height / 2.0;

        let options = PolygonBodyOptions::new()
            .with_body(BodyOptions::new().with_position(Vec2::new(x, y)))
            .with_vertices(vec![
                Vec2::new(0.0, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ]);

        PolygonBody::new(options)
    }

    /// Circle centered at (x, y)
    pub fn circle(x: f64, y: f64, radius: f64) -> CircleBody {
        let options = CircleBodyOptions::new()
            .with_body(BodyOptions::new().with_position(Vec2::new(x, y)))
            .with_radius(radius);

        CircleBody::new(options)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    #[inline]
    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    #[inline]
    pub fn set_vx(&mut self, vx: f64) {
        self.velocity.x = vx;
    }

    #[inline]
    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    #[inline]
    pub fn set_vy(&mut self, vy: f64) {
        self.velocity.y = vy;
    }

    /// Distance of `position` from the origin (not speed)
    pub fn magnitude(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.position.magnitude_squared()
    }

    /// Mirror `position` across the y axis
    pub fn invert_x(&mut self) {
        self.position.invert_x();
    }

    /// Mirror `position` across the x axis
    pub fn invert_y(&mut self) {
        self.position.invert_y();
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(BodyOptions::default())
    }
}

/// Body with an ordered vertex loop.
///
/// `width`/`height` are nominal and independent of `vertices`; keeping them
/// consistent is up to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonBody {
    #[serde(flatten)]
    pub body: Body,
    /// Local offsets from `body.position`, in boundary order (duplicates allowed)
    #[serde(default)]
    pub vertices: Vec<Vec2>,
    #[serde(default, with = "crate::core::json_float")]
    pub width: f64,
    #[serde(default, with = "crate::core::json_float")]
    pub height: f64,
}

impl PolygonBody {
    pub fn new(options: PolygonBodyOptions) -> Self {
        Self {
            body: Body::new(options.body),
            vertices: options.vertices.unwrap_or_default(),
            width: options.width.unwrap_or(DEFAULT_POLYGON_WIDTH),
            height: options.height.unwrap_or(DEFAULT_POLYGON_HEIGHT),
        }
    }

    /// Vertex offsets translated by `body.position`
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let origin = self.body.position;
        self.vertices.iter().map(move |v| origin + *v)
    }
}

impl Default for PolygonBody {
    fn default() -> Self {
        Self::new(PolygonBodyOptions::default())
    }
}

/// Body with a radius
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleBody {
    #[serde(flatten)]
    pub body: Body,
    #[serde(default = "default_radius", with = "crate::core::json_float")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

impl CircleBody {
    pub fn new(options: CircleBodyOptions) -> Self {
        Self {
            body: Body::new(options.body),
            radius: options.radius.unwrap_or(DEFAULT_RADIUS),
        }
    }
}

impl Default for CircleBody {
    fn default() -> Self {
        Self::new(CircleBodyOptions::default())
    }
}

impl AsRef<Body> for PolygonBody {
    fn as_ref(&self) -> &Body {
        &self.body
    }
}

impl AsMut<Body> for PolygonBody {
    fn as_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl AsRef<Body> for CircleBody {
    fn as_ref(&self) -> &Body {
        &self.body
    }
}

impl AsMut<Body> for CircleBody {
    fn as_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Body kind tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Plain,
    Polygon,
    Circle,
}

impl BodyKind {
    /// Stable name, matches the `"kind"` tag in JSON snapshots
    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Plain => "body",
            BodyKind::Polygon => "polygon",
            BodyKind::Circle => "circle",
        }
    }
}

/// Any body kind (closed set)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AnyBody {
    #[serde(rename = "body")]
    Plain(Body),
    #[serde(rename = "polygon")]
    Polygon(PolygonBody),
    #[serde(rename = "circle")]
    Circle(CircleBody),
}

impl AnyBody {
    pub fn kind(&self) -> BodyKind {
        match self {
            AnyBody::Plain(_) => BodyKind::Plain,
            AnyBody::Polygon(_) => BodyKind::Polygon,
            AnyBody::Circle(_) => BodyKind::Circle,
        }
    }

    /// Shared base record
    pub fn body(&self) -> &Body {
        match self {
            AnyBody::Plain(b) => b,
            AnyBody::Polygon(p) => &p.body,
            AnyBody::Circle(c) => &c.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            AnyBody::Plain(b) => b,
            AnyBody::Polygon(p) => &mut p.body,
            AnyBody::Circle(c) => &mut c.body,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonBody> {
        match self {
            AnyBody::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut PolygonBody> {
        match self {
            AnyBody::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&CircleBody> {
        match self {
            AnyBody::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut CircleBody> {
        match self {
            AnyBody::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Snapshot as JSON, tagged by `"kind"`.
    ///
    /// Non-finite numbers are kept (see `core::json_float`), so
    /// `from_json(&to_json())` restores every body.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid body snapshot: {}", e))
    }
}

impl Default for AnyBody {
    fn default() -> Self {
        AnyBody::Plain(Body::default())
    }
}

impl From<Body> for AnyBody {
    fn from(body: Body) -> Self {
        AnyBody::Plain(body)
    }
}

impl From<PolygonBody> for AnyBody {
    fn from(body: PolygonBody) -> Self {
        AnyBody::Polygon(body)
    }
}

impl From<CircleBody> for AnyBody {
    fn from(body: CircleBody) -> Self {
        AnyBody::Circle(body)
    }
}

#[cfg(test)]
#[path = "tests/body_tests.rs"]
mod tests;
