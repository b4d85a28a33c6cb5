//! JS facade over the body model
//!
//! Property names follow the browser host (`hasPhysics`, `magnitudeSquared`).
//! Option parse failures are thrown as JS `Error`s; everything else is total.

use wasm_bindgen::prelude::*;

use crate::core::vec2::Vec2;
use crate::domain::body::{AnyBody, Body, CircleBody, PolygonBody};
use crate::domain::options::{BodyOptions, CircleBodyOptions, PolygonBodyOptions};

fn js_error(msg: String) -> JsValue {
    js_sys::Error::new(&msg).into()
}

#[wasm_bindgen]
pub struct BodyHandle {
    inner: AnyBody,
}

#[wasm_bindgen]
impl BodyHandle {
    /// Plain body from JSON options (`undefined`/empty = all defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<BodyHandle, JsValue> {
        let options =
            BodyOptions::from_json(options_json.as_deref().unwrap_or("")).map_err(js_error)?;
        Ok(Self::wrap(Body::new(options)))
    }

    /// Polygon body from JSON options
    #[wasm_bindgen(js_name = fromPolygonOptions)]
    pub fn polygon(options_json: Option<String>) -> Result<BodyHandle, JsValue> {
        let options = PolygonBodyOptions::from_json(options_json.as_deref().unwrap_or(""))
            .map_err(js_error)?;
        Ok(Self::wrap(PolygonBody::new(options)))
    }

    /// Circle body from JSON options
    #[wasm_bindgen(js_name = fromCircleOptions)]
    pub fn circle_from_options(options_json: Option<String>) -> Result<BodyHandle, JsValue> {
        let options = CircleBodyOptions::from_json(options_json.as_deref().unwrap_or(""))
            .map_err(js_error)?;
        Ok(Self::wrap(CircleBody::new(options)))
    }

    /// Restore from a `toJson()` snapshot
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<BodyHandle, JsValue> {
        let inner = AnyBody::from_json(json).map_err(js_error)?;
        Ok(Self { inner })
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> BodyHandle {
        Self::wrap(Body::rectangle(x, y, width, height))
    }

    pub fn triangle(x: f64, y: f64, width: f64, height: f64) -> BodyHandle {
        Self::wrap(Body::triangle(x, y, width, height))
    }

    pub fn circle(x: f64, y: f64, radius: f64) -> BodyHandle {
        Self::wrap(Body::circle(x, y, radius))
    }

    /// "body" | "polygon" | "circle"
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.inner.kind().as_str().to_string()
    }

    // === Position / velocity aliases ===

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.body().x()
    }
    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, x: f64) {
        self.inner.body_mut().set_x(x);
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.body().y()
    }
    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, y: f64) {
        self.inner.body_mut().set_y(y);
    }

    #[wasm_bindgen(getter)]
    pub fn vx(&self) -> f64 {
        self.inner.body().vx()
    }
    #[wasm_bindgen(setter)]
    pub fn set_vx(&mut self, vx: f64) {
        self.inner.body_mut().set_vx(vx);
    }

    #[wasm_bindgen(getter)]
    pub fn vy(&self) -> f64 {
        self.inner.body().vy()
    }
    #[wasm_bindgen(setter)]
    pub fn set_vy(&mut self, vy: f64) {
        self.inner.body_mut().set_vy(vy);
    }

    #[wasm_bindgen(getter)]
    pub fn magnitude(&self) -> f64 {
        self.inner.body().magnitude()
    }

    #[wasm_bindgen(getter = magnitudeSquared)]
    pub fn magnitude_squared(&self) -> f64 {
        self.inner.body().magnitude_squared()
    }

    /// `[x, y]`
    pub fn position(&self) -> Vec<f64> {
        let p = self.inner.body().position;
        vec![p.x, p.y]
    }

    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.inner.body_mut().position = Vec2::new(x, y);
    }

    /// `[vx, vy]`
    pub fn velocity(&self) -> Vec<f64> {
        let v = self.inner.body().velocity;
        vec![v.x, v.y]
    }

    #[wasm_bindgen(js_name = setVelocity)]
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.inner.body_mut().velocity = Vec2::new(vx, vy);
    }

    #[wasm_bindgen(js_name = invertX)]
    pub fn invert_x(&mut self) {
        self.inner.body_mut().invert_x();
    }

    #[wasm_bindgen(js_name = invertY)]
    pub fn invert_y(&mut self) {
        self.inner.body_mut().invert_y();
    }

    // === Material / flags ===

    #[wasm_bindgen(getter)]
    pub fn mass(&self) -> f64 {
        self.inner.body().mass
    }
    #[wasm_bindgen(setter)]
    pub fn set_mass(&mut self, mass: f64) {
        self.inner.body_mut().mass = mass;
    }

    #[wasm_bindgen(getter)]
    pub fn elasticity(&self) -> f64 {
        self.inner.body().elasticity
    }
    #[wasm_bindgen(setter)]
    pub fn set_elasticity(&mut self, elasticity: f64) {
        self.inner.body_mut().elasticity = elasticity;
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.inner.body().color.clone()
    }
    #[wasm_bindgen(setter)]
    pub fn set_color(&mut self, color: String) {
        self.inner.body_mut().color = color;
    }

    #[wasm_bindgen(getter = hasPhysics)]
    pub fn has_physics(&self) -> bool {
        self.inner.body().has_physics
    }
    #[wasm_bindgen(setter = hasPhysics)]
    pub fn set_has_physics(&mut self, has_physics: bool) {
        self.inner.body_mut().has_physics = has_physics;
    }

    #[wasm_bindgen(getter = isStatic)]
    pub fn is_static(&self) -> bool {
        self.inner.body().is_static
    }
    #[wasm_bindgen(setter = isStatic)]
    pub fn set_is_static(&mut self, is_static: bool) {
        self.inner.body_mut().is_static = is_static;
    }

    // === Variant fields (undefined / no-op on other kinds) ===

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> Option<f64> {
        self.inner.as_circle().map(|c| c.radius)
    }

    #[wasm_bindgen(js_name = setRadius)]
    pub fn set_radius(&mut self, radius: f64) {
        if let Some(c) = self.inner.as_circle_mut() {
            c.radius = radius;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<f64> {
        self.inner.as_polygon().map(|p| p.width)
    }

    #[wasm_bindgen(js_name = setWidth)]
    pub fn set_width(&mut self, width: f64) {
        if let Some(p) = self.inner.as_polygon_mut() {
            p.width = width;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<f64> {
        self.inner.as_polygon().map(|p| p.height)
    }

    #[wasm_bindgen(js_name = setHeight)]
    pub fn set_height(&mut self, height: f64) {
        if let Some(p) = self.inner.as_polygon_mut() {
            p.height = height;
        }
    }

    /// Local vertices as `[x0, y0, x1, y1, ...]` (empty for non-polygons)
    pub fn vertices(&self) -> Vec<f64> {
        match self.inner.as_polygon() {
            Some(p) => p.vertices.iter().flat_map(|v| [v.x, v.y]).collect(),
            None => Vec::new(),
        }
    }

    /// Replace the vertex loop from `[x0, y0, x1, y1, ...]`.
    /// A trailing unpaired value is dropped.
    #[wasm_bindgen(js_name = setVertices)]
    pub fn set_vertices(&mut self, flat: Vec<f64>) {
        if let Some(p) = self.inner.as_polygon_mut() {
            p.vertices = flat.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect();
        }
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        self.inner.to_json()
    }
}

impl BodyHandle {
    fn wrap(body: impl Into<AnyBody>) -> Self {
        Self { inner: body.into() }
    }

    pub fn inner(&self) -> &AnyBody {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut AnyBody {
        &mut self.inner
    }

    pub fn into_inner(self) -> AnyBody {
        self.inner
    }
}

impl From<AnyBody> for BodyHandle {
    fn from(inner: AnyBody) -> Self {
        Self { inner }
    }
}
