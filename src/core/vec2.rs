use serde::{Deserialize, Serialize};

/// 2D Vector shared by body positions, velocities and vertex offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec2 {
    #[serde(with = "crate::core::json_float")]
    pub x: f64,
    #[serde(with = "crate::core::json_float")]
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Distance from the origin
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Flip the sign of `x` in place
    pub fn invert_x(&mut self) {
        self.x = -self.x;
    }

    /// Flip the sign of `y` in place
    pub fn invert_y(&mut self) {
        self.y = -self.y;
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_3_4_is_5() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn invert_flips_one_axis_only() {
        let mut v = Vec2::new(2.0, -7.0);
        v.invert_x();
        assert_eq!(v, Vec2::new(-2.0, -7.0));
        v.invert_y();
        assert_eq!(v, Vec2::new(-2.0, 7.0));
    }

    #[test]
    fn missing_components_default_to_zero() {
        let v: Vec2 = serde_json::from_str(r#"{"y": 2.5}"#).unwrap();
        assert_eq!(v, Vec2::new(0.0, 2.5));
    }

    #[test]
    fn from_tuple_and_add() {
        let v = Vec2::from((5.0, 6.0)) + Vec2::new(1.0, -1.0);
        assert_eq!(v, Vec2::new(6.0, 5.0));
    }
}
