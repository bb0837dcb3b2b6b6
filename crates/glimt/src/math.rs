//! 2D vector math and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam)'s [`Vec2`] so users don't need to
//! depend on it directly. Sum, difference, and scaling are plain `Vec2`
//! operators; this module adds the handful of helpers the simulation needs in
//! a specific form.

pub use glam::Vec2;

/// Scale `v` to magnitude `s`.
///
/// The zero vector is returned unchanged regardless of `s` — callers rely on
/// this when resolving movement input with no keys held. This is a documented
/// special case, not a division-by-zero hazard.
pub fn normalize_to(v: Vec2, s: f32) -> Vec2 {
    if v == Vec2::ZERO {
        return v;
    }
    v / v.length() * s
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Squared Euclidean distance. Cheaper than [`distance`] — the collision
/// system compares against squared thresholds to avoid the square root.
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}

/// Dot product.
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

/// Unsigned angle between two vectors in radians, via
/// `acos(a·b / (|a||b|))`.
///
/// Unlike `Vec2::angle_to`, the result is always in `[0, π]`.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    (dot(a, b) / (a.length() * b.length())).acos()
}
