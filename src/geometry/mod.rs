//! Geometry module — box and frustum math.
//!
//! The substrate for the software geometry-device double: an axis-aligned
//! box built from the origin+extents form the test protocol speaks, and a
//! six-plane frustum extracted from a view-projection matrix. The public
//! test API never evaluates a frustum on the CPU — these types exist so a
//! register-less device can agree with the hardware about outcomes.

mod aabb;
mod frustum;

pub use aabb::Aabb;
pub use frustum::Frustum;
