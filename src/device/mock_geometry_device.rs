/// Mock geometry device for unit tests (no hardware required)
///
/// Backs the register protocol with a software frustum evaluator and a
/// deterministic pipeline-latency simulation: after a submission the
/// busy bit stays set for a configured number of polls, then clears.
/// This makes both the blocking and the asynchronous test paths (and
/// their hazards) testable without real timing dependencies.
use glam::{Mat4, Vec3};

use crate::device::GeometryDevice;
use crate::fixed::Fixed;
use crate::geometry::{Aabb, Frustum};

/// Software double of the geometry engine's box-test unit.
#[derive(Debug)]
pub struct MockGeometryDevice {
    frustum: Frustum,
    latency_polls: u32,
    polls_remaining: u32,
    result: bool,
    /// Number of box submissions observed
    pub submit_count: u32,
    /// Number of busy-bit polls observed
    pub poll_count: u32,
}

impl MockGeometryDevice {
    /// Create a mock device.
    ///
    /// # Arguments
    ///
    /// * `view_projection` - Matrix the simulated engine has loaded; the
    ///   test frustum is extracted from it
    /// * `latency_polls` - How many busy polls a submitted test stays
    ///   in the simulated pipeline before its result becomes valid
    pub fn new(view_projection: Mat4, latency_polls: u32) -> Self {
        Self {
            frustum: Frustum::from_view_projection(&view_projection),
            latency_polls,
            polls_remaining: 0,
            result: false,
            submit_count: 0,
            poll_count: 0,
        }
    }
}

impl GeometryDevice for MockGeometryDevice {
    fn write_box_params(&mut self, params: [Fixed; 6]) {
        let origin = Vec3::new(params[0].to_f32(), params[1].to_f32(), params[2].to_f32());
        let extents = Vec3::new(params[3].to_f32(), params[4].to_f32(), params[5].to_f32());

        // The outcome is decided at submit time; the latency window only
        // delays when it becomes observable. Submitting again before the
        // previous result was read overwrites it, as on hardware.
        self.result = self
            .frustum
            .intersects_aabb(&Aabb::from_origin_extents(origin, extents));
        self.polls_remaining = self.latency_polls;
        self.submit_count += 1;
    }

    fn test_busy(&mut self) -> bool {
        self.poll_count += 1;
        if self.polls_remaining > 0 {
            self.polls_remaining -= 1;
            true
        } else {
            false
        }
    }

    fn test_result(&self) -> bool {
        self.result
    }
}

#[cfg(test)]
#[path = "mock_geometry_device_tests.rs"]
mod tests;
