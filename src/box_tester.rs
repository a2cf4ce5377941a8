/// BoxTester — caller-facing box-test operations.
///
/// Translates box geometry into the geometry engine's register protocol
/// and manages the latency between issuing a test and its result
/// becoming valid.
use std::sync::{Arc, Mutex};

use crate::device::GeometryDevice;
use crate::fixed::Fixed;

/// Hardware frustum box tester.
///
/// All entry points take a box as origin `(x, y, z)` plus extents
/// `(width, height, depth)` in object space, in that parameter order,
/// and report whether any or all of the box is inside the view frustum
/// currently loaded into the geometry engine.
///
/// # Caller contract
///
/// The device holds exactly one pending test. Issuing any test — sync or
/// async — silently overwrites a pending one, so an asynchronous test's
/// result must be retrieved with [`result`](Self::result) before the next
/// test is issued. Calling `result` when nothing meaningful is pending
/// returns the outcome of whatever test last physically ran.
///
/// Every operation takes `&mut self`, so a single tester cannot
/// interleave test cycles. Callers sharing a tester across threads must
/// wrap it in `Arc<Mutex<BoxTester>>` and hold the lock across a full
/// issue→retrieve cycle to preserve that serialization.
///
/// # Blocking
///
/// The blocking operations busy-wait on the device's busy bit with no
/// timeout: a hardware fault that never clears the bit blocks forever.
/// The host environment guarantees completion within the fixed pipeline
/// latency absent such a fault.
pub struct BoxTester {
    device: Arc<Mutex<dyn GeometryDevice>>,
}

impl BoxTester {
    /// Create a tester driving the given geometry device.
    ///
    /// # Arguments
    ///
    /// * `device` - Shared handle to the register protocol backend
    pub fn new(device: Arc<Mutex<dyn GeometryDevice>>) -> Self {
        crate::geom_debug!("boxtest::BoxTester", "attached to geometry device");
        Self { device }
    }

    /// Test a fixed-point box against the view frustum, blocking until
    /// the result is valid.
    ///
    /// # Returns
    ///
    /// `true` if any or all of the box is in the view frustum.
    pub fn test(
        &mut self,
        x: Fixed,
        y: Fixed,
        z: Fixed,
        width: Fixed,
        height: Fixed,
        depth: Fixed,
    ) -> bool {
        self.issue([x, y, z, width, height, depth]);
        self.wait_result()
    }

    /// Test a floating-point box against the view frustum, blocking
    /// until the result is valid.
    ///
    /// Coordinates are converted with the pipeline's fixed-point rule
    /// ([`Fixed::from_f32`]) before submission, so outcomes agree with
    /// fixed-point-specified geometry.
    pub fn test_f32(&mut self, x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> bool {
        self.test(
            Fixed::from_f32(x),
            Fixed::from_f32(y),
            Fixed::from_f32(z),
            Fixed::from_f32(width),
            Fixed::from_f32(height),
            Fixed::from_f32(depth),
        )
    }

    /// Issue a fixed-point box test without waiting for the result.
    ///
    /// The engine starts evaluating; the result becomes valid after the
    /// hardware's fixed pipeline latency and must be fetched with
    /// [`result`](Self::result). Do not issue another test before then,
    /// or this test's result is lost.
    pub fn test_async(
        &mut self,
        x: Fixed,
        y: Fixed,
        z: Fixed,
        width: Fixed,
        height: Fixed,
        depth: Fixed,
    ) {
        self.issue([x, y, z, width, height, depth]);
    }

    /// Issue a floating-point box test without waiting for the result.
    ///
    /// Same contract as [`test_async`](Self::test_async), with the
    /// [`test_f32`](Self::test_f32) conversion rule.
    pub fn test_async_f32(&mut self, x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) {
        self.test_async(
            Fixed::from_f32(x),
            Fixed::from_f32(y),
            Fixed::from_f32(z),
            Fixed::from_f32(width),
            Fixed::from_f32(height),
            Fixed::from_f32(depth),
        );
    }

    /// Retrieve the result of the last issued test, blocking until it is
    /// valid.
    ///
    /// This is the synchronization point for asynchronous tests; it may
    /// stall for the remainder of the pipeline latency.
    ///
    /// # Returns
    ///
    /// `true` if any or all of the last tested box is in the view
    /// frustum.
    pub fn result(&mut self) -> bool {
        self.wait_result()
    }

    fn issue(&mut self, params: [Fixed; 6]) {
        crate::geom_trace!(
            "boxtest::BoxTester",
            "box test issued: origin=({}, {}, {}) extents=({}, {}, {})",
            params[0],
            params[1],
            params[2],
            params[3],
            params[4],
            params[5]
        );
        self.device.lock().unwrap().write_box_params(params);
    }

    fn wait_result(&mut self) -> bool {
        loop {
            let mut device = self.device.lock().unwrap();
            if !device.test_busy() {
                let result = device.test_result();
                crate::geom_trace!("boxtest::BoxTester", "box test result: {}", result);
                return result;
            }
            drop(device);
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
#[path = "box_tester_tests.rs"]
mod tests;
