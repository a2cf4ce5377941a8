//! Unit tests for MockGeometryDevice
//!
//! Tests the simulated pipeline latency and the one-slot pending-test
//! behavior the real hardware exhibits.

use super::*;
use crate::device::GeometryDevice;
use crate::fixed::Fixed;
use glam::Mat4;

fn unit_box() -> [Fixed; 6] {
    [
        Fixed::ZERO,
        Fixed::ZERO,
        Fixed::ZERO,
        Fixed::ONE,
        Fixed::ONE,
        Fixed::ONE,
    ]
}

fn distant_box() -> [Fixed; 6] {
    [
        Fixed::from_int(1000),
        Fixed::from_int(1000),
        Fixed::from_int(1000),
        Fixed::ONE,
        Fixed::ONE,
        Fixed::ONE,
    ]
}

// ============================================================================
// LATENCY SIMULATION
// ============================================================================

#[test]
fn test_new_device_is_idle() {
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 4);

    assert!(!device.test_busy());
    assert_eq!(device.submit_count, 0);
}

#[test]
fn test_busy_for_exactly_configured_polls() {
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 3);
    device.write_box_params(unit_box());

    assert!(device.test_busy());
    assert!(device.test_busy());
    assert!(device.test_busy());
    assert!(!device.test_busy());
    // Stays idle once the pipeline drained
    assert!(!device.test_busy());
    assert_eq!(device.poll_count, 5);
}

#[test]
fn test_zero_latency_device_is_ready_immediately() {
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 0);
    device.write_box_params(unit_box());

    assert!(!device.test_busy());
    assert!(device.test_result());
}

// ============================================================================
// PENDING-TEST SLOT
// ============================================================================

#[test]
fn test_submit_evaluates_against_frustum() {
    // Identity VP → clip cube x,y,z in [-1, 1]
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 0);

    device.write_box_params(unit_box());
    assert!(device.test_result());

    device.write_box_params(distant_box());
    assert!(!device.test_result());
}

#[test]
fn test_resubmit_overwrites_pending_result_and_restarts_latency() {
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 2);

    device.write_box_params(unit_box());
    assert!(device.test_busy());

    // Second submission while the first is still in flight
    device.write_box_params(distant_box());
    assert_eq!(device.submit_count, 2);

    // Latency restarted: two busy polls again
    assert!(device.test_busy());
    assert!(device.test_busy());
    assert!(!device.test_busy());

    // Only the second test's outcome survives
    assert!(!device.test_result());
}

#[test]
fn test_result_latches_until_next_submit() {
    let mut device = MockGeometryDevice::new(Mat4::IDENTITY, 0);
    device.write_box_params(unit_box());

    assert!(device.test_result());
    assert!(device.test_result());
    assert!(device.test_result());
}
