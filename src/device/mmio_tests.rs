//! Unit tests for mmio.rs
//!
//! The register block is backed by an ordinary array here; volatile
//! access works the same, and the tests can preset the status word and
//! inspect what the device wrote.

use super::*;
use crate::device::{GeometryDevice, GxStatus};
use crate::error::Error;
use crate::fixed::Fixed;

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_new_rejects_null_base() {
    let result = unsafe { MmioGeometryDevice::new(std::ptr::null_mut()) };
    assert!(matches!(result, Err(Error::NullRegisterBlock)));
}

#[test]
fn test_new_rejects_misaligned_base() {
    let mut block = [0u32; 7];
    let misaligned = (block.as_mut_ptr() as usize + 1) as *mut u32;

    let result = unsafe { MmioGeometryDevice::new(misaligned) };
    assert!(matches!(result, Err(Error::MisalignedRegisterBlock(_))));
}

#[test]
fn test_new_accepts_aligned_base() {
    let mut block = [0u32; 7];
    let result = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) };
    assert!(result.is_ok());
}

// ============================================================================
// REGISTER ACCESS
// ============================================================================

#[test]
fn test_write_box_params_fills_registers_in_order() {
    let mut block = [0u32; 7];
    let mut device = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) }.unwrap();

    device.write_box_params([
        Fixed::from_int(1),
        Fixed::from_int(2),
        Fixed::from_int(3),
        Fixed::from_int(4),
        Fixed::from_int(5),
        Fixed::from_int(6),
    ]);

    for reg in 0..6 {
        let expected = Fixed::from_int(reg as i32 + 1).to_bits() as u32;
        assert_eq!(block[reg], expected, "parameter register {}", reg);
    }
    // Status word untouched by parameter writes
    assert_eq!(block[6], 0);
}

#[test]
fn test_write_box_params_preserves_sign_bits() {
    let mut block = [0u32; 7];
    let mut device = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) }.unwrap();

    device.write_box_params([Fixed::from_int(-1); 6]);

    assert_eq!(block[0] as i32, Fixed::from_int(-1).to_bits());
}

#[test]
fn test_busy_reads_status_bit() {
    let mut block = [0u32; 7];
    let mut device = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) }.unwrap();

    block[6] = GxStatus::TEST_BUSY.bits();
    assert!(device.test_busy());

    block[6] = 0;
    assert!(!device.test_busy());
}

#[test]
fn test_result_reads_status_bit() {
    let mut block = [0u32; 7];
    let device = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) }.unwrap();

    block[6] = GxStatus::TEST_RESULT.bits();
    assert!(device.test_result());

    block[6] = 0;
    assert!(!device.test_result());
}

#[test]
fn test_status_ignores_unknown_bits() {
    let mut block = [0u32; 7];
    let mut device = unsafe { MmioGeometryDevice::new(block.as_mut_ptr()) }.unwrap();

    // Unrelated engine status bits share the register on real hardware
    block[6] = 0xFFFF_FFFC;
    assert!(!device.test_busy());
    assert!(!device.test_result());
}
