/// Memory-mapped geometry-device register block.
///
/// Register layout, in 32-bit words from the base:
///
/// | Word | Register        | Access     |
/// |------|-----------------|------------|
/// | 0..6 | box parameters  | write-only |
/// | 6    | status          | read-only  |
///
/// Parameter words are written in register order x, y, z, width, height,
/// depth; the sixth write triggers evaluation. The status word carries
/// [`GxStatus::TEST_BUSY`] and [`GxStatus::TEST_RESULT`].
use std::ptr;

use crate::device::{GeometryDevice, GxStatus};
use crate::error::{Error, Result};
use crate::fixed::Fixed;

/// Word offset of the status register from the block base.
const STATUS_REG: usize = 6;

/// The geometry engine's box-test registers, accessed through volatile
/// reads and writes at a caller-supplied base address.
#[derive(Debug)]
pub struct MmioGeometryDevice {
    base: *mut u32,
}

// Sole owner of its register block; the pointer is never shared.
unsafe impl Send for MmioGeometryDevice {}

impl MmioGeometryDevice {
    /// Map the box-test register block at `base`.
    ///
    /// # Arguments
    ///
    /// * `base` - Address of the first parameter register
    ///
    /// # Errors
    ///
    /// Rejects a null or non-word-aligned base address.
    ///
    /// # Safety
    ///
    /// `base` must point to the geometry engine's box-test register
    /// block (seven 32-bit words), valid for volatile access for the
    /// lifetime of the device, with no other instance mapping the same
    /// block.
    pub unsafe fn new(base: *mut u32) -> Result<Self> {
        if base.is_null() {
            crate::geom_error!("boxtest::MmioGeometryDevice", "rejected null register base");
            return Err(Error::NullRegisterBlock);
        }
        if (base as usize) % std::mem::align_of::<u32>() != 0 {
            crate::geom_error!(
                "boxtest::MmioGeometryDevice",
                "rejected misaligned register base {:#x}",
                base as usize
            );
            return Err(Error::MisalignedRegisterBlock(base as usize));
        }

        crate::geom_debug!(
            "boxtest::MmioGeometryDevice",
            "register block mapped at {:#x}",
            base as usize
        );
        Ok(Self { base })
    }

    fn status(&self) -> GxStatus {
        GxStatus::from_bits_truncate(unsafe { ptr::read_volatile(self.base.add(STATUS_REG)) })
    }
}

impl GeometryDevice for MmioGeometryDevice {
    fn write_box_params(&mut self, params: [Fixed; 6]) {
        // Register order is the trigger contract: the sixth write starts
        // the evaluation, so these must not be reordered.
        for (reg, param) in params.iter().enumerate() {
            unsafe { ptr::write_volatile(self.base.add(reg), param.to_bits() as u32) };
        }
    }

    fn test_busy(&mut self) -> bool {
        self.status().contains(GxStatus::TEST_BUSY)
    }

    fn test_result(&self) -> bool {
        self.status().contains(GxStatus::TEST_RESULT)
    }
}

#[cfg(test)]
#[path = "mmio_tests.rs"]
mod tests;
