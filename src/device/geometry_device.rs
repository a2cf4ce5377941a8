/// GeometryDevice trait - box-test register protocol interface
use bitflags::bitflags;

use crate::fixed::Fixed;

bitflags! {
    /// Geometry-engine status register bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GxStatus: u32 {
        /// A box test is still flowing through the pipeline
        const TEST_BUSY = 1 << 0;
        /// Latched result bit of the last completed box test
        const TEST_RESULT = 1 << 1;
    }
}

// ============================================================================
// GeometryDevice trait
// ============================================================================

/// Box-test register protocol of the geometry engine.
///
/// Implemented by the memory-mapped register block on real hardware and
/// by a software double in tests. Whatever the backing, the protocol is
/// the same and carries the same hazards:
///
/// - The device holds exactly **one** pending test. Writing parameters
///   while a test is pending silently discards that test; no error is
///   signaled.
/// - The result bit is meaningful only once the busy bit clears. Until
///   then it holds whatever the last *completed* test latched.
pub trait GeometryDevice: Send {
    /// Write the six box parameters to the command registers.
    ///
    /// Registers are written in register order x, y, z, width, height,
    /// depth; the final write starts the hardware evaluation.
    ///
    /// # Arguments
    ///
    /// * `params` - Box origin and extents, in register order
    fn write_box_params(&mut self, params: [Fixed; 6]);

    /// Read the busy bit of the status register.
    ///
    /// `true` while a submitted test is still flowing through the
    /// pipeline. Takes `&mut self` because polling advances a software
    /// double's simulated pipeline.
    fn test_busy(&mut self) -> bool;

    /// Read the latched result bit.
    ///
    /// # Returns
    ///
    /// `true` if any or all of the last completed test's box is in the
    /// view frustum. Meaningful only once [`test_busy`](Self::test_busy)
    /// reports idle.
    fn test_result(&self) -> bool;
}
