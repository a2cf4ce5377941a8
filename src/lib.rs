/*!
# Frustum Boxtest

Box-test protocol adapter for a fixed-function 3D geometry engine.

The geometry engine exposes a hardware frustum test: write the six
parameters of an axis-aligned box (origin and extents, in object space)
to its command registers, wait out the pipeline latency, then read back
a single bit telling whether any part of the box falls inside the view
frustum currently loaded into the engine. This crate wraps that register
protocol behind a small, portable API:

- **GeometryDevice**: the register-level seam. Implemented by
  [`MmioGeometryDevice`](device::MmioGeometryDevice) for the real
  memory-mapped register block, and by a software mock in unit tests.
- **BoxTester**: the caller-facing component. Blocking and asynchronous
  test entry points in both fixed-point and floating-point form, plus the
  result-retrieval call that synchronizes an asynchronous test.
- **Fixed**: the signed fixed-point vertex coordinate format the
  parameter registers hold.

The hardware holds exactly one pending test and reports readiness through
a busy bit, so the protocol carries two caller hazards this crate
documents rather than hides: issuing a new test silently overwrites the
pending one, and waiting on a device that never completes blocks forever.
See [`BoxTester`] for the contract.
*/

// Internal modules
mod box_tester;
mod error;
mod fixed;
pub mod device;
pub mod geometry;
pub mod log;

pub use box_tester::BoxTester;
pub use device::{GeometryDevice, GxStatus, MmioGeometryDevice};
pub use error::{Error, Result};
pub use fixed::Fixed;

// Re-export math library at crate root
pub use glam;
