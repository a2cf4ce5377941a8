/// Frustum — six clipping planes for box visibility tests.
///
/// Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the
/// inward-pointing normal and D the signed distance; a point P is inside
/// when dot(plane, P_homogeneous) >= 0 for all six planes.
///
/// Plane order in the array: left, right, bottom, top, near, far.
use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

use crate::geometry::Aabb;

/// Six frustum planes extracted from a view-projection matrix.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method: each plane is a sum or
    /// difference of matrix rows, then normalized so (A, B, C) is a unit
    /// vector.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.xyz().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Test whether an AABB intersects this frustum.
    ///
    /// Positive-vertex test: for each plane, take the box corner most in
    /// the direction of the plane normal; if that corner is outside the
    /// plane, the whole box is outside.
    ///
    /// Returns `true` if the box is (potentially) inside or intersecting.
    /// May return false positives (conservative), never false negatives —
    /// the same contract the hardware test gives.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            let normal = plane.xyz();

            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
