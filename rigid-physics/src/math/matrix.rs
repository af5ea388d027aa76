// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! 3x3 and 4x4 row-major matrices
//!
//! Field names are `<row><column>`, so `xy` is row X, column Y. Rotation
//! matrices built here rotate column vectors: `v' = m * v`.

use super::{aeq, Quaternion, Transform, Vector3};
use crate::error::MathError;

/// A 3x3 matrix, used for rotations and inertia style products
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Matrix3 {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub yx: f64,
    pub yy: f64,
    pub yz: f64,
    pub zx: f64,
    pub zy: f64,
    pub zz: f64,
}

impl Matrix3 {
    /// Create a matrix from its rows
    pub const fn from_rows(x: [f64; 3], y: [f64; 3], z: [f64; 3]) -> Self {
        Matrix3 {
            xx: x[0],
            xy: x[1],
            xz: x[2],
            yx: y[0],
            yy: y[1],
            yz: y[2],
            zx: z[0],
            zy: z[1],
            zz: z[2],
        }
    }

    /// The identity matrix
    pub const fn identity() -> Self {
        Matrix3::from_rows([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    /// Rows as arrays
    pub fn rows(&self) -> [[f64; 3]; 3] {
        [
            [self.xx, self.xy, self.xz],
            [self.yx, self.yy, self.yz],
            [self.zx, self.zy, self.zz],
        ]
    }

    /// Element-wise approximate equality
    pub fn aeq(&self, other: &Matrix3) -> bool {
        self.rows()
            .iter()
            .flatten()
            .zip(other.rows().iter().flatten())
            .all(|(a, b)| aeq(*a, *b))
    }

    /// `self = a^T`
    pub fn set_transpose(&mut self, a: Matrix3) -> &mut Self {
        *self = Matrix3::from_rows([a.xx, a.yx, a.zx], [a.xy, a.yy, a.zy], [a.xz, a.yz, a.zz]);
        self
    }

    /// `self = a + b`
    pub fn set_add(&mut self, a: Matrix3, b: Matrix3) -> &mut Self {
        *self = a.zip_with(&b, |l, r| l + r);
        self
    }

    /// `self = a - b`
    pub fn set_sub(&mut self, a: Matrix3, b: Matrix3) -> &mut Self {
        *self = a.zip_with(&b, |l, r| l - r);
        self
    }

    /// Scale every element in place
    pub fn scale(&mut self, s: f64) -> &mut Self {
        let a = *self;
        *self = a.zip_with(&a, |l, _| l * s);
        self
    }

    /// Matrix product `self = l * r`
    pub fn set_mult(&mut self, l: Matrix3, r: Matrix3) -> &mut Self {
        *self = Matrix3::from_rows(
            [
                l.xx * r.xx + l.xy * r.yx + l.xz * r.zx,
                l.xx * r.xy + l.xy * r.yy + l.xz * r.zy,
                l.xx * r.xz + l.xy * r.yz + l.xz * r.zz,
            ],
            [
                l.yx * r.xx + l.yy * r.yx + l.yz * r.zx,
                l.yx * r.xy + l.yy * r.yy + l.yz * r.zy,
                l.yx * r.xz + l.yy * r.yz + l.yz * r.zz,
            ],
            [
                l.zx * r.xx + l.zy * r.yx + l.zz * r.zx,
                l.zx * r.xy + l.zy * r.yy + l.zz * r.zy,
                l.zx * r.xz + l.zy * r.yz + l.zz * r.zz,
            ],
        );
        self
    }

    /// Set to the rotation described by unit quaternion `q`
    pub fn set_quaternion(&mut self, q: Quaternion) -> &mut Self {
        let (xx, yy, zz) = (q.x * q.x, q.y * q.y, q.z * q.z);
        let (xy, xz, yz) = (q.x * q.y, q.x * q.z, q.y * q.z);
        let (wx, wy, wz) = (q.w * q.x, q.w * q.y, q.w * q.z);
        *self = Matrix3::from_rows(
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        );
        self
    }

    /// Set to the skew-symmetric (cross product) matrix of `v`
    ///
    /// `m * a == v x a` for any `a`.
    pub fn set_skew_symmetric(&mut self, v: Vector3) -> &mut Self {
        *self = Matrix3::from_rows([0.0, -v.z, v.y], [v.z, 0.0, -v.x], [-v.y, v.x, 0.0]);
        self
    }

    /// Determinant
    pub fn det(&self) -> f64 {
        self.xx * (self.yy * self.zz - self.yz * self.zy)
            + self.xy * (self.yz * self.zx - self.yx * self.zz)
            + self.xz * (self.yx * self.zy - self.yy * self.zx)
    }

    /// Signed cofactor of the element at `(row, col)`, rows and columns
    /// counted from 0, or `None` when either index is larger than 2
    pub fn cofactor(&self, row: usize, col: usize) -> Option<f64> {
        self.cofactors().get(row)?.get(col).copied()
    }

    // All nine signed cofactors, row-major
    fn cofactors(&self) -> [[f64; 3]; 3] {
        [
            [
                self.yy * self.zz - self.yz * self.zy,
                self.yz * self.zx - self.yx * self.zz,
                self.yx * self.zy - self.yy * self.zx,
            ],
            [
                self.xz * self.zy - self.xy * self.zz,
                self.xx * self.zz - self.xz * self.zx,
                self.xy * self.zx - self.xx * self.zy,
            ],
            [
                self.xy * self.yz - self.xz * self.yy,
                self.xz * self.yx - self.xx * self.yz,
                self.xx * self.yy - self.xy * self.yx,
            ],
        ]
    }

    /// `self = adj(a)`, the transposed cofactor matrix
    pub fn set_adjoint(&mut self, a: Matrix3) -> &mut Self {
        let c = a.cofactors();
        *self = Matrix3::from_rows(
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        );
        self
    }

    /// `self = a^-1`
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when `a` has a zero determinant.
    /// The receiver is left unchanged in that case.
    pub fn set_inverse(&mut self, a: Matrix3) -> Result<&mut Self, MathError> {
        let det = a.det();
        if det == 0.0 {
            log::warn!("inverse requested for singular matrix");
            return Err(MathError::SingularMatrix);
        }
        self.set_adjoint(a).scale(1.0 / det);
        Ok(self)
    }

    /// Set to a rotation of `angle` radians about axis `(ax, ay, az)`
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroAxis`] for a zero length axis, leaving the
    /// receiver unchanged. Note that [`Quaternion::set_axis_angle`] treats
    /// the same input as the identity rotation instead.
    pub fn set_axis_angle(
        &mut self,
        ax: f64,
        ay: f64,
        az: f64,
        angle: f64,
    ) -> Result<&mut Self, MathError> {
        let len_sqr = ax * ax + ay * ay + az * az;
        if len_sqr == 0.0 {
            log::warn!("matrix rotation about a zero length axis ignored");
            return Err(MathError::ZeroAxis);
        }
        let inv_len = 1.0 / len_sqr.sqrt();
        let (ax, ay, az) = (ax * inv_len, ay * inv_len, az * inv_len);
        let (c, s) = (angle.cos(), angle.sin());
        let t = 1.0 - c;
        *self = Matrix3::from_rows(
            [c + ax * ax * t, -az * s + ay * ax * t, ay * s + az * ax * t],
            [az * s + ax * ay * t, c + ay * ay * t, -ax * s + az * ay * t],
            [-ay * s + ax * az * t, ax * s + ay * az * t, c + az * az * t],
        );
        Ok(self)
    }

    fn zip_with(&self, other: &Matrix3, f: impl Fn(f64, f64) -> f64) -> Matrix3 {
        let (a, b) = (self.rows(), other.rows());
        let row = |i: usize| [f(a[i][0], b[i][0]), f(a[i][1], b[i][1]), f(a[i][2], b[i][2])];
        Matrix3::from_rows(row(0), row(1), row(2))
    }
}

/// A 4x4 matrix for homogeneous transforms
///
/// Translations live in the W row, matching row vectors multiplied on the
/// left (`v' = v * m`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Matrix4 {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub xw: f64,
    pub yx: f64,
    pub yy: f64,
    pub yz: f64,
    pub yw: f64,
    pub zx: f64,
    pub zy: f64,
    pub zz: f64,
    pub zw: f64,
    pub wx: f64,
    pub wy: f64,
    pub wz: f64,
    pub ww: f64,
}

impl Matrix4 {
    /// Create a matrix from its rows
    pub const fn from_rows(x: [f64; 4], y: [f64; 4], z: [f64; 4], w: [f64; 4]) -> Self {
        Matrix4 {
            xx: x[0],
            xy: x[1],
            xz: x[2],
            xw: x[3],
            yx: y[0],
            yy: y[1],
            yz: y[2],
            yw: y[3],
            zx: z[0],
            zy: z[1],
            zz: z[2],
            zw: z[3],
            wx: w[0],
            wy: w[1],
            wz: w[2],
            ww: w[3],
        }
    }

    /// The identity matrix
    pub const fn identity() -> Self {
        Matrix4::from_rows(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Rows as arrays
    pub fn rows(&self) -> [[f64; 4]; 4] {
        [
            [self.xx, self.xy, self.xz, self.xw],
            [self.yx, self.yy, self.yz, self.yw],
            [self.zx, self.zy, self.zz, self.zw],
            [self.wx, self.wy, self.wz, self.ww],
        ]
    }

    fn set_rows(&mut self, r: [[f64; 4]; 4]) -> &mut Self {
        *self = Matrix4::from_rows(r[0], r[1], r[2], r[3]);
        self
    }

    /// Element-wise approximate equality
    pub fn aeq(&self, other: &Matrix4) -> bool {
        self.rows()
            .iter()
            .flatten()
            .zip(other.rows().iter().flatten())
            .all(|(a, b)| aeq(*a, *b))
    }

    /// `self = a^T`
    pub fn set_transpose(&mut self, a: Matrix4) -> &mut Self {
        let r = a.rows();
        let mut t = [[0.0; 4]; 4];
        for (i, row) in r.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                t[j][i] = *value;
            }
        }
        self.set_rows(t)
    }

    /// Scale every element in place
    pub fn scale(&mut self, s: f64) -> &mut Self {
        let r = self.rows().map(|row| row.map(|v| v * s));
        self.set_rows(r)
    }

    /// Matrix product `self = l * r`
    pub fn set_mult(&mut self, l: Matrix4, r: Matrix4) -> &mut Self {
        let (a, b) = (l.rows(), r.rows());
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        self.set_rows(m)
    }

    /// Pre-multiply by a translation: `self = T(x, y, z) * self`
    pub fn translate_tm(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        let (wx, wy, wz, ww) = (
            x * self.xx + y * self.yx + z * self.zx + self.wx,
            x * self.xy + y * self.yy + z * self.zy + self.wy,
            x * self.xz + y * self.yz + z * self.zz + self.wz,
            x * self.xw + y * self.yw + z * self.zw + self.ww,
        );
        self.wx = wx;
        self.wy = wy;
        self.wz = wz;
        self.ww = ww;
        self
    }

    /// Post-multiply by a translation: `self = self * T(x, y, z)`
    pub fn translate_mt(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        let mut r = self.rows();
        for row in r.iter_mut() {
            let w = row[3];
            row[0] += w * x;
            row[1] += w * y;
            row[2] += w * z;
        }
        self.set_rows(r)
    }

    /// Pre-multiply by a scale matrix: `self = S(x, y, z) * self`
    pub fn scale_sm(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        let mut r = self.rows();
        for (row, s) in r.iter_mut().zip([x, y, z]) {
            *row = row.map(|v| v * s);
        }
        self.set_rows(r)
    }

    /// Post-multiply by a scale matrix: `self = self * S(x, y, z)`
    pub fn scale_ms(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        let r = self.rows().map(|row| [row[0] * x, row[1] * y, row[2] * z, row[3]]);
        self.set_rows(r)
    }

    /// Set to the rotation of unit quaternion `q` with no translation
    pub fn set_quaternion(&mut self, q: Quaternion) -> &mut Self {
        let mut m = Matrix3::identity();
        m.set_quaternion(q);
        self.set_rows([
            [m.xx, m.xy, m.xz, 0.0],
            [m.yx, m.yy, m.yz, 0.0],
            [m.zx, m.zy, m.zz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Set to the row-vector form of a transform: rotation in the upper
    /// 3x3 block (transposed) and location in the W row
    pub fn set_transform(&mut self, t: &Transform) -> &mut Self {
        let mut m = Matrix3::identity();
        m.set_quaternion(t.rot);
        self.set_rows([
            [m.xx, m.yx, m.zx, 0.0],
            [m.xy, m.yy, m.zy, 0.0],
            [m.xz, m.yz, m.zz, 0.0],
            [t.loc.x, t.loc.y, t.loc.z, 1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{rad, Vector4};
    use approx::assert_abs_diff_eq;

    fn sample() -> Matrix3 {
        Matrix3::from_rows([2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0])
    }

    #[test]
    fn test_mult_identity() {
        let mut m = Matrix3::identity();
        m.set_mult(m, sample());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_det_and_inverse() {
        let a = sample();
        assert_abs_diff_eq!(a.det(), 6.0, epsilon = 1e-12);
        let mut inv = Matrix3::identity();
        inv.set_inverse(a).expect("invertible");
        let mut product = Matrix3::identity();
        product.set_mult(a, inv);
        assert!(product.aeq(&Matrix3::identity()));
    }

    #[test]
    fn test_cofactor_expansion() {
        let a = sample();
        let row = [a.xx, a.xy, a.xz];
        let det: f64 = (0..3).map(|col| row[col] * a.cofactor(0, col).unwrap_or(f64::NAN)).sum();
        assert_abs_diff_eq!(det, a.det(), epsilon = 1e-12);
        assert_eq!(a.cofactor(0, 2), Some(-2.0));
        assert_eq!(a.cofactor(3, 0), None);
        assert_eq!(a.cofactor(1, 7), None);
    }

    #[test]
    fn test_singular_inverse_leaves_receiver() {
        let singular = Matrix3::from_rows([1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]);
        let mut m = sample();
        assert_eq!(m.set_inverse(singular).err(), Some(MathError::SingularMatrix));
        assert_eq!(m, sample());
    }

    #[test]
    fn test_transpose_twice() {
        let mut m = Matrix3::identity();
        m.set_transpose(sample());
        assert_ne!(m, sample());
        m.set_transpose(m);
        assert_eq!(m, sample());
    }

    #[test]
    fn test_axis_angle_matches_quaternion() {
        for deg in 0..=360 {
            let angle = rad(deg as f64);
            let mut from_aa = Matrix3::identity();
            from_aa.set_axis_angle(1.0, 2.0, -1.0, angle).expect("valid axis");
            let mut q = Quaternion::identity();
            q.set_axis_angle(1.0, 2.0, -1.0, angle);
            let mut from_q = Matrix3::identity();
            from_q.set_quaternion(q);
            assert!(from_aa.aeq(&from_q), "mismatch at {deg} degrees");
        }
    }

    #[test]
    fn test_zero_axis_is_an_error() {
        let mut m = sample();
        assert_eq!(
            m.set_axis_angle(0.0, 0.0, 0.0, 1.0).err(),
            Some(MathError::ZeroAxis)
        );
        assert_eq!(m, sample());
    }

    #[test]
    fn test_skew_symmetric_is_cross_product() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        let a = Vector3::new(3.0, 1.0, 2.0);
        let mut m = Matrix3::identity();
        m.set_skew_symmetric(v);
        let mut out = Vector3::zero();
        out.set_mult_mv(&m, a);
        assert!(out.aeq(&v.cross(&a)));
    }

    #[test]
    fn test_matrix4_translation_row() {
        let mut m = Matrix4::identity();
        m.translate_tm(1.0, 2.0, 3.0);
        let mut p = Vector4::new(0.0, 0.0, 0.0, 1.0);
        p.set_mult_vm(p, &m);
        assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let mut n = Matrix4::identity();
        n.translate_mt(1.0, 2.0, 3.0);
        assert_eq!(m, n);
    }

    #[test]
    fn test_matrix4_transform_matches_app() {
        let mut t = Transform::identity();
        t.set_axis_angle(0.0, 0.0, 1.0, rad(90.0));
        t.set_loc(1.0, 0.0, 0.0);
        let mut m = Matrix4::identity();
        m.set_transform(&t);
        let mut p = Vector4::new(1.0, 0.0, 0.0, 1.0);
        p.set_mult_vm(p, &m);
        let expected = t.app(Vector3::new(1.0, 0.0, 0.0));
        assert!(p.aeq(&Vector4::new(expected.x, expected.y, expected.z, 1.0)));

        let mut back = Matrix4::identity();
        back.set_transpose(m);
        back.set_transpose(back);
        assert_eq!(back, m);
    }

    #[test]
    fn test_matrix4_scale_and_mult() {
        let mut m = Matrix4::identity();
        m.scale_sm(2.0, 3.0, 4.0);
        let mut n = Matrix4::identity();
        n.scale_ms(2.0, 3.0, 4.0);
        assert_eq!(m, n);
        let mut product = Matrix4::identity();
        product.set_mult(m, Matrix4::identity());
        assert_eq!(product, m);
        product.scale(0.5);
        assert_eq!(product.xx, 1.0);
    }
}
