use bytemuck::{Pod, Zeroable};

use crate::coords::{Point, Rect, Vector};
use crate::error::Error;

/// Degree-to-radian factor at `f32` precision, matching the engine's tables.
const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Determinant magnitudes below this (computed in `f64`) are treated as zero
/// when inverting.
const SINGULAR_DET: f64 = 1.0e-12;

#[inline]
fn sdot(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * b + c * d
}

/// 3x3 row-major transform applied to homogeneous column vectors `[x, y, 1]`:
///
/// ```text
/// | scale_x  skew_x  trans_x |
/// | skew_y   scale_y trans_y |
/// | persp_0  persp_1 persp_2 |
/// ```
///
/// The field order and `#[repr(C)]` layout are the engine ABI: nine
/// sequential 4-byte floats, no padding. Degenerate (non-invertible)
/// matrices are valid values; nothing here validates parameters, and NaN or
/// infinity propagate per IEEE-754.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix {
    pub scale_x: f32,
    pub skew_x: f32,
    pub trans_x: f32,
    pub skew_y: f32,
    pub scale_y: f32,
    pub trans_y: f32,
    pub persp_0: f32,
    pub persp_1: f32,
    pub persp_2: f32,
}

const _: () = assert!(core::mem::size_of::<Matrix>() == 9 * core::mem::size_of::<f32>());

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            scale_x: 1.0,
            skew_x: 0.0,
            trans_x: 0.0,
            skew_y: 0.0,
            scale_y: 1.0,
            trans_y: 0.0,
            persp_0: 0.0,
            persp_1: 0.0,
            persp_2: 1.0,
        }
    }

    /// Diagonal scale. Exactly `(1, 1)` short-circuits to the identity.
    pub fn scale(sx: f32, sy: f32) -> Self {
        if sx == 1.0 && sy == 1.0 {
            return Self::identity();
        }
        let mut m = Self::identity();
        m.scale_x = sx;
        m.scale_y = sy;
        m
    }

    /// Scale about a pivot, the point left unchanged by the transform.
    ///
    /// The `(1, 1)` short-circuit applies before the pivot is considered, so
    /// a unit scale about any pivot is the identity.
    pub fn scale_about(sx: f32, sy: f32, pivot_x: f32, pivot_y: f32) -> Self {
        if sx == 1.0 && sy == 1.0 {
            return Self::identity();
        }
        let mut m = Self::identity();
        m.scale_x = sx;
        m.scale_y = sy;
        m.trans_x = pivot_x - sx * pivot_x;
        m.trans_y = pivot_y - sy * pivot_y;
        m
    }

    /// Pure translation. Exactly `(0, 0)` short-circuits to the identity.
    pub fn translation(dx: f32, dy: f32) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return Self::identity();
        }
        let mut m = Self::identity();
        m.trans_x = dx;
        m.trans_y = dy;
        m
    }

    /// Diagonal scale plus translation in one step, no short-circuit.
    pub fn scale_translate(sx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        let mut m = Self::identity();
        m.scale_x = sx;
        m.scale_y = sy;
        m.trans_x = tx;
        m.trans_y = ty;
        m
    }

    /// Rotation about the origin.
    pub fn rotation(radians: f32) -> Self {
        let mut m = Self::identity();
        m.set_rotation(radians);
        m
    }

    /// Rotation about a pivot, the point left unchanged by the transform.
    pub fn rotation_about(radians: f32, pivot_x: f32, pivot_y: f32) -> Self {
        let mut m = Self::identity();
        m.set_rotation_about(radians, pivot_x, pivot_y);
        m
    }

    pub fn rotation_degrees(degrees: f32) -> Self {
        Self::rotation(degrees * DEG_TO_RAD)
    }

    pub fn rotation_degrees_about(degrees: f32, pivot_x: f32, pivot_y: f32) -> Self {
        Self::rotation_about(degrees * DEG_TO_RAD, pivot_x, pivot_y)
    }

    /// Axis skew; `sx` shears x by y, `sy` shears y by x.
    pub fn skew(sx: f32, sy: f32) -> Self {
        let mut m = Self::identity();
        m.skew_x = sx;
        m.skew_y = sy;
        m
    }

    /// Overwrites `self` with a rotation about the origin.
    ///
    /// All nine fields are rewritten; the result is identical to assigning
    /// [`Matrix::rotation`] of the same angle.
    pub fn set_rotation(&mut self, radians: f32) {
        let (sin, cos) = radians.sin_cos();
        self.set_sin_cos(sin, cos);
    }

    /// Overwrites `self` with a rotation about a pivot.
    pub fn set_rotation_about(&mut self, radians: f32, pivot_x: f32, pivot_y: f32) {
        let (sin, cos) = radians.sin_cos();
        self.set_sin_cos_about(sin, cos, pivot_x, pivot_y);
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.set_rotation(degrees * DEG_TO_RAD);
    }

    pub fn set_rotation_degrees_about(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32) {
        self.set_rotation_about(degrees * DEG_TO_RAD, pivot_x, pivot_y);
    }

    fn set_sin_cos(&mut self, sin: f32, cos: f32) {
        self.scale_x = cos;
        self.skew_x = -sin;
        self.trans_x = 0.0;
        self.skew_y = sin;
        self.scale_y = cos;
        self.trans_y = 0.0;
        self.persp_0 = 0.0;
        self.persp_1 = 0.0;
        self.persp_2 = 1.0;
    }

    fn set_sin_cos_about(&mut self, sin: f32, cos: f32, pivot_x: f32, pivot_y: f32) {
        let one_minus_cos = 1.0 - cos;

        self.scale_x = cos;
        self.skew_x = -sin;
        self.trans_x = sdot(sin, pivot_y, one_minus_cos, pivot_x);
        self.skew_y = sin;
        self.scale_y = cos;
        self.trans_y = sdot(-sin, pivot_x, one_minus_cos, pivot_y);
        self.persp_0 = 0.0;
        self.persp_1 = 0.0;
        self.persp_2 = 1.0;
    }

    /// Exact comparison against the identity.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// True when the perspective row differs from `(0, 0, 1)`.
    #[inline]
    pub fn has_perspective(self) -> bool {
        self.persp_0 != 0.0 || self.persp_1 != 0.0 || self.persp_2 != 1.0
    }

    /// Matrix product `first * second`: points run through `second` first,
    /// then `first`.
    pub fn concat(first: Matrix, second: Matrix) -> Matrix {
        let a = first;
        let b = second;
        Matrix {
            scale_x: a.scale_x * b.scale_x + a.skew_x * b.skew_y + a.trans_x * b.persp_0,
            skew_x: a.scale_x * b.skew_x + a.skew_x * b.scale_y + a.trans_x * b.persp_1,
            trans_x: a.scale_x * b.trans_x + a.skew_x * b.trans_y + a.trans_x * b.persp_2,
            skew_y: a.skew_y * b.scale_x + a.scale_y * b.skew_y + a.trans_y * b.persp_0,
            scale_y: a.skew_y * b.skew_x + a.scale_y * b.scale_y + a.trans_y * b.persp_1,
            trans_y: a.skew_y * b.trans_x + a.scale_y * b.trans_y + a.trans_y * b.persp_2,
            persp_0: a.persp_0 * b.scale_x + a.persp_1 * b.skew_y + a.persp_2 * b.persp_0,
            persp_1: a.persp_0 * b.skew_x + a.persp_1 * b.scale_y + a.persp_2 * b.persp_1,
            persp_2: a.persp_0 * b.trans_x + a.persp_1 * b.trans_y + a.persp_2 * b.persp_2,
        }
    }

    /// `self * m`: `m` is applied to points before `self`'s existing mapping.
    #[inline]
    pub fn pre_concat(self, m: Matrix) -> Matrix {
        Self::concat(self, m)
    }

    /// `m * self`: `m` is applied to points after `self`'s existing mapping.
    #[inline]
    pub fn post_concat(self, m: Matrix) -> Matrix {
        Self::concat(m, self)
    }

    /// Inverse matrix, or `None` when the determinant is within floating-point
    /// zero. Non-invertibility is an expected state (a zero scale, a collapsed
    /// skew), not an error.
    pub fn try_invert(self) -> Option<Matrix> {
        // Work in f64: the engine's inverse path does the same to keep
        // near-singular matrices stable.
        let a = self.scale_x as f64;
        let b = self.skew_x as f64;
        let c = self.trans_x as f64;
        let d = self.skew_y as f64;
        let e = self.scale_y as f64;
        let f = self.trans_y as f64;
        let g = self.persp_0 as f64;
        let h = self.persp_1 as f64;
        let i = self.persp_2 as f64;

        let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);
        if det.abs() < SINGULAR_DET {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Matrix {
            scale_x: ((e * i - f * h) * inv_det) as f32,
            skew_x: ((c * h - b * i) * inv_det) as f32,
            trans_x: ((b * f - c * e) * inv_det) as f32,
            skew_y: ((f * g - d * i) * inv_det) as f32,
            scale_y: ((a * i - c * g) * inv_det) as f32,
            trans_y: ((c * d - a * f) * inv_det) as f32,
            persp_0: ((d * h - e * g) * inv_det) as f32,
            persp_1: ((b * g - a * h) * inv_det) as f32,
            persp_2: ((a * e - b * d) * inv_det) as f32,
        })
    }

    /// Maps a position through the full transform, including the homogeneous
    /// divide. Affine matrices divide by exactly 1.0, leaving results
    /// untouched; a degenerate divisor propagates infinities.
    #[inline]
    pub fn map_xy(self, x: f32, y: f32) -> Point {
        let px = sdot(self.scale_x, x, self.skew_x, y) + self.trans_x;
        let py = sdot(self.skew_y, x, self.scale_y, y) + self.trans_y;
        let w = sdot(self.persp_0, x, self.persp_1, y) + self.persp_2;
        Point::new(px / w, py / w)
    }

    #[inline]
    pub fn map_point(self, p: Point) -> Point {
        self.map_xy(p.x, p.y)
    }

    /// Maps a direction: linear part only, no translation, no homogeneous
    /// divide.
    #[inline]
    pub fn map_vector(self, x: f32, y: f32) -> Vector {
        Vector::new(
            sdot(self.scale_x, x, self.skew_x, y),
            sdot(self.skew_y, x, self.scale_y, y),
        )
    }

    /// Maps positions from `src` into `dst`.
    ///
    /// Buffer lengths must match; on mismatch the error is returned before
    /// anything is written.
    pub fn map_points(self, dst: &mut [Point], src: &[Point]) -> Result<(), Error> {
        if dst.len() != src.len() {
            return Err(Error::BufferLengthMismatch { dst: dst.len(), src: src.len() });
        }
        for (out, p) in dst.iter_mut().zip(src) {
            *out = self.map_xy(p.x, p.y);
        }
        Ok(())
    }

    /// Maps directions from `src` into `dst`; translation and perspective are
    /// ignored. Same buffer contract as [`map_points`](Self::map_points).
    pub fn map_vectors(self, dst: &mut [Vector], src: &[Vector]) -> Result<(), Error> {
        if dst.len() != src.len() {
            return Err(Error::BufferLengthMismatch { dst: dst.len(), src: src.len() });
        }
        for (out, v) in dst.iter_mut().zip(src) {
            *out = self.map_vector(v.x, v.y);
        }
        Ok(())
    }

    /// Allocating convenience over [`map_points`](Self::map_points).
    pub fn mapped_points(self, src: &[Point]) -> Vec<Point> {
        src.iter().map(|p| self.map_xy(p.x, p.y)).collect()
    }

    /// Allocating convenience over [`map_vectors`](Self::map_vectors).
    pub fn mapped_vectors(self, src: &[Vector]) -> Vec<Vector> {
        src.iter().map(|v| self.map_vector(v.x, v.y)).collect()
    }

    /// Axis-aligned bounding box of the four mapped corners.
    ///
    /// Shape is lost by design: a rotated rect comes back as its upright
    /// bounds, not a quad.
    pub fn map_rect(self, rect: Rect) -> Rect {
        let corners = [
            self.map_xy(rect.left, rect.top),
            self.map_xy(rect.right, rect.top),
            self.map_xy(rect.right, rect.bottom),
            self.map_xy(rect.left, rect.bottom),
        ];

        let mut out = Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
        for p in &corners[1..] {
            out.left = out.left.min(p.x);
            out.top = out.top.min(p.y);
            out.right = out.right.max(p.x);
            out.bottom = out.bottom.max(p.y);
        }
        out
    }

    /// How a scalar radius scales under this transform: the geometric mean of
    /// the mapped axis vectors' lengths. Non-negative, and equal to
    /// `|s| * radius` for a uniform scale `s`.
    pub fn map_radius(self, radius: f32) -> f32 {
        let u = self.map_vector(radius, 0.0);
        let v = self.map_vector(0.0, radius);
        let d0 = sdot(u.x, u.x, u.y, u.y).sqrt();
        let d1 = sdot(v.x, v.x, v.y, v.y).sqrt();
        (d0 * d1).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_point_near(p: Point, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    /// Rotate 30 deg, scale 2 x 1.5, translate (3, -4) — a representative
    /// invertible affine stack.
    fn sample_affine() -> Matrix {
        Matrix::concat(
            Matrix::translation(3.0, -4.0),
            Matrix::concat(Matrix::scale(2.0, 1.5), Matrix::rotation_degrees(30.0)),
        )
    }

    fn sample_perspective() -> Matrix {
        let mut m = sample_affine();
        m.persp_0 = 0.001;
        m.persp_1 = -0.002;
        m
    }

    // ── identity and short-circuits ───────────────────────────────────────

    #[test]
    fn identity_maps_points_unchanged() {
        let id = Matrix::identity();
        for p in [
            Point::zero(),
            Point::new(1.0, 2.0),
            Point::new(-1000.5, 0.25),
        ] {
            assert_eq!(id.map_point(p), p);
        }
        assert!(id.is_identity());
    }

    #[test]
    fn unit_scale_short_circuits_to_identity() {
        assert_eq!(Matrix::scale(1.0, 1.0), Matrix::identity());
        // The pivot is ignored by the short-circuit.
        assert_eq!(Matrix::scale_about(1.0, 1.0, 50.0, 50.0), Matrix::identity());
    }

    #[test]
    fn zero_translation_short_circuits_to_identity() {
        assert_eq!(Matrix::translation(0.0, 0.0), Matrix::identity());
        assert_ne!(Matrix::translation(0.0, 1.0), Matrix::identity());
    }

    #[test]
    fn scale_translate_does_not_short_circuit() {
        let m = Matrix::scale_translate(1.0, 1.0, 0.0, 0.0);
        assert_eq!(m, Matrix::identity());
        let m = Matrix::scale_translate(2.0, 3.0, 4.0, 5.0);
        assert_point_near(m.map_xy(1.0, 1.0), 6.0, 8.0);
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn scale_about_fixes_the_pivot() {
        let m = Matrix::scale_about(2.0, 3.0, 10.0, 20.0);
        assert_point_near(m.map_xy(10.0, 20.0), 10.0, 20.0);
        assert_point_near(m.map_xy(11.0, 21.0), 12.0, 23.0);
    }

    #[test]
    fn quarter_turn_sends_x_to_y() {
        let m = Matrix::rotation_degrees(90.0);
        assert_point_near(m.map_xy(1.0, 0.0), 0.0, 1.0);
        assert_point_near(m.map_xy(0.0, 1.0), -1.0, 0.0);
    }

    #[test]
    fn rotation_about_fixes_the_pivot() {
        let m = Matrix::rotation_degrees_about(73.0, 5.0, -2.0);
        assert_point_near(m.map_xy(5.0, -2.0), 5.0, -2.0);
    }

    #[test]
    fn skew_shears_each_axis_by_the_other() {
        let m = Matrix::skew(2.0, 0.5);
        assert_point_near(m.map_xy(1.0, 1.0), 3.0, 1.5);
    }

    #[test]
    fn degree_variants_match_radian_variants() {
        let deg = Matrix::rotation_degrees(30.0);
        let rad = Matrix::rotation(30.0 * core::f32::consts::PI / 180.0);
        assert_eq!(deg, rad);
    }

    // ── in-place setters ──────────────────────────────────────────────────

    #[test]
    fn set_rotation_overwrites_every_field() {
        // Start from a matrix with junk everywhere, perspective included.
        let mut m = Matrix::skew(7.0, -3.0);
        m.persp_0 = 0.5;
        m.persp_1 = 0.25;
        m.persp_2 = 4.0;
        m.trans_x = 99.0;

        m.set_rotation(1.25);
        assert_eq!(m, Matrix::rotation(1.25));

        m.persp_1 = 0.75;
        m.set_rotation_about(1.25, 8.0, 9.0);
        assert_eq!(m, Matrix::rotation_about(1.25, 8.0, 9.0));

        m.set_rotation_degrees(42.0);
        assert_eq!(m, Matrix::rotation_degrees(42.0));

        m.set_rotation_degrees_about(42.0, -1.0, 2.0);
        assert_eq!(m, Matrix::rotation_degrees_about(42.0, -1.0, 2.0));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn concat_applies_second_first() {
        let t = Matrix::translation(10.0, 20.0);
        let s = Matrix::scale(2.0, 2.0);
        // Scale first, then translate.
        assert_point_near(Matrix::concat(t, s).map_xy(1.0, 1.0), 12.0, 22.0);
        // The other order translates first, then scales.
        assert_point_near(Matrix::concat(s, t).map_xy(1.0, 1.0), 22.0, 42.0);
    }

    #[test]
    fn pre_and_post_concat_sit_on_opposite_sides() {
        let m = sample_affine();
        let s = Matrix::scale(3.0, 0.5);
        assert_eq!(m.pre_concat(s), Matrix::concat(m, s));
        assert_eq!(m.post_concat(s), Matrix::concat(s, m));
        assert_ne!(m.pre_concat(s), m.post_concat(s));
    }

    #[test]
    fn concat_is_associative_on_points() {
        let a = Matrix::rotation_degrees(30.0);
        let b = Matrix::scale(2.0, 1.5);
        let c = Matrix::translation(3.0, -4.0);

        let left = Matrix::concat(Matrix::concat(a, b), c);
        let right = Matrix::concat(a, Matrix::concat(b, c));

        for p in [Point::new(1.0, 1.0), Point::new(-5.0, 12.5), Point::zero()] {
            let lp = left.map_point(p);
            let rp = right.map_point(p);
            assert_point_near(lp, rp.x, rp.y);
        }
    }

    #[test]
    fn concat_with_identity_is_a_no_op() {
        let m = sample_perspective();
        assert_eq!(Matrix::concat(m, Matrix::identity()), m);
        assert_eq!(Matrix::concat(Matrix::identity(), m), m);
    }

    // ── inversion ─────────────────────────────────────────────────────────

    #[test]
    fn inverse_round_trips_points() {
        let m = sample_affine();
        let inv = m.try_invert().expect("sample affine is invertible");
        for p in [Point::new(7.0, -3.0), Point::new(0.5, 0.5)] {
            let rt = m.map_point(inv.map_point(p));
            assert_point_near(rt, p.x, p.y);
        }
    }

    #[test]
    fn inverse_round_trips_under_perspective() {
        let m = sample_perspective();
        let inv = m.try_invert().expect("sample perspective is invertible");
        let p = Point::new(3.0, 4.0);
        let rt = inv.map_point(m.map_point(p));
        assert_point_near(rt, p.x, p.y);
    }

    #[test]
    fn singular_matrices_have_no_inverse() {
        assert!(Matrix::scale(0.0, 0.0).try_invert().is_none());
        assert!(Matrix::scale(0.0, 2.0).try_invert().is_none());
        // Rank-1 affine: both rows collinear.
        let mut m = Matrix::identity();
        m.scale_x = 2.0;
        m.skew_x = 4.0;
        m.skew_y = 1.0;
        m.scale_y = 2.0;
        assert!(m.try_invert().is_none());
    }

    #[test]
    fn identity_inverts_to_itself() {
        assert_eq!(Matrix::identity().try_invert(), Some(Matrix::identity()));
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn vectors_ignore_translation_and_perspective() {
        let mut m = Matrix::translation(100.0, 200.0);
        m.persp_0 = 0.5;
        m.persp_2 = 3.0;
        assert_eq!(m.map_vector(3.0, 4.0), Point::new(3.0, 4.0));

        let m = Matrix::scale(2.0, 3.0).pre_concat(Matrix::translation(50.0, 50.0));
        assert_point_near(m.map_vector(1.0, 1.0), 2.0, 3.0);
    }

    #[test]
    fn map_points_rejects_mismatched_buffers_before_writing() {
        let m = Matrix::scale(2.0, 2.0);
        let src = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let mut dst = [Point::zero(); 3];

        let err = m.map_points(&mut dst, &src).unwrap_err();
        assert_eq!(err, Error::BufferLengthMismatch { dst: 3, src: 2 });
        assert_eq!(dst, [Point::zero(); 3]);

        let err = m.map_vectors(&mut dst, &src).unwrap_err();
        assert_eq!(err, Error::BufferLengthMismatch { dst: 3, src: 2 });
    }

    #[test]
    fn map_points_fills_matching_buffers() {
        let m = Matrix::translation(1.0, -1.0);
        let src = [Point::zero(), Point::new(2.0, 2.0)];
        let mut dst = [Point::zero(); 2];
        m.map_points(&mut dst, &src).unwrap();
        assert_eq!(dst, [Point::new(1.0, -1.0), Point::new(3.0, 1.0)]);

        assert_eq!(m.mapped_points(&src), dst.to_vec());
    }

    #[test]
    fn mapped_vectors_applies_the_linear_part() {
        let m = Matrix::scale_translate(2.0, 2.0, 9.0, 9.0);
        let out = m.mapped_vectors(&[Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
        assert_eq!(out, vec![Point::new(2.0, 0.0), Point::new(0.0, 2.0)]);
    }

    #[test]
    fn map_rect_returns_upright_bounds() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let m = Matrix::rotation_degrees(45.0);
        let bounds = m.map_rect(rect);

        let diagonal = 10.0 * 2.0_f32.sqrt();
        assert!((bounds.width() - diagonal).abs() < EPSILON);
        assert!((bounds.height() - diagonal).abs() < EPSILON);
    }

    #[test]
    fn map_rect_keeps_edges_ordered_under_flips() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let flipped = Matrix::scale(-1.0, 1.0).map_rect(rect);
        assert_eq!(flipped, Rect::new(-10.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn map_rect_under_identity_is_exact() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Matrix::identity().map_rect(rect), rect);
    }

    #[test]
    fn map_radius_averages_the_axis_scales() {
        assert!((Matrix::scale(3.0, 3.0).map_radius(2.0) - 6.0).abs() < EPSILON);
        // Geometric mean for anisotropic scale: sqrt(2 * 8) = 4.
        assert!((Matrix::scale(2.0, 8.0).map_radius(1.0) - 4.0).abs() < EPSILON);
        // Rotation does not change lengths.
        assert!((Matrix::rotation_degrees(30.0).map_radius(5.0) - 5.0).abs() < EPSILON);
        assert!(Matrix::scale(-2.0, -2.0).map_radius(1.0) >= 0.0);
    }

    // ── abi ───────────────────────────────────────────────────────────────

    #[test]
    fn layout_is_nine_sequential_floats() {
        let arr: [f32; 9] = bytemuck::cast(Matrix::identity());
        assert_eq!(arr, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let m = Matrix::scale_translate(2.0, 3.0, 4.0, 5.0);
        let arr: [f32; 9] = bytemuck::cast(m);
        assert_eq!(arr, [2.0, 0.0, 4.0, 0.0, 3.0, 5.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn perspective_divide_happens_in_map_xy() {
        let mut m = Matrix::identity();
        m.persp_2 = 2.0;
        // w = 2 everywhere, so positions halve.
        assert_point_near(m.map_xy(4.0, 6.0), 2.0, 3.0);
        assert!(m.has_perspective());
        assert!(!Matrix::identity().has_perspective());
    }
}
