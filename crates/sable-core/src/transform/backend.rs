use crate::coords::{Point, Rect};
use crate::error::Error;

use super::Matrix;

/// Capability set a numeric backend provides for transform work.
///
/// Inversion, concatenation, and mapping may be served either by the native
/// engine's verified routines (over the nine-float ABI) or by the pure-Rust
/// routines on [`Matrix`]. Callers hold a backend and never observe which
/// implementation answered; any implementation must match the contracts
/// documented on the corresponding [`Matrix`] methods.
pub trait MatrixBackend {
    /// See [`Matrix::try_invert`].
    fn invert(&self, m: Matrix) -> Option<Matrix>;

    /// See [`Matrix::concat`].
    fn concat(&self, first: Matrix, second: Matrix) -> Matrix;

    /// See [`Matrix::map_points`].
    fn map_points(&self, m: Matrix, dst: &mut [Point], src: &[Point]) -> Result<(), Error>;

    /// See [`Matrix::map_rect`].
    fn map_rect(&self, m: Matrix, rect: Rect) -> Rect;

    /// See [`Matrix::map_radius`].
    fn map_radius(&self, m: Matrix, radius: f32) -> f32;
}

/// Pure-Rust backend, the default when no native engine is linked.
#[derive(Debug, Default, Copy, Clone)]
pub struct SoftwareBackend;

impl MatrixBackend for SoftwareBackend {
    #[inline]
    fn invert(&self, m: Matrix) -> Option<Matrix> {
        m.try_invert()
    }

    #[inline]
    fn concat(&self, first: Matrix, second: Matrix) -> Matrix {
        Matrix::concat(first, second)
    }

    #[inline]
    fn map_points(&self, m: Matrix, dst: &mut [Point], src: &[Point]) -> Result<(), Error> {
        m.map_points(dst, src)
    }

    #[inline]
    fn map_rect(&self, m: Matrix, rect: Rect) -> Rect {
        m.map_rect(rect)
    }

    #[inline]
    fn map_radius(&self, m: Matrix, radius: f32) -> f32 {
        m.map_radius(radius)
    }
}
