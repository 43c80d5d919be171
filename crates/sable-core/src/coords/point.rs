use core::ops::{Add, Sub};

use bytemuck::{Pod, Zeroable};

use super::{ISize, Size};

/// 2D position in logical coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A [`Point`] carrying a direction rather than a position.
///
/// Mapping routines that accept vectors apply only the linear part of a
/// transform: no translation, no perspective normalization.
pub type Vector = Point;

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// True when both coordinates are exactly zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Copy with both coordinates shifted.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<Size> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl From<IPoint> for Point {
    #[inline]
    fn from(p: IPoint) -> Point {
        Point::new(p.x as f32, p.y as f32)
    }
}

/// Integer-valued position.
///
/// No arithmetic mixes integer and float variants; widen with
/// `Point::from` and narrow with [`IPoint::round`], [`IPoint::ceiling`], or
/// [`IPoint::truncate`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Nearest-integer conversion.
    #[inline]
    pub fn round(p: Point) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }

    /// Conversion rounding each coordinate up.
    #[inline]
    pub fn ceiling(p: Point) -> Self {
        Self::new(p.x.ceil() as i32, p.y.ceil() as i32)
    }

    /// Conversion dropping the fractional part.
    #[inline]
    pub fn truncate(p: Point) -> Self {
        Self::new(p.x as i32, p.y as i32)
    }

    /// True when both coordinates are zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Copy with both coordinates shifted.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for IPoint {
    type Output = IPoint;
    #[inline]
    fn add(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IPoint {
    type Output = IPoint;
    #[inline]
    fn sub(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<ISize> for IPoint {
    type Output = IPoint;
    #[inline]
    fn add(self, rhs: ISize) -> IPoint {
        IPoint::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<ISize> for IPoint {
    type Output = IPoint;
    #[inline]
    fn sub(self, rhs: ISize) -> IPoint {
        IPoint::new(self.x - rhs.width, self.y - rhs.height)
    }
}
