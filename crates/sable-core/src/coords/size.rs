use core::ops::{Add, Sub};

use bytemuck::{Pod, Zeroable};

use super::{IPoint, Point};

/// Dimension pair in logical coordinates.
///
/// A size is empty only when *both* components are exactly zero; negative
/// dimensions are representable and are not treated as empty.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    /// Reads a point's coordinates as dimensions.
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self { width: p.x, height: p.y }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    #[inline]
    pub const fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Truncating conversion to the integer variant.
    #[inline]
    pub fn to_isize(self) -> ISize {
        ISize::new(self.width as i32, self.height as i32)
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl From<ISize> for Size {
    #[inline]
    fn from(s: ISize) -> Size {
        Size::new(s.width as f32, s.height as f32)
    }
}

/// Integer-valued dimension pair.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct ISize {
    pub width: i32,
    pub height: i32,
}

impl ISize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0, height: 0 }
    }

    /// Reads a point's coordinates as dimensions.
    #[inline]
    pub const fn from_point(p: IPoint) -> Self {
        Self { width: p.x, height: p.y }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 && self.height == 0
    }

    #[inline]
    pub const fn to_point(self) -> IPoint {
        IPoint::new(self.width, self.height)
    }
}

impl Add for ISize {
    type Output = ISize;
    #[inline]
    fn add(self, rhs: ISize) -> ISize {
        ISize::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for ISize {
    type Output = ISize;
    #[inline]
    fn sub(self, rhs: ISize) -> ISize {
        ISize::new(self.width - rhs.width, self.height - rhs.height)
    }
}
