use bytemuck::{Pod, Zeroable};

use super::{IPoint, Point, ISize, Size};

/// Axis-aligned rectangle stored as four edges, matching the engine's layout.
///
/// `width`/`height` are derived (`right - left`, `bottom - top`) and may be
/// negative when the edges were constructed inconsistently; no operation
/// normalizes. Emptiness is equality to the all-zero rect, *not* zero area: a
/// rect whose four edges are all 5 has zero area yet is not empty. Callers
/// relying on that distinction include the engine's clip stack.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The all-zero rect, the only value [`is_empty`](Self::is_empty) accepts.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Rect from an origin and extent.
    #[inline]
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Rect of the given size anchored at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    pub const fn from_location_size(location: Point, size: Size) -> Self {
        Self::from_xywh(location.x, location.y, size.width, size.height)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub const fn location(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// True only for the all-zero rect. Zero-area rects elsewhere in the
    /// plane are deliberately not empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::empty()
    }

    /// Copy moved so its top-left edge sits at `location`, keeping the size.
    #[inline]
    pub fn with_location(self, location: Point) -> Self {
        Self::from_xywh(location.x, location.y, self.width(), self.height())
    }

    /// Copy resized in place, keeping the top-left edge.
    #[inline]
    pub fn with_size(self, size: Size) -> Self {
        Self::new(self.left, self.top, self.left + size.width, self.top + size.height)
    }

    /// Copy shifted by the given deltas.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Copy grown outward by the given margins (negative values shrink).
    #[inline]
    pub fn inflate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left - dx, self.top - dy, self.right + dx, self.bottom + dy)
    }

    /// Half-open containment: `x in [left, right)`, `y in [top, bottom)`.
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    #[inline]
    pub fn contains_point(self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// True when `other` lies entirely within this rect (edges may coincide).
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// Overlap test for hit-testing: touching edges do *not* intersect.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        !(self.left >= other.right
            || self.right <= other.left
            || self.top >= other.bottom
            || self.bottom <= other.top)
    }

    /// Overlap test where touching edges count as intersecting. This is the
    /// predicate [`intersect`](Self::intersect) uses, distinct from
    /// [`intersects`](Self::intersects).
    #[inline]
    pub fn intersects_inclusive(self, other: Rect) -> bool {
        !(self.left > other.right
            || self.right < other.left
            || self.top > other.bottom
            || self.bottom < other.top)
    }

    /// Common region of two rects, or the empty rect when they do not overlap
    /// inclusively.
    #[inline]
    pub fn intersect(self, other: Rect) -> Rect {
        if !self.intersects_inclusive(other) {
            return Self::empty();
        }
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Bounding rect of both inputs, regardless of overlap.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

impl From<IRect> for Rect {
    #[inline]
    fn from(r: IRect) -> Rect {
        Rect::new(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

/// Integer-valued rectangle, four edges, same conventions as [`Rect`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct IRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IRect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    #[inline]
    pub const fn from_size(size: ISize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Nearest-integer conversion of each edge.
    #[inline]
    pub fn round(r: Rect) -> Self {
        Self::new(
            r.left.round() as i32,
            r.top.round() as i32,
            r.right.round() as i32,
            r.bottom.round() as i32,
        )
    }

    /// Conversion rounding each edge up.
    #[inline]
    pub fn ceiling(r: Rect) -> Self {
        Self::new(
            r.left.ceil() as i32,
            r.top.ceil() as i32,
            r.right.ceil() as i32,
            r.bottom.ceil() as i32,
        )
    }

    /// Conversion dropping each edge's fractional part.
    #[inline]
    pub fn truncate(r: Rect) -> Self {
        Self::new(r.left as i32, r.top as i32, r.right as i32, r.bottom as i32)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(self) -> ISize {
        ISize::new(self.width(), self.height())
    }

    #[inline]
    pub const fn location(self) -> IPoint {
        IPoint::new(self.left, self.top)
    }

    /// True only for the all-zero rect, as for [`Rect::is_empty`].
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::empty()
    }

    #[inline]
    pub fn with_location(self, location: IPoint) -> Self {
        Self::from_xywh(location.x, location.y, self.width(), self.height())
    }

    #[inline]
    pub fn with_size(self, size: ISize) -> Self {
        Self::new(self.left, self.top, self.left + size.width, self.top + size.height)
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    #[inline]
    pub fn inflate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.left - dx, self.top - dy, self.right + dx, self.bottom + dy)
    }

    /// Half-open containment: `x in [left, right)`, `y in [top, bottom)`.
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    #[inline]
    pub fn contains_point(self, p: IPoint) -> bool {
        self.contains(p.x, p.y)
    }

    #[inline]
    pub fn contains_rect(self, other: IRect) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// Overlap test for hit-testing: touching edges do *not* intersect.
    #[inline]
    pub fn intersects(self, other: IRect) -> bool {
        !(self.left >= other.right
            || self.right <= other.left
            || self.top >= other.bottom
            || self.bottom <= other.top)
    }

    /// Overlap test where touching edges count as intersecting.
    #[inline]
    pub fn intersects_inclusive(self, other: IRect) -> bool {
        !(self.left > other.right
            || self.right < other.left
            || self.top > other.bottom
            || self.bottom < other.top)
    }

    /// Common region of two rects, or the empty rect when they do not overlap
    /// inclusively.
    #[inline]
    pub fn intersect(self, other: IRect) -> IRect {
        if !self.intersects_inclusive(other) {
            return Self::empty();
        }
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Bounding rect of both inputs, regardless of overlap.
    #[inline]
    pub fn union(self, other: IRect) -> IRect {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}
