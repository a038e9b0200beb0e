use super::{Point, Size};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, w: size.w, h: size.h }
    }

    /// Rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { x: 0, y: 0, w: size.w, h: size.h }
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    ///
    /// Empty rectangles are contained as long as their origin is inside the
    /// closed bounds, so a zero-width control at the right edge still counts.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.w >= 0
            && other.h >= 0
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    /// Grows the rectangle by `margin` on every side (shrinks for negative margins).
    #[inline]
    #[must_use]
    pub fn inflate(self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            (self.w + 2 * margin).max(0),
            (self.h + 2 * margin).max(0),
        )
    }

    #[inline]
    #[must_use]
    pub fn translate(self, by: Point) -> Rect {
        Rect::new(self.x + by.x, self.y + by.y, self.w, self.h)
    }

    /// Forces the rectangle inside `bounds`.
    ///
    /// The origin is clamped into the closed bounds first, then the size is cut
    /// to what remains. Negative sizes become zero. The result always satisfies
    /// `bounds.contains_rect(result)` for non-negative `bounds`.
    #[inline]
    #[must_use]
    pub fn clamp_within(self, bounds: Rect) -> Rect {
        let x = self.x.clamp(bounds.x, bounds.right().max(bounds.x));
        let y = self.y.clamp(bounds.y, bounds.bottom().max(bounds.y));
        let w = self.w.max(0).min((bounds.right() - x).max(0));
        let h = self.h.max(0).min((bounds.bottom() - y).max(0));
        Rect::new(x, y, w, h)
    }
}
