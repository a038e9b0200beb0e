/// Width and height in logical pixels.
///
/// Constructed through [`Size::new`], negative inputs are clamped to zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[inline]
    pub fn new(w: i32, h: i32) -> Self {
        Self { w: w.max(0), h: h.max(0) }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { w: 0, h: 0 }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}
