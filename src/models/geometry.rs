//! Pixel geometry shared by layouts and keys.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a keyboard layout canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Size {
    /// Creates a new `Size`.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Key rectangle in layout pixel coordinates.
///
/// `left`/`top` are inclusive, `right()`/`bottom()` are exclusive, so a key
/// fits a canvas of size `(w, h)` when `right() <= w` and `bottom() <= h`.
/// Edge arithmetic saturates at the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Creates a new `Rect`.
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// First column to the right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// First row below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Moves the rectangle so its left edge is at `left`, keeping its size.
    #[must_use]
    pub const fn with_left(mut self, left: i32) -> Self {
        self.left = left;
        self
    }

    /// Moves the rectangle so its top edge is at `top`, keeping its size.
    #[must_use]
    pub const fn with_top(mut self, top: i32) -> Self {
        self.top = top;
        self
    }

    /// Returns true if the rectangle lies completely inside a canvas of `size`.
    #[must_use]
    pub const fn fits(&self, size: Size) -> bool {
        self.left >= 0 && self.top >= 0 && self.right() <= size.width && self.bottom() <= size.height
    }

    /// Shifts the rectangle left and up just enough to end inside `size`.
    ///
    /// The rectangle is never resized and never moved right or down. The
    /// shift stops at 0, so a rectangle wider or taller than `size` ends at
    /// the left or top edge and still sticks out on the right or bottom.
    #[must_use]
    pub const fn shifted_into(self, size: Size) -> Self {
        let mut rect = self;

        if rect.right() > size.width {
            let target = size.width.saturating_sub(rect.width);
            rect = rect.with_left(shift_towards_zero(rect.left, target));
        }

        if rect.bottom() > size.height {
            let target = size.height.saturating_sub(rect.height);
            rect = rect.with_top(shift_towards_zero(rect.top, target));
        }

        rect
    }
}

/// Moves `edge` back to `target`, but not past 0 and never forward.
const fn shift_towards_zero(edge: i32, target: i32) -> i32 {
    let floor = if edge < 0 { edge } else { 0 };
    if target > floor {
        target
    } else {
        floor
    }
}
