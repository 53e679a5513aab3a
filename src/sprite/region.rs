/// A rectangle in pixel coordinates, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its corners. `x1`/`y1` are exclusive.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Exclusive right edge
    pub fn x1(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn y1(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if this rectangle fully contains another
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x1() >= other.x1()
            && self.y1() >= other.y1()
    }

    /// Grow by `margin` pixels on every side, clamped to `0..max_width` x `0..max_height`
    pub fn expand_clamped(&self, margin: u32, max_width: u32, max_height: u32) -> Rect {
        let x0 = self.x.saturating_sub(margin);
        let y0 = self.y.saturating_sub(margin);
        let x1 = self.x1().saturating_add(margin).min(max_width);
        let y1 = self.y1().saturating_add(margin).min(max_height);
        Rect::from_corners(x0, y0, x1, y1)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.x,
            self.y,
            self.x1(),
            self.y1()
        )
    }
}

/// Which part of a two-row sprite sheet a job reads from.
///
/// The sheet is split at `height / 2` and `width / 2` (integer division).
/// Each half is deliberately wider than a single grid cell so that content
/// overflowing its cell, such as a held tool, is not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRule {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl RegionRule {
    /// Compute the region for an image of the given dimensions
    pub fn region(self, width: u32, height: u32) -> Rect {
        let row_start = height / 2;
        let mid_col = width / 2;

        match self {
            RegionRule::UpperLeft => Rect::from_corners(0, 0, mid_col, row_start),
            RegionRule::UpperRight => Rect::from_corners(mid_col, 0, width, row_start),
            RegionRule::LowerLeft => Rect::from_corners(0, row_start, mid_col, height),
            RegionRule::LowerRight => Rect::from_corners(mid_col, row_start, width, height),
        }
    }
}
