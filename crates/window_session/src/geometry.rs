//! Window geometry: sizes, positions and the constraints applied to them
//!
//! Everything in here is pure integer math so that session operations stay
//! total. Screen coordinates follow the backend convention of a top-left
//! origin with y growing downwards.

use serde::{Deserialize, Serialize};

/// Width and height in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Top-left screen coordinate of a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal screen coordinate
    pub x: i32,
    /// Vertical screen coordinate
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed width:height ratio enforced on resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Width term
    pub numerator: u32,
    /// Height term
    pub denominator: u32,
}

impl AspectRatio {
    /// Create a new aspect ratio
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self { numerator, denominator }
    }

    /// Height matching `width` under this ratio (truncated)
    pub fn height_for(&self, width: u32) -> u32 {
        if self.numerator == 0 {
            return 0;
        }
        let height = u64::from(width) * u64::from(self.denominator) / u64::from(self.numerator);
        u32::try_from(height).unwrap_or(u32::MAX)
    }

    /// Width matching `height` under this ratio (truncated)
    pub fn width_for(&self, height: u32) -> u32 {
        if self.denominator == 0 {
            return 0;
        }
        let width = u64::from(height) * u64::from(self.numerator) / u64::from(self.denominator);
        u32::try_from(width).unwrap_or(u32::MAX)
    }
}

/// Minimum and optional maximum window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    /// Smallest allowed size
    pub min: Size,
    /// Largest allowed size, unbounded when `None`
    #[serde(default)]
    pub max: Option<Size>,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: Size::new(200, 200),
            max: None,
        }
    }
}

impl SizeLimits {
    /// Clamp a width into the limits; never returns zero
    pub fn clamp_width(&self, width: u32) -> u32 {
        let width = width.max(self.min.width).max(1);
        match self.max {
            Some(max) => width.min(max.width.max(self.min.width)),
            None => width,
        }
    }

    /// Clamp a height into the limits; never returns zero
    pub fn clamp_height(&self, height: u32) -> u32 {
        let height = height.max(self.min.height).max(1);
        match self.max {
            Some(max) => height.min(max.height.max(self.min.height)),
            None => height,
        }
    }

    /// Whether `size` lies inside the limits
    pub fn contains(&self, size: Size) -> bool {
        self.clamp_width(size.width) == size.width && self.clamp_height(size.height) == size.height
    }
}

/// Top-left position that centers a window of `window` size on a display
///
/// Computed as `(W/2 - w/2, H/2 - h/2)` with each half truncated first. When
/// the display extent is even and the window extent odd this lands one pixel
/// past `(W - w) / 2`: a 641x481 window on a 1920x1080 display is placed at
/// (640, 300), not (639, 299).
pub fn center_in(display: Size, window: Size) -> Position {
    let half = |extent: u32| i32::try_from(extent / 2).unwrap_or(i32::MAX);
    Position::new(
        half(display.width) - half(window.width),
        half(display.height) - half(window.height),
    )
}

/// Normalize a requested size against limits and an optional aspect ratio
///
/// Width drives: the height is derived from it. When the derived height
/// falls outside the limits it is clamped and the width is derived back from
/// it. Limits win over the ratio when both cannot hold.
pub fn constrain_size(requested: Size, limits: &SizeLimits, aspect: Option<AspectRatio>) -> Size {
    let width = limits.clamp_width(requested.width);

    let Some(ratio) = aspect else {
        return Size::new(width, limits.clamp_height(requested.height));
    };

    let height = ratio.height_for(width);
    let clamped_height = limits.clamp_height(height);
    if clamped_height == height {
        return Size::new(width, height);
    }

    Size::new(limits.clamp_width(ratio.width_for(clamped_height)), clamped_height)
}
