//! Small geometry helpers shared by the widgets.
//!
//! Pointer coordinates arrive as floating-point positions, widget layout
//! happens in integer cell rectangles, and the carousel projects item
//! slots from cylinder space onto the drawing surface. All three live here.

/// A 2D point in input-space coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `earlier` to `self`.
    #[must_use]
    pub fn delta_from(self, earlier: Self) -> (f32, f32) {
        (self.x - earlier.x, self.y - earlier.y)
    }
}

/// An axis-aligned cell rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers zero cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether a cell position falls inside.
    #[must_use]
    pub const fn contains(self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether a floating-point position falls inside.
    #[must_use]
    pub fn contains_point(self, p: Point) -> bool {
        p.x >= self.x as f32
            && p.x < self.right() as f32
            && p.y >= self.y as f32
            && p.y < self.bottom() as f32
    }

    /// Shrink the rectangle by `margin` cells on every side.
    ///
    /// Collapses to an empty rectangle when the margin eats the whole area.
    #[must_use]
    pub const fn inset(self, margin: u32) -> Self {
        let shrink = margin.saturating_mul(2);
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }

    /// Center cell of the rectangle.
    #[must_use]
    pub const fn center(self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Normalize an angle in degrees to [0, 360).
#[must_use]
pub fn normalize_deg(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// A carousel item slot projected onto the viewing plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Horizontal offset from the rotation center, same unit as radius.
    pub offset_x: f32,
    /// Vertical offset induced by pitch, same unit as radius.
    pub offset_y: f32,
    /// Depth in [-1, 1]: 1 is nearest the viewer, -1 farthest.
    pub depth: f32,
    /// Apparent scale in (0, 1]: shrinks with distance.
    pub scale: f32,
}

/// Project a slot on the rotation cylinder onto the viewing plane.
///
/// `angle_deg` is the slot angle relative to the viewer (slot + yaw),
/// `pitch_deg` the container tilt, `radius` the Z push distance. A simple
/// perspective division maps depth to apparent scale.
#[must_use]
pub fn project_slot(angle_deg: f32, pitch_deg: f32, radius: f32) -> Projected {
    // Perspective distance: the camera sits this far in front of the center.
    const PERSPECTIVE: f32 = 1000.0;

    let angle = angle_deg.to_radians();
    let x = angle.sin() * radius;
    let z = angle.cos() * radius; // positive toward the viewer

    let scale = PERSPECTIVE / (PERSPECTIVE + radius - z);
    let depth = if radius > 0.0 { z / radius } else { 0.0 };

    // Tilt lifts far items and lowers near ones around the pitch axis.
    let tilt = (pitch_deg - 10.0).to_radians();
    let offset_y = -z * tilt.sin() * 0.5;

    Projected {
        offset_x: x * scale,
        offset_y,
        depth,
        scale,
    }
}
