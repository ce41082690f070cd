use crate::foundation::error::{RemaskError, RemaskResult};

/// A point in buffer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Snap to the nearest grid line on both axes.
    ///
    /// Coordinates past the midpoint of a grid cell round up, everything
    /// else rounds down. Rounding up past `u32::MAX` falls back to rounding
    /// down, and a zero grid leaves the point unchanged. Selection UIs use
    /// this so every drag produces a grid-aligned rectangle.
    pub fn snap_to_grid(self, grid: u32) -> Self {
        fn snap(v: u32, grid: u32) -> u32 {
            if grid == 0 {
                return v;
            }
            let rem = v % grid;
            if rem > grid / 2 {
                v.checked_add(grid - rem).unwrap_or(v - rem)
            } else {
                v - rem
            }
        }

        Self {
            x: snap(self.x, grid),
            y: snap(self.y, grid),
        }
    }
}

/// An axis-aligned rectangle bounding a transform's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Selection {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Normalized rectangle spanning two corner points, regardless of which
    /// corner the drag started from.
    pub fn from_points(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            w: a.x.max(b.x) - x,
            h: a.y.max(b.y) - y,
        }
    }

    pub fn has_area(self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// Check that the rectangle lies fully inside a `width`×`height` buffer.
    pub fn validate_for(self, width: u32, height: u32) -> RemaskResult<()> {
        let ok = self
            .x
            .checked_add(self.w)
            .is_some_and(|right| right <= width)
            && self
                .y
                .checked_add(self.h)
                .is_some_and(|bottom| bottom <= height);
        if !ok {
            return Err(RemaskError::validation(format!(
                "selection {}x{}+{}+{} exceeds {}x{} buffer",
                self.w, self.h, self.x, self.y, width, height
            )));
        }
        Ok(())
    }

    /// Shrink width and height down to the nearest lower multiple of `grid`.
    /// The origin is unchanged; a zero grid leaves the rectangle unchanged.
    pub fn quantized(self, grid: u32) -> Self {
        if grid == 0 {
            return self;
        }
        Self {
            w: self.w - self.w % grid,
            h: self.h - self.h % grid,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_closer_grid_line() {
        let grid = 8;
        assert_eq!(Point::new(3, 4).snap_to_grid(grid), Point::new(0, 0));
        assert_eq!(Point::new(5, 12).snap_to_grid(grid), Point::new(8, 8));
        assert_eq!(Point::new(16, 13).snap_to_grid(grid), Point::new(16, 16));
    }

    #[test]
    fn snap_tolerates_degenerate_inputs() {
        // Zero grid leaves the point alone.
        assert_eq!(Point::new(13, 37).snap_to_grid(0), Point::new(13, 37));
        // Rounding up past u32::MAX rounds down instead of overflowing.
        assert_eq!(
            Point::new(u32::MAX, 0).snap_to_grid(8),
            Point::new(u32::MAX - 7, 0)
        );
    }

    #[test]
    fn from_points_normalizes_drag_direction() {
        let a = Point::new(24, 8);
        let b = Point::new(8, 40);
        let sel = Selection::from_points(a, b);
        assert_eq!(sel, Selection::new(8, 8, 16, 32));
        assert_eq!(sel, Selection::from_points(b, a));
    }

    #[test]
    fn zero_extent_selection_has_no_area() {
        assert!(!Selection::from_points(Point::new(8, 8), Point::new(8, 32)).has_area());
        assert!(Selection::new(0, 0, 8, 8).has_area());
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        assert!(Selection::new(0, 0, 16, 16).validate_for(16, 16).is_ok());
        assert!(Selection::new(8, 0, 16, 16).validate_for(16, 16).is_err());
        assert!(Selection::new(0, 1, 16, 16).validate_for(16, 16).is_err());
        assert!(
            Selection::new(u32::MAX, 0, 1, 1)
                .validate_for(u32::MAX, 1)
                .is_err()
        );
    }

    #[test]
    fn quantized_shrinks_to_lower_multiple() {
        let sel = Selection::new(8, 8, 23, 41);
        assert_eq!(sel.quantized(8), Selection::new(8, 8, 16, 40));
        assert_eq!(sel.quantized(16), Selection::new(8, 8, 16, 32));
        assert_eq!(Selection::new(0, 0, 7, 7).quantized(8).has_area(), false);
        assert_eq!(sel.quantized(0), sel);
    }
}
