//! Layout constraints for widgets.
//!
//! Form fields and tables stretch to the width their container offers and
//! size their height from content, so most callers build constraints with
//! [`Constraints::fill_width`] and widgets read them back through
//! [`Constraints::has_bounded_width`].

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Exact width, any height up to `max_height`.
    #[must_use]
    pub const fn fill_width(width: f32, max_height: f32) -> Self {
        Self::new(width, width, 0.0, max_height)
    }

    /// Whether a container width is available to stretch into.
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(100.0, 200.0));
        assert_eq!(c.min_width, 100.0);
        assert_eq!(c.max_width, 100.0);
        assert_eq!(c.min_height, 200.0);
        assert_eq!(c.max_height, 200.0);
    }

    #[test]
    fn test_constraints_loose() {
        let c = Constraints::loose(Size::new(100.0, 200.0));
        assert_eq!(c.min_width, 0.0);
        assert_eq!(c.max_height, 200.0);
    }

    #[test]
    fn test_constraints_constrain() {
        let c = Constraints::new(50.0, 150.0, 50.0, 150.0);
        assert_eq!(
            c.constrain(Size::new(100.0, 100.0)),
            Size::new(100.0, 100.0)
        );
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(50.0, 50.0));
        assert_eq!(
            c.constrain(Size::new(200.0, 200.0)),
            Size::new(150.0, 150.0)
        );
    }

    #[test]
    fn test_constraints_fill_width() {
        let c = Constraints::fill_width(640.0, 480.0);
        assert!(c.has_bounded_width());
        assert_eq!(c.constrain(Size::new(120.0, 900.0)), Size::new(640.0, 480.0));
        assert!(!Constraints::unbounded().has_bounded_width());
    }

    #[test]
    fn test_constraints_unbounded_keeps_size() {
        let s = Size::new(1e6, 1e6);
        assert_eq!(Constraints::unbounded().constrain(s), s);
    }
}
