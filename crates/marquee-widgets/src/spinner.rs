//! Loading spinner.

use marquee_core::{
    html,
    widget::{AccessibleRole, LayoutResult},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;

/// Indeterminate progress indicator.
///
/// Painted as a ring with a short arc marker; the animation itself belongs to
/// the rendering target (`to_css` carries the keyframes).
#[derive(Debug, Clone)]
pub struct Spinner {
    size: f32,
    color: Color,
    label: String,
    bounds: Rect,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    /// 16px spinner labelled "Loading".
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: 16.0,
            color: Color::MUTED,
            label: "Loading".to_string(),
            bounds: Rect::default(),
        }
    }

    /// Set diameter.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(4.0);
        self
    }

    /// Set stroke color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set accessible label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Diameter in pixels.
    #[must_use]
    pub const fn diameter(&self) -> f32 {
        self.size
    }
}

impl Widget for Spinner {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.size, self.size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let center = self.bounds.center();
        let radius = self.size / 2.0 - 1.0;
        canvas.stroke_circle(center, radius, self.color.with_alpha(0.25), 2.0);
        canvas.draw_line(
            center,
            Point::new(center.x, center.y - radius),
            self.color,
            2.0,
        );
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Status
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Spinner {
    fn brick_name(&self) -> &'static str {
        "Spinner"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        BrickVerification::all_passed(self.assertions())
    }

    fn to_html(&self) -> String {
        format!(
            r#"<span class="brick-spinner" role="status" aria-label="{}"></span>"#,
            html::escape(&self.label)
        )
    }

    fn to_css(&self) -> String {
        format!(
            ".brick-spinner {{ display: inline-block; width: {s}px; height: {s}px; border: 2px solid {c}; border-top-color: transparent; border-radius: 50%; animation: brick-spin 1s linear infinite; }}\n\
             @keyframes brick-spin {{ to {{ transform: rotate(360deg); }} }}",
            s = self.size,
            c = self.color.to_hex(),
        )
    }
}
