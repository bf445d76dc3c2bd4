//! Tri-state checkbox used for table row selection.

use marquee_core::{
    html,
    widget::{AccessibleRole, LayoutResult},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    MouseButton, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Some but not all (header of a partially selected table)
    Indeterminate,
}

impl CheckState {
    /// State after a click. Indeterminate resolves to checked.
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Unchecked | Self::Indeterminate => Self::Checked,
            Self::Checked => Self::Unchecked,
        }
    }

    /// Check if checked (true for Checked, false for others).
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Check if indeterminate.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }

    /// Value of the `aria-checked` attribute.
    #[must_use]
    pub const fn aria(&self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Indeterminate => "mixed",
        }
    }
}

/// Message emitted when checkbox state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChanged {
    /// The new state
    pub state: CheckState,
}

/// Checkbox widget.
#[derive(Debug, Clone)]
pub struct Checkbox {
    state: CheckState,
    disabled: bool,
    box_size: f32,
    box_color: Color,
    checked_color: Color,
    check_color: Color,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    bounds: Rect,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox {
    /// Create a new checkbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CheckState::Unchecked,
            disabled: false,
            box_size: 16.0,
            box_color: Color::new(0.8, 0.8, 0.8, 1.0),
            checked_color: Color::rgb(0.09, 0.09, 0.11),
            check_color: Color::WHITE,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the state directly.
    #[must_use]
    pub const fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set box size.
    #[must_use]
    pub fn box_size(mut self, size: f32) -> Self {
        self.box_size = size.max(8.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn get_state(&self) -> CheckState {
        self.state
    }

    fn box_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + (self.bounds.width - self.box_size).max(0.0) / 2.0,
            self.bounds.y + (self.bounds.height - self.box_size).max(0.0) / 2.0,
            self.box_size,
            self.box_size,
        )
    }
}

impl Widget for Checkbox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.box_size, self.box_size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let box_rect = self.box_rect();
        let filled = self.state.is_checked() || self.state.is_indeterminate();

        if filled {
            canvas.fill_rect(box_rect, self.checked_color);
        } else {
            canvas.stroke_rect(box_rect, self.box_color, 1.0);
        }

        match self.state {
            CheckState::Checked => {
                let inner = Rect::new(
                    self.box_size.mul_add(0.25, box_rect.x),
                    self.box_size.mul_add(0.25, box_rect.y),
                    self.box_size * 0.5,
                    self.box_size * 0.5,
                );
                canvas.fill_rect(inner, self.check_color);
            }
            CheckState::Indeterminate => {
                let line = Rect::new(
                    self.box_size.mul_add(0.2, box_rect.x),
                    self.box_size.mul_add(0.45, box_rect.y),
                    self.box_size * 0.6,
                    self.box_size * 0.1,
                );
                canvas.fill_rect(line, self.check_color);
            }
            CheckState::Unchecked => {}
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.bounds.contains_point(position) {
                self.state = self.state.toggle();
                return Some(Box::new(CheckboxChanged { state: self.state }));
            }
        }

        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Checkbox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Checkbox {
    fn brick_name(&self) -> &'static str {
        "Checkbox"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16), BrickAssertion::Focusable]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        BrickVerification::all_passed(self.assertions())
    }

    fn to_html(&self) -> String {
        let label = self
            .accessible_name_value
            .as_deref()
            .map(|name| format!(r#" aria-label="{}""#, html::escape(name)))
            .unwrap_or_default();
        let test_id = self
            .test_id_value
            .as_deref()
            .map(|id| format!(r#" data-testid="{}""#, html::escape(id)))
            .unwrap_or_default();
        format!(
            r#"<button type="button" role="checkbox" class="brick-checkbox" data-state="{state}" aria-checked="{aria}"{label}{test_id}{disabled}></button>"#,
            state = match self.state {
                CheckState::Unchecked => "unchecked",
                CheckState::Checked => "checked",
                CheckState::Indeterminate => "indeterminate",
            },
            aria = self.state.aria(),
            disabled = html::flag(" disabled", self.disabled),
        )
    }

    fn to_css(&self) -> String {
        format!(
            ".brick-checkbox {{ width: {size}px; height: {size}px; border-radius: 4px; border: 1px solid {border}; }}\n\
             .brick-checkbox[data-state=\"checked\"], .brick-checkbox[data-state=\"indeterminate\"] {{ background: {fill}; }}",
            size = self.box_size,
            border = self.box_color.to_hex(),
            fill = self.checked_color.to_hex(),
        )
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{DrawCommand, Point, RecordingCanvas};

    // =========================================================================
    // CheckState Tests
    // =========================================================================

    #[test]
    fn test_check_state_default() {
        assert_eq!(CheckState::default(), CheckState::Unchecked);
    }

    #[test]
    fn test_check_state_toggle() {
        assert_eq!(CheckState::Unchecked.toggle(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggle(), CheckState::Unchecked);
        assert_eq!(CheckState::Indeterminate.toggle(), CheckState::Checked);
    }

    #[test]
    fn test_check_state_predicates() {
        assert!(CheckState::Checked.is_checked());
        assert!(!CheckState::Indeterminate.is_checked());
        assert!(CheckState::Indeterminate.is_indeterminate());
        assert_eq!(CheckState::Indeterminate.aria(), "mixed");
    }

    // =========================================================================
    // Checkbox Widget Tests
    // =========================================================================

    #[test]
    fn test_checkbox_click_toggles() {
        let mut cb = Checkbox::new();
        cb.layout(Rect::new(0.0, 0.0, 48.0, 48.0));

        let msg = cb.event(&Event::click(Point::new(24.0, 24.0))).unwrap();
        let changed = msg.downcast::<CheckboxChanged>().unwrap();
        assert_eq!(changed.state, CheckState::Checked);
        assert_eq!(cb.get_state(), CheckState::Checked);
    }

    #[test]
    fn test_checkbox_click_outside_ignored() {
        let mut cb = Checkbox::new();
        cb.layout(Rect::new(0.0, 0.0, 48.0, 48.0));
        assert!(cb.event(&Event::click(Point::new(100.0, 100.0))).is_none());
        assert_eq!(cb.get_state(), CheckState::Unchecked);
    }

    #[test]
    fn test_checkbox_disabled_ignores_clicks() {
        let mut cb = Checkbox::new().disabled(true);
        cb.layout(Rect::new(0.0, 0.0, 48.0, 48.0));
        assert!(cb.event(&Event::click(Point::new(24.0, 24.0))).is_none());
        assert!(!cb.is_focusable());
    }

    #[test]
    fn test_checkbox_paint_indeterminate_bar() {
        let mut cb = Checkbox::new().state(CheckState::Indeterminate);
        cb.layout(Rect::new(0.0, 0.0, 48.0, 48.0));
        let mut canvas = RecordingCanvas::new();
        cb.paint(&mut canvas);

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::FillRect { bounds, .. } if bounds == Rect::new(16.0, 16.0, 16.0, 16.0)
        ));
    }

    #[test]
    fn test_checkbox_paint_unchecked_outline_only() {
        let mut cb = Checkbox::new();
        cb.layout(Rect::new(0.0, 0.0, 16.0, 16.0));
        let mut canvas = RecordingCanvas::new();
        cb.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);
        assert!(matches!(canvas.commands()[0], DrawCommand::StrokeRect { .. }));
    }

    // =========================================================================
    // Brick Tests
    // =========================================================================

    #[test]
    fn test_checkbox_to_html() {
        let html = Checkbox::new()
            .state(CheckState::Indeterminate)
            .with_accessible_name("Select all rows")
            .to_html();
        assert!(html.contains(r#"aria-checked="mixed""#));
        assert!(html.contains(r#"data-state="indeterminate""#));
        assert!(html.contains(r#"aria-label="Select all rows""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_checkbox_brick_verify() {
        let cb = Checkbox::new();
        assert_eq!(cb.brick_name(), "Checkbox");
        assert!(cb.verify().is_valid());
        assert!(cb.can_render());
        assert!(cb.to_css().contains(".brick-checkbox"));
    }
}
