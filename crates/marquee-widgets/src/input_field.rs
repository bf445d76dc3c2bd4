//! `InputField` widget: a labelled text field with validation text, clear and
//! password-reveal affordances, and a loading state.
//!
//! A field is either *controlled* or *uncontrolled*, fixed at construction:
//!
//! - Uncontrolled fields own their buffer. Edits update it immediately and are
//!   also reported through `on_change` and a [`TextChanged`] message.
//! - Controlled fields display exactly the value last handed to
//!   [`InputField::set_value`]. Edits only *propose* a value (via `on_change`
//!   and [`TextChanged`]); nothing changes on screen until the owner accepts
//!   it by calling `set_value`.

use crate::spinner::Spinner;
use marquee_core::{
    html,
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    InstanceId, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const LABEL_GAP: f32 = 8.0;
const ICON_SIZE: f32 = 16.0;
const ICON_GAP: f32 = 4.0;
const TRAILING_PADDING: f32 = 12.0;
const DESCRIPTION_FONT: f32 = 12.0;
const LINE_HEIGHT: f32 = 1.5;

/// Message emitted when an edit produces a new value.
///
/// For controlled fields this is a proposal; the displayed value is
/// unchanged until the owner calls `set_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChanged {
    /// The new (or proposed) text value
    pub value: String,
}

/// Message emitted when Enter is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubmitted {
    /// The submitted text value
    pub value: String,
}

/// Message emitted when the clear affordance is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCleared;

/// Message emitted when the password reveal affordance is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordVisibilityChanged {
    /// Whether the password is now shown as plain text
    pub visible: bool,
}

/// Kind of value the field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free text
    #[default]
    Text,
    /// Obscured text with a reveal toggle
    Password,
    /// Email address
    Email,
    /// Numeric entry; non-numeric characters are rejected
    Number,
}

impl InputType {
    /// HTML `type` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Self::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            Self::Text | Self::Password | Self::Email => !c.is_control(),
        }
    }
}

/// Visual treatment of the field box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Muted background, no visible border
    Filled,
    /// Plain background with a border
    #[default]
    Outlined,
    /// No background or border until focused
    Ghost,
}

impl InputVariant {
    /// CSS modifier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
        }
    }

    /// Background color of the field box.
    #[must_use]
    pub fn background(self, focused: bool) -> Color {
        match self {
            Self::Filled => Color::rgb(0.96, 0.96, 0.96),
            Self::Outlined => Color::WHITE,
            Self::Ghost if focused => Color::WHITE,
            Self::Ghost => Color::TRANSPARENT,
        }
    }

    /// Border color when neither focused nor invalid.
    #[must_use]
    pub fn border(self) -> Color {
        match self {
            Self::Outlined => Color::rgb(0.89, 0.89, 0.91),
            Self::Filled | Self::Ghost => Color::TRANSPARENT,
        }
    }
}

/// Field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputSize {
    /// 32px tall
    #[serde(rename = "sm")]
    Small,
    /// 40px tall
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// 48px tall
    #[serde(rename = "lg")]
    Large,
}

impl InputSize {
    /// CSS modifier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }

    /// Height of the field box.
    #[must_use]
    pub const fn height(self) -> f32 {
        match self {
            Self::Small => 32.0,
            Self::Medium => 40.0,
            Self::Large => 48.0,
        }
    }

    /// Horizontal padding inside the field box.
    #[must_use]
    pub const fn padding_x(self) -> f32 {
        match self {
            Self::Small => 8.0,
            Self::Medium => 12.0,
            Self::Large => 16.0,
        }
    }

    /// Font size of the value text.
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Small | Self::Medium => 14.0,
            Self::Large => 16.0,
        }
    }

    /// Font size of the label.
    #[must_use]
    pub const fn label_font_size(self) -> f32 {
        match self {
            Self::Small => 12.0,
            Self::Medium => 14.0,
            Self::Large => 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ValueSource {
    Controlled(String),
    Uncontrolled(String),
}

type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;
type ClearHandler = Arc<dyn Fn() + Send + Sync>;

/// Labelled single-line text field.
pub struct InputField {
    id: InstanceId,
    source: ValueSource,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    input_type: InputType,
    variant: InputVariant,
    size: InputSize,
    disabled: bool,
    invalid: bool,
    loading: bool,
    clearable: bool,
    show_password: bool,
    on_change: Option<ChangeHandler>,
    on_clear: Option<ClearHandler>,
    min_width: f32,
    test_id_value: Option<String>,
    bounds: Rect,
    focused: bool,
    cursor: usize,
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("input_type", &self.input_type)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(text: Option<&String>) -> Option<&str> {
    text.map(String::as_str).filter(|s| !s.is_empty())
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

fn insert_chars(buffer: &mut String, cursor: &mut usize, text: &str, input_type: InputType) -> bool {
    let mut changed = false;
    for c in text.chars().filter(|c| input_type.accepts(*c)) {
        buffer.insert(byte_index(buffer, *cursor), c);
        *cursor += 1;
        changed = true;
    }
    changed
}

fn remove_before(buffer: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 {
        return false;
    }
    *cursor -= 1;
    buffer.remove(byte_index(buffer, *cursor));
    true
}

fn remove_at(buffer: &mut String, cursor: &mut usize) -> bool {
    if *cursor >= buffer.chars().count() {
        return false;
    }
    buffer.remove(byte_index(buffer, *cursor));
    true
}

impl InputField {
    /// Uncontrolled field starting empty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(ValueSource::Uncontrolled(String::new()))
    }

    /// Uncontrolled field starting with `initial`.
    #[must_use]
    pub fn uncontrolled(initial: impl Into<String>) -> Self {
        Self::with_source(ValueSource::Uncontrolled(initial.into()))
    }

    /// Controlled field displaying `value`.
    #[must_use]
    pub fn controlled(value: impl Into<String>) -> Self {
        Self::with_source(ValueSource::Controlled(value.into()))
    }

    fn with_source(source: ValueSource) -> Self {
        let mut field = Self {
            id: InstanceId::next(),
            source,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            input_type: InputType::Text,
            variant: InputVariant::Outlined,
            size: InputSize::Medium,
            disabled: false,
            invalid: false,
            loading: false,
            clearable: false,
            show_password: false,
            on_change: None,
            on_clear: None,
            min_width: 240.0,
            test_id_value: None,
            bounds: Rect::default(),
            focused: false,
            cursor: 0,
        };
        field.cursor = field.char_count();
        field
    }

    /// Set label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set helper text shown below the field.
    #[must_use]
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set error message; shown instead of the helper text.
    #[must_use]
    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    /// Set input type.
    #[must_use]
    pub const fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set visual variant.
    #[must_use]
    pub const fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set size.
    #[must_use]
    pub const fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the value as invalid.
    #[must_use]
    pub const fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Show the loading spinner and disable the field.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Offer a clear affordance while the field has a value.
    #[must_use]
    pub const fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Called with the new (or proposed) value after every edit.
    #[must_use]
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Called when the clear affordance is activated.
    #[must_use]
    pub fn on_clear<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_clear = Some(Arc::new(handler));
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // === State ===

    /// Displayed value.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.source {
            ValueSource::Controlled(v) | ValueSource::Uncontrolled(v) => v,
        }
    }

    /// Whether the owner supplies the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled(_))
    }

    /// Accept a new value from the owner of a controlled field.
    ///
    /// Ignored for uncontrolled fields; a field never switches ownership.
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let ValueSource::Controlled(current) = &mut self.source {
            *current = value.into();
            self.cursor = self.cursor.min(self.char_count());
        } else {
            debug!(field = %self.dom_id(), "set_value ignored on uncontrolled field");
        }
    }

    /// Update the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            debug!(field = %self.dom_id(), loading, "loading changed");
            self.loading = loading;
        }
    }

    /// Update the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if self.is_disabled() {
            self.focused = false;
        }
    }

    /// Update validation state and message.
    pub fn set_validation(&mut self, invalid: bool, error_message: Option<String>) {
        self.invalid = invalid;
        self.error_message = error_message;
    }

    /// Type the input renders with (password fields flip to text when revealed).
    #[must_use]
    pub fn effective_type(&self) -> InputType {
        if self.input_type == InputType::Password && self.show_password {
            InputType::Text
        } else {
            self.input_type
        }
    }

    /// Whether the password is currently revealed.
    #[must_use]
    pub const fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Whether the clear affordance is shown.
    #[must_use]
    pub fn is_clear_visible(&self) -> bool {
        self.clearable && !self.loading && !self.value().is_empty()
    }

    /// Whether the password reveal affordance is shown.
    #[must_use]
    pub fn is_password_toggle_visible(&self) -> bool {
        self.input_type == InputType::Password && !self.loading
    }

    /// Whether the loading spinner is shown.
    #[must_use]
    pub const fn is_spinner_visible(&self) -> bool {
        self.loading
    }

    /// Whether input is blocked (explicitly disabled or loading).
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether the field has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Cursor position in characters.
    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.cursor.min(self.char_count())
    }

    /// DOM id of the input element.
    #[must_use]
    pub fn dom_id(&self) -> String {
        self.id.dom_id("input-field")
    }

    /// Text shown below the field: the error message if set, else the helper text.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        non_empty(self.error_message.as_ref()).or_else(|| non_empty(self.helper_text.as_ref()))
    }

    /// Id linking the input to its description, present when there is one.
    #[must_use]
    pub fn describedby_id(&self) -> Option<String> {
        self.description_text()
            .map(|_| format!("{}-description", self.dom_id()))
    }

    /// Text drawn in the field box: bullets while a password is hidden.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.effective_type() == InputType::Password {
            "•".repeat(self.char_count())
        } else {
            self.value().to_string()
        }
    }

    // === Actions ===

    /// Activate the clear affordance.
    ///
    /// Empties an uncontrolled buffer and calls `on_clear`. No change event is
    /// produced. Returns false when the affordance is not shown.
    pub fn clear(&mut self) -> bool {
        if !self.is_clear_visible() {
            return false;
        }
        if let ValueSource::Uncontrolled(buffer) = &mut self.source {
            buffer.clear();
            self.cursor = 0;
        }
        debug!(field = %self.dom_id(), controlled = self.is_controlled(), "cleared");
        if let Some(handler) = &self.on_clear {
            handler();
        }
        true
    }

    /// Flip password visibility. Returns false when the toggle is not shown.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if !self.is_password_toggle_visible() {
            return false;
        }
        self.show_password = !self.show_password;
        debug!(field = %self.dom_id(), visible = self.show_password, "password visibility toggled");
        true
    }

    fn char_count(&self) -> usize {
        self.value().chars().count()
    }

    fn apply_edit(
        &mut self,
        edit: impl FnOnce(&mut String, &mut usize) -> bool,
    ) -> Option<Box<dyn Any + Send>> {
        let mut proposed = self.value().to_string();
        let mut cursor = self.cursor_position();
        if !edit(&mut proposed, &mut cursor) {
            return None;
        }

        self.cursor = cursor;
        match &mut self.source {
            ValueSource::Uncontrolled(buffer) => buffer.clone_from(&proposed),
            ValueSource::Controlled(_) => {
                debug!(field = %self.id.dom_id("input-field"), proposed = %proposed, "controlled change proposed");
            }
        }
        if let Some(handler) = &self.on_change {
            handler(&proposed);
        }
        Some(Box::new(TextChanged { value: proposed }))
    }

    // === Geometry ===

    fn label_height(&self) -> f32 {
        if non_empty(self.label.as_ref()).is_some() {
            self.size.label_font_size().mul_add(LINE_HEIGHT, LABEL_GAP)
        } else {
            0.0
        }
    }

    fn description_height(&self) -> f32 {
        if self.description_text().is_some() {
            DESCRIPTION_FONT.mul_add(LINE_HEIGHT, LABEL_GAP)
        } else {
            0.0
        }
    }

    /// Bounds of the field box (excluding label and description).
    #[must_use]
    pub fn field_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.label_height(),
            self.bounds.width,
            self.size.height(),
        )
    }

    /// Trailing slots right to left: reveal, then clear, then spinner.
    fn trailing_slots(&self) -> (Option<Rect>, Option<Rect>, Option<Rect>) {
        let field = self.field_rect();
        let y = field.y + (field.height - ICON_SIZE) / 2.0;
        let mut right = field.right() - TRAILING_PADDING;
        let mut next_slot = |visible: bool| {
            visible.then(|| {
                let slot = Rect::new(right - ICON_SIZE, y, ICON_SIZE, ICON_SIZE);
                right -= ICON_SIZE + ICON_GAP;
                slot
            })
        };
        let reveal = next_slot(self.is_password_toggle_visible());
        let clear = next_slot(self.is_clear_visible());
        let spinner = next_slot(self.is_spinner_visible());
        (reveal, clear, spinner)
    }

    /// Hit area of the clear affordance, when shown.
    #[must_use]
    pub fn clear_button_rect(&self) -> Option<Rect> {
        self.trailing_slots().1
    }

    /// Hit area of the password reveal affordance, when shown.
    #[must_use]
    pub fn reveal_button_rect(&self) -> Option<Rect> {
        self.trailing_slots().0
    }

    fn has_trailing_area(&self) -> bool {
        self.input_type == InputType::Password || self.clearable || self.loading
    }

    fn text_color(&self) -> Color {
        if self.is_disabled() {
            Color::BLACK.with_alpha(0.5)
        } else {
            Color::BLACK
        }
    }

    fn border_color(&self) -> Color {
        if self.invalid {
            Color::DESTRUCTIVE
        } else if self.focused {
            Color::RING
        } else {
            self.variant.border()
        }
    }
}

impl Widget for InputField {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = self.label_height() + self.size.height() + self.description_height();
        let width = if constraints.has_bounded_width() {
            self.min_width.max(constraints.max_width)
        } else {
            self.min_width
        };
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(label) = non_empty(self.label.as_ref()) {
            let style = TextStyle {
                size: self.size.label_font_size(),
                color: if self.disabled {
                    Color::MUTED
                } else {
                    Color::BLACK
                },
                weight: FontWeight::Medium,
            };
            canvas.draw_text(label, self.bounds.origin(), &style);
        }

        let field = self.field_rect();
        canvas.fill_rect(field, self.variant.background(self.focused));
        canvas.stroke_rect(field, self.border_color(), 1.0);

        let text_pos = Point::new(
            field.x + self.size.padding_x(),
            field.y + (field.height - self.size.font_size()) / 2.0,
        );
        if self.value().is_empty() {
            if !self.placeholder.is_empty() {
                let style = TextStyle {
                    size: self.size.font_size(),
                    color: Color::MUTED,
                    ..TextStyle::default()
                };
                canvas.draw_text(&self.placeholder, text_pos, &style);
            }
        } else {
            let style = TextStyle {
                size: self.size.font_size(),
                color: self.text_color(),
                ..TextStyle::default()
            };
            canvas.draw_text(&self.display_text(), text_pos, &style);
        }

        let (reveal, clear, spinner) = self.trailing_slots();
        if let Some(slot) = spinner {
            let mut spinner = Spinner::new().size(ICON_SIZE);
            spinner.layout(slot);
            spinner.paint(canvas);
        }
        if let Some(slot) = clear {
            let inner = slot.inset(4.0);
            canvas.draw_line(inner.origin(), Point::new(inner.right(), inner.bottom()), Color::MUTED, 1.5);
            canvas.draw_line(Point::new(inner.right(), inner.y), Point::new(inner.x, inner.bottom()), Color::MUTED, 1.5);
        }
        if let Some(slot) = reveal {
            canvas.stroke_circle(slot.center(), 3.0, Color::MUTED, 1.5);
            if self.show_password {
                canvas.draw_line(slot.origin(), Point::new(slot.right(), slot.bottom()), Color::MUTED, 1.5);
            }
        }

        if let Some(text) = self.description_text() {
            let style = TextStyle {
                size: DESCRIPTION_FONT,
                color: if non_empty(self.error_message.as_ref()).is_some() {
                    Color::DESTRUCTIVE
                } else {
                    Color::MUTED
                },
                ..TextStyle::default()
            };
            canvas.draw_text(text, Point::new(field.x, field.bottom() + LABEL_GAP), &style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // Trailing buttons stay live on a disabled field; loading hides them.
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self
                .clear_button_rect()
                .is_some_and(|r| r.contains_point(position))
            {
                return self.clear().then(|| Box::new(InputCleared) as Box<dyn Any + Send>);
            }
            if self
                .reveal_button_rect()
                .is_some_and(|r| r.contains_point(position))
            {
                self.toggle_password_visibility();
                return Some(Box::new(PasswordVisibilityChanged {
                    visible: self.show_password,
                }));
            }
        }

        if self.is_disabled() {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let was_focused = self.focused;
                self.focused = self.field_rect().contains_point(position);
                if self.focused && !was_focused {
                    self.cursor = self.char_count();
                }
            }
            Event::FocusIn => {
                self.focused = true;
            }
            Event::FocusOut => {
                self.focused = false;
            }
            Event::TextInput { text } if self.focused => {
                let input_type = self.input_type;
                return self.apply_edit(|buffer, cursor| insert_chars(buffer, cursor, text, input_type));
            }
            Event::KeyDown { key } if self.focused => match key {
                Key::Backspace => return self.apply_edit(remove_before),
                Key::Delete => return self.apply_edit(remove_at),
                Key::Left => self.cursor = self.cursor_position().saturating_sub(1),
                Key::Right => self.cursor = (self.cursor_position() + 1).min(self.char_count()),
                Key::Home => self.cursor = 0,
                Key::End => self.cursor = self.char_count(),
                Key::Enter => {
                    return Some(Box::new(TextSubmitted {
                        value: self.value().to_string(),
                    }));
                }
                _ => {}
            },
            _ => {}
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
        !self.is_disabled()
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }

    fn accessible_name(&self) -> Option<&str> {
        non_empty(self.label.as_ref())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TextInput
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for InputField {
    fn brick_name(&self) -> &'static str {
        "InputField"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[
            BrickAssertion::MaxLatencyMs(16),
            BrickAssertion::ContrastRatio(4.5),
        ]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let mut passed = Vec::new();
        let mut failed = Vec::new();
        let background = match self.variant.background(self.focused) {
            bg if bg.a == 0.0 => Color::WHITE,
            bg => bg,
        };

        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::ContrastRatio(min) => {
                    let ratio = Color::BLACK.contrast_ratio(&background);
                    if ratio >= *min {
                        passed.push(assertion.clone());
                    } else {
                        failed.push((
                            assertion.clone(),
                            format!("text contrast {ratio:.2} below {min}"),
                        ));
                    }
                }
                _ => passed.push(assertion.clone()),
            }
        }

        BrickVerification {
            passed,
            failed,
            verification_time: Duration::from_micros(10),
        }
    }

    fn to_html(&self) -> String {
        let id = self.dom_id();
        let mut out = String::new();

        let test_id = self
            .test_id_value
            .as_deref()
            .map(|t| format!(r#" data-testid="{}""#, html::escape(t)))
            .unwrap_or_default();
        out.push_str(&format!(r#"<div class="brick-input-field"{test_id}>"#));

        if let Some(label) = non_empty(self.label.as_ref()) {
            let class = html::classes([
                Some("brick-input-field__label"),
                Some(format!("brick-input-field__label--{}", self.size.as_str()).as_str()),
                self.disabled.then_some("brick-input-field__label--disabled"),
            ]);
            out.push_str(&format!(
                r#"<label for="{id}" class="{class}">{}</label>"#,
                html::escape(label)
            ));
        }

        let input_class = html::classes([
            Some("brick-input-field__input"),
            Some(format!("brick-input-field__input--{}", self.size.as_str()).as_str()),
            Some(format!("brick-input-field__input--{}", self.variant.as_str()).as_str()),
            self.invalid.then_some("brick-input-field__input--invalid"),
            self.has_trailing_area()
                .then_some("brick-input-field__input--trailing"),
        ]);
        let placeholder = if self.placeholder.is_empty() {
            String::new()
        } else {
            format!(r#" placeholder="{}""#, html::escape(&self.placeholder))
        };
        let describedby = self
            .describedby_id()
            .map(|d| format!(r#" aria-describedby="{d}""#))
            .unwrap_or_default();
        out.push_str(r#"<div class="brick-input-field__control">"#);
        out.push_str(&format!(
            r#"<input id="{id}" type="{ty}" class="{input_class}" value="{value}"{placeholder}{disabled} aria-invalid="{invalid}"{describedby}/>"#,
            ty = self.effective_type().as_str(),
            value = html::escape(self.value()),
            disabled = html::flag(" disabled", self.is_disabled()),
            invalid = self.invalid,
        ));

        if self.has_trailing_area() {
            out.push_str(r#"<div class="brick-input-field__trailing">"#);
            if self.is_spinner_visible() {
                out.push_str(&Spinner::new().size(ICON_SIZE).to_html());
            }
            if self.is_clear_visible() {
                out.push_str(r#"<button type="button" class="brick-input-field__clear" aria-label="Clear" tabindex="-1"></button>"#);
            }
            if self.is_password_toggle_visible() {
                let label = if self.show_password {
                    "Hide password"
                } else {
                    "Show password"
                };
                out.push_str(&format!(
                    r#"<button type="button" class="brick-input-field__reveal" aria-label="{label}" aria-pressed="{}" tabindex="-1"></button>"#,
                    self.show_password
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");

        if let (Some(text), Some(desc_id)) = (self.description_text(), self.describedby_id()) {
            let class = html::classes([
                Some("brick-input-field__description"),
                non_empty(self.error_message.as_ref())
                    .map(|_| "brick-input-field__description--error"),
            ]);
            out.push_str(&format!(
                r#"<p id="{desc_id}" class="{class}">{}</p>"#,
                html::escape(text)
            ));
        }

        out.push_str("</div>");
        out
    }

    fn to_css(&self) -> String {
        let mut css = String::from(
            ".brick-input-field { display: flex; flex-direction: column; gap: 8px; }\n\
             .brick-input-field__control { position: relative; }\n\
             .brick-input-field__input { width: 100%; border-radius: 6px; border: 1px solid transparent; }\n\
             .brick-input-field__input:disabled { cursor: not-allowed; opacity: 0.5; }\n\
             .brick-input-field__input--trailing { padding-right: 40px; }\n\
             .brick-input-field__trailing { position: absolute; inset: 0 0 0 auto; display: flex; align-items: center; gap: 4px; padding-right: 12px; }\n",
        );
        for size in [InputSize::Small, InputSize::Medium, InputSize::Large] {
            css.push_str(&format!(
                ".brick-input-field__input--{s} {{ height: {h}px; padding: 0 {p}px; font-size: {f}px; }}\n\
                 .brick-input-field__label--{s} {{ font-size: {l}px; font-weight: 500; }}\n",
                s = size.as_str(),
                h = size.height(),
                p = size.padding_x(),
                f = size.font_size(),
                l = size.label_font_size(),
            ));
        }
        for variant in [InputVariant::Filled, InputVariant::Outlined, InputVariant::Ghost] {
            let bg = variant.background(false);
            let border = variant.border();
            css.push_str(&format!(
                ".brick-input-field__input--{v} {{ background: {bg}; border-color: {border}; }}\n",
                v = variant.as_str(),
                bg = if bg.a == 0.0 { "transparent".to_string() } else { bg.to_hex() },
                border = if border.a == 0.0 { "transparent".to_string() } else { border.to_hex() },
            ));
        }
        css.push_str(&format!(
            ".brick-input-field__input:focus {{ border-color: {ring}; }}\n\
             .brick-input-field__input--invalid, .brick-input-field__input--invalid:focus {{ border-color: {err}; }}\n\
             .brick-input-field__label--disabled {{ color: {muted}; }}\n\
             .brick-input-field__description {{ font-size: 12px; color: {muted}; }}\n\
             .brick-input-field__description--error {{ color: {err}; }}",
            ring = Color::RING.to_hex(),
            err = Color::DESTRUCTIVE.to_hex(),
            muted = Color::MUTED.to_hex(),
        ));
        css
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{DrawCommand, RecordingCanvas};
    use std::sync::Mutex;

    fn laid_out(mut field: InputField) -> InputField {
        field.layout(Rect::new(0.0, 0.0, 300.0, 100.0));
        field
    }

    fn focused(field: InputField) -> InputField {
        let mut field = laid_out(field);
        field.event(&Event::FocusIn);
        field
    }

    fn type_str(field: &mut InputField, text: &str) -> Vec<Box<dyn Any + Send>> {
        text.chars()
            .filter_map(|c| {
                field.event(&Event::TextInput {
                    text: c.to_string(),
                })
            })
            .collect()
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |v: &str| sink.lock().unwrap().push(v.to_string()))
    }

    // =========================================================================
    // Enum Tests
    // =========================================================================

    #[test]
    fn test_input_enums_default() {
        assert_eq!(InputType::default(), InputType::Text);
        assert_eq!(InputVariant::default(), InputVariant::Outlined);
        assert_eq!(InputSize::default(), InputSize::Medium);
    }

    #[test]
    fn test_input_size_metrics() {
        assert_eq!(InputSize::Small.height(), 32.0);
        assert_eq!(InputSize::Medium.height(), 40.0);
        assert_eq!(InputSize::Large.height(), 48.0);
        assert_eq!(InputSize::Small.label_font_size(), 12.0);
        assert_eq!(InputSize::Large.font_size(), 16.0);
    }

    #[test]
    fn test_input_enums_serde_names() {
        assert_eq!(serde_json::to_string(&InputSize::Small).unwrap(), r#""sm""#);
        assert_eq!(serde_json::to_string(&InputVariant::Ghost).unwrap(), r#""ghost""#);
        let t: InputType = serde_json::from_str(r#""password""#).unwrap();
        assert_eq!(t, InputType::Password);
    }

    #[test]
    fn test_number_type_filters_characters() {
        assert!(InputType::Number.accepts('7'));
        assert!(InputType::Number.accepts('-'));
        assert!(!InputType::Number.accepts('x'));
        assert!(InputType::Text.accepts('x'));
        assert!(!InputType::Text.accepts('\n'));
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_input_field_new_is_uncontrolled_empty() {
        let field = InputField::new();
        assert_eq!(field.value(), "");
        assert!(!field.is_controlled());
        assert!(!field.is_disabled());
        assert_eq!(field.effective_type(), InputType::Text);
    }

    #[test]
    fn test_input_field_builder() {
        let field = InputField::controlled("ana@example.com")
            .label("Email")
            .placeholder("you@example.com")
            .helper_text("We never share it")
            .input_type(InputType::Email)
            .variant(InputVariant::Filled)
            .size(InputSize::Large)
            .with_test_id("email");

        assert!(field.is_controlled());
        assert_eq!(field.value(), "ana@example.com");
        assert_eq!(field.accessible_name(), Some("Email"));
        assert_eq!(Widget::test_id(&field), Some("email"));
        assert_eq!(field.cursor_position(), 15);
    }

    #[test]
    fn test_input_field_ids_unique() {
        let a = InputField::new();
        let b = InputField::new();
        assert_ne!(a.dom_id(), b.dom_id());
        assert!(a.dom_id().starts_with("input-field-"));
    }

    // =========================================================================
    // Uncontrolled Editing Tests
    // =========================================================================

    #[test]
    fn test_uncontrolled_typing_updates_value_without_handler() {
        let mut field = focused(InputField::new());
        let messages = type_str(&mut field, "hi");

        assert_eq!(field.value(), "hi");
        assert_eq!(messages.len(), 2);
        let last = messages.last().unwrap().downcast_ref::<TextChanged>().unwrap();
        assert_eq!(last.value, "hi");
    }

    #[test]
    fn test_uncontrolled_typing_notifies_handler() {
        let (log, handler) = recorder();
        let mut field = focused(InputField::uncontrolled("a").on_change(handler));
        type_str(&mut field, "bc");
        assert_eq!(field.value(), "abc");
        assert_eq!(*log.lock().unwrap(), vec!["ab", "abc"]);
    }

    #[test]
    fn test_unfocused_typing_ignored() {
        let mut field = laid_out(InputField::new());
        assert!(type_str(&mut field, "x").is_empty());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_editing_keys_multibyte() {
        let mut field = focused(InputField::uncontrolled("naïve"));
        field.event(&Event::KeyDown { key: Key::Backspace });
        assert_eq!(field.value(), "naïv");

        field.event(&Event::KeyDown { key: Key::Left });
        field.event(&Event::KeyDown { key: Key::Left });
        field.event(&Event::KeyDown { key: Key::Delete });
        assert_eq!(field.value(), "nav");
        assert_eq!(field.cursor_position(), 2);

        field.event(&Event::KeyDown { key: Key::Home });
        field.event(&Event::TextInput { text: "é".into() });
        assert_eq!(field.value(), "énav");

        field.event(&Event::KeyDown { key: Key::End });
        assert!(field.event(&Event::KeyDown { key: Key::Delete }).is_none());
    }

    #[test]
    fn test_backspace_at_start_no_message() {
        let mut field = focused(InputField::uncontrolled("abc"));
        field.event(&Event::KeyDown { key: Key::Home });
        assert!(field.event(&Event::KeyDown { key: Key::Backspace }).is_none());
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_enter_submits() {
        let mut field = focused(InputField::uncontrolled("query"));
        let msg = field.event(&Event::KeyDown { key: Key::Enter }).unwrap();
        assert_eq!(msg.downcast_ref::<TextSubmitted>().unwrap().value, "query");
    }

    #[test]
    fn test_number_field_rejects_letters() {
        let mut field = focused(InputField::new().input_type(InputType::Number));
        let messages = type_str(&mut field, "4a2");
        assert_eq!(field.value(), "42");
        assert_eq!(messages.len(), 2);
    }

    // =========================================================================
    // Controlled Editing Tests
    // =========================================================================

    #[test]
    fn test_controlled_typing_without_update_keeps_value() {
        let (log, handler) = recorder();
        let mut field = focused(InputField::controlled("ab").on_change(handler));

        let msg = field.event(&Event::TextInput { text: "c".into() }).unwrap();
        assert_eq!(msg.downcast_ref::<TextChanged>().unwrap().value, "abc");
        assert_eq!(field.value(), "ab");
        assert_eq!(*log.lock().unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_controlled_accepts_owner_value() {
        let mut field = focused(InputField::controlled(""));
        let msg = field.event(&Event::TextInput { text: "x".into() }).unwrap();
        let proposed = msg.downcast::<TextChanged>().unwrap().value;
        field.set_value(proposed);
        assert_eq!(field.value(), "x");

        field.set_value("owner override");
        assert_eq!(field.value(), "owner override");
    }

    #[test]
    fn test_controlled_set_value_clamps_cursor() {
        let mut field = InputField::controlled("long value");
        field.set_value("ab");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn test_set_value_ignored_when_uncontrolled() {
        let mut field = InputField::uncontrolled("mine");
        field.set_value("theirs");
        assert_eq!(field.value(), "mine");
        assert!(!field.is_controlled());
    }

    // =========================================================================
    // Clear Affordance Tests
    // =========================================================================

    #[test]
    fn test_clear_visibility_rules() {
        assert!(!InputField::uncontrolled("x").is_clear_visible());
        assert!(!InputField::new().clearable(true).is_clear_visible());
        assert!(!InputField::uncontrolled("x").clearable(true).loading(true).is_clear_visible());
        assert!(InputField::uncontrolled("x").clearable(true).is_clear_visible());
    }

    #[test]
    fn test_clear_uncontrolled_empties_buffer_without_change() {
        let changes = Arc::new(Mutex::new(0));
        let clears = Arc::new(Mutex::new(0));
        let (c1, c2) = (Arc::clone(&changes), Arc::clone(&clears));
        let mut field = InputField::uncontrolled("text")
            .clearable(true)
            .on_change(move |_| *c1.lock().unwrap() += 1)
            .on_clear(move || *c2.lock().unwrap() += 1);

        assert!(field.clear());
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor_position(), 0);
        assert_eq!(*clears.lock().unwrap(), 1);
        assert_eq!(*changes.lock().unwrap(), 0);
        assert!(!field.clear());
    }

    #[test]
    fn test_clear_controlled_only_notifies() {
        let clears = Arc::new(Mutex::new(0));
        let c = Arc::clone(&clears);
        let mut field = InputField::controlled("kept")
            .clearable(true)
            .on_clear(move || *c.lock().unwrap() += 1);

        assert!(field.clear());
        assert_eq!(field.value(), "kept");
        assert_eq!(*clears.lock().unwrap(), 1);
    }

    #[test]
    fn test_clear_button_click() {
        let mut field = laid_out(InputField::uncontrolled("abc").clearable(true));
        let rect = field.clear_button_rect().unwrap();
        let msg = field.event(&Event::click(rect.center())).unwrap();
        assert!(msg.downcast_ref::<InputCleared>().is_some());
        assert_eq!(field.value(), "");
        assert!(field.clear_button_rect().is_none());
    }

    // =========================================================================
    // Password Toggle Tests
    // =========================================================================

    #[test]
    fn test_password_toggle_flips_effective_type_only() {
        let mut field = InputField::uncontrolled("secret").input_type(InputType::Password);
        assert_eq!(field.effective_type(), InputType::Password);
        assert_eq!(field.display_text(), "••••••");

        assert!(field.toggle_password_visibility());
        assert_eq!(field.effective_type(), InputType::Text);
        assert_eq!(field.display_text(), "secret");
        assert_eq!(field.value(), "secret");

        field.toggle_password_visibility();
        assert_eq!(field.effective_type(), InputType::Password);
    }

    #[test]
    fn test_password_toggle_hidden_while_loading_or_not_password() {
        assert!(!InputField::new().is_password_toggle_visible());
        let mut loading = InputField::new().input_type(InputType::Password).loading(true);
        assert!(!loading.is_password_toggle_visible());
        assert!(!loading.toggle_password_visibility());
    }

    #[test]
    fn test_reveal_click_and_clear_slot_order() {
        let mut field = laid_out(
            InputField::uncontrolled("pw")
                .input_type(InputType::Password)
                .clearable(true),
        );
        let reveal = field.reveal_button_rect().unwrap();
        let clear = field.clear_button_rect().unwrap();
        assert!(reveal.x > clear.x);
        assert_eq!(reveal.right(), 300.0 - TRAILING_PADDING);

        let msg = field.event(&Event::click(reveal.center())).unwrap();
        assert_eq!(
            *msg.downcast::<PasswordVisibilityChanged>().unwrap(),
            PasswordVisibilityChanged { visible: true }
        );
        assert_eq!(field.value(), "pw");
    }

    // =========================================================================
    // Loading / Disabled Tests
    // =========================================================================

    #[test]
    fn test_loading_disables_and_shows_spinner() {
        let mut field = focused(InputField::uncontrolled("x").loading(true));
        assert!(field.is_disabled());
        assert!(field.is_spinner_visible());
        assert!(!field.is_focusable());
        assert!(field.event(&Event::TextInput { text: "y".into() }).is_none());
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn test_set_loading_roundtrip() {
        let mut field = InputField::new();
        field.set_loading(true);
        assert!(field.is_disabled());
        field.set_loading(false);
        assert!(!field.is_disabled());
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut field = laid_out(InputField::new().disabled(true));
        assert!(field.event(&Event::click(Point::new(10.0, 10.0))).is_none());
        assert!(!field.is_focused());
    }

    #[test]
    fn test_disabled_field_trailing_buttons_stay_live() {
        let mut field = laid_out(InputField::uncontrolled("abc").clearable(true).disabled(true));
        assert!(field.is_clear_visible());
        let clear = field.clear_button_rect().unwrap();
        let msg = field.event(&Event::click(clear.center())).unwrap();
        assert!(msg.downcast_ref::<InputCleared>().is_some());
        assert_eq!(field.value(), "");

        let mut secret = laid_out(
            InputField::uncontrolled("pw")
                .input_type(InputType::Password)
                .disabled(true),
        );
        let reveal = secret.reveal_button_rect().unwrap();
        assert!(secret.event(&Event::click(reveal.center())).is_some());
        assert_eq!(secret.effective_type(), InputType::Text);
        assert!(secret.event(&Event::TextInput { text: "x".into() }).is_none());
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_description_prefers_error() {
        let field = InputField::new()
            .helper_text("8+ characters")
            .error_message("Too short");
        assert_eq!(field.description_text(), Some("Too short"));
        assert_eq!(
            field.describedby_id(),
            Some(format!("{}-description", field.dom_id()))
        );
    }

    #[test]
    fn test_no_description_no_describedby() {
        let field = InputField::new().helper_text("");
        assert!(field.description_text().is_none());
        assert!(field.describedby_id().is_none());
    }

    #[test]
    fn test_set_validation() {
        let mut field = InputField::new().helper_text("hint");
        field.set_validation(true, Some("Required".into()));
        assert_eq!(field.description_text(), Some("Required"));
        field.set_validation(false, None);
        assert_eq!(field.description_text(), Some("hint"));
    }

    // =========================================================================
    // Layout / Paint Tests
    // =========================================================================

    #[test]
    fn test_measure_includes_label_and_description() {
        let bare = InputField::new();
        let full = InputField::new().label("Name").helper_text("Full name");
        let c = Constraints::unbounded();
        assert_eq!(bare.measure(c), Size::new(240.0, 40.0));
        assert_eq!(full.measure(c).height, 40.0 + 14.0 * 1.5 + 8.0 + 12.0 * 1.5 + 8.0);
    }

    #[test]
    fn test_measure_stretches_to_container() {
        let field = InputField::new();
        assert_eq!(field.measure(Constraints::fill_width(500.0, 200.0)).width, 500.0);
        assert_eq!(field.measure(Constraints::loose(Size::new(100.0, 200.0))).width, 100.0);
    }

    #[test]
    fn test_paint_placeholder_when_empty() {
        let field = laid_out(InputField::new().label("Name").placeholder("Jane Doe"));
        let mut canvas = RecordingCanvas::new();
        field.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["Name", "Jane Doe"]);
    }

    #[test]
    fn test_paint_obscured_password() {
        let field = laid_out(InputField::uncontrolled("abc").input_type(InputType::Password));
        let mut canvas = RecordingCanvas::new();
        field.paint(&mut canvas);
        assert!(canvas.has_text("•••"));
        assert!(!canvas.has_text("abc"));
    }

    #[test]
    fn test_paint_invalid_border_and_error_text() {
        let field = laid_out(InputField::new().invalid(true).error_message("Required"));
        let mut canvas = RecordingCanvas::new();
        field.paint(&mut canvas);

        assert!(canvas.commands().iter().any(|c| matches!(
            c,
            DrawCommand::StrokeRect { color, .. } if *color == Color::DESTRUCTIVE
        )));
        assert!(canvas.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { content, style, .. } if content == "Required" && style.color == Color::DESTRUCTIVE
        )));
    }

    #[test]
    fn test_paint_spinner_when_loading() {
        let field = laid_out(InputField::uncontrolled("x").clearable(true).loading(true));
        let mut canvas = RecordingCanvas::new();
        field.paint(&mut canvas);
        assert!(canvas
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    // =========================================================================
    // Brick Tests
    // =========================================================================

    #[test]
    fn test_to_html_links_label_and_description() {
        let field = InputField::new()
            .label("Password")
            .input_type(InputType::Password)
            .invalid(true)
            .error_message("Too <short>");
        let id = field.dom_id();
        let html = field.to_html();

        assert!(html.contains(&format!(r#"<label for="{id}""#)));
        assert!(html.contains(&format!(r#"id="{id}" type="password""#)));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains(&format!(r#"aria-describedby="{id}-description""#)));
        assert!(html.contains(&format!(r#"<p id="{id}-description""#)));
        assert!(html.contains("Too &lt;short&gt;"));
        assert!(html.contains("brick-input-field__description--error"));
        assert!(html.contains(r#"aria-label="Show password""#));
    }

    #[test]
    fn test_to_html_loading_hides_buttons() {
        let html = InputField::uncontrolled("x")
            .clearable(true)
            .input_type(InputType::Password)
            .loading(true)
            .to_html();
        assert!(html.contains("brick-spinner"));
        assert!(html.contains(" disabled"));
        assert!(!html.contains("brick-input-field__clear"));
        assert!(!html.contains("brick-input-field__reveal"));
    }

    #[test]
    fn test_to_html_plain_field_has_no_trailing_area() {
        let html = InputField::new().to_html();
        assert!(!html.contains("brick-input-field__trailing"));
        assert!(!html.contains("aria-describedby"));
        assert!(html.contains(r#"aria-invalid="false""#));
    }

    #[test]
    fn test_brick_verify_and_css() {
        for variant in [InputVariant::Filled, InputVariant::Outlined, InputVariant::Ghost] {
            assert!(InputField::new().variant(variant).verify().is_valid());
        }
        let css = InputField::new().to_css();
        assert!(css.contains(".brick-input-field__input--sm { height: 32px;"));
        assert!(css.contains(".brick-input-field__input--ghost { background: transparent;"));
    }
}
