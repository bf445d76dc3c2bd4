//! Test harness for driving Marquee widgets with synthetic events.

use marquee_core::{
    Constraints, Event, Key, MouseButton, Point, Rect, RecordingCanvas, Size, Widget,
};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness owning one widget laid out in a viewport.
///
/// Every message the widget emits while processing events is kept, in order,
/// and can be read back with [`Harness::messages_of`].
pub struct Harness<W: Widget> {
    widget: W,
    event_queue: VecDeque<Event>,
    messages: Vec<Box<dyn Any + Send>>,
    viewport: Size,
}

impl<W: Widget> Harness<W> {
    /// Create a harness with a 1280x720 viewport.
    pub fn new(widget: W) -> Self {
        let mut harness = Self {
            widget,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Size::new(1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self.relayout();
        self
    }

    /// Lay the widget out again: full viewport width, measured height.
    pub fn relayout(&mut self) -> &mut Self {
        let measured = self
            .widget
            .measure(Constraints::fill_width(
                self.viewport.width,
                self.viewport.height,
            ));
        self.widget
            .layout(Rect::new(0.0, 0.0, measured.width, measured.height));
        self
    }

    // === Event Simulation ===

    /// Simulate a click at `point`.
    pub fn click_at(&mut self, point: Point) -> &mut Self {
        self.event_queue
            .push_back(Event::MouseMove { position: point });
        self.event_queue.push_back(Event::MouseDown {
            position: point,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position: point,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Simulate a click in the middle of `rect`.
    pub fn click_rect(&mut self, rect: Rect) -> &mut Self {
        self.click_at(rect.center())
    }

    /// Give the widget focus.
    pub fn focus(&mut self) -> &mut Self {
        self.dispatch(Event::FocusIn)
    }

    /// Take focus away from the widget.
    pub fn blur(&mut self) -> &mut Self {
        self.dispatch(Event::FocusOut)
    }

    /// Simulate typing text, one input event per character.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.event_queue.push_back(Event::TextInput {
                text: c.to_string(),
            });
        }
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Deliver one event.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Widget Access ===

    /// The widget under test.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget. Call [`Harness::relayout`] after changes
    /// that affect its size.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Apply `f` to the widget, then lay it out again.
    pub fn update(&mut self, f: impl FnOnce(&mut W)) -> &mut Self {
        f(&mut self.widget);
        self.relayout()
    }

    /// Current widget bounds.
    pub fn bounds(&self) -> Rect {
        self.widget.bounds()
    }

    // === Messages ===

    /// Emitted messages of type `T`, oldest first.
    pub fn messages_of<T: Any + Clone>(&self) -> Vec<T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .cloned()
            .collect()
    }

    /// Most recent emitted message of type `T`.
    pub fn last_message<T: Any + Clone>(&self) -> Option<T> {
        self.messages
            .iter()
            .rev()
            .find_map(|m| m.downcast_ref::<T>())
            .cloned()
    }

    /// Number of emitted messages of any type.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Drain all collected messages.
    pub fn take_messages(&mut self) -> Vec<Box<dyn Any + Send>> {
        std::mem::take(&mut self.messages)
    }

    // === Rendering ===

    /// HTML rendering of the widget.
    pub fn html(&self) -> String {
        self.widget.to_html()
    }

    /// Paint the widget into a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        canvas
    }

    // === Queries ===

    /// Whether the widget matches `selector`. Invalid selectors never match.
    pub fn matches(&self, selector: &str) -> bool {
        Selector::parse(selector).is_ok_and(|sel| sel.matches(&self.widget))
    }

    // === Assertions ===

    /// Assert that the widget matches a selector.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not match.
    #[track_caller]
    pub fn assert_matches(&self, selector: &str) -> &Self {
        assert!(
            self.matches(selector),
            "Expected widget to match '{selector}'"
        );
        self
    }

    /// Assert that the HTML rendering contains `needle`.
    ///
    /// # Panics
    ///
    /// Panics if it does not.
    #[track_caller]
    pub fn assert_html_contains(&self, needle: &str) -> &Self {
        let html = self.html();
        assert!(
            html.contains(needle),
            "Expected HTML to contain '{needle}' but got:\n{html}"
        );
        self
    }

    /// Assert that the HTML rendering does not contain `needle`.
    ///
    /// # Panics
    ///
    /// Panics if it does.
    #[track_caller]
    pub fn assert_html_lacks(&self, needle: &str) -> &Self {
        let html = self.html();
        assert!(
            !html.contains(needle),
            "Expected HTML not to contain '{needle}' but got:\n{html}"
        );
        self
    }

    /// Assert that painting draws `text`.
    ///
    /// # Panics
    ///
    /// Panics if no text command carries `text`.
    #[track_caller]
    pub fn assert_painted_text(&self, text: &str) -> &Self {
        let canvas = self.paint();
        assert!(
            canvas.has_text(text),
            "Expected painted text '{text}' but got {:?}",
            canvas.texts()
        );
        self
    }

    /// Assert that the widget's brick verification passes.
    ///
    /// # Panics
    ///
    /// Panics listing the failed assertions.
    #[track_caller]
    pub fn assert_valid(&self) -> &Self {
        let verification = self.widget.verify();
        assert!(
            verification.is_valid(),
            "Expected {} to verify but failed: {:?}",
            self.widget.brick_name(),
            verification.failed
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.widget.event(&event) {
                self.messages.push(message);
            }
        }
    }
}
