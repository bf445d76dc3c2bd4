//! Core types and traits for the Marquee widget library.
//!
//! This crate provides foundational types used throughout Marquee:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Brick`] traits and the [`RecordingCanvas`]
//! - Derived-state caching: [`Memo`]

mod brick;
mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod html;
mod id;
mod memo;
pub mod widget;

pub use brick::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use id::InstanceId;
pub use memo::{ArcKey, Memo};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
