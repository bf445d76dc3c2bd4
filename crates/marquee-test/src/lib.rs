//! Testing harness for Marquee widgets.
//!
//! ```ignore
//! use marquee_test::Harness;
//! use marquee_widgets::{InputField, TextChanged};
//!
//! let mut harness = Harness::new(InputField::new().label("Name"));
//! harness.focus().type_text("Ada");
//! assert_eq!(harness.widget().value(), "Ada");
//! assert_eq!(harness.messages_of::<TextChanged>().len(), 3);
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{role_name, Selector, SelectorError, SelectorParser};
