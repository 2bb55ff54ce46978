//! # dioxus-placeholder
//!
//! A small framework for showing placeholder fillers while UI content loads.
//!
//! A [`Placeholder`](component::Placeholder) wraps any content and renders it
//! only once the caller's readiness flag says so; until then it renders one
//! of the built-in filler shapes (text rows, rectangle, circle, media block)
//! or a caller-supplied custom filler. Readiness flicker is smoothed by an
//! optional hide delay, and a one-shot latch can pin the content in place
//! after its first appearance.
//!
//! ## Core Concepts
//!
//! - [`ReadinessMachine`](machine::ReadinessMachine): the pure state machine
//!   that turns the readiness flag into a display decision and timer
//!   directives. No UI, no clock; trivially unit-testable.
//! - [`Placeholder`](component::Placeholder): the component that feeds prop
//!   changes into the machine, owns the single delayed-hide timer, and
//!   renders either the children or the filler.
//! - [`FillerKind`](fillers::FillerKind)/[`CustomFiller`](fillers::CustomFiller):
//!   the closed set of built-in shapes, and the escape hatch that replaces
//!   them.
//!
//! ## Example Usage
//!
//! ```rust
//! use dioxus::prelude::*;
//! use dioxus_placeholder::prelude::*;
//!
//! #[component]
//! fn Article(body: Option<String>) -> Element {
//!     rsx! {
//!         Placeholder {
//!             ready: body.is_some(),
//!             delay: 300u64,
//!             rows: 6,
//!             show_loading_animation: true,
//!             article { {body.clone().unwrap_or_default()} }
//!         }
//!     }
//! }
//! ```

pub mod component;
pub mod fillers;
pub mod machine;
pub mod utils;

/// Prelude module that re-exports commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dioxus_placeholder::prelude::*;
/// ```
pub mod prelude {
    pub use super::component::Placeholder;
    pub use super::fillers::{
        ConfigError, CustomFiller, FillerKind, FillerOptions, MediaBlock, RectShape,
        ResolvedFiller, RoundShape, TextBlock, TextRow, DEFAULT_COLOR, LOADING_ANIMATION_CLASS,
    };
    pub use super::machine::{Directive, DisplayState, ReadinessMachine};
    pub use super::utils::{join_class_names, CCStr};
}
