//! Headless core for horizontally paged item strips ("swipers").
//!
//! For DOM wiring (wrapping elements, injecting buttons, routing events), see the
//! `swiper-adapter` crate.
//!
//! This crate holds the math and state that do not depend on a rendering engine:
//! per-viewport spacing lookup, items-per-page sizing, the percentage layout of the strip,
//! page-wise scroll targets, navigation button state, and a tween engine for animating the
//! scroll offset.
//!
//! It is UI-agnostic. An adapter layer is expected to provide:
//! - viewport and element widths
//! - the current scroll offset
//! - a monotonic clock (`now_ms`) for animations
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod layout;
mod options;
mod scroll;
mod tween;
mod types;


pub use layout::{BottomReserve, StripLayout, compute_spacing, items_per_page};
pub use options::{Settings, Spacing, SpacingRule};
pub use scroll::{ButtonState, NavState, ScrollMetrics, is_overflowing};
pub use tween::{Animation, AnimationHandle, AnimationState, Easing, Tween};
pub use types::Direction;
