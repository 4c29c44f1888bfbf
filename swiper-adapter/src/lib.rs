//! DOM wiring for the `swiper` crate.
//!
//! The `swiper` crate is UI-agnostic and focuses on layout, paging and tween math. This crate
//! turns flat item lists on a page into paged strips:
//!
//! - Wrapping each list in a scroll container and a wrapper, with previous/next buttons
//! - Applying the percentage layout and keeping button state in sync with the scroll position
//! - Enabling/disabling each strip around its responsive breakpoint
//! - Routing click/scroll/resize events and driving scroll animations from frame ticks
//!
//! All page access goes through the [`Dom`] trait, so the same code runs against a browser
//! binding, a simulator or a test double. Failures never surface to the caller: malformed markup
//! or attributes degrade to a no-op (enable the `tracing` feature to see why).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod attrs;
mod config;
mod controller;
mod dom;
mod structure;
mod swipers;


pub use attrs::{
    ATTR_ITEMS_TO_SCROLL, ATTR_MAX_WIDTH, ATTR_SPACING, ATTR_UNTIL, AttributeError,
    InstanceOptions,
};
pub use config::{ConfigError, merge_settings_json, settings_from_json};
pub use controller::Controller;
pub use dom::{Dom, EventKind};
pub use structure::{Chrome, unwrap, wrap};
pub use swipers::Swipers;
