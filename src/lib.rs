//! Paged horizontal item strips.
//!
//! Re-exports the headless core ([`swiper`]) and its DOM wiring ([`swiper_adapter`]) under one
//! name. Hosts implement [`Dom`] for their page, hand it to [`Swipers`], and forward native
//! events and animation frames to it.
#![forbid(unsafe_code)]

pub use swiper;
pub use swiper_adapter;

pub use swiper::*;
pub use swiper_adapter::*;
