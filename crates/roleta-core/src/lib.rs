//! # roleta-core — Wheel geometry and shared primitives
//!
//! Leaf crate of the raffle wheel engine. Holds the pure math that both the
//! spin presenter and the batch simulator depend on:
//!
//! - **Angle arithmetic**: segment layout, normalization, and the
//!   angle-to-winner decode
//! - **Easing curves**: decelerating interpolation curves for the spin
//!   animation
//! - **Errors**: the workspace-wide error enum and result alias
//!
//! Nothing here touches entropy, time, or I/O.

pub mod angle;
pub mod curve;
pub mod error;

pub use angle::*;
pub use curve::*;
pub use error::*;
