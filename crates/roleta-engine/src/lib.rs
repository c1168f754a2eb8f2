//! # roleta-engine — Raffle wheel selection and presentation
//!
//! Picks one winner among the eligible participants of a monthly raffle
//! and presents the pick as a decelerating wheel spin. The winner is
//! decided up front: the draw materializes a terminal rotation angle that
//! encodes a uniformly random candidate, and the animation merely travels
//! to it. The displayed rotation can accumulate floating point error
//! without ever affecting who wins.
//!
//! ## Architecture
//!
//! ```text
//! RaffleContext (roster cache, reference month, confirm/dismiss)
//!     │
//!     ├── EligibilitySource / ConfirmationSink (backend ports)
//!     │
//!     └── SpinPresenter (Idle → Spinning → Settled)
//!           │
//!           ├── compute_target (EntropySource → SpinTarget)
//!           └── SpinTimingConfig (duration, turns, curve)
//! ```
//!
//! Ticks are cooperative: the host frame loop calls
//! [`SpinPresenter::tick`] with the current time, or hands the presenter
//! to a [`SpinTicker`] thread.

pub mod context;
pub mod draw;
pub mod ports;
pub mod presenter;
pub mod roster;
pub mod ticker;
pub mod timing;

pub use context::*;
pub use draw::*;
pub use ports::*;
pub use presenter::*;
pub use roster::*;
pub use ticker::*;
pub use timing::*;
