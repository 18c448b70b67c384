//! Double-buffered time-level storage for Crevasse models.
//!
//! A time-stepping model reads the previous time level of its state while
//! writing the next one. [`PingPong`] keeps both levels resident and swaps
//! their roles on [`PingPong::publish`]:
//!
//! ```text
//! PingPong<B>
//! ├── buffer_a ←── staging (even generations) / published (odd)
//! └── buffer_b ←── published (even generations) / staging (odd)
//! ```
//!
//! The lifecycle per step is:
//! 1. `begin_step()`: returns a [`StepGuard`] borrowing the published
//!    buffer immutably and the staging buffer mutably
//! 2. The model writes every cell of the staging buffer
//! 3. `publish()`: swap roles, advance the [`Generation`]
//!
//! Readers only ever see the published buffer, so a half-written step is
//! never observable.
//!
//! [`Generation`]: crevasse_core::Generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;

pub use error::ArenaError;
pub use pingpong::{PingPong, StepGuard, TimeLevel};
