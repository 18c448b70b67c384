//! Double-buffered ping-pong storage.
//!
//! [`PingPong`] holds two copies of a model's time-level state. One is
//! "published" (readable, holds the old time level) and the other is
//! "staging" (writable, receives the new time level). On
//! [`PingPong::publish`] the roles swap and the generation advances.

use crevasse_core::Generation;

use crate::error::ArenaError;

/// A complete time level of model state.
///
/// Both buffers of a [`PingPong`] must share one shape; the shape is
/// checked whenever a caller replaces the published state wholesale.
pub trait TimeLevel: Clone {
    /// `(mx, my)` of the grid this state lives on.
    fn shape(&self) -> (usize, usize);
}

/// Split access to both time levels during a step.
///
/// Created by [`PingPong::begin_step`]. Holds a shared borrow of the
/// published buffer and a mutable borrow of the staging buffer, so the
/// arena cannot be published or read while the guard is alive.
#[must_use]
pub struct StepGuard<'a, B> {
    /// The published (old) time level.
    pub old: &'a B,
    /// The staging (new) time level. Contents are stale until written.
    pub new: &'a mut B,
    /// Generation the staging buffer will carry once published.
    pub generation: Generation,
}

/// Double-buffered time-level storage with a generation counter.
///
/// # Buffer layout
///
/// ```text
/// buffer_a  ←─── staging (b_is_staging = false) / published (true)
/// buffer_b  ←─── published (b_is_staging = false) / staging (true)
/// ```
#[derive(Clone, Debug)]
pub struct PingPong<B> {
    buffer_a: B,
    buffer_b: B,
    /// Which buffer is currently staging (false = A staging, true = B staging).
    b_is_staging: bool,
    generation: Generation,
    step_in_progress: bool,
}

impl<B: TimeLevel> PingPong<B> {
    /// Create an arena whose published state is `initial`, at generation 0.
    pub fn new(initial: B) -> Self {
        Self {
            buffer_a: initial.clone(),
            buffer_b: initial,
            b_is_staging: false,
            generation: Generation::default(),
            step_in_progress: false,
        }
    }

    /// `(mx, my)` of the resident buffers.
    pub fn shape(&self) -> (usize, usize) {
        self.published().shape()
    }

    /// Open a step, returning split borrows of both time levels.
    ///
    /// Calling this again before [`publish`](Self::publish) discards
    /// whatever the previous guard wrote to staging.
    pub fn begin_step(&mut self) -> StepGuard<'_, B> {
        self.step_in_progress = true;
        let generation = self.generation.next();
        let (old, new) = if self.b_is_staging {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        };
        StepGuard {
            old,
            new,
            generation,
        }
    }

    /// Make the staging buffer the published one.
    ///
    /// Returns the new generation, or `Err(ArenaError::NoStepInProgress)`
    /// if no step is open.
    pub fn publish(&mut self) -> Result<Generation, ArenaError> {
        if !self.step_in_progress {
            return Err(ArenaError::NoStepInProgress);
        }
        self.step_in_progress = false;
        self.b_is_staging = !self.b_is_staging;
        self.generation = self.generation.next();
        Ok(self.generation)
    }

    /// The published time level.
    pub fn published(&self) -> &B {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Replace the published state wholesale and advance the generation.
    ///
    /// Used by initialisation, restart and bootstrap. Both buffers receive
    /// `state` so the staging copy is never older than the published one.
    ///
    /// Returns `Err(ArenaError::StepInProgress)` if a step is open, or
    /// `Err(ArenaError::ShapeMismatch)` if `state` has a different shape.
    pub fn replace(&mut self, state: B) -> Result<Generation, ArenaError> {
        if self.step_in_progress {
            return Err(ArenaError::StepInProgress);
        }
        let expected = self.shape();
        let actual = state.shape();
        if expected != actual {
            return Err(ArenaError::ShapeMismatch { expected, actual });
        }
        if self.b_is_staging {
            self.buffer_b = state.clone();
            self.buffer_a = state;
        } else {
            self.buffer_a = state.clone();
            self.buffer_b = state;
        }
        self.generation = self.generation.next();
        Ok(self.generation)
    }
}
