//! Per-slice fetch state with stale-response discard.
//!
//! Each independently fetched data slice (property list, directions,
//! isochrones) keeps its own tri-state holder plus a generation counter.
//! Beginning a fetch hands out a token for the current generation; a resolve
//! carrying an older token is ignored, so the slice only ever reflects the
//! most recent request's parameters.

use tracing::debug;

/// Tri-state holder for one fetched data slice. `Idle` means the inputs for
/// the fetch are not ready yet, which is not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum SliceState<T> {
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        SliceState::Idle
    }
}

impl<T> SliceState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            SliceState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SliceState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SliceState::Loading)
    }
}

/// Ties an in-flight request to the state generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Clone, Debug)]
pub struct FetchSlice<T> {
    state: SliceState<T>,
    generation: u64,
}

impl<T> Default for FetchSlice<T> {
    fn default() -> Self {
        Self {
            state: SliceState::Idle,
            generation: 0,
        }
    }
}

impl<T> FetchSlice<T> {
    pub fn state(&self) -> &SliceState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// Start a new fetch cycle, invalidating any in-flight one.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.state = SliceState::Loading;
        RequestToken(self.generation)
    }

    /// Drop any result still in flight and clear the slice. Used when the
    /// request parameters (e.g. travel mode) change without an immediate
    /// replacement fetch.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.state = SliceState::Idle;
    }

    /// Apply a fetch outcome. Returns false when the token is stale and the
    /// outcome was discarded.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<T, String>) -> bool {
        if token.0 != self.generation {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding stale response"
            );
            return false;
        }
        self.state = match outcome {
            Ok(data) => SliceState::Ready(data),
            Err(message) => SliceState::Failed(message),
        };
        true
    }
}
