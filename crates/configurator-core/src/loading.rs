use crate::config::StreamConfig;
use instant::Instant;

/// Whether the streamed scene is still opening its stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Ready,
}

impl LoadingState {
    pub fn initial(config: &StreamConfig) -> Self {
        if config.starts_loading() {
            Self::Loading
        } else {
            Self::Ready
        }
    }

    #[inline]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

/// Loading flag with the one transition it allows: `Loading` to `Ready`.
#[derive(Debug)]
pub struct LoadingFlag {
    state: LoadingState,
    since: Instant,
}

impl LoadingFlag {
    pub fn new(state: LoadingState) -> Self {
        Self {
            state,
            since: Instant::now(),
        }
    }

    #[inline]
    pub fn state(&self) -> LoadingState {
        self.state
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns true if this call left `Loading`.
    pub fn mark_ready(&mut self) -> bool {
        if self.state == LoadingState::Ready {
            return false;
        }
        self.state = LoadingState::Ready;
        log::info!(
            "[loading] ready after {:.1}s",
            self.since.elapsed().as_secs_f32()
        );
        true
    }
}
