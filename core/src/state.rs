/// Lifecycle of the generation form.
///
/// `Empty` is the terminal state for a success response that carried no
/// image reference: loading cleared, nothing shown, nothing reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenPhase {
    Idle,
    Loading,
    Success,
    Empty,
    Failed,
}

/// Handle identifying one submission. Completion paths only apply while
/// their token is still the newest one issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Clone, Debug)]
pub struct GenState {
    phase: GenPhase,
    generation: u64,
}

impl GenState {
    pub fn new() -> Self {
        Self {
            phase: GenPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> GenPhase {
        self.phase
    }

    /// Enter `Loading` and issue the token for this submission. Any token
    /// issued earlier becomes stale immediately.
    pub fn begin_request(&mut self) -> RequestToken {
        self.generation = self.generation.saturating_add(1);
        self.phase = GenPhase::Loading;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    pub fn finish_success(&mut self, token: RequestToken) -> bool {
        self.finish(token, GenPhase::Success)
    }

    pub fn finish_empty(&mut self, token: RequestToken) -> bool {
        self.finish(token, GenPhase::Empty)
    }

    pub fn finish_failure(&mut self, token: RequestToken) -> bool {
        self.finish(token, GenPhase::Failed)
    }

    /// A fresh file selection discards any settled result. A request still
    /// in flight keeps its token; the newest response wins the elements.
    pub fn reset_result(&mut self) {
        if self.phase != GenPhase::Loading {
            self.phase = GenPhase::Idle;
        }
    }

    fn finish(&mut self, token: RequestToken, next: GenPhase) -> bool {
        if !self.is_current(token) || self.phase != GenPhase::Loading {
            return false;
        }
        self.phase = next;
        true
    }
}

impl Default for GenState {
    fn default() -> Self {
        Self::new()
    }
}
