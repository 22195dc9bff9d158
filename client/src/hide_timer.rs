use gloo_timers::callback::Timeout;

/// Delay between the pointer leaving a pin or the popup and the popup hiding.
pub const HIDE_DELAY_MS: u32 = 150;

/// Holds at most one pending hide callback.
#[derive(Default)]
pub struct HideTimer {
    pending: Option<Timeout>,
}

impl HideTimer {
    /// Start a fire-once timer, cancelling the previous one.
    pub fn schedule(&mut self, delay_ms: u32, on_elapsed: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, on_elapsed));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}
