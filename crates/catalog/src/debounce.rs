/// Window within which successive keystrokes collapse into one query.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Trailing-edge debounce policy. Each input event arms a new generation
/// token; a timer scheduled for the window fires only if its token is
/// still the latest one, so only the last keystroke in a burst triggers
/// recomputation. The policy itself owns no timers, which keeps it
/// testable outside any UI framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an input event and returns its token.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a timer holding `token` should fire.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_token_fires() {
        let mut d = Debounce::new();
        let first = d.arm();
        let second = d.arm();
        assert!(!d.is_current(first));
        assert!(d.is_current(second));
    }

    // Two overlapping windows: the timer armed for the first event must
    // stay dead even after its delay elapses, or it would clear state set
    // by the second event.
    #[test]
    fn a_stale_timer_never_fires_again() {
        let mut d = Debounce::new();
        let stale = d.arm();
        let fresh = d.arm();
        assert!(!d.is_current(stale));
        assert!(d.is_current(fresh));
        assert!(!d.is_current(stale));
    }

    #[test]
    fn a_fired_token_stays_current_until_the_next_event() {
        let mut d = Debounce::new();
        let token = d.arm();
        assert!(d.is_current(token));
        assert!(d.is_current(token));
        d.arm();
        assert!(!d.is_current(token));
    }
}
