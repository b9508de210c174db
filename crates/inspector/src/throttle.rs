/// Coalesces pointer targets into at most one inspection per frame.
///
/// Every pointer move calls [`schedule`](Self::schedule); the host requests an
/// animation frame only when it returns `true`. When the frame fires,
/// [`take_frame`](Self::take_frame) yields the most recent target. Targets
/// that arrive in between replace each other and are never queued.
#[derive(Debug)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
    frame_requested: bool,
    dropped: u64,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            frame_requested: false,
            dropped: 0,
        }
    }

    /// Records `target` as the latest pending target.
    ///
    /// Returns `true` when the caller must request a new frame.
    pub fn schedule(&mut self, target: T) -> bool {
        if self.pending.replace(target).is_some() {
            self.dropped += 1;
        }
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Called from the frame callback: takes the pending target, if any.
    pub fn take_frame(&mut self) -> Option<T> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// Drops the pending target, e.g. when the inspector is paused.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.dropped += 1;
        }
        self.frame_requested = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Targets replaced or cancelled before their frame ran.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_schedule_requests_a_frame() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.schedule(1));
        assert!(!throttle.schedule(2));
        assert!(!throttle.schedule(3));

        assert_eq!(throttle.take_frame(), Some(3));
        assert_eq!(throttle.dropped(), 2);
        assert_eq!(throttle.take_frame(), None);
        assert!(throttle.schedule(4));
    }

    #[test]
    fn cancel_clears_the_request() {
        let mut throttle = FrameThrottle::new();
        throttle.schedule("a");
        throttle.cancel();
        assert!(!throttle.is_pending());
        assert!(throttle.schedule("b"));
    }
}
