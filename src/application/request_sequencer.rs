use crate::domain::RequestToken;

/// Hands out request tokens and decides whether a response may still
/// touch the result region.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
    ignore_stale: bool,
}

impl RequestSequencer {
    pub fn new(ignore_stale: bool) -> Self {
        Self {
            latest: 0,
            ignore_stale,
        }
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// With stale responses allowed, whichever response resolves last wins.
    pub fn accepts(&self, token: RequestToken) -> bool {
        !self.ignore_stale || token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut seq = RequestSequencer::new(false);
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
    }

    #[test]
    fn test_default_accepts_everything() {
        let mut seq = RequestSequencer::new(false);
        let first = seq.issue();
        let _second = seq.issue();
        assert!(seq.accepts(first));
    }

    #[test]
    fn test_guard_drops_stale() {
        let mut seq = RequestSequencer::new(true);
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.accepts(first));
        assert!(seq.accepts(second));
    }
}
