//! Lock state definition

use super::events::Event;

/// Lock states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    /// Locked, accumulating code symbols
    #[default]
    CollectingCode,
    /// Unlocked, keys are forwarded to the peripherals
    Unlocked,
}

impl LockState {
    /// Check if keys are forwarded to the peripherals
    pub fn is_unlocked(&self) -> bool {
        matches!(self, LockState::Unlocked)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use LockState::*;

        match (self, event) {
            (CollectingCode, CodeAccepted) => Unlocked,
            (CollectingCode, CodeRejected) => CollectingCode,
            (Unlocked, ReleaseKey) => CollectingCode,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_unlocks() {
        let next = LockState::CollectingCode.transition(Event::CodeAccepted);
        assert_eq!(next, LockState::Unlocked);
    }

    #[test]
    fn test_reject_stays_locked() {
        let next = LockState::CollectingCode.transition(Event::CodeRejected);
        assert_eq!(next, LockState::CollectingCode);
    }

    #[test]
    fn test_release_locks() {
        let next = LockState::Unlocked.transition(Event::ReleaseKey);
        assert_eq!(next, LockState::CollectingCode);
    }

    #[test]
    fn test_ignored_events() {
        // Release has no meaning while locked
        assert_eq!(
            LockState::CollectingCode.transition(Event::ReleaseKey),
            LockState::CollectingCode
        );
        // Code events have no meaning while unlocked
        assert_eq!(
            LockState::Unlocked.transition(Event::CodeAccepted),
            LockState::Unlocked
        );
        assert_eq!(
            LockState::Unlocked.transition(Event::CodeRejected),
            LockState::Unlocked
        );
    }

    #[test]
    fn test_default_is_locked() {
        assert!(!LockState::default().is_unlocked());
    }
}
