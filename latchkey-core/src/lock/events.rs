//! Lock events

/// Events that drive lock state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A complete code matched the stored code
    CodeAccepted,
    /// A complete code did not match
    CodeRejected,
    /// The release key was pressed
    ReleaseKey,
}
