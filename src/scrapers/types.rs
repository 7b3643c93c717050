/// Result of one best-effort UI interaction. Interactions are a nuisance
/// layer, not a correctness requirement, so failures carry no error value;
/// the distinction between "control absent" and "interaction broke" still
/// matters for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The control was found and activated.
    Applied,
    /// The control was not present on the page.
    Skipped,
    /// The control was present but the interaction failed.
    Failed,
}

impl InteractionOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}
