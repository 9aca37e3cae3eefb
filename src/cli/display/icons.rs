//! Status icons for CLI output

/// Status icons for different outcomes
pub struct StatusIcon;

impl StatusIcon {
    /// Success icon (deployment created)
    pub const SUCCESS: &'static str = "✓";

    /// Error icon (a stage failed)
    pub const ERROR: &'static str = "✗";

    /// Get status icon for the outcome of a stage
    pub fn for_outcome(ok: bool) -> &'static str {
        if ok {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }
}
