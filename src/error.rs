//! Error type for the MEMS shell project as a whole.

/// Top level error type. Unlike the console errors, this error contains
/// textual descriptions of the problem, ready to be shown to an operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    /// Error caused by a faulty configuration
    ConfigurationError(&'static str),
    /// The console engine could not start a new session
    SessionCreateFailed,
}
