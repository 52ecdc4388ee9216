//! Convenience macros for the MEMS shell project

/// Logs through `defmt` on target. Host builds (unit tests, docs) have no
/// global logger, so there the arguments are only evaluated.
///
/// # Example
/// ```ignore
/// log_info!("Session spawned");
/// // Expands into (on ARM):
/// defmt::info!("Session spawned");
/// ```
#[macro_export]
macro_rules! log_info {
    ($format:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::info!($format $(, $arg)*);
        #[cfg(not(target_arch = "arm"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

/// Warning level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($format:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::warn!($format $(, $arg)*);
        #[cfg(not(target_arch = "arm"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

/// Trace level counterpart of [`log_info!`]. Meant for per-tick events.
#[macro_export]
macro_rules! log_trace {
    ($format:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::trace!($format $(, $arg)*);
        #[cfg(not(target_arch = "arm"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

#[cfg(test)]
mod test {
    #[test]
    fn host_logging_evaluates_each_argument_once() {
        // Given
        let mut calls = 0u32;
        let mut next = || {
            calls += 1;
            calls
        };

        // When
        log_info!("first {=u32}", next());
        log_warn!("second {=u32} {=u32}", next(), next(),);
        log_trace!("no arguments");

        // Then
        assert_eq!(3, calls);
    }
}
