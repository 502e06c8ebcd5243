/// ## Runtime configuration
///
/// Settle delays are pauses in milliseconds around synthetic input so the
/// target application sees distinct events.

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Before and after each key in `press` and `release`.
    pub press_settle_ms: u64,
    /// Around each phase and each key of `autopress`.
    pub autopress_settle_ms: u64,
    /// Before and after each key in `tap`.
    pub tap_settle_ms: u64,
    /// Deepest `gosub` nesting before the run stops.
    pub max_call_depth: usize,
    /// Release keys still held when the run stops on an error or a quit.
    pub release_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            press_settle_ms: 40,
            autopress_settle_ms: 80,
            tap_settle_ms: 40,
            max_call_depth: u16::max_value() as usize,
            release_on_exit: true,
        }
    }
}
