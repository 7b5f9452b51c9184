#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the version banner printed before every command.
    pub no_banner: bool,
    /// Verbosity reduction. `1` hides headers, `2` hides per-item output.
    pub quiet: u8,
    /// Sums shape areas with the work-stealing pool instead of a sequential fold.
    ///
    /// The parallel total may differ from the sequential one in the last bits.
    pub parallel: bool,
}
