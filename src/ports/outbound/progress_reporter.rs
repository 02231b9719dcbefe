/// ProgressReporter port for user feedback during long runs
///
/// Updates over a full feed take a while; this port lets the use cases tell
/// the user which branch and product is being parsed without tying them to
/// a terminal. Output never goes to stdout, which carries lookup results.
pub trait ProgressReporter {
    /// Reports a stage message such as "Parsing p10"
    fn report(&self, message: &str);

    /// Advances a bar over `total` units of work
    ///
    /// # Arguments
    /// * `current` - Units done so far
    /// * `total` - Units expected
    /// * `message` - Optional label for the current unit
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a failure; clears any active bar first
    fn report_error(&self, message: &str);

    /// Reports the end of the run
    fn report_completion(&self, message: &str);
}
