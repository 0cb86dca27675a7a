/// Event emitted by the approximate stepper for each sample.
///
/// Step 0 is the initial displacement before any stepping.
/// Steps 1..N are emitted after each application of the recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step index.
    pub step: usize,

    /// Simulated time `step·h` in seconds.
    pub time: f64,

    /// Approximate displacement at this step.
    pub displacement: f64,
}
