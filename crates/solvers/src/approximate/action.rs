/// Control actions supported by the approximate stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop stepping early and return the values computed so far.
    StopEarly,
}
