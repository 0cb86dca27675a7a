/// Watches a stepper sample by sample and may cut the run short.
///
/// The approximate stepper in `hooke-solvers` calls `observe` with one event
/// per stored sample, starting with step 0 (the initial displacement, before
/// any stepping). An observer that answers with its stop action ends the run
/// after that sample, so the returned sequence holds steps `0..=step`. The
/// exact solver takes no observer.
///
/// Use a closure `|event| ...` to record samples or stop at a condition, or
/// pass `()` for a plain run.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Runs to the last step.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
