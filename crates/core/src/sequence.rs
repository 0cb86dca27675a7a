use std::ops::Index;

/// Displacements sampled on a uniform time grid.
///
/// Element `i` is the displacement at `t_i = i·h`. Every solver call produces a
/// fresh sequence that the caller owns outright.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSequence {
    step: f64,
    values: Vec<f64>,
}

impl StateSequence {
    /// Wraps displacements sampled every `step` seconds.
    #[must_use]
    pub fn new(step: f64, values: Vec<f64>) -> Self {
        Self { step, values }
    }

    /// The time step `h` between samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Time in seconds of sample `i`.
    #[must_use]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Iterates `(index, displacement)` pairs.
    pub fn indexed(&self) -> impl ExactSizeIterator<Item = (usize, f64)> + '_ {
        self.iter().enumerate()
    }

    /// Iterates `(time, displacement)` pairs.
    pub fn timed(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.indexed().map(|(i, y)| (self.time_at(i), y))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for StateSequence {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl<'a> IntoIterator for &'a StateSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Pointwise absolute differences between an exact and an approximate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSequence(Vec<f64>);

impl ErrorSequence {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for ErrorSequence {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

/// The worst-case error over all steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalError {
    /// The maximum absolute difference, or NaN if any difference was NaN.
    pub value: f64,

    /// Step index where `value` first occurs.
    pub step: usize,
}
