/// Upper bound on the number of Taylor terms summed while priming.
///
/// The series for `y(-h)` converges for any `ωh`, but the terms only start to
/// shrink once `n > ωh`. Steps far past the stepper's stability limit would
/// otherwise keep the loop running.
pub(super) const MAX_TERMS: u32 = 256;

/// Taylor expansion of `y(dt)` for `y'' = -ω²·y`, summed until converged.
///
/// Derivatives alternate between displacement and velocity terms:
/// `y⁽²ʲ⁾(0) = (-ω²)ʲ·y0` and `y⁽²ʲ⁺¹⁾(0) = (-ω²)ʲ·v0`. Summation stops once
/// two consecutive terms no longer change the total (one even and one odd, so
/// a zero `y0` or `v0` cannot end it early), or after [`MAX_TERMS`] terms.
pub(super) fn taylor(omega_squared: f64, y0: f64, v0: f64, dt: f64) -> f64 {
    let mut total = 0.0;
    let mut factor = 1.0;
    let (mut derivative, mut next_derivative) = (y0, v0);
    let mut negligible = 0;

    for n in 0..MAX_TERMS {
        let term = factor * derivative;
        if total + term == total {
            negligible += 1;
        } else {
            negligible = 0;
        }
        total += term;

        if negligible == 2 {
            break;
        }

        factor *= dt / f64::from(n + 1);
        (derivative, next_derivative) = (next_derivative, -omega_squared * derivative);
    }

    total
}

/// Computes the fictitious sample `y_{-1}` that starts a two-step recurrence.
///
/// Depends only on the oscillator, never on the coefficient table.
pub(super) fn prime(omega_squared: f64, y0: f64, v0: f64, h: f64) -> f64 {
    taylor(omega_squared, y0, v0, -h)
}
