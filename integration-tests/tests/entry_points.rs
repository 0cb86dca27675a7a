use hooke_core::{CoefficientError, MethodCoefficients, ParameterError, StateSequence};
use hooke_solvers::{Error, analysis, approximate, exact, methods};

#[test]
fn both_solvers_return_one_more_sample_than_steps() {
    let table = methods::numerov();

    for steps in [0_i64, 1, 7, 100, 1000] {
        let exact = exact::values(steps, 3.0, 2.0, -1.0, 0.5, 0.01).unwrap();
        let approximate = approximate::values(steps, 3.0, 2.0, -1.0, 0.5, 0.01, &table).unwrap();

        assert_eq!(exact.len() as i64, steps + 1);
        assert_eq!(approximate.len() as i64, steps + 1);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let table = methods::extended_numerov();
    let run = || {
        (
            exact::values(300, 7.5, 0.3, 2.0, -4.0, 0.02).unwrap(),
            approximate::values(300, 7.5, 0.3, 2.0, -4.0, 0.02, &table).unwrap(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn invalid_physics_is_rejected_by_both_solvers() {
    let table = methods::stormer();
    let cases = [
        ((10, 1.0, 0.0, 1.0, 5.0, 0.2), ParameterError::Mass(0.0)),
        ((10, -1.0, 4.0, 1.0, 5.0, 0.2), ParameterError::Stiffness(-1.0)),
        ((10, 1.0, 4.0, 1.0, 5.0, 0.0), ParameterError::StepSize(0.0)),
        ((-1, 1.0, 4.0, 1.0, 5.0, 0.2), ParameterError::NegativeStepCount(-1)),
    ];

    for ((n, k, m, y0, v0, h), expected) in cases {
        let expected = Err(Error::InvalidParameter(expected));
        assert_eq!(exact::values(n, k, m, y0, v0, h), expected);
        assert_eq!(approximate::values(n, k, m, y0, v0, h, &table), expected);
    }
}

#[test]
fn non_finite_initial_state_is_rejected() {
    let result = exact::values(10, 1.0, 4.0, f64::NAN, 5.0, 0.2);

    assert!(matches!(
        result,
        Err(Error::InvalidParameter(ParameterError::NonFinite {
            name: "displacement",
            ..
        }))
    ));
}

#[test]
fn tables_of_every_invalid_length_are_rejected() {
    let valid_lengths = [2, 5, 9, 14, 20];

    for len in 0..21 {
        let table = MethodCoefficients::new("zeros", 2, vec![0.0; len]);
        let result = approximate::values(5, 1.0, 4.0, 1.0, 5.0, 0.2, &table);

        if valid_lengths.contains(&len) {
            assert!(result.is_ok(), "length {len}");
        } else {
            let expected = if len < 2 {
                CoefficientError::TooFew {
                    supplied: len,
                    required: 2,
                }
            } else {
                CoefficientError::Arity { supplied: len }
            };
            assert_eq!(result, Err(Error::from(expected)), "length {len}");
        }
    }
}

#[test]
fn solver_outputs_of_different_lengths_do_not_compare() {
    let long = exact::values(10, 1.0, 4.0, 1.0, 5.0, 0.2).unwrap();
    let short = approximate::values(9, 1.0, 4.0, 1.0, 5.0, 0.2, &methods::stormer()).unwrap();

    assert_eq!(
        analysis::compare(&long, &short),
        Err(Error::ShapeMismatch {
            exact: 11,
            approximate: 10,
        })
    );
}

#[test]
fn single_sample_comparison() {
    let exact = exact::values(0, 1.0, 4.0, 1.0, 5.0, 0.2).unwrap();
    let approximate = StateSequence::new(0.2, vec![0.75]);

    let analysis = analysis::compare(&exact, &approximate).unwrap();

    assert_eq!(analysis.errors.as_slice(), &[0.25]);
    assert_eq!(analysis.global.value, 0.25);
}
