use approx::assert_abs_diff_eq;
use trajectory::polynomial::{Evaluate, Polynomial, PolynomialError};

type TestResult = Result<(), PolynomialError>;

#[test]
fn horner_matches_direct_sum() -> TestResult {
    let p = Polynomial::new(vec![1.0, 2.5, -0.25])?;
    assert_abs_diff_eq!(p.eval(2.1), 5.1475, epsilon = 1e-12);
    assert_abs_diff_eq!(p.eval(-3.14), -9.3149, epsilon = 1e-12);
    assert_abs_diff_eq!(p.eval(0.0), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> TestResult {
    let p  = Polynomial::new(vec![-4.0, 0.0, 1.0])?;
    let xs = [-2.0, 0.0, 3.0];
    assert_eq!(p.eval_many(&xs), vec![0.0, -4.0, 5.0]);
    Ok(())
}

#[test]
fn display_canonical_form() -> TestResult {
    assert_eq!(Polynomial::new(vec![1.0, -3.0, 2.0])?.to_string(), "2x^2 - 3x + 1");
    assert_eq!(Polynomial::new(vec![0.0, 0.0, 1.0])?.to_string(), "x^2");
    assert_eq!(Polynomial::new(vec![0.0, -1.0])?.to_string(), "-x");
    assert_eq!(Polynomial::new(vec![0.5, 0.0, -1.0, 0.0])?.to_string(), "-x^2 + 0.5");
    assert_eq!(Polynomial::constant(-1.0).to_string(), "-1");
    assert_eq!(Polynomial::constant(0.0).to_string(), "0");
    Ok(())
}

#[test]
fn terms_highest_power_first() -> TestResult {
    let p = Polynomial::new(vec![3.0, 0.0, -2.0, 1.0])?;
    let terms: Vec<(f64, usize)> = p.terms().collect();
    assert_eq!(terms, vec![(1.0, 3), (-2.0, 2), (3.0, 0)]);
    Ok(())
}

#[test]
fn degree_ignores_trailing_zeros() -> TestResult {
    assert_eq!(Polynomial::new(vec![1.0, 2.0, 0.0, 0.0])?.degree(), 1);
    assert_eq!(Polynomial::new(vec![0.0, 0.0])?.degree(), 0);
    assert_eq!(Polynomial::linear(1.0, 2.0).degree(), 1);
    Ok(())
}

#[test]
fn sample_covers_range_inclusive() -> TestResult {
    let p   = Polynomial::new(vec![0.0, 0.0, 1.0])?;
    let pts = p.sample(-10.0, 10.0, 100)?;

    assert_eq!(pts.len(), 100);
    assert_eq!(pts[0], (-10.0, 100.0));
    assert_eq!(pts[99], (10.0, 100.0));
    assert!(pts.windows(2).all(|w| w[0].0 < w[1].0));
    Ok(())
}

#[test]
fn sample_rejects_bad_arguments() {
    let p = Polynomial::constant(1.0);
    assert!(matches!(
        p.sample(1.0, 1.0, 10),
        Err(PolynomialError::InvalidSampleRange { .. })
    ));
    assert!(matches!(
        p.sample(0.0, f64::INFINITY, 10),
        Err(PolynomialError::InvalidSampleRange { .. })
    ));
    assert!(matches!(
        p.sample(0.0, 1.0, 1),
        Err(PolynomialError::InsufficientSamples { got: 1 })
    ));
}

#[test]
fn new_rejects_bad_coefficients() {
    assert!(matches!(Polynomial::new(vec![]), Err(PolynomialError::EmptyCoefficients)));
    assert!(matches!(
        Polynomial::new(vec![1.0, f64::NAN]),
        Err(PolynomialError::NonFiniteCoefficient { idx: 1 })
    ));
}
