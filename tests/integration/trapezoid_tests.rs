use approx::assert_abs_diff_eq;
use trajectory::integration::errors::IntegrationError;
use trajectory::integration::trapezoid::{cumulative_trapezoid, trapezoid, trapezoid_uniform};
use trajectory::samples::SampleError;

type TestResult = Result<(), IntegrationError>;

#[test]
fn samples_of_x_squared() -> TestResult {
    // (1)(0 + 1)/2 + (1)(1 + 4)/2
    let area = trapezoid(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
    assert_abs_diff_eq!(area, 3.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn linear_data_is_exact() -> TestResult {
    // v = 2t + 1 on irregular times, exact area t^2 + t over [0, 5]
    let t = [0.0, 0.5, 2.0, 3.25, 5.0];
    let v: Vec<f64> = t.iter().map(|ti| 2.0 * ti + 1.0).collect();
    assert_abs_diff_eq!(trapezoid(&t, &v)?, 30.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn integrates_samples_not_interpolant() -> TestResult {
    // samples of x^3; their interpolant 3x^2 - 2x has area 4 over [0, 2],
    // the trapezoid rule on the raw samples gives 5
    let area = trapezoid(&[0.0, 1.0, 2.0], &[0.0, 1.0, 8.0])?;
    assert_abs_diff_eq!(area, 5.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn negative_values_subtract() -> TestResult {
    let area = trapezoid(&[0.0, 1.0, 2.0], &[1.0, -1.0, -1.0])?;
    assert_abs_diff_eq!(area, -1.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn cumulative_matches_total() -> TestResult {
    let t = [0.0, 1.0, 2.0, 4.0];
    let v = [0.0, 1.0, 4.0, 16.0];

    let running = cumulative_trapezoid(&t, &v)?;
    assert_eq!(running.len(), t.len());
    assert_eq!(running[0], 0.0);
    assert_abs_diff_eq!(running[1], 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(running[2], 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(running[3], 23.0, epsilon = 1e-15);
    assert_abs_diff_eq!(running[3], trapezoid(&t, &v)?, epsilon = 1e-12);
    Ok(())
}

#[test]
fn uniform_matches_general() -> TestResult {
    let t = [0.0, 0.5, 1.0, 1.5, 2.0];
    let v = [1.0, 2.0, 0.5, 3.0, 2.5];
    assert_abs_diff_eq!(trapezoid_uniform(&v, 0.5)?, trapezoid(&t, &v)?, epsilon = 1e-12);
    Ok(())
}

#[test]
fn unsorted_samples_rejected() {
    let err = trapezoid(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        IntegrationError::UnsortedSamples { idx: 2, prev, got } if prev == 2.0 && got == 1.0
    ));
}

#[test]
fn repeated_time_rejected() {
    let err = cumulative_trapezoid(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, IntegrationError::UnsortedSamples { idx: 2, .. }));
}

#[test]
fn single_point_rejected() {
    let err = trapezoid(&[1.0], &[1.0]).unwrap_err();
    assert!(matches!(err, IntegrationError::InsufficientPoints { got: 1 }));

    let err = trapezoid_uniform(&[1.0], 1.0).unwrap_err();
    assert!(matches!(err, IntegrationError::InsufficientPoints { got: 1 }));
}

#[test]
fn bad_samples_rejected() {
    assert!(matches!(
        trapezoid(&[0.0, 1.0], &[0.0, 1.0, 2.0]),
        Err(IntegrationError::Samples(SampleError::UnequalLength { x_len: 2, y_len: 3 }))
    ));
    assert!(matches!(
        trapezoid(&[0.0, f64::NAN], &[0.0, 1.0]),
        Err(IntegrationError::Samples(SampleError::NonFiniteVec { idx: 1 }))
    ));
    assert!(matches!(
        trapezoid_uniform(&[], 1.0),
        Err(IntegrationError::Samples(SampleError::EmptyInput))
    ));
}

#[test]
fn invalid_spacing_rejected() {
    for dx in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = trapezoid_uniform(&[1.0, 2.0], dx).unwrap_err();
        assert!(matches!(err, IntegrationError::InvalidSpacing { .. }));
    }
}
