use approx::{assert_abs_diff_eq, assert_relative_eq};
use trajectory::interpolation::divided_differences::DividedDifferenceTable;
use trajectory::interpolation::errors::InterpolationError;
use trajectory::samples::SampleError;

type TestResult = Result<(), InterpolationError>;

#[test]
fn quadratic_coefficients() -> TestResult {
    // y = x^2 on 0, 1, 2 -> f[x0] = 0, f[x0,x1] = 1, f[x0,x1,x2] = 1
    let table = DividedDifferenceTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
    assert_eq!(table.coefficients(), vec![0.0, 1.0, 1.0]);
    assert_eq!(table.order(), 2);
    assert_eq!(table.len(), 3);
    Ok(())
}

#[test]
fn full_table_entries() -> TestResult {
    let x = [1.0, 2.0, 4.0];
    let y = [1.0, 3.0, 2.0];
    let table = DividedDifferenceTable::new(&x, &y)?;

    // column 0 is y
    assert_eq!(table.entry(0, 0), Some(1.0));
    assert_eq!(table.entry(1, 0), Some(3.0));
    assert_eq!(table.entry(2, 0), Some(2.0));

    // first order
    assert_abs_diff_eq!(table.entry(1, 1).unwrap(), 2.0, epsilon = 1e-15);
    assert_abs_diff_eq!(table.entry(2, 1).unwrap(), -0.5, epsilon = 1e-15);

    // second order: (-0.5 - 2) / (4 - 1)
    assert_abs_diff_eq!(table.entry(2, 2).unwrap(), -2.5 / 3.0, epsilon = 1e-15);

    // above the diagonal
    assert_eq!(table.entry(0, 1), None);
    assert_eq!(table.entry(3, 0), None);
    Ok(())
}

#[test]
fn single_point_is_constant() -> TestResult {
    let table = DividedDifferenceTable::new(&[3.0], &[7.5])?;
    assert_eq!(table.coefficients(), vec![7.5]);
    assert_eq!(table.order(), 0);
    Ok(())
}

#[test]
fn duplicate_node_rejected() {
    let err = DividedDifferenceTable::new(&[1.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::DuplicateNode { first: 0, second: 1, x } if x == 1.0
    ));
}

#[test]
fn duplicate_node_rejected_unsorted() {
    let err = DividedDifferenceTable::new(&[3.0, 0.0, 5.0, 0.0], &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateNode { first: 1, second: 3, .. }));
}

#[test]
fn unequal_length_rejected() {
    let err = DividedDifferenceTable::new(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::Samples(SampleError::UnequalLength { x_len: 2, y_len: 1 })
    ));
}

#[test]
fn empty_rejected() {
    let err = DividedDifferenceTable::new(&[], &[]).unwrap_err();
    assert!(matches!(err, InterpolationError::Samples(SampleError::EmptyInput)));
}

#[test]
fn non_finite_rejected() {
    let err = DividedDifferenceTable::new(&[0.0, 1.0], &[0.0, f64::NAN]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::Samples(SampleError::NonFiniteVec { idx: 1 })
    ));
}

#[test]
fn small_scale_nodes_are_distinct() -> TestResult {
    let table = DividedDifferenceTable::new(&[1e-13, 2e-13, 3e-13], &[1.0, 2.0, 3.0])?;
    assert_eq!(table.len(), 3);
    assert_relative_eq!(table.coefficients()[1], 1e13, max_relative = 1e-9);
    Ok(())
}
