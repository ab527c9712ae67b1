use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 100), ri!(LC, 1, 0), ri!(DIVI, 0, 9), exit(2)]);

    assert_eq!(executor.register(0).unwrap(), 11);
    assert_eq!(executor.register(1).unwrap(), 1);
}

#[test]
fn quotient_overflow() {
    // dividend = 2^32 (r1 = 1), divisor = 1: the quotient needs 33 bits
    let (_, err) = run_err(&[ri!(LC, 0, 0), ri!(LC, 1, 1), ri!(DIVI, 0, 1)]);

    matches::assert_matches!(err, ExecutionError::QuotientOverflow { .. });
}

#[test]
fn division_by_zero() {
    let (_, err) = run_err(&[ri!(LC, 0, 1), ri!(DIVI, 0, 0)]);

    matches::assert_matches!(err, ExecutionError::DivisionByZero);
}
