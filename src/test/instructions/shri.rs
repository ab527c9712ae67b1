use super::*;

#[test]
fn inserts_zeroes() {
    let executor = run(&[ri!(LC, 0, -1), ri!(SHRI, 0, 28), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0xf);
}

#[test]
fn rhs_too_big() {
    let (_, err) = run_err(&[ri!(LC, 0, 1), ri!(SHRI, 0, 40)]);

    matches::assert_matches!(err, ExecutionError::BitwiseRhsTooBig { rhs: 40, .. });
}
