use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 0b1001), ri!(XORI, 0, 0b1111), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0b0110);
}

#[test]
fn rhs_too_big() {
    let (_, err) = run_err(&[ri!(LC, 0, 1), ri!(XORI, 0, 32)]);

    matches::assert_matches!(err, ExecutionError::BitwiseRhsTooBig { rhs: 32, .. });
}
