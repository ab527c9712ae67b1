use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 3), ri!(SHLI, 0, 4), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 48);
}

#[test]
fn word_width_is_rejected() {
    let (_, err) = run_err(&[ri!(LC, 0, 1), ri!(SHLI, 0, 32)]);

    matches::assert_matches!(
        err,
        ExecutionError::BitwiseRhsTooBig {
            rhs: 32,
            code: Opcode::SHLI
        }
    );
}
