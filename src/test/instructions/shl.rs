use super::*;

#[test]
fn shifts_by_the_register_operand() {
    let executor = run(&[
        ri!(LC, 0, 1),
        ri!(LC, 1, 4),
        rr!(SHL, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 16);
}

#[test]
fn rhs_too_big_through_the_modifier() {
    let (_, err) = run_err(&[ri!(LC, 0, 1), rr!(SHL, 0, 1, 33)]);

    matches::assert_matches!(
        err,
        ExecutionError::BitwiseRhsTooBig {
            rhs: 33,
            code: Opcode::SHL
        }
    );
}
