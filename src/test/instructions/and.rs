use super::*;

#[test]
fn masks() {
    let executor = run(&[
        ri!(LC, 0, 0b1100),
        ri!(LC, 1, 0b1010),
        rr!(AND, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0b1000);
}

#[test]
fn rhs_too_big_through_the_modifier() {
    // the source register is zero, the modifier pushes the operand to 40
    let (_, err) = run_err(&[ri!(LC, 0, 1), rr!(AND, 0, 1, 40)]);

    matches::assert_matches!(
        err,
        ExecutionError::BitwiseRhsTooBig {
            rhs: 40,
            code: Opcode::AND
        }
    );
}
