use super::*;

#[test]
fn quotient_and_remainder() {
    let executor = run(&[
        ri!(LC, 0, 47),
        ri!(LC, 1, 0), // high word of the dividend
        ri!(LC, 2, 7),
        rr!(DIV, 0, 2, 0),
        exit(3),
    ]);

    assert_eq!(executor.register(0).unwrap(), 6);
    assert_eq!(executor.register(1).unwrap(), 5);
}

#[test]
fn division_by_zero_leaves_registers_untouched() {
    let (executor, err) = run_err(&[
        ri!(LC, 0, 47),
        ri!(LC, 1, 0),
        rr!(DIV, 0, 1, 0),
    ]);

    matches::assert_matches!(err, ExecutionError::DivisionByZero);
    assert_eq!(executor.register(0).unwrap(), 47);
    assert_eq!(executor.register(1).unwrap(), 0);
}

#[test]
fn two_word_dividend() {
    // dividend = 2^32 + 4, divisor = 2
    let executor = run(&[
        ri!(LC, 0, 4),
        ri!(LC, 1, 1),
        ri!(LC, 2, 2),
        rr!(DIV, 0, 2, 0),
        exit(3),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0x8000_0002);
    assert_eq!(executor.register(1).unwrap(), 0);
}
