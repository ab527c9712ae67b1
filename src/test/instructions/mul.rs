use super::*;

#[test]
fn product_spans_two_registers() {
    let executor = run(&[
        ri!(LC, 0, -1), // 0xffffffff unsigned
        ri!(LC, 1, 2),
        rr!(MUL, 0, 1, 0),
        exit(2),
    ]);

    // 0xffffffff * 2 = 0x1_fffffffe
    assert_eq!(executor.register(0).unwrap(), 0xffff_fffe);
    assert_eq!(executor.register(1).unwrap(), 1);
}

#[test]
fn small_product_zeroes_the_high_word() {
    let executor = run(&[
        ri!(LC, 0, 6),
        ri!(LC, 1, 0xfff),
        ri!(LC, 2, 7),
        rr!(MUL, 0, 2, 0),
        exit(3),
    ]);

    assert_eq!(executor.register(0).unwrap(), 42);
    assert_eq!(executor.register(1).unwrap(), 0);
}
