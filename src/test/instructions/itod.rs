use super::*;

#[test]
fn converts_the_right_operand() {
    let executor = run(&[ri!(LC, 0, 1000), rr!(ITOD, 2, 0, 0), exit(5)]);

    assert_eq!(double_register(&executor, 2), 1000.0);
}

#[test]
fn modifier_applies_before_conversion() {
    let executor = run(&[ri!(LC, 0, 1000), rr!(ITOD, 2, 0, 24), exit(5)]);

    assert_eq!(double_register(&executor, 2), 1024.0);
}

#[test]
fn conversion_is_unsigned() {
    let executor = run(&[ri!(LC, 0, -1), rr!(ITOD, 2, 0, 0), exit(5)]);

    assert_eq!(double_register(&executor, 2), 4294967295.0);
}
