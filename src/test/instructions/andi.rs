use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 0b1100), ri!(ANDI, 0, 0b1010), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0b1000);
}
