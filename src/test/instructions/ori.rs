use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 0b1000), ri!(ORI, 0, 0b0001), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0b1001);
}
