use super::*;

const TOP: Address = (constants::MEMORY_SIZE - 1) as Address;

#[test]
fn roundtrip() {
    let executor = run(&[
        ri!(LC, 0, 17),
        ri!(PUSH, 0, 0),
        ri!(POP, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(1).unwrap(), 17);
    assert_eq!(executor.register(14).unwrap(), TOP);
}

#[test]
fn applies_the_modifier() {
    let executor = run(&[
        ri!(LC, 0, 40),
        ri!(PUSH, 0, 0),
        ri!(POP, 1, 2),
        exit(2),
    ]);

    assert_eq!(executor.register(1).unwrap(), 42);
}
