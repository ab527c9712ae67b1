use super::*;

#[test]
fn loads_the_address_itself() {
    let executor = run(&[rm!(LA, 0, 0xabcde), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0xabcde);
}
