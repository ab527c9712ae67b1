use super::*;

use crate::flags::Flags;

#[test]
fn less() {
    let mut code = load_double(0, 1);
    code.extend(load_double(2, 2));
    code.extend(vec![rr!(CMPD, 0, 2, 0), exit(4)]);

    let executor = run(&code);

    assert_eq!(executor.flags(), Flags::LESS_SET);
}

#[test]
fn equal() {
    let mut code = load_double(0, 3);
    code.extend(load_double(2, 3));
    code.extend(vec![rr!(CMPD, 0, 2, 0), exit(4)]);

    let executor = run(&code);

    assert_eq!(executor.flags(), Flags::EQUAL_SET);
}
