use super::*;

#[test]
fn basic() {
    let mut code = load_double(0, 21);
    code.extend(load_double(2, 2));
    code.extend(vec![rr!(MULD, 0, 2, 0), exit(5)]);

    let executor = run(&code);

    assert_eq!(double_register(&executor, 0), 42.0);
}
