use super::*;

#[test]
fn basic() {
    let mut code = load_double(0, 50);
    code.extend(load_double(2, 8));
    code.extend(vec![rr!(SUBD, 0, 2, 0), exit(5)]);

    let executor = run(&code);

    assert_eq!(double_register(&executor, 0), 42.0);
}
