use super::*;

/// Runs `lhs cmp rhs` followed by the given jump; returns whether the
/// jump was taken.
fn jump_taken(jump: Bin, lhs: i32, rhs: i32) -> bool {
    let executor = run(&[
        ri!(LC, 0, lhs),
        ri!(CMPI, 0, rhs),
        jump,
        ri!(LC, 1, 1), // skipped when the jump fires
        exit(2),
    ]);

    executor.register(1).unwrap() == 0
}

#[test]
fn jeq() {
    assert!(jump_taken(j!(JEQ, 4), 2, 2));
    assert!(!jump_taken(j!(JEQ, 4), 1, 2));
}

#[test]
fn jne() {
    assert!(jump_taken(j!(JNE, 4), 1, 2));
    assert!(!jump_taken(j!(JNE, 4), 2, 2));
}

#[test]
fn jl() {
    assert!(jump_taken(j!(JL, 4), 1, 2));
    assert!(!jump_taken(j!(JL, 4), 2, 2));
    assert!(!jump_taken(j!(JL, 4), 3, 2));
}

#[test]
fn jle() {
    assert!(jump_taken(j!(JLE, 4), 1, 2));
    assert!(jump_taken(j!(JLE, 4), 2, 2));
    assert!(!jump_taken(j!(JLE, 4), 3, 2));
}

#[test]
fn jg() {
    assert!(jump_taken(j!(JG, 4), 3, 2));
    assert!(!jump_taken(j!(JG, 4), 2, 2));
}

#[test]
fn jge() {
    assert!(jump_taken(j!(JGE, 4), 3, 2));
    assert!(jump_taken(j!(JGE, 4), 2, 2));
    assert!(!jump_taken(j!(JGE, 4), 1, 2));
}
