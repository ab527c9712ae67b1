use super::*;

#[test]
fn resumes_at_the_fall_through() {
    let executor = run_calls(&[
        j!(JMP, 3),
        ri!(LC, 1, 7),
        j!(RET, 0),
        j!(CALLI, 1),
        ri!(LC, 2, 8),
        exit(3),
    ]);

    assert_eq!(executor.register(1).unwrap(), 7);
    assert_eq!(executor.register(2).unwrap(), 8);
}

#[test]
fn saves_the_frame_register_on_the_stack() {
    let executor = run_calls(&[
        j!(JMP, 2),
        exit(0), // callee: exits mid-call
        j!(CALLI, 1),
        exit(1),
    ]);

    // inside the callee the frame register equals the stack pointer
    assert_eq!(
        executor.register(13).unwrap(),
        executor.register(14).unwrap()
    );
}
