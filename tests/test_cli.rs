use std::process::{Command, Output};

fn rootrem(args: &[&str]) -> (String, i32) {
    let Output { status, stdout, .. } = Command::new(env!("CARGO_BIN_EXE_rootrem"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (String::from_utf8(stdout).unwrap(), status.code().unwrap())
}

#[test]
fn test_sqrtrem() {
    let (out, code) = rootrem(&["15", "16", "0x100"]);
    assert_eq!(code, 0);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec![
        "- {input: 15, root: 3, rem: 6, square: false}",
        "- {input: 16, root: 4, rem: 0, square: true}",
        "- {input: 256, root: 16, rem: 0, square: true}",
    ]);
}

#[test]
fn test_negative() {
    let (out, code) = rootrem(&["15", "-1"]);
    assert_eq!(code, 1);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec![
        "- {input: 15, root: 3, rem: 6, square: false}",
        "- {input: -1, error: 'square root of a negative integer'}",
    ]);
}

#[test]
fn test_square() {
    let (out, code) = rootrem(&["--square", "-4", "16", "2"]);
    assert_eq!(code, 0);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec![
        "- {input: -4, square: false}",
        "- {input: 16, square: true}",
        "- {input: 2, square: false}",
    ]);
}

#[test]
fn test_selftest() {
    let (out, code) = rootrem(&["--selftest", "--count=50", "--max-bits=100", "--seed=7"]);
    assert_eq!(code, 0);
    assert!(out.contains("  count: 50\n"), "{}", out);
    assert!(out.contains("  max_bits: 100\n"), "{}", out);
    // the seed is printed the way it is accepted
    assert!(out.contains("  seed: 7\n"), "{}", out);
    assert!(out.contains("  trials: 50\n"), "{}", out);
}

#[test]
fn test_invalid_number() {
    let (out, code) = rootrem(&["12x"]);
    assert_ne!(code, 0);
    assert!(out.is_empty());
}
