//! Black-box check of the demo binary's only observable output.

use std::process::Command;

#[test]
fn prints_single_rendered_client_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_viewstate-demo"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run viewstate-demo");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Client(name=Ryeojin, postalCode:1234)\n"
    );
}
