use std::process::Command;

#[test]
fn program_prints_four_decimal_results_and_writes_plot() {
    let dir = std::env::temp_dir().join(format!("mobius_program_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mobius-strip"))
        .current_dir(&dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Surface Area: 2.5342\nEdge Length: 6.3147\n");

    let plot = std::fs::read_to_string(dir.join("mobius_strip.svg")).unwrap();
    assert!(plot.contains("<polygon"));
    std::fs::remove_dir_all(&dir).unwrap();
}
