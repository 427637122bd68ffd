//! End-to-end tests for the hexdump command handler.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

use gkt_cli::hexdump::{run_hexdump, HexdumpArgs};

fn template(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .join(name)
}

fn args(input: &Path, output: &Path, header: bool) -> HexdumpArgs {
    HexdumpArgs {
        input_file: input.to_path_buf(),
        array_name: "shader-blit.spv".to_string(),
        header,
        output_file: Some(output.to_path_buf()),
        template: None,
        no_timestamp: true,
    }
}

#[test]
fn definition_and_header_agree_on_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blit.spv");
    std::fs::write(&input, (0u8..20).collect::<Vec<_>>()).unwrap();

    let source = dir.path().join("blit.c");
    assert_eq!(run_hexdump(&args(&input, &source, false)).unwrap(), 0);
    let definition = std::fs::read_to_string(&source).unwrap();
    assert!(definition.contains("const uint8_t shader_blit_spv[] = {"));
    assert!(definition.contains("/* 00000000 */   0x00, 0x01"));
    assert!(definition.contains("/* 00000010 */   0x10, 0x11, 0x12, 0x13,"));
    assert!(definition.contains("const size_t shader_blit_spv_len = 20;"));
    assert!(definition.contains("blit.spv"));
    assert!(!definition.contains("Generated on"));

    let header = dir.path().join("blit.h");
    assert_eq!(run_hexdump(&args(&input, &header, true)).unwrap(), 0);
    let declaration = std::fs::read_to_string(&header).unwrap();
    assert!(declaration.contains("#ifndef _SHADER_BLIT_SPV_H_"));
    assert!(declaration.contains("extern const uint8_t shader_blit_spv[];"));
    assert!(declaration.contains("extern const size_t shader_blit_spv_len;"));
    assert!(!declaration.contains("0x00"));
}

#[test]
fn empty_input_renders_zero_length() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    std::fs::write(&input, b"").unwrap();
    let output = dir.path().join("empty.c");

    run_hexdump(&args(&input, &output, false)).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("const size_t shader_blit_spv_len = 0;"));
    assert!(!text.contains("/* 0000"));
}

#[test]
fn custom_template_replaces_built_in() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("palette.bin");
    std::fs::write(&input, [0xffu8; 10]).unwrap();
    let output = dir.path().join("palette.c");

    let mut a = args(&input, &output, false);
    a.array_name = "palette".to_string();
    a.template = Some(template("hexdump_table.c.hbs"));
    run_hexdump(&a).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("/* palette.bin: 10 bytes */"));
    assert!(text.contains("static const uint8_t palette[10] = {"));
    assert!(text.contains("/* +0 */"));
    assert!(text.contains("/* +8 */"));
    assert!(!text.contains("palette_len"));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.c");

    let err = run_hexdump(&args(&dir.path().join("missing.bin"), &output, false)).unwrap_err();
    assert!(format!("{err:#}").contains("missing.bin"));
    assert!(!output.exists());
}

#[test]
fn missing_template_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bin");
    std::fs::write(&input, [1u8, 2, 3]).unwrap();
    let output = dir.path().join("a.c");

    let mut a = args(&input, &output, false);
    a.template = Some(dir.path().join("nope.hbs"));
    assert!(run_hexdump(&a).is_err());
    assert!(!output.exists());
}

#[test]
fn writes_to_stdout_without_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cafe.bin");
    std::fs::write(&input, [0xcau8, 0xfe]).unwrap();

    Command::new(env!("CARGO_BIN_EXE_hexdump"))
        .arg("-i")
        .arg(&input)
        .args(["-n", "cafe", "--no-timestamp"])
        .assert()
        .success()
        .stdout(
            contains("const uint8_t cafe[] = {")
                .and(contains("/* 00000000 */   0xca, 0xfe,"))
                .and(contains("const size_t cafe_len = 2;")),
        );

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().flatten().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn header_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cafe.bin");
    std::fs::write(&input, [0xcau8, 0xfe]).unwrap();

    Command::new(env!("CARGO_BIN_EXE_hexdump"))
        .arg("--input_file")
        .arg(&input)
        .args(["--array_name", "cafe", "--header", "--no-timestamp"])
        .assert()
        .success()
        .stdout(
            contains("#ifndef _CAFE_H_")
                .and(contains("extern const size_t cafe_len;"))
                .and(contains("0xca").not()),
        );
}

#[test]
fn binary_exits_one_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_hexdump"))
        .arg("-i")
        .arg(dir.path().join("missing.bin"))
        .args(["-n", "x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("missing.bin"));
}
