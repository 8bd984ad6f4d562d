use assert_cmd::Command;
use std::path::PathBuf;
use std::str;

/// Path to a file in the local test data directory
fn data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/data");
    path.push(name);
    path
}

/// Generic execution function that invokes macsed with color disabled,
/// returning stdout and the exit code
fn run_macsed(input: &str, args: &[&str]) -> (String, i32) {
    let mut test_args = vec!["--color", "never"];
    test_args.extend_from_slice(args);

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("macsed").unwrap();
    let output = cmd
        .env_remove("MACSED_COLOR")
        .env_remove("RUST_LOG")
        .args(&test_args)
        .write_stdin(input)
        .output()
        .expect("failed to execute");

    let output_str = str::from_utf8(&output.stdout)
        .expect("Failed to read stdout as UTF-8")
        .to_string();

    (output_str, output.status.code().unwrap_or(-1))
}

#[test]
fn validate_valid_address() {
    let (out, code) = run_macsed("", &["--address", "00:0B:56:62:BD:70"]);
    assert_eq!(out, "00:0B:56:62:BD:70: valid (delimited)\n");
    assert_eq!(code, 0);
}

#[test]
fn validate_invalid_address_fails() {
    let (out, code) = run_macsed("", &["-a", "BC4F.19C1.7A6E", "-a", "11:22:33:44:55"]);
    assert_eq!(
        out,
        "BC4F.19C1.7A6E: valid (dotted)\n11:22:33:44:55: invalid\n"
    );
    assert_eq!(code, 1);
}

#[test]
fn text_argument() {
    let (out, code) = run_macsed(
        "",
        &["--text", "Valid: 12:24:24:D9:A5:07, Invalid: 122424D9A5GG"],
    );
    assert_eq!(
        out,
        "<text>: found 2, valid 1\nValid MAC addresses:\n  1. 12:24:24:D9:A5:07\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn stdin_is_default_input() {
    let input = "12:24:24:D9:A5:07\n12-24-24-D9-A5-07\nInvalid: 001B.5511.3AGG\n";
    let (out, _) = run_macsed(input, &["--all"]);
    assert_eq!(
        out,
        "<stdin>: found 3, valid 2\n\
         Valid MAC addresses:\n  1. 12:24:24:D9:A5:07\n  2. 12-24-24-D9-A5-07\n\
         Invalid candidates:\n  1. 001B.5511.3AGG\n"
    );
}

#[test]
fn file_input() {
    let path = data_path("arp.txt");
    let (out, code) = run_macsed("", &[path.to_str().unwrap()]);
    assert!(out.contains("found 5, valid 4"), "unexpected output: {}", out);
    assert!(out.contains("  4. 0123456789AB"));
    assert!(!out.contains("00:1B:44:11:3A:GG"));
    assert_eq!(code, 0);
}

#[test]
fn missing_file_is_reported() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("macsed").unwrap();
    let output = cmd
        .args(["--color", "never", "/no/such/file.txt"])
        .output()
        .expect("failed to execute");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read /no/such/file.txt: file not found: /no/such/file.txt"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn no_addresses_found_is_not_an_error() {
    let (out, code) = run_macsed("nothing here\n", &[]);
    assert_eq!(out, "<stdin>: found 0, valid 0\nNo MAC addresses found.\n");
    assert_eq!(code, 0);
}

#[test]
fn json_output() {
    let (out, _) = run_macsed("a 00:1B:44:11:3A:B8 b 00:1B:44:11:3A:GG", &["--json"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["source"], "<stdin>");
    assert_eq!(
        value["all_found"],
        serde_json::json!(["00:1B:44:11:3A:B8", "00:1B:44:11:3A:GG"])
    );
    assert_eq!(value["valid"], serde_json::json!(["00:1B:44:11:3A:B8"]));
}

#[test]
fn tag_output() {
    let (out, _) = run_macsed("mac 0123456789AB!", &["--tag"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["data"]["text"], "mac 0123456789AB!");
    assert_eq!(value["tags"][0]["value"], "0123456789AB");
    assert_eq!(value["tags"][0]["range"]["start"], 4);
    assert_eq!(value["tags"][0]["format"], "bare");
}

#[test]
fn tag_file_output() {
    let path = data_path("arp.txt");
    let (out, _) = run_macsed("", &["--tag", path.to_str().unwrap()]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    let tags = value["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 5);
    assert_eq!(tags[4]["valid"], false);
}

#[test]
fn format_flags() {
    let input = "00:1B-44:11-3A:B8 0123456789AB";

    let (out, _) = run_macsed(input, &["--no-bare"]);
    assert!(out.starts_with("<stdin>: found 1, valid 1\n"), "{}", out);

    let (out, _) = run_macsed(input, &["--strict-delimiters"]);
    assert!(out.starts_with("<stdin>: found 1, valid 1\n"), "{}", out);
    assert!(out.contains("1. 0123456789AB"));

    let (_, code) = run_macsed("", &["--strict-delimiters", "-a", "00:1B-44:11-3A:B8"]);
    assert_eq!(code, 1);
}

#[test]
fn all_formats_disabled_is_an_error() {
    let (_, code) = run_macsed("", &["--no-delimited", "--no-dotted", "--no-bare", "-a", "x"]);
    assert_eq!(code, 1);
}

#[test]
fn interactive_menu() {
    let script = "1\n00:0B:56:62:BD:70\n2\nMAC1: 12:24:24:D9:A5:07, MAC2: 00-1B-44-11-3A-B8\n0\n";
    let (out, code) = run_macsed(script, &["--interactive"]);
    assert!(out.contains("00:0B:56:62:BD:70: valid (delimited)"));
    assert!(out.contains("<text>: found 2, valid 2"));
    assert_eq!(code, 0);
}

#[test]
fn color_always_emits_escapes() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("macsed").unwrap();
    let output = cmd
        .env("MACSED_COLOR", "always")
        .args(["-a", "0123456789AB"])
        .output()
        .expect("failed to execute");

    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("\x1b["), "expected ANSI escapes in {:?}", out);
    assert!(out.contains("valid (bare)"));
}
