//! End-to-end tests for the tracepaths binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use tempfile::TempDir;

const SAMPLE_TRACE: &str = r#"execve("/opt/llama.cpp/build/bin/llama-server", ["llama-server", "-m", "model.gguf"], 0x7ffc /* 30 vars */) = 0
access("/etc/ld.so.preload", R_OK)      = -1 ENOENT (No such file or directory)
openat(AT_FDCWD, "/etc/ld.so.cache", O_RDONLY|O_CLOEXEC) = 3
openat(AT_FDCWD, "/opt/rocm/lib/libhip.so", O_RDONLY) = 3
openat(AT_FDCWD, "/opt/rocm/lib/libamdhip64.so.6", O_RDONLY|O_CLOEXEC) = 3
openat(AT_FDCWD, "/usr/lib/x86_64-linux-gnu/libc.so.6", O_RDONLY|O_CLOEXEC) = 3
access("/usr/lib/x86_64-linux-gnu/libc.so.6", F_OK) = 0
stat("/proc/self/status", {st_mode=S_IFREG|0444, st_size=0, ...}) = 0
openat(AT_FDCWD, "/dev/kfd", O_RDWR|O_CLOEXEC) = 4
openat(AT_FDCWD, "/sys/class/kfd/kfd/topology/nodes", O_RDONLY|O_DIRECTORY) = 5
openat(AT_FDCWD, "/opt/rocm/share/miopen/db/gfx1100.kdb", O_RDONLY) = 6
readlink("/opt/llama.cpp/build/bin/llama-server", 0x7ffd, 4096) = -1 EINVAL (Invalid argument)
lstat("/opt/rocm/bin", {st_mode=S_IFDIR|0755, st_size=4096, ...}) = 0
read(3, "\177ELF\2\1\1\0\0\0\0\0\0\0\0\0\3\0>\0\1\0\0\0", 832) = 832
+++ exited with 0 +++
"#;

fn write_trace(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("strace.log");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_report_from_file_argument() {
    let tmp = TempDir::new().unwrap();
    let trace = write_trace(&tmp, SAMPLE_TRACE);

    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "{}\nFILES ACCESSED BY llama-server\n",
            "=".repeat(80)
        )))
        .stdout(predicate::str::contains("ROCM LIB (2 files):"))
        .stdout(predicate::str::contains("ROCM SHARE (1 files):"))
        .stdout(predicate::str::contains("ROCM OTHER (1 files):"))
        .stdout(predicate::str::contains("LLAMA SERVER (1 files):"))
        .stdout(predicate::str::contains("SYSTEM LIB (1 files):"))
        .stdout(predicate::str::contains("OTHER (2 files):"))
        .stdout(predicate::str::contains("TOTAL FILES: 8"))
        .stdout(predicate::str::contains("/proc/").not())
        .stdout(predicate::str::contains("/dev/kfd").not())
        .stdout(predicate::str::contains("/sys/").not());
}

#[test]
fn test_report_from_stdin() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .write_stdin(r#"openat(AT_FDCWD, "/opt/rocm/lib/libhip.so", O_RDONLY) = 3"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("ROCM LIB (1 files):"))
        .stdout(predicate::str::contains("  /opt/rocm/lib/libhip.so"))
        .stdout(predicate::str::contains("TOTAL FILES: 1"));
}

#[test]
fn test_empty_input_reports_zero() {
    let banner = "=".repeat(80);
    Command::cargo_bin("tracepaths")
        .unwrap()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{banner}\nFILES ACCESSED BY llama-server\n{banner}\n\n{banner}\nTOTAL FILES: 0\n{banner}\n"
        )));
}

#[test]
fn test_missing_input_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist.log");

    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot read trace input"));
}

#[test]
fn test_size_annotations() {
    let tmp = TempDir::new().unwrap();
    let big = tmp.path().join("big.bin");
    let small = tmp.path().join("small.txt");
    let missing = tmp.path().join("missing.so");
    File::create(&big).unwrap().set_len(2_097_152).unwrap();
    fs::write(&small, vec![b'x'; 500]).unwrap();

    let trace = format!(
        "openat(AT_FDCWD, \"{}\", O_RDONLY) = 3\nstat(\"{}\", {{...}}) = 0\naccess(\"{}\", F_OK) = -1 ENOENT\n",
        big.display(),
        small.display(),
        missing.display()
    );

    Command::cargo_bin("tracepaths")
        .unwrap()
        .write_stdin(trace)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  {} (2.0 MB)\n", big.display())))
        .stdout(predicate::str::contains(format!("  {}\n", small.display())))
        .stdout(predicate::str::contains(format!(
            "  {} (not found)\n",
            missing.display()
        )))
        .stdout(predicate::str::contains("TOTAL FILES: 3"));
}

#[test]
fn test_no_stat_skips_annotations() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("--no-stat")
        .write_stdin(r#"open("/definitely/not/here.so", O_RDONLY) = -1 ENOENT"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("  /definitely/not/here.so\n"))
        .stdout(predicate::str::contains("(not found)").not());
}

#[test]
fn test_filter_limits_syscalls() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("-e")
        .arg("trace=openat")
        .write_stdin(
            "stat(\"/only/stat\", {...}) = 0\nopenat(AT_FDCWD, \"/only/openat\", O_RDONLY) = 3\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("/only/openat"))
        .stdout(predicate::str::contains("/only/stat").not())
        .stdout(predicate::str::contains("TOTAL FILES: 1"));
}

#[test]
fn test_invalid_filter_fails() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("-e")
        .arg("trace=write")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported syscall in filter: write"));
}

#[test]
fn test_json_format() {
    let tmp = TempDir::new().unwrap();
    let trace = write_trace(&tmp, SAMPLE_TRACE);

    let output = Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("--format")
        .arg("json")
        .arg("--no-stat")
        .arg(&trace)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["format"], "tracepaths-json-v1");
    assert_eq!(value["total_files"], 8);

    let categories = value["categories"].as_array().unwrap();
    let keys: Vec<&str> = categories
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            "rocm_lib",
            "rocm_share",
            "rocm_other",
            "llama_server",
            "system_lib",
            "other"
        ]
    );
    let counted: u64 = categories.iter().map(|c| c["count"].as_u64().unwrap()).sum();
    assert_eq!(counted, 8);
}

#[test]
fn test_csv_format() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("--format")
        .arg("csv")
        .arg("--no-stat")
        .write_stdin(r#"open("/usr/lib/x86_64-linux-gnu/libc.so.6", O_RDONLY) = 3"#)
        .assert()
        .success()
        .stdout(
            "category,path,size_bytes,status\nsystem_lib,/usr/lib/x86_64-linux-gnu/libc.so.6,,skipped\n",
        );
}

#[test]
fn test_custom_target_banner() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("--target")
        .arg("rocm-smi")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILES ACCESSED BY rocm-smi\n"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    Command::cargo_bin("tracepaths")
        .unwrap()
        .arg("--debug")
        .arg("--no-stat")
        .write_stdin(r#"stat("/proc/self/status", {...}) = 0"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL FILES: 0"))
        .stdout(predicate::str::contains("pseudo-filesystem").not())
        .stderr(predicate::str::contains("skipping pseudo-filesystem path"));
}
