use std::process::Command;

fn registry_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hospital-registry"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_demo_run_prints_both_appointments() {
    let output = registry_bin().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Appointment Date: 2023-07-20\n\
         Patient Name: John Doe, Age: 30, Disease: Flu\n\
         Doctor Name: Dr. Brown, Age: 45, Specialization: Cardiology\n\
         Appointment Date: 2023-07-21\n\
         Patient Name: Jane Smith, Age: 25, Disease: Cold\n\
         Doctor Name: Dr. Green, Age: 50, Specialization: Neurology\n"
    );
}

#[test]
fn test_demo_run_json() {
    let output = registry_bin().args(["--format", "json"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[1]["patient"]["name"], "Jane Smith");
}

#[test]
fn test_unknown_format_exits_non_zero() {
    let output = registry_bin().args(["--format", "xml"]).output().unwrap();
    assert!(!output.status.success());
}
