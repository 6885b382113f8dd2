use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A scratch home for one test: settings under `config/`, data files beside it
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn downloads(&self) -> PathBuf {
        self.path("config").join("downloads")
    }

    fn rentlog(&self) -> Command {
        let mut cmd = Command::cargo_bin("rentlog").expect("binary");
        cmd.env("RENTLOG_DATA_DIR", self.path("config"))
            .env_remove("RUST_LOG")
            .write_stdin("");
        cmd
    }

    /// Run `args` against `file` and require success
    fn run(&self, file: &Path, args: &[&str]) {
        self.rentlog().arg("--file").arg(file).args(args).assert().success();
    }

    fn new_file(&self, name: &str) -> PathBuf {
        let file = self.path(name);
        self.run(&file, &["new"]);
        file
    }
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read data file");
    serde_json::from_str(&text).expect("data file is JSON")
}

#[test]
fn new_writes_starter_document() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("ledger.json");

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ledger.json"));

    let doc = read_json(&file);
    assert_eq!(doc["version"], 2);
    assert_eq!(doc["properties"][0]["name"], "My First Property");
    assert_eq!(doc["properties"][0]["address"], "123 Example St");
    assert_eq!(doc["tenants"].as_array().map(Vec::len), Some(0));
}

#[test]
fn new_refuses_to_replace_existing_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    let before = std::fs::read_to_string(&file).unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn tenant_and_payment_are_saved_in_place() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");

    sandbox.run(
        &file,
        &["tenant", "add", "Asha", "--rent", "5000", "--move-in", "2024-01-01"],
    );
    sandbox.run(
        &file,
        &["payment", "add", "Asha", "5000", "--type", "rent", "--date", "2024-02-01"],
    );

    let doc = read_json(&file);
    let tenant = &doc["tenants"][0];
    assert_eq!(tenant["name"], "Asha");
    assert_eq!(tenant["propertyId"], doc["properties"][0]["id"]);
    assert_eq!(tenant["rent"].as_f64(), Some(5000.0));
    assert_eq!(tenant["moveInDate"], "2024-01-01");
    assert_eq!(tenant["bills"].as_array().map(Vec::len), Some(0));

    let payment = &tenant["payments"][0];
    assert_eq!(payment["amount"].as_f64(), Some(5000.0));
    assert_eq!(payment["date"], "2024-02-01");
    assert_eq!(payment["type"], "rent");

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["tenant", "show", "asha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total paid:   ₹5,000.00"))
        .stdout(predicate::str::contains("My First Property"));
}

#[test]
fn recent_file_is_used_without_flag() {
    let sandbox = Sandbox::new();
    sandbox.new_file("ledger.json");

    sandbox
        .rentlog()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Properties:  1"))
        .stdout(predicate::str::contains("Total Tenants:     0"));
}

#[test]
fn invalid_document_is_rejected_and_left_alone() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("other.json");
    std::fs::write(&file, r#"{"foo": 1}"#).unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["property", "add", "Barn", "--address", "1 Farm Rd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid data file"))
        .stderr(predicate::str::contains("Choose another file or create a new one"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), r#"{"foo": 1}"#);
}

#[test]
fn non_json_file_is_rejected() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("notes.txt");
    std::fs::write(&file, "rent is due on the 5th").unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse data file"));
}

#[test]
fn legacy_document_gains_empty_ledgers_on_save() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("old.json");
    std::fs::write(
        &file,
        r#"{
  "properties": [{"id": 1, "name": "Home", "address": "1 Main St"}],
  "tenants": [{"id": 2, "propertyId": 1, "name": "Ravi", "rent": 4500}]
}"#,
    )
    .unwrap();

    sandbox.run(&file, &["property", "edit", "Home", "--name", "Main House"]);

    let doc = read_json(&file);
    assert_eq!(doc["properties"][0]["name"], "Main House");
    assert_eq!(doc["tenants"][0]["name"], "Ravi");
    assert_eq!(doc["tenants"][0]["rent"].as_f64(), Some(4500.0));
    assert_eq!(doc["tenants"][0]["bills"], serde_json::json!([]));
    assert_eq!(doc["tenants"][0]["payments"], serde_json::json!([]));
}

#[test]
fn orphaned_tenant_is_listed_with_na() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("orphans.json");
    std::fs::write(
        &file,
        r#"{
  "version": 2,
  "properties": [],
  "tenants": [{"id": 2, "propertyId": 99, "name": "Meera", "rent": 3000, "bills": [], "payments": []}]
}"#,
    )
    .unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["tenant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meera"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn tenant_needs_a_property() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("empty.json");
    std::fs::write(&file, r#"{"version": 2, "properties": [], "tenants": []}"#).unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["tenant", "add", "Asha", "--rent", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Add a property before adding a tenant"));

    assert_eq!(read_json(&file)["tenants"], serde_json::json!([]));
}

#[test]
fn bills_can_be_raised_and_paid() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    sandbox.run(&file, &["tenant", "add", "Asha", "--rent", "5000"]);
    sandbox.run(&file, &["bill", "add", "Asha", "300.50", "--due", "2024-01-05"]);

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["bill", "list", "Asha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹300.50"))
        .stdout(predicate::str::contains("OVERDUE"));

    let bill_id = read_json(&file)["tenants"][0]["bills"][0]["id"].to_string();
    sandbox.run(&file, &["bill", "pay", "Asha", &bill_id, "--date", "2024-01-04"]);

    let bill = &read_json(&file)["tenants"][0]["bills"][0];
    assert_eq!(bill["amount"].as_f64(), Some(300.5));
    assert_eq!(bill["paidOn"], "2024-01-04");

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["bill", "pay", "Asha", &bill_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already paid"));
}

#[test]
fn payment_removal_needs_confirmation() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    sandbox.run(&file, &["tenant", "add", "Asha", "--rent", "5000"]);
    sandbox.run(&file, &["payment", "add", "Asha", "120", "--type", "utility", "--notes", "water"]);

    let payment_id = read_json(&file)["tenants"][0]["payments"][0]["id"].to_string();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .args(["payment", "remove", "Asha", &payment_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert_eq!(read_json(&file)["tenants"][0]["payments"][0]["notes"], "water");

    sandbox.run(&file, &["payment", "remove", "Asha", &payment_id, "--yes"]);
    assert_eq!(read_json(&file)["tenants"][0]["payments"], serde_json::json!([]));
}

#[test]
fn save_as_switches_current_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    let copy = sandbox.path("copy.json");

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .arg("save-as")
        .arg(&copy)
        .assert()
        .success()
        .stdout(predicate::str::contains("as copy.json"));

    // Later edits without --file go to the copy
    sandbox
        .rentlog()
        .args(["property", "add", "Barn", "--address", "1 Farm Rd"])
        .assert()
        .success();

    assert_eq!(read_json(&copy)["properties"][1]["name"], "Barn");
    assert_eq!(read_json(&file)["properties"].as_array().map(Vec::len), Some(1));
}

#[test]
fn fallback_profile_downloads_without_overwriting() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    let original = std::fs::read_to_string(&file).unwrap();

    for _ in 0..2 {
        sandbox
            .rentlog()
            .arg("--profile")
            .arg("fallback")
            .arg("--file")
            .arg(&file)
            .args(["property", "add", "Barn", "--address", "1 Farm Rd"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Downloaded"));
    }

    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
    let first = read_json(&sandbox.downloads().join("ledger.json"));
    let second = read_json(&sandbox.downloads().join("ledger (1).json"));
    assert_eq!(first["properties"][1]["name"], "Barn");
    assert_eq!(second["properties"][1]["name"], "Barn");
}

#[test]
fn fallback_profile_rejects_target_paths() {
    let sandbox = Sandbox::new();
    let file = sandbox.new_file("ledger.json");
    let copy = sandbox.path("copy.json");

    sandbox
        .rentlog()
        .args(["--profile", "fallback", "--file"])
        .arg(&file)
        .arg("save-as")
        .arg(&copy)
        .assert()
        .failure()
        .stderr(predicate::str::contains("downloads"));
    assert!(!copy.exists());

    let fresh = sandbox.path("fresh.json");
    sandbox
        .rentlog()
        .args(["--profile", "fallback", "--file"])
        .arg(&fresh)
        .arg("new")
        .assert()
        .failure();
    assert!(!fresh.exists());
}

#[test]
fn binary_file_is_rejected_with_remedy() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("bin.json");
    std::fs::write(&file, [0xff, 0xfe, b'{', b'}']).unwrap();

    sandbox
        .rentlog()
        .arg("--file")
        .arg(&file)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse data file"))
        .stderr(predicate::str::contains("Choose another file or create a new one"));
}

#[test]
fn dismissed_picker_changes_nothing() {
    let sandbox = Sandbox::new();

    sandbox
        .rentlog()
        .args(["property", "add", "Barn", "--address", "1 Farm Rd"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!sandbox.path("config").join("config.json").exists());
}

#[test]
fn config_shows_paths() {
    let sandbox = Sandbox::new();

    sandbox
        .rentlog()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency symbol:   ₹"))
        .stdout(predicate::str::contains("using handle"));
}
