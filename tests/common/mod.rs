use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn climblog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("climblog").unwrap();
    cmd.env_remove("CLIMBLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Spreadsheet export used by the import tests
#[allow(dead_code)]
pub const SHEET: &str = "\
Date,Climb,Comments
6/1/2024,Rumney TA AS,\"Armed, Obi (AS)\"
6/8/2024,Gym TA AS,Board session
6/15/2024,Rumney TA AS,\"Centerpiece (AS 2xlead 2h, TA redpoint), Qwxzv\"
7/2/2024,Rumney AS,Weevil (AS working moves)
";

/// Initialize a log with the seeded catalogue and write `log.csv` into it
#[allow(dead_code)]
pub fn seeded_log(root: &Path) {
    climblog_cmd()
        .arg("init")
        .arg(root)
        .arg("--seed-routes")
        .assert()
        .success();
    fs::write(root.join("log.csv"), SHEET).unwrap();
}

/// Seeded log with the sheet already imported
#[allow(dead_code)]
pub fn imported_log(root: &Path) {
    seeded_log(root);
    climblog_cmd()
        .current_dir(root)
        .arg("import")
        .arg("log.csv")
        .assert()
        .success();
}
