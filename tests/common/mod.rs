use assert_cmd::Command;

pub fn dreamlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dreamlog").unwrap();
    cmd.env_remove("DREAMLOG_JOURNAL");
    cmd
}
