mod support;

use predicates::str::contains;

use did::config::{Config, CONFIG_FILE};
use support::{did_cmd, TestDir};

#[test]
fn explicit_config_must_exist() {
    let dir = TestDir::new();
    did_cmd(&dir)
        .args(["--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(contains("IO error"));
}

#[test]
fn explicit_config_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file("conf/did.toml", "[report]\ndays = 3\n")?;
    dir.write_log("")?;

    did_cmd(&dir)
        .args(["--config", "conf/did.toml", "-d", "2013/03/11"])
        .assert()
        .success()
        .stdout(contains("      ##### (3)"));
    Ok(())
}

#[test]
fn partial_config_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file(CONFIG_FILE, "[log]\n")?;

    let cfg = Config::load_from_dir(dir.path())?;
    assert_eq!(cfg.log.file, "did.txt");
    assert_eq!(cfg.report.days, 70);
    assert_eq!(cfg.report.label_width, 5);
    Ok(())
}
