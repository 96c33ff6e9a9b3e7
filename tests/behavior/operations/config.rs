use crate::async_trials;
use crate::*;
use gallerist::error::Result;
use predicates::prelude::*;
use tempfile::tempdir;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_config_set_then_show,
        test_settings_file_supplies_backend,
        test_env_directory_overrides_settings_file,
        test_config_set_rejects_invalid_base_url,
    ));
}

async fn test_config_set_then_show(_backend: FakeBackend) -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");

    gallerist_cmd()
        .env("GALLERIST_CONFIG", &path)
        .args([
            "config",
            "set",
            "--base-url",
            "http://nas.local:5000/",
            "--directory",
            "camera",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved to"));

    gallerist_cmd()
        .env("GALLERIST_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("directory=camera  [settings file]"))
        .stdout(predicate::str::contains("endpoint=http://nas.local:5000/images"));
    Ok(())
}

async fn test_settings_file_supplies_backend(backend: FakeBackend) -> Result<()> {
    backend.seed("camera", vec![media("7", "sunrise.jpg")]);
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!("base_url = \"{}\"\ndirectory = \"camera\"\n", backend.base_url),
    )?;

    gallerist_cmd()
        .env("GALLERIST_CONFIG", &path)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("sunrise.jpg"));
    Ok(())
}

async fn test_env_directory_overrides_settings_file(backend: FakeBackend) -> Result<()> {
    backend.seed("camera", vec![media("7", "sunrise.jpg")]);
    backend.seed("phone", vec![media("8", "selfie.jpg")]);
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "directory = \"camera\"\n")?;

    backend
        .command()
        .env("GALLERIST_CONFIG", &path)
        .env("GALLERIST_DIRECTORY", "phone")
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("selfie.jpg"))
        .stdout(predicate::str::contains("sunrise.jpg").not());
    Ok(())
}

async fn test_config_set_rejects_invalid_base_url(_backend: FakeBackend) -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");

    gallerist_cmd()
        .env("GALLERIST_CONFIG", &path)
        .args(["config", "set", "--base-url", "ftp://nas.local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));

    assert!(!path.exists());
    Ok(())
}
