//! Integration tests for ktlint-hook

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn ktlint_hook() -> Command {
        let mut cmd = cargo_bin_cmd!("ktlint-hook");
        cmd.env_remove("KTLINT_HOOK_CONFIG");
        cmd
    }

    /// A workspace outside any git repository with a pre-populated cache,
    /// so no test touches the network
    fn workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("cache");
        std::fs::create_dir(&cache).unwrap();
        std::fs::write(cache.join("ktlint"), b"not really a jar").unwrap();
        std::fs::write(
            temp.path().join(".ktlint-hook.toml"),
            format!(
                "[ktlint]\ncache_dir = {:?}\ndownload_url = \"http://127.0.0.1:9/{{version}}/ktlint\"\n",
                cache.display().to_string()
            ),
        )
        .unwrap();
        std::fs::write(temp.path().join("Main.kt"), "fun main() {}\n").unwrap();
        temp
    }

    fn cached_binary(dir: &Path) -> std::path::PathBuf {
        dir.join("cache").join("ktlint")
    }

    #[test]
    fn help_displays() {
        ktlint_hook()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("formats git-tracked Kotlin sources"));
    }

    #[test]
    fn version_displays() {
        ktlint_hook()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("ktlint-hook"));
    }

    #[test]
    fn run_outside_repository_reports_no_files() {
        let temp = workspace();
        ktlint_hook()
            .current_dir(temp.path())
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
            .assert()
            .success()
            .stdout("No tracked Kotlin files found.\n");
    }

    #[test]
    fn explicit_run_subcommand() {
        let temp = workspace();
        ktlint_hook()
            .arg("run")
            .current_dir(temp.path())
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
            .assert()
            .success()
            .stdout(predicate::str::contains("No tracked Kotlin files found."));
    }

    #[test]
    fn fetch_reuses_cached_binary() {
        let temp = workspace();
        ktlint_hook()
            .arg("fetch")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                cached_binary(temp.path()).display().to_string(),
            ));
    }

    #[test]
    fn fetch_failure_is_fatal() {
        let temp = workspace();
        std::fs::remove_file(cached_binary(temp.path())).unwrap();
        ktlint_hook()
            .arg("fetch")
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to download"))
            .stderr(predicate::str::contains("Hint:"));
        assert!(!cached_binary(temp.path()).exists());
        assert!(!temp.path().join("cache").join("ktlint.tmp").exists());
    }

    #[test]
    fn config_path_shows_local_file() {
        let temp = workspace();
        ktlint_hook()
            .args(["config", "path"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(".ktlint-hook.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        ktlint_hook()
            .args(["config", "show", "--no-local"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("[ktlint]"))
            .stdout(predicate::str::contains("[java]"));
    }

    #[test]
    fn config_init_refuses_to_overwrite() {
        let temp = workspace();
        ktlint_hook()
            .args(["config", "init"])
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn config_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        ktlint_hook()
            .args(["config", "init", "--no-local"])
            .current_dir(temp.path())
            .assert()
            .success();

        let written = std::fs::read_to_string(temp.path().join(".ktlint-hook.toml")).unwrap();
        assert!(written.contains("version = \"1.7.1\""));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[ktlint\n").unwrap();
        ktlint_hook()
            .arg("--config")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn missing_explicit_config_is_fatal() {
        ktlint_hook()
            .args(["--config", "/nonexistent/ktlint-hook.toml", "status"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration file not found"));
    }

    #[test]
    fn status_runs() {
        // Java may be missing on the test host; status reports it but succeeds
        let temp = workspace();
        ktlint_hook()
            .arg("status")
            .current_dir(temp.path())
            .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
            .assert()
            .success()
            .stdout(predicate::str::contains("ktlint-hook Status"))
            .stdout(predicate::str::contains("Cached:"));
    }
}
