//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an smenv command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - smenv variables cleared and colors disabled
    /// - `SMENV_TEST_STORE` pointing at the seed file, if one was written
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("smenv").expect("failed to find smenv binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("SMENV_LOG");
        cmd.env_remove("SMENV_CONFIG");
        cmd.env_remove("SMENV_TEST_STORE");
        cmd.env("NO_COLOR", "1");
        if self.store_path().exists() {
            cmd.env("SMENV_TEST_STORE", self.store_path());
        }
        cmd
    }

    /// Run smenv with the given arguments.
    pub fn smenv(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run smenv")
    }

    /// Run smenv with a command after `--`.
    pub fn run(&self, command: &[&str]) -> Output {
        let mut args = vec!["--"];
        args.extend_from_slice(command);
        self.smenv(&args)
    }
}
