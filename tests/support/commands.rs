//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an ecr-login command with only this test's variables set.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ecr-login").expect("failed to find ecr-login binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        for (k, v) in &self.vars {
            cmd.env(k, v);
        }
        cmd
    }

    /// Run ecr-login with no arguments.
    pub fn run(&self) -> Output {
        self.cmd().output().expect("failed to run ecr-login")
    }
}
