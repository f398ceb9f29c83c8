//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a brok command isolated from the user's environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and the settings path pointing into the temp home
    /// - the suffix and log variables cleared
    /// - the current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("brok").expect("failed to find brok binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env("BROK_CONFIG", self.home.path().join("config.toml"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DOPPLER_CONFIG_SUFFIX");
        cmd.env_remove("BROK_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `brok config-files --tool <fake>` with extra arguments.
    pub fn config_files_cmd(&self, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("config-files").arg("--tool").arg(self.tool());
        cmd.args(extra);
        cmd
    }

    /// Run `brok config-files` with a fixed suffix.
    pub fn sync(&self, extra: &[&str]) -> Output {
        self.config_files_cmd(&["--suffix", "desk"])
            .args(extra)
            .output()
            .expect("failed to run brok config-files")
    }
}
