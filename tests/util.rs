use std::process::Command;

const PTOP_EXE_PATH: &str = env!("CARGO_BIN_EXE_ptop");
const RUNNER_ENV_VARS: [(&str, &str); 1] = [("NO_COLOR", "1")];

/// Returns the [`Command`] of a binary invocation of ptop, alongside
/// any required env variables.
pub fn ptop_command() -> Command {
    let mut cmd = Command::new(PTOP_EXE_PATH);
    cmd.envs(RUNNER_ENV_VARS);
    cmd
}
