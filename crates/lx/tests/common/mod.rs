use std::process::Command;

/// Create a new lx CLI command
///
/// The server URL and log filter are cleared from the environment so tests don't depend on the
/// developer's shell.
pub fn lx() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lx"));
    command.env_remove("LEXIS_SERVER_URL").env("RUST_LOG", "off");
    command
}
