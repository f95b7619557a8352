use std::io;
use std::process::{Command, Stdio};

/// Capability for sending the user to a resolved destination. The production
/// implementation hands the URL to the platform opener; tests inject a
/// recorder instead.
pub trait Navigator {
    fn navigate(&self, destination: &str) -> io::Result<()>;
}

pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn navigate(&self, destination: &str) -> io::Result<()> {
        open_command(destination)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(target_os = "macos")]
fn open_command(destination: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(destination);
    command
}

#[cfg(target_os = "windows")]
fn open_command(destination: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", destination]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(destination: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(destination);
    command
}
