// utils.rs - Common Utility Functions
//
// Shared helpers for shelling out to small OS commands without ever blocking
// the render loop for longer than a fixed budget.

use std::io;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::timing::PROBE_POLL_MS;

/// Keeps `reg.exe` and friends from flashing a console window
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Run `program` and collect its output, waiting at most `timeout`.
///
/// Returns `Ok(None)` when the deadline passes; the child is killed and reaped
/// before returning. Spawn and wait failures come back as `Err`.
pub fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> io::Result<Option<Output>> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let mut child = command.spawn()?;
    let deadline = Instant::now() + timeout;

    loop {
        if child.try_wait()?.is_some() {
            return child.wait_with_output().map(Some);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(Duration::from_millis(PROBE_POLL_MS));
    }
}

/// Stdout as trimmed UTF-8, lossy
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn collects_output_of_fast_command() {
        let output = run_with_timeout("sh", &["-c", "echo hello"], Duration::from_secs(5))
            .expect("spawn sh")
            .expect("finished in time");
        assert!(output.status.success());
        assert_eq!(stdout_text(&output), "hello");
    }

    #[test]
    fn slow_command_times_out() {
        let started = Instant::now();
        let result = run_with_timeout("sh", &["-c", "sleep 5"], Duration::from_millis(100))
            .expect("spawn sh");
        assert!(result.is_none());
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(run_with_timeout("definitely-not-a-real-binary-xyz", &[], Duration::from_millis(100)).is_err());
    }
}
