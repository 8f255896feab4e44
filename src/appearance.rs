// appearance.rs - Light/Dark Appearance Detection
//
// The eyes are drawn black on light menu bars and white on dark ones. The OS
// setting is read through an `AppearanceProbe`; the shipped probe shells out
// to a platform command with a short deadline.

use std::process::Output;
use std::time::Duration;

use log::debug;

use crate::constants::colors::{DARK_STROKE, LIGHT_STROKE};
use crate::utils::{run_with_timeout, stdout_text};

/// Theme the icon is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Outline and pupil color for this theme
    pub fn stroke_color(self) -> [u8; 4] {
        match self {
            Appearance::Light => LIGHT_STROKE,
            Appearance::Dark => DARK_STROKE,
        }
    }
}

/// Answer from a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Light,
    Dark,
    /// The probe failed or timed out
    Unknown,
}

impl ProbeResult {
    pub fn appearance(self) -> Option<Appearance> {
        match self {
            ProbeResult::Light => Some(Appearance::Light),
            ProbeResult::Dark => Some(Appearance::Dark),
            ProbeResult::Unknown => None,
        }
    }
}

/// Source of the OS appearance setting
pub trait AppearanceProbe {
    /// Read the current setting; must return within the probe's own deadline
    fn query(&mut self) -> ProbeResult;
}

/// Maps a finished command to a probe answer
pub type Interpreter = fn(&Output) -> ProbeResult;

/// Probe that runs an external command and interprets its result
#[derive(Clone)]
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    interpret: Interpreter,
}

impl CommandProbe {
    pub fn new(program: &str, args: &[&str], timeout: Duration, interpret: Interpreter) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
            interpret,
        }
    }
}

impl AppearanceProbe for CommandProbe {
    fn query(&mut self) -> ProbeResult {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        match run_with_timeout(&self.program, &args, self.timeout) {
            Ok(Some(output)) => (self.interpret)(&output),
            Ok(None) => {
                debug!("{} did not answer within {:?}", self.program, self.timeout);
                ProbeResult::Unknown
            }
            Err(e) => {
                debug!("Failed to run {}: {}", self.program, e);
                ProbeResult::Unknown
            }
        }
    }
}

/// `defaults read -g AppleInterfaceStyle` only succeeds when dark mode is on
pub fn interpret_macos_defaults(output: &Output) -> ProbeResult {
    if output.status.success() && stdout_text(output).eq_ignore_ascii_case("dark") {
        ProbeResult::Dark
    } else {
        ProbeResult::Light
    }
}

/// `reg query ... /v SystemUsesLightTheme` prints the DWORD as 0x0 or 0x1
pub fn interpret_windows_registry(output: &Output) -> ProbeResult {
    if !output.status.success() {
        return ProbeResult::Unknown;
    }
    let text = stdout_text(output);
    match text.split_whitespace().last() {
        Some("0x0") => ProbeResult::Dark,
        Some("0x1") => ProbeResult::Light,
        _ => ProbeResult::Unknown,
    }
}

/// `gsettings get org.gnome.desktop.interface color-scheme` prints e.g. 'prefer-dark'
pub fn interpret_gsettings(output: &Output) -> ProbeResult {
    if !output.status.success() {
        return ProbeResult::Unknown;
    }
    if stdout_text(output).contains("dark") {
        ProbeResult::Dark
    } else {
        ProbeResult::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn output(code: i32, stdout: &str) -> Output {
        use std::os::unix::process::ExitStatusExt;
        Output {
            status: std::process::ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }
    }

    #[test]
    fn stroke_color_follows_appearance() {
        assert_eq!(Appearance::default(), Appearance::Light);
        assert_eq!(Appearance::Light.stroke_color(), LIGHT_STROKE);
        assert_eq!(Appearance::Dark.stroke_color(), DARK_STROKE);
    }

    #[test]
    fn unknown_probe_result_has_no_appearance() {
        assert_eq!(ProbeResult::Dark.appearance(), Some(Appearance::Dark));
        assert_eq!(ProbeResult::Light.appearance(), Some(Appearance::Light));
        assert_eq!(ProbeResult::Unknown.appearance(), None);
    }

    #[cfg(unix)]
    #[test]
    fn macos_defaults_output() {
        assert_eq!(interpret_macos_defaults(&output(0, "Dark\n")), ProbeResult::Dark);
        assert_eq!(interpret_macos_defaults(&output(1, "")), ProbeResult::Light);
    }

    #[cfg(unix)]
    #[test]
    fn windows_registry_output() {
        let dark = "\r\nHKEY_CURRENT_USER\\...\\Personalize\r\n    SystemUsesLightTheme    REG_DWORD    0x0\r\n";
        let light = "    SystemUsesLightTheme    REG_DWORD    0x1\r\n";
        assert_eq!(interpret_windows_registry(&output(0, dark)), ProbeResult::Dark);
        assert_eq!(interpret_windows_registry(&output(0, light)), ProbeResult::Light);
        assert_eq!(interpret_windows_registry(&output(1, "")), ProbeResult::Unknown);
        assert_eq!(interpret_windows_registry(&output(0, "garbage")), ProbeResult::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn gsettings_output() {
        assert_eq!(interpret_gsettings(&output(0, "'prefer-dark'\n")), ProbeResult::Dark);
        assert_eq!(interpret_gsettings(&output(0, "'default'\n")), ProbeResult::Light);
        assert_eq!(interpret_gsettings(&output(1, "")), ProbeResult::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn command_probe_runs_interpreter() {
        let mut probe = CommandProbe::new("sh", &["-c", "echo Dark"], Duration::from_secs(5), interpret_macos_defaults);
        assert_eq!(probe.query(), ProbeResult::Dark);

        let mut probe = CommandProbe::new("sh", &["-c", "exit 1"], Duration::from_secs(5), interpret_macos_defaults);
        assert_eq!(probe.query(), ProbeResult::Light);
    }

    #[cfg(unix)]
    #[test]
    fn command_probe_timeout_is_unknown() {
        let started = std::time::Instant::now();
        let mut probe = CommandProbe::new("sh", &["-c", "sleep 5"], Duration::from_millis(100), interpret_macos_defaults);
        assert_eq!(probe.query(), ProbeResult::Unknown);
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn command_probe_spawn_failure_is_unknown() {
        let mut probe = CommandProbe::new(
            "definitely-not-a-real-binary-xyz",
            &[],
            Duration::from_millis(100),
            interpret_gsettings,
        );
        assert_eq!(probe.query(), ProbeResult::Unknown);
    }
}
