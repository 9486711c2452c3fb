//! Detection of terminal color support.
//!
//! This module determines the [`Level`] of color support for an output
//! stream based on heuristics about CLI flags, environment variables, and
//! TTY status. Its primary sources are [NO_COLOR](https://no-color.org) and
//! [FORCE_COLOR](https://force-color.org); the remaining heuristics follow
//! Chalk's
//! [supports-color](https://github.com/chalk/supports-color/blob/main/index.js).
//!
//! The styling engine itself never inspects the environment; it only
//! consumes the level produced here (or one supplied explicitly).

use std::io::IsTerminal;

use crate::style::Level;

/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment
/// variable access. So this trait makes up for it yet still keeps things
/// simple by only requiring the implementation of one method. It also is
/// what makes the detection heuristics testable without touching the real
/// process environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined.
    fn is_defined(&self, key: &str) -> bool {
        self.read_os(key).is_some()
    }

    /// Determine whether the environment variable is defined with a
    /// non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine whether the environment variable has the given value.
    fn has_value(&self, key: &str, expected_value: &str) -> bool {
        self.read_os(key).is_some_and(|v| v == expected_value)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

// ====================================================================================================================

/// An output stream whose color support can be detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_tty(&self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Determine the level of color support for the given output stream.
///
/// Detection considers, in order of precedence: explicit CLI flags
/// (`--no-color` forces no color, `--color` forces basic colors,
/// `--color=256` and `--color=16m` force the respective levels), the
/// `FORCE_COLOR` environment variable, `NO_COLOR`, CI vendor variables,
/// whether the stream is a TTY, and the `TERM`, `COLORTERM`, and
/// `TERM_PROGRAM` families.
pub fn color_support(stream: Stream) -> Level {
    let args: Vec<String> = std::env::args().skip(1).collect();
    color_support_from(&Env::default(), &args, stream.is_tty())
}

const DISABLE_FLAGS: [&str; 4] = ["no-color", "no-colors", "color=false", "color=never"];
const ENABLE_FLAGS: [&str; 4] = ["color", "colors", "color=true", "color=always"];

const CI_VENDORS: [&str; 6] = [
    "TRAVIS",
    "CIRCLECI",
    "APPVEYOR",
    "GITLAB_CI",
    "BUILDKITE",
    "DRONE",
];

/// Determine whether the flag appears before any `--` terminator.
fn has_flag(args: &[String], flag: &str) -> bool {
    let prefix = if flag.starts_with('-') {
        ""
    } else if flag.len() == 1 {
        "-"
    } else {
        "--"
    };
    let wanted = format!("{}{}", prefix, flag);

    let terminator = args.iter().position(|arg| arg == "--");
    args.iter()
        .position(|arg| *arg == wanted)
        .is_some_and(|position| terminator.map_or(true, |t| position < t))
}

/// Determine the level forced by `FORCE_COLOR` or, failing that, by generic
/// enable/disable flags.
fn forced_level(env: &impl Environment, args: &[String]) -> Option<Level> {
    if let Ok(force) = env.read("FORCE_COLOR") {
        let level = match force.as_str() {
            "true" | "" => Level::Basic,
            "false" => Level::None,
            _ => force
                .parse::<u32>()
                .ok()
                .and_then(|n| Level::try_from(n.min(3) as u8).ok())
                .unwrap_or(Level::Basic),
        };
        return Some(level);
    }

    if DISABLE_FLAGS.iter().any(|flag| has_flag(args, flag)) {
        return Some(Level::None);
    }
    if ENABLE_FLAGS.iter().any(|flag| has_flag(args, flag)) {
        return Some(Level::Basic);
    }

    None
}

pub(crate) fn color_support_from(
    env: &impl Environment,
    args: &[String],
    has_tty: bool,
) -> Level {
    let force = forced_level(env, args);
    if force == Some(Level::None) {
        return Level::None;
    }

    if has_flag(args, "color=16m")
        || has_flag(args, "color=full")
        || has_flag(args, "color=truecolor")
    {
        return Level::TrueColor;
    }
    if has_flag(args, "color=256") {
        return Level::Ansi256;
    }

    if force.is_none() && env.is_non_empty("NO_COLOR") {
        return Level::None;
    }

    // Azure DevOps pipelines color output without a TTY, so this test must
    // come before the TTY test.
    if env.is_defined("TF_BUILD") && env.is_defined("AGENT_NAME") {
        return Level::Basic;
    }

    if !has_tty && force.is_none() {
        return Level::None;
    }

    let min = force.unwrap_or(Level::None);

    if env.has_value("TERM", "dumb") {
        return min;
    }

    if cfg!(windows) {
        // Console hosts on supported Windows versions render 24-bit color.
        return Level::TrueColor;
    }

    if env.is_defined("CI") {
        if env.is_defined("GITHUB_ACTIONS") || env.is_defined("GITEA_ACTIONS") {
            return Level::TrueColor;
        }

        if CI_VENDORS.iter().any(|vendor| env.is_defined(vendor))
            || env.has_value("CI_NAME", "codeship")
        {
            return Level::Basic;
        }

        return min;
    }

    if let Ok(teamcity) = env.read("TEAMCITY_VERSION") {
        // TeamCity 9.x and later support ANSI colors.
        return if supports_teamcity(&teamcity) {
            Level::Basic
        } else {
            Level::None
        };
    }

    if env.has_value("COLORTERM", "truecolor") || env.has_value("TERM", "xterm-kitty") {
        return Level::TrueColor;
    }

    if env.has_value("TERM_PROGRAM", "Apple_Terminal") {
        return Level::Ansi256;
    }
    if env.has_value("TERM_PROGRAM", "iTerm.app") {
        let major = env
            .read("TERM_PROGRAM_VERSION")
            .ok()
            .and_then(|version| version.split('.').next()?.parse::<u32>().ok());
        return if major.is_some_and(|m| 3 <= m) {
            Level::TrueColor
        } else {
            Level::Ansi256
        };
    }

    if let Ok(mut term) = env.read("TERM") {
        term.make_ascii_lowercase();

        if term.ends_with("-256") || term.ends_with("-256color") {
            return Level::Ansi256;
        }
        if term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term == "color"
            || term == "ansi"
            || term == "cygwin"
            || term == "linux"
        {
            return Level::Basic;
        }
    }

    if env.is_defined("COLORTERM") {
        return Level::Basic;
    }

    min
}

/// Determine whether the TeamCity version string is 9.x or later.
fn supports_teamcity(version: &str) -> bool {
    let mut chars = version.chars();
    let c1 = chars.next();
    let c2 = chars.next();

    if c1 == Some('9') && c2 == Some('.') {
        return true;
    }

    c1.is_some_and(|c| c.is_ascii_digit() && c != '0')
        && c2.is_some_and(|c| c.is_ascii_digit())
        && chars.next() == Some('.')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }

        pub(crate) fn unset(&mut self, key: &str) -> &mut Self {
            self.bindings.remove(key);
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    // The heuristics below assume a non-Windows host; the Windows branch
    // short-circuits to truecolor.
    #[cfg(not(windows))]
    #[test]
    fn test_environment_heuristics() {
        let env = &mut FakeEnv::new();
        assert_eq!(color_support_from(env, &[], true), Level::None);
        assert_eq!(color_support_from(env, &[], false), Level::None);

        env.set("TERM", "cygwin");
        assert_eq!(color_support_from(env, &[], true), Level::Basic);

        env.set("TERM", "xterm-256color");
        assert_eq!(color_support_from(env, &[], true), Level::Ansi256);

        env.set("TERM_PROGRAM", "iTerm.app");
        assert_eq!(color_support_from(env, &[], true), Level::Ansi256);
        env.set("TERM_PROGRAM_VERSION", "3.5.2");
        assert_eq!(color_support_from(env, &[], true), Level::TrueColor);

        env.set("COLORTERM", "truecolor");
        assert_eq!(color_support_from(env, &[], true), Level::TrueColor);

        env.set("CI", "1");
        env.set("APPVEYOR", "1");
        assert_eq!(color_support_from(env, &[], true), Level::Basic);
        env.unset("APPVEYOR").set("GITHUB_ACTIONS", "1");
        assert_eq!(color_support_from(env, &[], true), Level::TrueColor);

        env.set("TF_BUILD", "1").set("AGENT_NAME", "agent");
        assert_eq!(color_support_from(env, &[], false), Level::Basic);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_dumb_terminal() {
        let env = &mut FakeEnv::new();
        env.set("TERM", "dumb");
        assert_eq!(color_support_from(env, &[], true), Level::None);
        env.set("FORCE_COLOR", "2");
        assert_eq!(color_support_from(env, &[], true), Level::Ansi256);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_force_color() {
        let env = &mut FakeEnv::new();

        env.set("FORCE_COLOR", "0");
        assert_eq!(color_support_from(env, &[], true), Level::None);
        env.set("FORCE_COLOR", "false");
        assert_eq!(color_support_from(env, &[], true), Level::None);

        // Forcing color overrides the missing TTY.
        env.set("FORCE_COLOR", "true");
        assert_eq!(color_support_from(env, &[], false), Level::Basic);
        env.set("FORCE_COLOR", "");
        assert_eq!(color_support_from(env, &[], false), Level::Basic);
        env.set("FORCE_COLOR", "3");
        assert_eq!(color_support_from(env, &[], false), Level::TrueColor);
        // Oversized values clamp to the highest level.
        env.set("FORCE_COLOR", "9001");
        assert_eq!(color_support_from(env, &[], false), Level::TrueColor);
    }

    #[test]
    fn test_no_color() {
        let env = &mut FakeEnv::new();
        env.set("COLORTERM", "truecolor");
        env.set("NO_COLOR", "1");
        assert_eq!(color_support_from(env, &[], true), Level::None);

        // Explicitly forcing color wins over NO_COLOR.
        env.set("FORCE_COLOR", "1");
        assert_ne!(color_support_from(env, &[], true), Level::None);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_flags() {
        let env = &mut FakeEnv::new();
        env.set("COLORTERM", "truecolor");

        assert_eq!(
            color_support_from(env, &args(&["--no-color"]), true),
            Level::None
        );
        assert_eq!(
            color_support_from(env, &args(&["--color=256"]), true),
            Level::Ansi256
        );
        assert_eq!(
            color_support_from(env, &args(&["--color=16m"]), false),
            Level::TrueColor
        );
        // Flags after the terminator are arguments, not options.
        assert_eq!(
            color_support_from(env, &args(&["--", "--no-color"]), true),
            Level::TrueColor
        );
        // A bare --color forces basic support even without a TTY.
        let env = &mut FakeEnv::new();
        assert_eq!(
            color_support_from(env, &args(&["--color"]), false),
            Level::Basic
        );
    }

    #[test]
    fn test_teamcity() {
        assert!(supports_teamcity("9.1"));
        assert!(supports_teamcity("10.0"));
        assert!(!supports_teamcity("8.1"));
        assert!(!supports_teamcity("0.9"));
    }
}
