use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

pub const IDENTITY: &str = "Name: win-dwm";

pub fn build_cli() -> Command {
    Command::new("win-dwm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List visible top-level windows and bring one to the foreground")
        .long_about(
            "win-dwm enumerates the visible top-level windows of the current desktop session \
             and can activate one of them by handle, title or owning process id.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("identify")
                .short('m')
                .help("Print the program identity and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List visible top-level windows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pid")
                .short('p')
                .long("pid")
                .help("Include the process id when listing; with -a, treat the value as a process id")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Only list windows whose title contains TEXT"),
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .value_name("PID")
                .help("Only list windows owned by process PID"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("List windows as a JSON array")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("activate")
                .short('a')
                .long("activate")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .help("Activate the window selected by VALUE (a title substring unless -i or -p)"),
        )
        .arg(
            Arg::new("handle")
                .short('i')
                .long("handle")
                .help("Treat the -a value as a window handle (decimal or 0x hex)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .value_name("MODE")
                .help("Show-mode applied after activation: 1/normal, 5/show, 9/restore, 10/default [default: restore]"),
        )
}

/// Rewrite the single-dash `-show` spelling into `--show` so clap does not
/// read it as a cluster of short flags.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-show") => OsString::from("--show"),
            Some(s) if s.starts_with("-show=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> clap::ArgMatches {
        build_cli()
            .try_get_matches_from(normalize_args(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_combined_list_pid_flags() {
        let m = parse(&["win-dwm", "-lp"]);
        assert!(m.get_flag("list"));
        assert!(m.get_flag("pid"));
    }

    #[test]
    fn test_single_dash_show() {
        let m = parse(&["win-dwm", "-a", "Notepad", "-show", "5"]);
        assert_eq!(m.get_one::<String>("activate").map(String::as_str), Some("Notepad"));
        assert_eq!(m.get_one::<String>("show").map(String::as_str), Some("5"));

        let m = parse(&["win-dwm", "-a", "Notepad", "-show=1"]);
        assert_eq!(m.get_one::<String>("show").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_handle_and_pid_flags_parse_together() {
        let m = parse(&["win-dwm", "-lp", "-i"]);
        assert!(m.get_flag("list"));
        assert!(m.get_flag("handle"));
    }

    #[test]
    fn test_activate_value_may_start_with_hyphen() {
        let m = parse(&["win-dwm", "-a", "-x"]);
        assert_eq!(m.get_one::<String>("activate").map(String::as_str), Some("-x"));
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let args = normalize_args(["win-dwm", "-l", "--show", "9", "-shower"]);
        assert_eq!(args, vec!["win-dwm", "-l", "--show", "9", "-shower"]);
    }
}
