use clap::ArgMatches;
use std::error::Error;
use std::io::{self, Write};
use tracing::debug;

use dwm_core::{
    parse_pid, DwmError, DwmResult, ListingFormat, Selector, SelectorKind, ShowMode,
    WindowFilter, WindowService, WindowSystem,
};
use dwm_platform::NativeWindowSystem;

use crate::app::IDENTITY;

/// What a single invocation does. Only one action runs, in this precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Identify,
    List { filter: WindowFilter, json: bool },
    Activate { selector: Selector, mode: ShowMode },
    Nothing,
}

impl Invocation {
    pub fn from_matches(matches: &ArgMatches) -> DwmResult<Self> {
        if matches.get_flag("identify") {
            return Ok(Self::Identify);
        }

        if matches.get_flag("list") {
            let mut filter = WindowFilter::all().including_pid(matches.get_flag("pid"));
            filter.title = matches.get_one::<String>("title").cloned();
            filter.pid = matches
                .get_one::<String>("owner")
                .map(String::as_str)
                .map(parse_pid)
                .transpose()?;
            return Ok(Self::List {
                filter,
                json: matches.get_flag("json"),
            });
        }

        if let Some(value) = matches.get_one::<String>("activate") {
            let kind = match (matches.get_flag("handle"), matches.get_flag("pid")) {
                (true, true) => return Err(DwmError::ConflictingSelectors),
                (true, false) => SelectorKind::Handle,
                (false, true) => SelectorKind::Pid,
                (false, false) => SelectorKind::Title,
            };
            let selector = Selector::parse(value, kind)?;
            let mode = match matches.get_one::<String>("show") {
                Some(mode) => mode.parse()?,
                None => ShowMode::default(),
            };
            return Ok(Self::Activate { selector, mode });
        }

        Ok(Self::Nothing)
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let invocation = Invocation::from_matches(matches)?;
    debug!(?invocation, "parsed invocation");

    let service = WindowService::new(NativeWindowSystem::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&invocation, &service, &mut out)
}

pub fn execute<S: WindowSystem>(
    invocation: &Invocation,
    service: &WindowService<S>,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    match invocation {
        Invocation::Identify => writeln!(out, "{IDENTITY}")?,
        Invocation::List { filter, json } => list_windows(service, filter, *json, out)?,
        Invocation::Activate { selector, mode } => {
            service.activate(selector, *mode)?;
        }
        Invocation::Nothing => debug!("no action requested"),
    }
    out.flush()?;
    Ok(())
}

fn list_windows<S: WindowSystem>(
    service: &WindowService<S>,
    filter: &WindowFilter,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    // Host first: a failed lookup must not leave a partial listing behind.
    let host = service.host_name()?;
    let windows = service.list_windows(filter)?;
    let format = ListingFormat::new(host, filter.include_pid);

    if json {
        writeln!(out, "{}", format.to_json(&windows)?)?;
    } else {
        for line in format.lines(&windows) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
