extern crate chrono;
extern crate docopt;
extern crate env_logger;
extern crate libc;
extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod commands;
mod config;
mod error;
mod time_of_day;
mod util;
mod validator;
mod window;

use docopt::{ArgvMap, Docopt};

use std::collections::HashMap;
use std::io;
use std::io::{BufReader, Read};
use std::process;

use commands::{Add, Check, Command, List, Remove, Update};
use config::Settings;
use error::InputError;
use util::{format_12h, format_hm};
use window::{TimeWindow, WindowEdit};

const USAGE: &'static str = "
Mindful Bell - validates the daily active windows bells may ring in.

Reads the current windows from stdin: an optional header of `key: value` lines, a blank line, then
a JSON array of {\"start\": \"HH:MM\", \"end\": \"HH:MM\"} objects. Prints the resulting windows as JSON.

Usage:
  mindful-bell check
  mindful-bell list
  mindful-bell add <start> <end>
  mindful-bell update <index> (--start=<time> | --end=<time>)
  mindful-bell remove <index>
  mindful-bell (-h | --help)
  mindful-bell --version

Options:
  --start=<time>    New start of the window, HH:MM.
  --end=<time>      New end of the window, HH:MM.
  -h --help         Shows this screen.
  --version         Prints the version of your Mindful Bell.

Header keys (overridden by MINDFUL_BELL_ALLOW_OVERNIGHT and MINDFUL_BELL_MAX_WINDOWS):
  bell.window.allow_overnight: true|false
  bell.window.max_count: <n>
";

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

fn main() {
    env_logger::init();

    let args = Docopt::new(USAGE)
        .and_then(|dopt| dopt.parse())
        .unwrap_or_else(|e| e.exit());

    if args.get_bool("--version") {
        println!("{}", VERSION.unwrap_or("unknown"));
        process::exit(libc::EXIT_SUCCESS);
    }

    if let Err(e) = run(&args) {
        eprintln!("mindful-bell: {}", e);
        process::exit(libc::EXIT_FAILURE);
    }
}

fn run(args: &ArgvMap) -> Result<(), failure::Error> {
    let command = parse_command(args)?;

    let (header, windows) = parse_input(BufReader::new(io::stdin()))?;
    let settings = Settings::resolve(&header)?;

    let windows = command.apply(&settings, &windows)?;

    if args.get_bool("list") {
        for line in listing(&windows) {
            println!("{}", line);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    }
    Ok(())
}

fn parse_command(args: &ArgvMap) -> Result<Box<Command>, failure::Error> {
    let command: Box<Command> = if args.get_bool("add") {
        Box::new(Add {
            window: TimeWindow::parse(args.get_str("<start>"), args.get_str("<end>"))?,
        })
    } else if args.get_bool("update") {
        let edit = match args.get_str("--start") {
            "" => WindowEdit::End(args.get_str("--end").parse()?),
            start => WindowEdit::Start(start.parse()?),
        };
        Box::new(Update {
            index: parse_index(args.get_str("<index>"))?,
            edit: edit,
        })
    } else if args.get_bool("remove") {
        Box::new(Remove {
            index: parse_index(args.get_str("<index>"))?,
        })
    } else if args.get_bool("list") {
        Box::new(List)
    } else if args.get_bool("check") {
        Box::new(Check)
    } else {
        bail!("No command given");
    };

    Ok(command)
}

fn parse_index(raw: &str) -> Result<usize, InputError> {
    raw.trim().parse().map_err(|_| InputError::BadIndex {
        value: raw.to_owned(),
    })
}

fn parse_input<T: Read>(
    mut input: BufReader<T>,
) -> Result<(HashMap<String, String>, Vec<TimeWindow>), failure::Error> {
    let mut input_buf = String::new();
    input.read_to_string(&mut input_buf)?;
    let input_buf = input_buf.replace("\r\n", "\n");

    // Without a blank line separator the whole input is the JSON array
    let (header_section, json_section) = if input_buf.trim_start().starts_with('[') {
        ("", input_buf.as_str())
    } else {
        let mut sections = input_buf.splitn(2, "\n\n");
        match (sections.next(), sections.next()) {
            (Some(header), Some(json)) => (header, json),
            _ => ("", input_buf.as_str()),
        }
    };

    let mut header = HashMap::new();
    for line in header_section.lines().filter(|l| !l.trim().is_empty()) {
        let entry: Vec<&str> = line.splitn(2, ": ").collect();
        let first = line.trim_start().chars().next();
        if entry.len() != 2 || first == Some('[') || first == Some('{') {
            return Err(InputError::BadHeader {
                line: line.to_owned(),
            }.into());
        }
        trace!("Got key '{}' with value '{}'.", entry[0], entry[1]);

        header.insert(entry[0].trim().to_owned(), entry[1].trim().to_owned());
    }

    let windows: Vec<TimeWindow> = if json_section.trim().is_empty() {
        debug!("No windows in input, starting from an empty collection");
        Vec::new()
    } else {
        serde_json::from_str(json_section)?
    };
    debug!("Read {} windows", windows.len());

    Ok((header, windows))
}

fn listing(windows: &[TimeWindow]) -> Vec<String> {
    windows
        .iter()
        .enumerate()
        .map(|(idx, window)| {
            format!(
                "{}: {} - {} ({}{})",
                idx,
                format_12h(window.start.minutes()),
                format_12h(window.end.minutes()),
                format_hm(window.duration_minutes()),
                if window.crosses_midnight() {
                    ", overnight"
                } else {
                    ""
                }
            )
        })
        .collect()
}
