mod debug_report;

use addrscan::{Options, find_addresses_verbose_with, find_streets_with, registered_locales};
use std::io::{self, IsTerminal, Read};

const DEFAULT_LOCALE: &str = "US";

/// What the scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Addresses,
    Streets,
}

#[derive(Debug)]
struct CliConfig {
    /// `None` means read stdin.
    input: Option<String>,
    locale: String,
    mode: Mode,
    color: bool,
    options: Options,
}

/// Outcome of argument parsing that is not a scan.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Help,
    Version,
    Usage(String),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = match parse_args(std::env::args().skip(1), io::stdout().is_terminal()) {
        Ok(config) => config,
        Err(Exit::Help) => {
            println!("{}", help_text());
            return;
        }
        Err(Exit::Version) => {
            println!("addrscan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(Exit::Usage(msg)) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let input = match config.input.take() {
        Some(text) => text,
        None => match read_stdin() {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                std::process::exit(2);
            }
        },
    };
    if input.trim().is_empty() {
        eprintln!("error: no input provided\n\n{}", help_text());
        std::process::exit(2);
    }

    let outcome = match config.mode {
        Mode::Streets => find_streets_with(&input, &config.locale, &config.options).map(|found| {
            let found: Vec<_> = found.collect();
            debug_report::print_streets(&input, &config.locale, &found, config.color)
        }),
        Mode::Addresses => find_addresses_verbose_with(&input, &config.locale, &config.options)
            .map(|details| debug_report::print_run(&details, config.color)),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn parse_args(args: impl IntoIterator<Item = String>, color: bool) -> Result<CliConfig, Exit> {
    let mut config = CliConfig {
        input: None,
        locale: DEFAULT_LOCALE.to_string(),
        mode: Mode::Addresses,
        color,
        options: Options::default(),
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        // `--flag=value` and `--flag value` are equivalent.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| inline.clone().or_else(|| args.next()).ok_or_else(|| Exit::Usage(format!("{name} expects a value")));

        match flag.as_str() {
            "-h" | "--help" => return Err(Exit::Help),
            "-V" | "--version" => return Err(Exit::Version),
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--streets" => config.mode = Mode::Streets,
            "--keep-line-breaks" => config.options.fold_line_breaks = false,
            "-l" | "--locale" => config.locale = value("--locale")?,
            "--max-bytes" => {
                let raw = value("--max-bytes")?;
                config.options.max_input_bytes =
                    raw.parse().map_err(|_| Exit::Usage(format!("--max-bytes: '{raw}' is not a byte count")))?;
            }
            "-i" | "--input" => {
                let text = value("--input")?;
                set_input(&mut config, text)?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut config, rest)?;
                }
            }
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(Exit::Usage(format!("unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                set_input(&mut config, rest)?;
            }
        }
    }

    Ok(config)
}

fn set_input(config: &mut CliConfig, text: String) -> Result<(), Exit> {
    if config.input.is_some() {
        return Err(Exit::Usage("input provided multiple times".to_string()));
    }
    config.input = Some(text);
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "addrscan {version}: find postal addresses in free text

USAGE
    addrscan [FLAGS] <text...>
    addrscan [FLAGS] --input <text>
    addrscan [FLAGS] < letter.txt

With no text arguments the input is read from stdin.

FLAGS
    -l, --locale <ID>        Locale profile [default: {default_locale}]
                             known: {locales}
        --streets            Report street matches; city and region not required
        --keep-line-breaks   Do not join addresses split across lines
        --max-bytes <N>      Refuse inputs larger than N bytes
    -i, --input <TEXT>       Text to scan
        --color, --no-color  Force or disable ANSI colors
    -h, --help               Print this help
    -V, --version            Print the version

ENVIRONMENT
    RUST_LOG=addrscan=debug  Registration and gating decisions
    RUST_LOG=addrscan=trace  Also lowered patterns and each match

EXIT STATUS
    0 scan finished, with or without matches
    1 unknown locale or input refused
    2 bad arguments or no input
",
        version = env!("CARGO_PKG_VERSION"),
        default_locale = DEFAULT_LOCALE,
        locales = registered_locales().join(", ")
    )
}
