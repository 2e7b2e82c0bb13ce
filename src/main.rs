// SPDX-License-Identifier: MPL-2.0
use changelog_viewer::app::{self, paths, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`,
/// `changelog_viewer=info`).
const LOG_ENV: &str = "CHANGELOG_VIEWER_LOG";

const HELP: &str = "\
Changelog Viewer

USAGE:
  changelog_viewer [OPTIONS]

OPTIONS:
  --lang <CODE>        Start in this language (en, ja, zh, tw)
  --base-url <URL|DIR> Where changelogs/<code>.json is read from
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "changelog viewer exited with an error");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        base_url: args.opt_value_from_str("--base-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
