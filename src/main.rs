//! st2make CLI - TrueSTUDIO project to Makefile translator
//!
//! Usage: st2make [OPTIONS] <PROJECT_DIR>
//!
//! Writes `Makefile` (and, in generated-link-script builds, `arm-gcc-link.ld`)
//! into PROJECT_DIR. Exit statuses are negative on failure, see
//! [`st2make::ExitStatus`].

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use st2make::{
    Config, ConvertReport, ExitStatus, LocalFs, Pipeline, St2MakeError, TargetResolver, Verbosity,
};

mod ui;

/// Convert an Atollic TrueSTUDIO STM32 project into a GNU Makefile
#[derive(Parser, Debug)]
#[command(name = "st2make")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TrueSTUDIO project folder (holds .project and .cproject)
    project_dir: PathBuf,

    /// Directory holding Makefile.tpl and Link.tpl
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v stages, -vv includes and defines)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => configured,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
                std::process::exit(ExitStatus::Success.code());
            }
            let err = anyhow::Error::new(usage_error(&e));
            ui::error::print_error(&err, json_requested(std::env::args_os().skip(1)));
            std::process::exit(ExitStatus::InvalidCommandLine.code());
        }
    };

    let json = cli.json;
    match run(cli) {
        Ok(_) => std::process::exit(ExitStatus::Success.code()),
        Err(err) => {
            ui::error::print_error(&err, json);
            std::process::exit(exit_status(&err).code());
        }
    }
}

fn run(cli: Cli) -> Result<ConvertReport> {
    let (mut config, loader_warnings) = Config::load_or_default();
    if let Some(dir) = &cli.templates {
        config.templates.dir = Some(dir.clone());
    }
    let verbosity = cli.verbosity(config.output.verbosity);

    let (resolver, invalid_rules) = TargetResolver::with_rules(&config.targets);
    let mut warnings = ui::output::config_warning_lines(&loader_warnings);
    warnings.extend(invalid_rules.iter().map(|rule| {
        format!(
            "Ignoring target rule '{}': {}",
            rule.pattern,
            rule.message.lines().last().unwrap_or_default()
        )
    }));
    ui::output::print_config_warnings(&warnings, verbosity, cli.json);

    let pipeline = Pipeline::new(
        LocalFs::new(),
        config.makefile_template_path(),
        config.link_template_path(),
    )
    .with_resolver(resolver);

    let reporter = ui::output::Reporter::new(verbosity, cli.json);
    let report = pipeline.run(&cli.project_dir, &reporter)?;
    Ok(report)
}

/// Clap's rendered message (with the usage banner) as a library error.
fn usage_error(e: &clap::Error) -> St2MakeError {
    let rendered = e.render().to_string();
    let message = rendered.trim_end();
    St2MakeError::Usage {
        message: message.strip_prefix("error: ").unwrap_or(message).to_string(),
    }
}

/// Whether `--json` was passed, for reporting a command line clap rejected.
fn json_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    args.into_iter().any(|arg| arg.as_ref() == "--json")
}

fn exit_status(err: &anyhow::Error) -> ExitStatus {
    err.downcast_ref::<St2MakeError>()
        .map(St2MakeError::exit_status)
        .unwrap_or(ExitStatus::Io)
}
