use std::fs;
use std::path::Path;

use clap::Parser;

use bash_guard::EXIT_CONFIG_ERROR;
use bash_guard::checker::{CheckResult, FileChecker, determine_exit_code};
use bash_guard::cli::Cli;
use bash_guard::config::{Config, ConfigLoader, FileConfigLoader};
use bash_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    std::process::exit(run_check(&cli));
}

fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(cli: &Cli) -> bash_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);

    // 3. Check every file, in argument order
    let results = FileChecker::new().check_all(&cli.files);

    // 4. Format output
    let output = format_output(&config, &results)?;

    // 5. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    Ok(determine_exit_code(&results))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> bash_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    if cli.verbose > 0 {
        config.output.verbose = cli.verbose;
    }
}

fn format_output(config: &Config, results: &[CheckResult]) -> bash_guard::Result<String> {
    match config.output.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(config.output.color, config.output.verbose).format(results)
        }
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> bash_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
