mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;

pub use cli::{Cli, Command, InputFormat, OutputFormat, PathOrStdin};
use cmd::solve::SolveArgs;
use error::CliError;
use format::FormatterConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Solve {
            file,
            input_format,
            strict_seeds,
            parallel,
            map,
        } => {
            let content = io::read_input(&file, cli.max_file_size)?;
            let args = SolveArgs {
                input_format,
                strict_seeds,
                parallel,
                map,
            };
            cmd::solve::run(&content, &file.label(), args, cli.format, &config)
        }
        Command::Example => cmd::example::run(cli.format),
        Command::Version => {
            println!("{}", isthmus_core::version());
            Ok(())
        }
    }
}
