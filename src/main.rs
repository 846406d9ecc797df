use anyhow::{Context, Result};
use bridgemoc::cli::Cli;
use bridgemoc::io::output::create_writer;
use clap::Parser;
use std::fs::File;
use std::io;
use std::process::ExitCode;

// Exit codes: 0 class found, 1 class not found, 2 I/O or parse failure.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let class = bridgemoc::parse_header(&cli.header, &cli.class_name)?;

    let mut writer = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            create_writer(file, cli.format.into())
        }
        None => create_writer(io::stdout(), cli.format.into()),
    };

    writer.write_result(class.as_ref(), &cli.header)?;
    Ok(class.is_some())
}
