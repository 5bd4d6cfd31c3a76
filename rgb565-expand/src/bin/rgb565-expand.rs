// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_rgb565_expand::{common::{TracingConfig, init_tracing},
                         rgb565_expand::{CLIArg, FileProcessor, ui_str}};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:?}", ui_str::ERROR_PREFIX);
        process::exit(1);
    }
}

fn run() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    init_tracing(TracingConfig::new_for_cli(cli_arg.verbose))?;

    let options = cli_arg.to_convert_options();
    tracing::debug!(?options, "Parsed command line");

    let processor = FileProcessor::new(options);
    let report = processor.process_file()?;

    if cli_arg.check {
        if report.needs_conversion() {
            eprintln!("{}", ui_str::CHECK_MODE_NEEDS_CONVERSION);
            process::exit(1);
        }
        println!("{}", ui_str::format_check_clean(&report.input_path));
        return Ok(());
    }

    if cli_arg.dry_run {
        println!(
            "{}",
            ui_str::format_dry_run(&report.input_path, report.replacements)
        );
        return Ok(());
    }

    println!("{}", ui_str::format_saved(&report.output_path));
    Ok(())
}
