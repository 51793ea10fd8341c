mod dispatch;
mod host;
mod render;

use std::process::ExitCode;

use clap::Parser;

use crate::dispatch::{exit_code_for, run_cli, Cli};
use crate::render::{current_output_style, TerminalRenderer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let style = current_output_style();

    let result = run_cli(cli, style);
    if let Err(err) = &result {
        TerminalRenderer::from_style(style).print_error(err);
    }
    ExitCode::from(exit_code_for(&result))
}
