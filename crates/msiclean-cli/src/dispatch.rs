use anyhow::{anyhow, Result};
use clap::Parser;
use msiclean_cleaner::{run_cleanup, CleanupEvent, CleanupSummary};
use msiclean_core::{verify_packed_code_encoding, CleanupTargets};
use msiclean_registry::RegistryHive;

use crate::host::{is_elevated, open_local_machine};
use crate::render::{OutputStyle, TerminalRenderer};

pub(crate) const NOT_ELEVATED_MESSAGE: &str = "Run under the elevated administrator.";

#[derive(Parser, Debug)]
#[command(name = "etw-host-msi-cleanup", version)]
#[command(
    about = "Removes leftover ETW Host Service installer registrations",
    long_about = None
)]
pub(crate) struct Cli {}

pub(crate) fn run_cli(_cli: Cli, style: OutputStyle) -> Result<()> {
    let renderer = TerminalRenderer::from_style(style);
    renderer.print_banner(env!("CARGO_PKG_VERSION"));

    let summary = execute_cleanup(
        is_elevated,
        open_local_machine,
        &CleanupTargets::default(),
        |event| renderer.print_event(event),
    )?;
    renderer.print_done(summary.removed_count());
    Ok(())
}

/// Privilege gate, encoder self-check, then the cleanup passes. Nothing in
/// the registry is touched until both checks pass.
pub(crate) fn execute_cleanup<H, CheckElevation, OpenHive, Emit>(
    check_elevation: CheckElevation,
    open_hive: OpenHive,
    targets: &CleanupTargets,
    mut emit: Emit,
) -> Result<CleanupSummary>
where
    H: RegistryHive,
    CheckElevation: FnOnce() -> Result<bool>,
    OpenHive: FnOnce() -> Result<H>,
    Emit: FnMut(&CleanupEvent),
{
    if !check_elevation()? {
        return Err(anyhow!(NOT_ELEVATED_MESSAGE));
    }
    verify_packed_code_encoding()?;

    let hive = open_hive()?;
    run_cleanup(&hive, targets, &mut emit)
}

pub(crate) fn exit_code_for(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
