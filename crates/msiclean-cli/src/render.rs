use std::io::IsTerminal;

use anstyle::{AnsiColor, Effects, Style};
use indicatif::HumanCount;
use msiclean_cleaner::CleanupEvent;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct TerminalRenderer {
    style: OutputStyle,
}

impl TerminalRenderer {
    pub(crate) fn from_style(style: OutputStyle) -> Self {
        Self { style }
    }

    pub(crate) fn print_banner(self, version: &str) {
        println!("{}", render_banner_line(self.style, version));
    }

    pub(crate) fn print_event(self, event: &CleanupEvent) {
        println!("{}", render_event_line(self.style, event));
    }

    pub(crate) fn print_done(self, removed: usize) {
        println!("{}", render_done_line(self.style, removed));
    }

    pub(crate) fn print_error(self, err: &anyhow::Error) {
        eprintln!("{}", render_error_line(self.style, err));
    }
}

pub(crate) fn current_output_style() -> OutputStyle {
    output_style_for(
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    )
}

pub(crate) fn output_style_for(is_terminal: bool, no_color: bool) -> OutputStyle {
    if is_terminal && !no_color {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

pub(crate) fn render_banner_line(style: OutputStyle, version: &str) -> String {
    let line = format!("ETW Host Service MSI CleanUp Tool v{version}");
    match style {
        OutputStyle::Plain => line,
        OutputStyle::Rich => colorize(banner_style(), &line),
    }
}

/// Sections end with a colon; both kinds are indented two spaces per level.
pub(crate) fn render_event_line(style: OutputStyle, event: &CleanupEvent) -> String {
    let (text, text_style) = match event {
        CleanupEvent::Section { title, .. } => (format!("{title}:"), section_style()),
        CleanupEvent::Removed { name, .. } => (name.clone(), removed_style()),
    };
    let indent = "  ".repeat(event.depth());
    match style {
        OutputStyle::Plain => format!("{indent}{text}"),
        OutputStyle::Rich => format!("{indent}{}", colorize(text_style, &text)),
    }
}

pub(crate) fn render_done_line(style: OutputStyle, removed: usize) -> String {
    let noun = if removed == 1 { "key" } else { "keys" };
    let line = format!("Done ({} {noun} removed)", HumanCount(removed as u64));
    match style {
        OutputStyle::Plain => line,
        OutputStyle::Rich => colorize(done_style(), &line),
    }
}

pub(crate) fn render_error_line(style: OutputStyle, err: &anyhow::Error) -> String {
    let message = format!("{err:#}");
    match style {
        OutputStyle::Plain => format!("ERROR: {message}"),
        OutputStyle::Rich => format!("{} {message}", colorize(error_style(), "ERROR:")),
    }
}

fn banner_style() -> Style {
    Style::new().effects(Effects::BOLD)
}

fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

fn removed_style() -> Style {
    Style::new().fg_color(Some(AnsiColor::BrightYellow.into()))
}

fn done_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightGreen.into()))
        .effects(Effects::BOLD)
}

fn error_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightRed.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}
