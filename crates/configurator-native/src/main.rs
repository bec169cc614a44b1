use anyhow::Context;
use configurator_core::{Catalogs, Channel, ConfiguratorPanel, Control, StreamConfig};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

mod command;

use command::{parse_command, Command, Target};

const DEFAULT_CONFIG_PATH: &str = "stream.config.json";

/// Writes each wire message as one line on stdout.
struct StdoutChannel;

impl Channel for StdoutChannel {
    fn send_message(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            log::error!("[channel] stdout write failed: {e}");
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<StreamConfig> {
    match std::fs::read_to_string(path) {
        Ok(text) => StreamConfig::from_json(&text)
            .with_context(|| format!("parsing {}", path.display())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("{} not found; using local defaults", path.display());
            Ok(StreamConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}

fn log_state(panel: &ConfiguratorPanel) {
    let selections: Vec<String> = Control::ALL
        .iter()
        .map(|c| format!("{}={}", c, panel.selected_label(*c).unwrap_or("-")))
        .collect();
    log::info!(
        "[state] loading={:?} {}",
        panel.loading_state(),
        selections.join(" ")
    );
}

fn apply(panel: &mut ConfiguratorPanel, cmd: Command) {
    match cmd {
        Command::Select { control, target } => {
            let result = match target {
                Target::Index(i) => panel.select(control, i),
                Target::Label(label) => panel.select_label(control, &label),
            };
            if let Err(e) = result {
                log::warn!("{e}");
            }
        }
        Command::External { control, label } => {
            let moved = panel.set_external_label(control, label.as_deref());
            log::info!(
                "[external] {control} -> {:?} (moved: {moved})",
                panel.selected_label(control)
            );
        }
        Command::Event(text) => {
            let outcome = panel.handle_event_json(&text);
            log::info!("[event] {outcome:?}");
        }
        Command::State => log_state(panel),
    }
}

fn run() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = load_config(&path)?;
    let mut panel = ConfiguratorPanel::new(&config, Catalogs::builtin()?, Rc::new(StdoutChannel));
    log_state(&panel);

    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        match parse_command(&line) {
            Ok(Some(cmd)) => apply(&mut panel, cmd),
            Ok(None) => {}
            Err(e) => log::warn!("line {}: {e}", n + 1),
        }
    }
    log_state(&panel);
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
