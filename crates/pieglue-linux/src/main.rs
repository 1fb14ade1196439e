//! `pieglue` command-line entry point.
//!
//! Builds a [`HyprlandBackend`], initialises it and runs one command against
//! it.  Results that are data (`info`, `wm-info`) are printed to stdout as
//! JSON; everything else goes to the log on stderr.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ write-config             -- handled first, needs no backend
//!  └─ load_config()             -- TOML file or defaults
//!  └─ tracing_subscriber init   -- RUST_LOG, else general.log_level
//!  └─ HyprlandBackend::new()
//!       ├─ RecordingNative       -- native calls are logged, not sent
//!       └─ HyprctlTool           -- or StaticControlTool with --dry-run
//!  └─ run(command)
//! ```
//!
//! # Native module
//!
//! The protocol-level native module is an external component.  This binary
//! wires in the recording stand-in and logs every call it would have issued,
//! which makes it useful for checking hotkey expansion and window queries
//! without touching the session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pieglue_core::KeySequence;
use pieglue_linux::application::control_tool::ControlTool;
use pieglue_linux::application::native::NativeCapabilities;
use pieglue_linux::infrastructure::control_tool::{hyprctl::HyprctlTool, mock::StaticControlTool};
use pieglue_linux::infrastructure::native::mock::RecordingNative;
use pieglue_linux::infrastructure::storage::config::{
    config_file_path, load_config, load_config_from, write_default_config, AppConfig,
};
use pieglue_linux::{Backend, HyprlandBackend};

#[derive(Debug, Parser)]
#[command(name = "pieglue")]
#[command(about = "Desktop integration backend for pie menus on Hyprland", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to use instead of $XDG_CONFIG_HOME/pieglue/config.toml
    #[arg(long, value_name = "PATH", env = "PIEGLUE_CONFIG")]
    config: Option<PathBuf>,

    /// Answer window queries from a built-in sample instead of running hyprctl
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the backend capabilities (JSON)
    Info,

    /// Print the focused window and pointer position (JSON)
    WmInfo,

    /// Move the pointer by a relative offset
    #[command(allow_negative_numbers = true)]
    MovePointer { dx: i32, dy: i32 },

    /// Press and release a `+`-separated hotkey, e.g. ControlLeft+KeyC
    Keys {
        hotkey: String,

        /// Delay between strokes; defaults to keys.stroke_delay_ms
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play a JSON key sequence: [{"name":"KeyA","down":true,"delay":0}, ...]
    KeysJson { json: String },

    /// Write the default configuration to the config file path
    WriteConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Runs before loading so a broken file can be replaced.
    if let Command::WriteConfig { force } = cli.command {
        let path = match cli.config {
            Some(path) => path,
            None => config_file_path().context("failed to locate config file")?,
        };
        write_default_config(&path, force)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    let native = Arc::new(RecordingNative::new());
    let control: Arc<dyn ControlTool> = if cli.dry_run {
        Arc::new(StaticControlTool::hyprland_sample())
    } else {
        Arc::new(HyprctlTool::from_config(&config.hyprctl))
    };
    let backend = HyprlandBackend::new(
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        control,
    );

    backend.init().await.context("failed to initialise backend")?;

    run(&backend, &config, cli.command).await?;

    for call in native.calls() {
        info!(?call, "native call");
    }
    Ok(())
}

async fn run(backend: &HyprlandBackend, config: &AppConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(&backend.backend_info())?);
        }

        Command::WmInfo => {
            let wm_info = backend
                .wm_info()
                .await
                .context("failed to query window manager")?;
            println!("{}", serde_json::to_string_pretty(&wm_info)?);
        }

        Command::MovePointer { dx, dy } => backend.move_pointer(dx, dy).await,

        Command::Keys { hotkey, delay_ms } => {
            let delay = delay_ms.unwrap_or(config.keys.stroke_delay_ms);
            let keys = KeySequence::from_hotkey(&hotkey, delay)
                .with_context(|| format!("invalid hotkey {hotkey:?}"))?;
            backend
                .simulate_keys(&keys)
                .await
                .context("failed to simulate keys")?;
        }

        Command::KeysJson { json } => {
            let keys: KeySequence =
                serde_json::from_str(&json).context("invalid key sequence JSON")?;
            backend
                .simulate_keys(&keys)
                .await
                .context("failed to simulate keys")?;
        }

        // Handled in `main` before the backend exists.
        Command::WriteConfig { .. } => {}
    }
    Ok(())
}
