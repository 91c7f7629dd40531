use swiftread::analytics::SessionStore;
use swiftread::app::{App, SecretGate};
use swiftread::engine::Config;
use swiftread::ui::TuiManager;

use tracing_subscriber::EnvFilter;

/// Routes tracing output to the file named by `SWIFTREAD_LOG`. The TUI owns
/// the terminal, so without that variable logging stays off.
fn init_tracing() {
    let Ok(path) = std::env::var("SWIFTREAD_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(file)
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("could not open log file {path}: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let stats_path = std::env::var("SWIFTREAD_STATS")
        .unwrap_or_else(|_| "swiftread_stats.tsv".to_string());
    let store = SessionStore::new(&stats_path);

    let mut app = App::new(
        Config::default(),
        Box::new(store),
        Box::new(SecretGate::from_env()),
    );

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
