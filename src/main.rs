use taskdock::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured log output only when the user asked for it; plain console
    // messages otherwise (see libs::messages::macros)
    if std::env::var("RUST_LOG").is_ok() || std::env::var("TASKDOCK_DEBUG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
