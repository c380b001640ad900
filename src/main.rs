use anyhow::Result;
use clap::Parser;
use quizdeck::app::App;
use quizdeck::cli::{print_error, Cli};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    setup_panic_hook();

    let log_dir = quizdeck::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the TUI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&log_dir, "quizdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let result = if cli.launches_tui() {
        App::new(cli.quiz_file(), cli.no_colors).and_then(|mut app| app.run())
    } else {
        cli.execute()
    };

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }

    // Flush pending log lines before exit
    drop(guard);

    result
}
