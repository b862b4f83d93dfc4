mod catalog;
mod debounce;
mod filter;
mod state;
mod theme;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use gtk::glib;
use gtk::prelude::*;
use gtk::Application;
use tracing::info;

use crate::catalog::MovieRecord;
use crate::state::AppState;

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "Animated movie-browsing demo with a placeholder catalog", long_about = None)]
struct Args {
    /// Seed for the placeholder catalog generator.
    #[clap(long, default_value_t = catalog::DEFAULT_SEED)]
    seed: u64,

    /// Search debounce delay in milliseconds.
    #[clap(long, default_value_t = 250)]
    debounce_ms: u64,

    /// Print the generated catalog as JSON and exit without opening a window.
    #[clap(long)]
    dump_catalog: bool,
}

fn dump_catalog(movies: &[MovieRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(movies)?;
    println!("{json}");
    Ok(())
}

fn main() -> glib::ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args = Args::parse();
    let movies = catalog::generate(args.seed);
    info!("generated catalog of {} titles (seed {})", movies.len(), args.seed);

    if args.dump_catalog {
        return match dump_catalog(&movies) {
            Ok(()) => glib::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("catalog dump failed: {err:#}");
                glib::ExitCode::FAILURE
            }
        };
    }

    let state = Rc::new(RefCell::new(AppState::new(movies)));
    let debounce_delay = Duration::from_millis(args.debounce_ms);

    let app = Application::builder()
        .application_id("com.example.hdstreams")
        .build();

    app.connect_activate(move |app| {
        ui::build_ui(app, state.clone(), debounce_delay);
    });

    // Command-line flags are ours, not GTK's.
    app.run_with_args::<&str>(&[])
}
