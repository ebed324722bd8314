#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

use std::{
    boxed::Box,
    io::stdout,
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc, Condvar, Mutex,
    },
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use pipetop::{
    app::App,
    canvas,
    constants::TICK_RATE_IN_MILLISECONDS,
    event::{handle_key_event_or_break, PipetopEvent},
    options::{self, args::Args},
    *,
};
use tui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new("debug.log"))?;
    }

    let config_path = options::read_config(args.general_args.config_location.as_deref())
        .context("Unable to access the given config file location.")?;
    let config = options::create_or_get_config(&config_path)
        .context("Unable to properly parse or create the config file.")?;

    let app_config_fields = options::build_app_config(&args, &config)
        .context("Found an issue while resolving the configuration.")?;

    // Create "app" struct, which owns the buffers and converted chart data.
    let mut app = App::new(app_config_fields);

    // Create painter.
    let painter = canvas::Painter::init();

    // Create termination mutex and cvar
    #[allow(clippy::mutex_atomic)]
    let thread_termination_lock = Arc::new(Mutex::new(false));
    let thread_termination_cvar = Arc::new(Condvar::new());

    // Set up input handling
    let (sender, receiver) = mpsc::channel();
    let _input_thread = create_input_thread(sender.clone(), thread_termination_lock.clone());

    // The collection thread owns the blocking pipe read.
    let _collection_thread = create_collection_thread(
        sender,
        thread_termination_lock.clone(),
        thread_termination_cvar.clone(),
        &app.app_config_fields,
    );

    // Set up up tui and crossterm
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(|info| panic_hook(info)));

    // Set termination hook
    let is_terminated = Arc::new(AtomicBool::new(false));
    let ist_clone = is_terminated.clone();
    ctrlc::set_handler(move || {
        ist_clone.store(true, Ordering::SeqCst);
    })?;

    while !is_terminated.load(Ordering::SeqCst) {
        if let Ok(recv) = receiver.recv_timeout(Duration::from_millis(TICK_RATE_IN_MILLISECONDS)) {
            match recv {
                PipetopEvent::KeyInput(event) => {
                    if handle_key_event_or_break(event, &mut app) {
                        break;
                    }
                }
                PipetopEvent::Update(data) => {
                    app.eat_data(*data);
                }
                PipetopEvent::Resize => {
                    // Redrawn below regardless.
                }
            }
        }

        try_drawing(&mut terminal, &app, &painter)?;
    }

    // I think doing it in this order is safe...
    *thread_termination_lock.lock().unwrap() = true;
    thread_termination_cvar.notify_all();

    cleanup_terminal(&mut terminal)?;

    Ok(())
}
