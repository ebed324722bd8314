//! A terminal viewer that charts system-metric samples streamed over a
//! named pipe.

#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod app;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod options;

use std::{
    io::Stdout,
    panic::PanicHookInfo,
    sync::{mpsc, Arc, Condvar, Mutex},
    thread,
    time::{Duration, Instant},
};

use crossterm::{
    event::{poll, read, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

use app::App;
use canvas::Painter;
use collection::{pipe::PipeSource, DataCollector};
use event::PipetopEvent;
use utils::error;

/// Forwards key and resize events to the main thread until termination is
/// signalled.
pub fn create_input_thread(
    sender: mpsc::Sender<PipetopEvent>, termination_ctrl_lock: Arc<Mutex<bool>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut keyboard_timer = Instant::now();

        loop {
            if let Ok(is_terminated) = termination_ctrl_lock.try_lock() {
                // We don't block.
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }
            if let Ok(poll) = poll(Duration::from_millis(20)) {
                if poll {
                    if let Ok(event) = read() {
                        match event {
                            Event::Key(key) => {
                                if Instant::now().duration_since(keyboard_timer).as_millis() >= 20 {
                                    if sender.send(PipetopEvent::KeyInput(key)).is_err() {
                                        break;
                                    }
                                    keyboard_timer = Instant::now();
                                }
                            }
                            Event::Resize(_, _) => {
                                if sender.send(PipetopEvent::Resize).is_err() {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    })
}

/// Spawns the collection thread: one blocking pipe read plus host
/// introspection per update interval, results handed to the main thread by
/// value.
///
/// The pipe open has no timeout, so a tick with no writer stalls sample
/// delivery (and only sample delivery) until one appears.
pub fn create_collection_thread(
    sender: mpsc::Sender<PipetopEvent>, termination_ctrl_lock: Arc<Mutex<bool>>,
    termination_ctrl_cvar: Arc<Condvar>, app_config_fields: &options::AppConfigFields,
) -> thread::JoinHandle<()> {
    let update_time = app_config_fields.update_rate_in_milliseconds;
    let pipe_path = app_config_fields.pipe_path.clone();

    thread::spawn(move || {
        let mut data_state = DataCollector::new(PipeSource::new(pipe_path));

        if let Err(_err) = data_state.init() {
            #[cfg(feature = "log")]
            error!("Failed to create the sample pipe: {_err}");
        }

        loop {
            // Check once at the very top...
            if let Ok(is_terminated) = termination_ctrl_lock.try_lock() {
                // We don't block here.
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }

            match data_state.harvest() {
                Ok(data) => {
                    if sender.send(PipetopEvent::Update(Box::new(data))).is_err() {
                        break;
                    }
                }
                Err(_err) => {
                    // The tick contributes nothing; the previous frame stays
                    // on screen and the next tick re-opens the pipe.
                    #[cfg(feature = "log")]
                    error!("Failed to read a sample: {_err}");
                }
            }

            if let Ok((is_terminated, _wait_timeout_result)) = termination_ctrl_cvar.wait_timeout(
                termination_ctrl_lock.lock().unwrap(),
                Duration::from_millis(update_time),
            ) {
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }
        }
    })
}

/// Draws the current state, tearing the terminal down first if drawing
/// fails so the error is printed to a usable screen.
pub fn try_drawing(
    terminal: &mut tui::Terminal<tui::backend::CrosstermBackend<Stdout>>, app: &App,
    painter: &Painter,
) -> error::Result<()> {
    if let Err(err) = painter.draw_data(terminal, app) {
        cleanup_terminal(terminal)?;
        Err(err)
    } else {
        Ok(())
    }
}

pub fn cleanup_terminal(
    terminal: &mut tui::Terminal<tui::backend::CrosstermBackend<Stdout>>,
) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = std::io::stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace: String = format!("{:?}", backtrace::Backtrace::new());

    disable_raw_mode().unwrap();
    execute!(stdout, LeaveAlternateScreen).unwrap();

    // Print stack trace. Must be done after!
    execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{}', {}\n\r{}",
            msg,
            panic_info.location().unwrap(),
            stacktrace
        )),
    )
    .unwrap();
}
