//! Non-blocking console sink.
//!
//! A worker thread owns the terminal. Line events travel through one queue and
//! are printed in order; status updates travel through another and are
//! coalesced so only the most recent one is drawn.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use indicatif::ProgressBar;

use crate::output::console::print_event;
use crate::output::events::{Event, Notifier, Progress};
use crate::output::progress::{apply_progress, create_status_bar};

/// Notifier that hands everything to a background printing thread.
pub struct ConsoleSink {
    lines: Option<Sender<Event>>,
    status: Option<Sender<Progress>>,
    worker: Option<JoinHandle<()>>,
}

impl ConsoleSink {
    /// Start the worker thread printing to the terminal.
    pub fn spawn(quiet: bool) -> Self {
        Self::spawn_with(quiet, BarStatus::new(!quiet), print_event)
    }

    fn spawn_with<S, F>(quiet: bool, status_line: S, render: F) -> Self
    where
        S: StatusLine + Send + 'static,
        F: FnMut(&Event) + Send + 'static,
    {
        let (line_tx, line_rx) = unbounded();
        let (status_tx, status_rx) = unbounded();

        let worker = thread::Builder::new()
            .name("hashnamer-console".into())
            .spawn(move || drain(line_rx, status_rx, quiet, status_line, render));

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Console thread unavailable, output disabled: {}", e);
                None
            }
        };

        Self {
            lines: Some(line_tx),
            status: Some(status_tx),
            worker,
        }
    }

    /// Flush every queued line and stop the worker.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.lines.take();
        self.status.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Console thread panicked");
            }
        }
    }
}

impl Drop for ConsoleSink {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Notifier for ConsoleSink {
    fn notify(&self, event: Event) {
        if let Some(lines) = &self.lines {
            // Only fails once the worker is gone
            let _ = lines.send(event);
        }
    }

    fn progress(&self, progress: Progress) {
        if let Some(status) = &self.status {
            let _ = status.send(progress);
        }
    }
}

/// Where coalesced status updates are drawn.
trait StatusLine {
    /// Draw the latest status.
    fn update(&mut self, progress: &Progress);

    /// Print a line without tearing the status display.
    fn print_above(&mut self, print: &mut dyn FnMut());

    /// Remove the status display.
    fn clear(&mut self);
}

/// Status drawn on an indicatif bar, created on the first update.
struct BarStatus {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl BarStatus {
    fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }
}

impl StatusLine for BarStatus {
    fn update(&mut self, progress: &Progress) {
        if !self.enabled {
            return;
        }
        let bar = self
            .bar
            .get_or_insert_with(|| create_status_bar(progress.total as u64));
        apply_progress(bar, progress);
    }

    fn print_above(&mut self, print: &mut dyn FnMut()) {
        match &self.bar {
            Some(bar) => bar.suspend(print),
            None => print(),
        }
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

enum Incoming {
    Line(Event),
    Status(Progress),
    LinesClosed,
    StatusClosed,
}

fn drain<S, F>(
    lines: Receiver<Event>,
    status: Receiver<Progress>,
    quiet: bool,
    mut status_line: S,
    mut render: F,
) where
    S: StatusLine,
    F: FnMut(&Event),
{
    let mut status_open = true;

    loop {
        let incoming = if status_open {
            select! {
                recv(lines) -> msg => msg.map_or(Incoming::LinesClosed, Incoming::Line),
                recv(status) -> msg => msg.map_or(Incoming::StatusClosed, Incoming::Status),
            }
        } else {
            lines.recv().map_or(Incoming::LinesClosed, Incoming::Line)
        };

        match incoming {
            Incoming::Line(event) => {
                if !(quiet && event.is_detail()) {
                    status_line.print_above(&mut || render(&event));
                }
                if matches!(event, Event::FolderFinished { .. }) {
                    status_line.clear();
                }
            }
            Incoming::Status(first) => {
                let latest = status.try_iter().last().unwrap_or(first);
                status_line.update(&latest);
            }
            Incoming::StatusClosed => status_open = false,
            Incoming::LinesClosed => break,
        }
    }

    status_line.clear();
}
