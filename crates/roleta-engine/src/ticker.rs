//! Background frame ticker
//!
//! Drives a shared presenter in real time for hosts without their own
//! frame loop. One thread wakes every frame interval, reads the
//! wall-clock elapsed time, and calls [`SpinPresenter::tick`]. Stopping
//! the ticker (or dropping it) joins the thread first, so no tick and no
//! settle callback can fire after teardown; a spin abandoned this way is
//! never reported.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::presenter::SpinPresenter;

/// Owns the tick thread for one presenter
pub struct SpinTicker {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    epoch: Instant,
}

impl SpinTicker {
    /// Spawn a ticker advancing `presenter` every `frame_interval`.
    ///
    /// Spins must be started with timestamps from [`SpinTicker::now_ms`]
    /// so the presenter and the tick thread share one clock.
    pub fn spawn(presenter: Arc<Mutex<SpinPresenter>>, frame_interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let epoch = Instant::now();

        let flag = Arc::clone(&shutdown);
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                presenter.lock().tick(epoch.elapsed().as_millis() as u64);
                thread::sleep(frame_interval);
            }
        });

        Self {
            shutdown,
            handle: Some(handle),
            epoch,
        }
    }

    /// Milliseconds elapsed on the ticker's clock
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Stop ticking and join the thread.
    ///
    /// When this returns, no further tick runs. Idempotent.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SpinTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
