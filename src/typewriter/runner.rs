//! Scheduled typewriter
//!
//! Drives a [`Cycler`] on the tokio clock. Each tick sleeps for the cycler's
//! next delay, advances it, publishes the rendered text on a watch channel,
//! and re-arms itself. At most one tick is pending per [`Typewriter`];
//! [`Typewriter::stop`] cancels it and nothing is mutated or published afterwards.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::cycler::{Cursor, Cycler};

/// State shared between the owner and the pending tick
struct Shared {
    cycler: Cycler,
    cursor: Cursor,
    sink: watch::Sender<String>,
    /// Bumped on every stop; a tick armed under an older generation is stale
    generation: u64,
    ticks: u64,
}

impl Shared {
    fn publish(&self) {
        self.sink.send_replace(self.cycler.render(&self.cursor));
    }
}

/// A typewriter that animates itself on the tokio runtime
pub struct Typewriter {
    shared: Arc<Mutex<Shared>>,
    pending: Option<JoinHandle<()>>,
}

impl Typewriter {
    /// Create a stopped typewriter.
    ///
    /// The display value starts as the rendered initial state (the bare cursor,
    /// or the empty string for an empty word list).
    #[must_use]
    pub fn new(words: Vec<String>, base_interval: Duration, cursor: Cursor) -> Self {
        let cycler = Cycler::new(words, base_interval);
        let (sink, _) = watch::channel(cycler.render(&cursor));
        Self {
            shared: Arc::new(Mutex::new(Shared {
                cycler,
                cursor,
                sink,
                generation: 0,
                ticks: 0,
            })),
            pending: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to display updates
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.lock().sink.subscribe()
    }

    /// The most recently published display value
    #[must_use]
    pub fn current(&self) -> String {
        self.lock().sink.borrow().clone()
    }

    /// Number of ticks applied since creation
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.lock().ticks
    }

    /// Number of words in the current list
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lock().cycler.words().len()
    }

    /// Whether a tick is currently pending
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Start animating.
    ///
    /// Must be called from within a tokio runtime. Restarting cancels the
    /// pending tick first. An empty word list publishes the empty string and
    /// schedules nothing.
    pub fn start(&mut self) {
        self.stop();

        let generation = {
            let shared = self.lock();
            shared.publish();
            if shared.cycler.is_idle() {
                return;
            }
            shared.generation
        };

        let shared = Arc::clone(&self.shared);
        self.pending = Some(tokio::spawn(run_ticks(shared, generation)));
    }

    /// Stop animating. Idempotent.
    ///
    /// Once this returns the cycler is not advanced and no value is published,
    /// even if the pending tick was already due.
    pub fn stop(&mut self) {
        self.lock().generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Replace the word list.
    ///
    /// A different list resets the cycler to the first word with nothing typed.
    /// A running typewriter keeps running against the new list.
    pub fn set_words(&mut self, words: Vec<String>) {
        if self.lock().cycler.words() == words.as_slice() {
            return;
        }

        let running = self.is_running();
        self.stop();
        {
            let mut shared = self.lock();
            shared.cycler.set_words(words);
            shared.publish();
        }
        if running {
            self.start();
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The self-rescheduling tick chain for one generation
async fn run_ticks(shared: Arc<Mutex<Shared>>, generation: u64) {
    loop {
        let delay = {
            let state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation != generation {
                return;
            }
            match state.cycler.next_delay() {
                Some(delay) => delay,
                None => return,
            }
        };

        tokio::time::sleep(delay).await;

        let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation != generation {
            return;
        }
        state.cycler.tick();
        state.ticks += 1;
        state.publish();
    }
}
