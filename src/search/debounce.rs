//! Debounce timer and cancel-on-replace task slots

use iced::task::Handle;
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Holds at most one running task. Putting a new one in aborts the old one;
/// dropping the slot aborts whatever is left.
#[derive(Default)]
pub struct TaskSlot {
    handle: Option<Handle>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `task` abortable, keep its handle and abort the previous occupant.
    pub fn replace<T: 'static>(&mut self, task: Task<T>) -> Task<T> {
        let (task, handle) = task.abortable();
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
        task
    }

    /// Forget the handle of a task that has already completed.
    pub fn release(&mut self) {
        self.handle = None;
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.abort();
    }
}

impl fmt::Debug for TaskSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskSlot")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}

/// Sleep for `delay`, then hand the ticket back.
pub async fn quiet_period(delay: Duration, ticket: u64) -> u64 {
    tokio::time::sleep(delay).await;
    ticket
}

/// Restartable quiet-period timer
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    timer: TaskSlot,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: TaskSlot::new(),
        }
    }

    /// Cancel the pending timer and start a new one for `ticket`.
    pub fn schedule<M, F>(&mut self, ticket: u64, on_elapsed: F) -> Task<M>
    where
        M: Send + 'static,
        F: Fn(u64) -> M + Send + 'static,
    {
        self.timer
            .replace(Task::perform(quiet_period(self.delay, ticket), on_elapsed))
    }

    /// The timer fired; nothing left to cancel.
    pub fn elapsed(&mut self) {
        self.timer.release();
    }

    pub fn cancel(&mut self) {
        self.timer.abort();
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_occupied()
    }
}
