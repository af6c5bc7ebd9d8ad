//! Cancellable scheduled work.
//!
//! Every deferred effect (ripple cleanup, modal exit, particle lifetime,
//! notification dismissal, simulated latency) is registered in a [`TaskSet`]
//! owned by the controller that started it. Dropping the set, or calling
//! [`TaskSet::cancel_all`], cancels whatever is still pending.

use std::collections::HashMap;

/// Handle to one entry of a [`TaskSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskKey(u64);

type Canceller = Box<dyn FnOnce()>;

/// Registry of pending tasks and how to cancel them.
///
/// The set is runtime-agnostic: a task is anything that can be cancelled by
/// a closure (an aborted `JoinHandle`, a UI framework task, ...).
#[derive(Default)]
pub struct TaskSet {
    next: u64,
    pending: HashMap<TaskKey, Option<Canceller>>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a key before the task exists, so the task body can report
    /// its own completion with [`TaskSet::finish`].
    pub fn reserve(&mut self) -> TaskKey {
        let key = TaskKey(self.next);
        self.next += 1;
        self.pending.insert(key, None);
        key
    }

    /// Attach the canceller for a reserved key.
    ///
    /// Ignored when the task already finished in between.
    pub fn bind(&mut self, key: TaskKey, cancel: impl FnOnce() + 'static) {
        if let Some(slot) = self.pending.get_mut(&key) {
            *slot = Some(Box::new(cancel));
        }
    }

    /// Forget a task that ran to completion.
    pub fn finish(&mut self, key: TaskKey) {
        self.pending.remove(&key);
    }

    /// Cancel everything still pending.
    pub fn cancel_all(&mut self) -> usize {
        let drained: Vec<_> = self.pending.drain().collect();
        let count = drained.len();
        for (_, canceller) in drained {
            if let Some(cancel) = canceller {
                cancel();
            }
        }
        if count > 0 {
            tracing::debug!(count, "Cancelled pending tasks");
        }
        count
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.contains_key(&key)
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for TaskSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSet")
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn track(set: &mut TaskSet, cancel: impl FnOnce() + 'static) -> TaskKey {
        let key = set.reserve();
        set.bind(key, cancel);
        key
    }

    #[test]
    fn test_cancel_all_runs_canceller_once() {
        let hits = Rc::new(Cell::new(0));
        let mut set = TaskSet::new();
        let h = hits.clone();
        let key = track(&mut set, move || h.set(h.get() + 1));
        assert!(set.is_pending(key));

        assert_eq!(set.cancel_all(), 1);
        assert_eq!(set.cancel_all(), 0);
        assert!(!set.is_pending(key));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_finished_task_not_cancelled() {
        let hits = Rc::new(Cell::new(0));
        let mut set = TaskSet::new();
        let h = hits.clone();
        let key = track(&mut set, move || h.set(h.get() + 1));

        set.finish(key);
        assert_eq!(set.cancel_all(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_bind_after_finish_is_ignored() {
        let mut set = TaskSet::new();
        let key = set.reserve();
        set.finish(key);
        set.bind(key, || panic!("finished task must not be cancelled"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_drop_cancels_pending() {
        let hits = Rc::new(Cell::new(0));
        {
            let mut set = TaskSet::new();
            for _ in 0..3 {
                let h = hits.clone();
                track(&mut set, move || h.set(h.get() + 1));
            }
            assert_eq!(set.len(), 3);
        }
        assert_eq!(hits.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborts_tokio_task() {
        let fired = Rc::new(Cell::new(false));
        let local = tokio::task::LocalSet::new();
        let f = fired.clone();

        local
            .run_until(async move {
                let mut set = TaskSet::new();
                let handle = tokio::task::spawn_local(async move {
                    tokio::time::sleep(Duration::from_millis(600)).await;
                    f.set(true);
                });
                let abort = handle.abort_handle();
                track(&mut set, move || abort.abort());

                tokio::time::sleep(Duration::from_millis(100)).await;
                set.cancel_all();
                tokio::time::sleep(Duration::from_millis(1000)).await;
                assert!(handle.await.unwrap_err().is_cancelled());
            })
            .await;

        assert!(!fired.get());
    }
}
