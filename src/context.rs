//! Shared page context for Artfolio.
//!
//! The shell provides the interaction config, the page chrome (scroll lock,
//! banners, confetti), the scroll offset and the reveal tracker. Controllers
//! reach them through the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let chrome = use_chrome();
//! let config = use_config();
//!
//! chrome.track_notification(id, &config);
//! ```

use std::future::Future;
use std::rc::Rc;

use artfolio_core::{
    confetti, modal, notify, InteractionConfig, LockOwner, NotificationId, PageChrome, ParticleId,
    RevealRule, RevealTracker, Surface, TaskKey, TaskSet,
};
use dioxus::prelude::*;

/// A signal exposed to the core flows as a [`Surface`].
pub struct Live<T: 'static>(pub Signal<T>);

impl<T: 'static> Clone for Live<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Live<T> {}

impl<T: 'static> Surface<T> for Live<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = self.0.write();
        f(&mut state)
    }
}

/// Where a scheduler's tasks live.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Lifetime {
    /// Tied to the component that created the scheduler
    Scoped,
    /// Tied to the application root
    Detached,
}

/// Cancellable task registry for one controller.
///
/// Pending tasks are cancelled when the owning component unmounts, because
/// the [`TaskSet`] is dropped with it.
#[derive(Clone, Copy)]
pub struct Scheduler {
    tasks: CopyValue<TaskSet>,
    lifetime: Lifetime,
}

impl Scheduler {
    /// Run `fut` and track it until it completes.
    pub fn run(&self, fut: impl Future<Output = ()> + 'static) -> TaskKey {
        let mut tasks = self.tasks;
        let key = tasks.write().reserve();

        let mut done = self.tasks;
        let body = async move {
            fut.await;
            done.write().finish(key);
        };

        let task = match self.lifetime {
            Lifetime::Scoped => Some(spawn(body)),
            Lifetime::Detached => spawn_forever(body),
        };

        match task {
            Some(task) => tasks.write().bind(key, move || task.cancel()),
            None => {
                tracing::warn!("Runtime unavailable, task dropped");
                tasks.write().finish(key);
            }
        }
        key
    }
}

/// Scheduler whose tasks die with the calling component.
pub fn use_scheduler() -> Scheduler {
    let tasks = use_hook(|| CopyValue::new(TaskSet::new()));
    Scheduler {
        tasks,
        lifetime: Lifetime::Scoped,
    }
}

fn use_detached_scheduler() -> Scheduler {
    let tasks = use_hook(|| CopyValue::new(TaskSet::new()));
    Scheduler {
        tasks,
        lifetime: Lifetime::Detached,
    }
}

/// Page chrome plus the scheduler that owns banner and particle lifetimes.
///
/// Lifetimes are detached from the controller that triggered them, so a
/// banner still leaves on time after its form unmounts.
#[derive(Clone, Copy)]
pub struct ChromeHandle {
    pub state: Signal<PageChrome>,
    scheduler: Scheduler,
}

impl ChromeHandle {
    pub fn live(&self) -> Live<PageChrome> {
        Live(self.state)
    }

    pub fn track_notification(&self, id: NotificationId, config: &Rc<InteractionConfig>) {
        let live = self.live();
        let config = config.clone();
        self.scheduler.run(async move {
            notify::run_lifecycle(live, id, &config).await;
        });
    }

    /// Release `owner`'s scroll lock if it still holds it.
    pub fn abandon(&self, owner: LockOwner) {
        modal::abandon(self.live(), owner);
    }

    pub fn track_particles(&self, ids: Vec<ParticleId>, config: &Rc<InteractionConfig>) {
        for id in ids {
            let live = self.live();
            let config = config.clone();
            self.scheduler.run(async move {
                confetti::run_lifetime(live, id, &config).await;
            });
        }
    }
}

/// Handles the shell keeps after providing the shared context.
pub struct ShellContext {
    pub chrome: ChromeHandle,
    pub tracker: Signal<RevealTracker>,
    pub rule: RevealRule,
}

/// Provide the shared context. Called once by the shell.
pub fn use_page_context_provider(config: InteractionConfig) -> ShellContext {
    let config = use_hook(|| Rc::new(config));
    let scheduler = use_detached_scheduler();
    let state = use_signal(PageChrome::default);
    let tracker = use_signal(RevealTracker::default);
    let rule = RevealRule::from_config(&config);
    let chrome = ChromeHandle { state, scheduler };

    use_context_provider(|| config.clone());
    use_context_provider(|| chrome);
    use_context_provider(|| tracker);

    ShellContext {
        chrome,
        tracker,
        rule,
    }
}

/// Hook to access the interaction config.
pub fn use_config() -> Rc<InteractionConfig> {
    use_context::<Rc<InteractionConfig>>()
}

/// Hook to access the page chrome.
pub fn use_chrome() -> ChromeHandle {
    use_context::<ChromeHandle>()
}

/// Hook to access the reveal tracker.
pub fn use_reveal_tracker() -> Signal<RevealTracker> {
    use_context::<Signal<RevealTracker>>()
}

/// Scroll offset published by the shell.
#[derive(Clone, Copy)]
pub struct ScrollOffset(pub ReadOnlySignal<f64>);

/// Hook to access the current vertical scroll offset.
pub fn use_scroll_offset() -> ReadOnlySignal<f64> {
    use_context::<ScrollOffset>().0
}

/// Escape presses counted by the shell.
#[derive(Clone, Copy)]
pub struct EscapePresses(pub ReadOnlySignal<u64>);

/// Run `on_escape` on every Escape press after the caller mounts.
pub fn use_on_escape(mut on_escape: impl FnMut() + 'static) {
    let presses = use_context::<EscapePresses>().0;
    let mut seen = use_hook(|| CopyValue::new(*presses.peek()));

    use_effect(move || {
        let count = presses();
        if count != *seen.peek() {
            seen.set(count);
            on_escape();
        }
    });
}
