use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use log::{debug, warn};
use wasm_bindgen::JsValue;

pub const PULSE_INTERVAL: Duration = Duration::from_millis(500);

/// One-shot delayed task runner.
pub trait Scheduler {
	type Handle;

	/// Runs `task` once after `delay`. Returns `None` if the task could not be queued.
	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

	fn cancel(&self, handle: Self::Handle);
}

/// Schedules on the browser event loop via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type Handle = TimeoutHandle;

	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
		set_timeout_with_handle(task, delay)
			.map_err(|e: JsValue| warn!("course map: failed to schedule pulse: {:?}", e))
			.ok()
	}

	fn cancel(&self, handle: TimeoutHandle) {
		handle.clear();
	}
}

struct PulseInner<S: Scheduler> {
	scheduler: S,
	interval: Duration,
	pending: RefCell<Option<S::Handle>>,
	stopped: Cell<bool>,
	on_toggle: Box<dyn Fn()>,
}

/// Calls `on_toggle` every `interval` using a one-shot timer that re-arms itself
/// after each firing. At most one timer is pending at any time; stopping (or
/// dropping) the pulse cancels it.
pub struct AmbientPulse<S: Scheduler + 'static> {
	inner: Rc<PulseInner<S>>,
}

impl<S: Scheduler + 'static> AmbientPulse<S> {
	pub fn start(scheduler: S, interval: Duration, on_toggle: impl Fn() + 'static) -> Self {
		let inner = Rc::new(PulseInner {
			scheduler,
			interval,
			pending: RefCell::new(None),
			stopped: Cell::new(false),
			on_toggle: Box::new(on_toggle),
		});
		debug!("course map: pulse started ({:?})", interval);
		arm(&inner);
		Self { inner }
	}

	#[cfg(test)]
	pub fn is_running(&self) -> bool {
		!self.inner.stopped.get() && self.inner.pending.borrow().is_some()
	}

	pub fn stop(&self) {
		if self.inner.stopped.replace(true) {
			return;
		}
		if let Some(handle) = self.inner.pending.borrow_mut().take() {
			self.inner.scheduler.cancel(handle);
		}
		debug!("course map: pulse stopped");
	}
}

impl<S: Scheduler + 'static> Drop for AmbientPulse<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

fn arm<S: Scheduler + 'static>(inner: &Rc<PulseInner<S>>) {
	if inner.stopped.get() {
		return;
	}
	let weak: Weak<PulseInner<S>> = Rc::downgrade(inner);
	let handle = inner
		.scheduler
		.schedule(inner.interval, Box::new(move || fire(&weak)));
	*inner.pending.borrow_mut() = handle;
}

fn fire<S: Scheduler + 'static>(weak: &Weak<PulseInner<S>>) {
	let Some(inner) = weak.upgrade() else {
		return;
	};
	inner.pending.borrow_mut().take();
	if inner.stopped.get() {
		return;
	}
	(inner.on_toggle)();
	arm(&inner);
}

#[cfg(test)]
type Task = (usize, Duration, Box<dyn FnOnce()>);

/// Queue of pending tasks that only runs when told to.
#[cfg(test)]
#[derive(Clone, Default)]
pub(super) struct ManualScheduler {
	queue: Rc<RefCell<Vec<Task>>>,
	next_id: Rc<Cell<usize>>,
}

#[cfg(test)]
impl ManualScheduler {
	pub(super) fn pending(&self) -> usize {
		self.queue.borrow().len()
	}

	pub(super) fn delays(&self) -> Vec<Duration> {
		self.queue.borrow().iter().map(|(_, d, _)| *d).collect()
	}

	/// Runs every task queued right now; tasks they queue wait for the next call.
	pub(super) fn advance(&self) {
		let due = std::mem::take(&mut *self.queue.borrow_mut());
		for (_, _, task) in due {
			task();
		}
	}
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
	type Handle = usize;

	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<usize> {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.queue.borrow_mut().push((id, delay, task));
		Some(id)
	}

	fn cancel(&self, handle: usize) {
		self.queue.borrow_mut().retain(|(id, _, _)| *id != handle);
	}
}
