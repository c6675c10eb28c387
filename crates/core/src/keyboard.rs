//! On-screen keyboard visibility and its listener registry.
//!
//! [`SoftKeyboard`] stands in for the platform input method. Front-ends call
//! [`SoftKeyboard::show`] when an input gains focus and
//! [`SoftKeyboard::dismiss`] when the keyboard should go away; mounted views
//! observe the resulting [`KeyboardEvent`]s through a [`KeyboardSubscription`]
//! that deregisters itself when dropped.
//!
//! The handle is reference counted rather than shared across threads: the
//! keyboard, like the views listening to it, lives on the UI thread.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};

/// Visibility transition published by a [`SoftKeyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
	/// The keyboard became visible.
	DidShow,
	/// The keyboard is about to be hidden.
	WillHide,
}

#[derive(Default)]
struct Listeners {
	visible: bool,
	next_id: u64,
	senders: Vec<(u64, Sender<KeyboardEvent>)>,
}

impl Listeners {
	fn publish(&mut self, event: KeyboardEvent) {
		self.senders.retain(|(_, tx)| tx.send(event).is_ok());
	}
}

/// Clonable handle to the on-screen keyboard.
#[derive(Clone, Default)]
pub struct SoftKeyboard {
	inner: Rc<RefCell<Listeners>>,
}

impl SoftKeyboard {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the keyboard is currently shown.
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.inner.borrow().visible
	}

	/// Show the keyboard, notifying listeners if it was hidden.
	pub fn show(&self) {
		let mut inner = self.inner.borrow_mut();
		if inner.visible {
			return;
		}
		inner.visible = true;
		inner.publish(KeyboardEvent::DidShow);
	}

	/// Hide the keyboard, publishing [`KeyboardEvent::WillHide`] first.
	///
	/// Dismissing a hidden keyboard is a no-op.
	pub fn dismiss(&self) {
		let mut inner = self.inner.borrow_mut();
		if !inner.visible {
			return;
		}
		inner.publish(KeyboardEvent::WillHide);
		inner.visible = false;
	}

	/// Register a listener for visibility changes.
	#[must_use = "dropping the subscription unregisters the listener"]
	pub fn subscribe(&self) -> KeyboardSubscription {
		let (tx, rx) = mpsc::channel();
		let mut inner = self.inner.borrow_mut();
		let id = inner.next_id;
		inner.next_id += 1;
		inner.senders.push((id, tx));
		log::debug!("keyboard listener {id} registered");

		KeyboardSubscription {
			id,
			events: rx,
			source: Rc::downgrade(&self.inner),
		}
	}

	/// Number of live listener registrations.
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.inner.borrow().senders.len()
	}
}

/// Registration returned by [`SoftKeyboard::subscribe`].
///
/// Events queue up until drained; dropping the subscription removes the
/// listener so nothing is delivered to a torn-down view.
pub struct KeyboardSubscription {
	id: u64,
	events: Receiver<KeyboardEvent>,
	source: Weak<RefCell<Listeners>>,
}

impl KeyboardSubscription {
	/// Pop the next pending event, if any.
	pub fn try_next(&self) -> Option<KeyboardEvent> {
		self.events.try_recv().ok()
	}

	/// Take every pending event in publication order.
	pub fn drain(&self) -> Vec<KeyboardEvent> {
		self.events.try_iter().collect()
	}
}

impl Drop for KeyboardSubscription {
	fn drop(&mut self) {
		let Some(source) = self.source.upgrade() else {
			return;
		};
		let mut listeners = source.borrow_mut();
		listeners.senders.retain(|(id, _)| *id != self.id);
		log::debug!("keyboard listener {} unregistered", self.id);
	}
}
