//! In-memory host elements.
//!
//! `MemoryInput` and `MemoryMessage` are cheap handles over shared state, the
//! way a DOM node reference is: the binding owns one handle and the caller can
//! keep another to drive and inspect the element.

use crate::core::{AlertSink, InputElement, MessageElement, SubmitEvent};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct InputState {
    value: Option<String>,
    error_indicator: bool,
    focused: bool,
}

/// Input element backed by shared state. Clones observe the same element.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    state: Rc<RefCell<InputState>>,
}

impl MemoryInput {
    /// An input with no value at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// An input already holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_value(value);
        input
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = Some(value.into());
    }

    /// Makes the value absent again, as opposed to `set_value("")`.
    pub fn clear_value(&self) {
        self.state.borrow_mut().value = None;
    }

    pub fn has_error_indicator(&self) -> bool {
        self.state.borrow().error_indicator
    }

    /// Whether `focus` was ever called. Focus is never taken away.
    pub fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }
}

impl InputElement for MemoryInput {
    fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    fn set_error_indicator(&mut self, on: bool) {
        self.state.borrow_mut().error_indicator = on;
    }

    fn focus(&mut self) {
        self.state.borrow_mut().focused = true;
    }
}

#[derive(Debug, Default)]
struct MessageState {
    text: Option<String>,
    visible: bool,
}

/// Message element backed by shared state. Hiding keeps the last text.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessage {
    state: Rc<RefCell<MessageState>>,
}

impl MemoryMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message shown, even if hidden since.
    pub fn text(&self) -> Option<String> {
        self.state.borrow().text.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}

impl MessageElement for MemoryMessage {
    fn show(&mut self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.text = Some(message.to_string());
        state.visible = true;
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = false;
    }
}

/// A submission that records whether it was cancelled.
#[derive(Debug, Clone, Default)]
pub struct MemorySubmitEvent {
    default_prevented: bool,
}

impl MemorySubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for MemorySubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Collects alerts instead of showing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlerts {
    messages: Vec<String>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
