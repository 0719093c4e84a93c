//! Menu entries
//!
//! Entries live in the tree's arena and refer to their parent by
//! [`EntryId`]. Children are never stored; they are found by scanning for a
//! matching parent.

use std::fmt;

use super::{Action, Response};

/// Stable handle to a registered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands every tree carries from construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    GoBack,
    ShowMenu,
    Quit,
}

pub(crate) enum Handler {
    None,
    Builtin(Builtin),
    Action(Box<dyn Action>),
}

/// A selectable node of the menu tree.
///
/// Built with [`Entry::new`] and the chained setters, then handed to
/// [`MenuTree::register`](super::MenuTree::register).
pub struct Entry {
    pub(crate) selector: String,
    pub(crate) title: String,
    pub(crate) parent: Option<EntryId>,
    pub(crate) always_visible: bool,
    pub(crate) handler: Handler,
    pub(crate) value: Option<Box<dyn Fn() -> String>>,
}

impl Entry {
    /// Surrounding whitespace is trimmed from `selector`, matching how input
    /// is trimmed before lookup. A selector must not contain the tree's
    /// sub-menu separator (`-` by default), so negative numbers like `-1`
    /// are rejected at registration.
    pub fn new(selector: impl Into<String>, title: impl Into<String>) -> Self {
        let selector: String = selector.into();
        Self {
            selector: selector.trim().to_string(),
            title: title.into(),
            parent: None,
            always_visible: false,
            handler: Handler::None,
            value: None,
        }
    }

    pub(crate) fn builtin(selector: &str, title: &str, builtin: Builtin) -> Self {
        let mut entry = Self::new(selector, title);
        entry.handler = Handler::Builtin(builtin);
        entry.always_visible = builtin != Builtin::GoBack;
        entry
    }

    /// Place this entry under `parent`
    pub fn parent(mut self, parent: EntryId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Show this entry at every level of the tree
    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    pub fn action(mut self, action: impl Action + 'static) -> Self {
        self.handler = Handler::Action(Box::new(action));
        self
    }

    /// Display a live value after the title, read on every render
    pub fn value<T, F>(mut self, getter: F) -> Self
    where
        T: fmt::Display,
        F: Fn() -> T + 'static,
    {
        self.value = Some(Box::new(move || getter().to_string()));
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parent_id(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn is_always_visible(&self) -> bool {
        self.always_visible
    }

    pub fn has_action(&self) -> bool {
        !matches!(self.handler, Handler::None)
    }

    /// Current display value, if this entry carries a getter
    pub fn current_value(&self) -> Option<String> {
        self.value.as_ref().map(|getter| getter())
    }

    pub(crate) fn builtin_kind(&self) -> Option<Builtin> {
        match self.handler {
            Handler::Builtin(b) => Some(b),
            _ => None,
        }
    }

    pub(crate) fn is_go_back(&self) -> bool {
        self.builtin_kind() == Some(Builtin::GoBack)
    }

    /// `<selector> - <title>[ <value>]`
    pub(crate) fn label(&self) -> String {
        match self.current_value() {
            Some(value) => format!("{} - {} <{}>", self.selector, self.title, value),
            None => format!("{} - {}", self.selector, self.title),
        }
    }

    /// Run the caller-supplied action. Entries without one are a no-op.
    pub(crate) fn run_action(&mut self) -> Response {
        match &mut self.handler {
            Handler::Action(action) => action.run(),
            Handler::None | Handler::Builtin(_) => Response::ok(),
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("selector", &self.selector)
            .field("title", &self.title)
            .field("parent", &self.parent)
            .field("always_visible", &self.always_visible)
            .field("builtin", &self.builtin_kind())
            .field("has_value", &self.value.is_some())
            .finish()
    }
}
