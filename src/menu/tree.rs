//! The menu tree: arena, registration and visibility

use std::collections::HashSet;
use std::io::{self, Write};

use tracing::{debug, info};

use super::entry::{Builtin, Entry, EntryId};
use super::{selector, MenuSettings};
use crate::error::{MenuError, MenuResult};

pub(crate) const SHOW_MENU: EntryId = EntryId(1);
/// Go back, show menu and quit occupy the first arena slots
const BUILTIN_COUNT: usize = 3;

/// Registered entries plus the navigation state of one session.
///
/// Output goes to `W`, stdout by default. Tests and embedders can pass any
/// writer through [`MenuTree::with_writer`].
pub struct MenuTree<W = io::Stdout> {
    pub(crate) entries: Vec<Entry>,
    pub(crate) current: Option<EntryId>,
    pub(crate) blank_inputs: u32,
    pub(crate) settings: MenuSettings,
    pub(crate) out: W,
}

impl MenuTree<io::Stdout> {
    pub fn new(settings: MenuSettings) -> Self {
        Self::with_writer(settings, io::stdout())
    }
}

impl<W: Write> MenuTree<W> {
    pub fn with_writer(settings: MenuSettings, out: W) -> Self {
        Self {
            entries: vec![
                Entry::builtin("B", "Go Up", Builtin::GoBack),
                Entry::builtin("M", "Menu", Builtin::ShowMenu),
                Entry::builtin("Q", "Quit", Builtin::Quit),
            ],
            current: None,
            blank_inputs: 0,
            settings,
            out,
        }
    }

    /// Register a single entry and return its id.
    pub fn register(&mut self, entry: Entry) -> MenuResult<EntryId> {
        let ids = self.register_all(vec![entry])?;
        Ok(ids[0])
    }

    /// Register a batch of entries.
    ///
    /// The duplicate check runs over the whole tree after the batch is
    /// appended. On error the batch is removed again and the tree is left as
    /// it was.
    pub fn register_all(&mut self, entries: Vec<Entry>) -> MenuResult<Vec<EntryId>> {
        let start = self.entries.len();
        self.entries.extend(entries);

        if let Err(err) = self.validate() {
            self.entries.truncate(start);
            return Err(err);
        }

        let ids: Vec<EntryId> = (start..self.entries.len()).map(EntryId).collect();
        info!(added = ids.len(), total = self.entries.len(), "registered menu entries");
        Ok(ids)
    }

    /// Parents must be caller entries registered before the child, which
    /// keeps every ancestor chain finite. Built-ins cannot own children.
    fn validate(&self) -> MenuResult<()> {
        let separator = self.settings.submenu_separator;
        let mut seen = HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.selector.is_empty() {
                return Err(MenuError::EmptySelector {
                    title: entry.title.clone(),
                });
            }
            if entry.selector.contains(separator) {
                return Err(MenuError::SelectorContainsSeparator {
                    selector: entry.selector.clone(),
                    separator,
                });
            }
            if let Some(parent) = entry.parent {
                if parent.0 < BUILTIN_COUNT || parent.0 >= index {
                    return Err(MenuError::UnknownParent {
                        selector: entry.selector.clone(),
                        parent: parent.0,
                    });
                }
            }
            if !seen.insert((entry.parent, selector::fold(&entry.selector))) {
                return Err(MenuError::DuplicateSelector {
                    selector: entry.selector.clone(),
                    parent: self.describe_parent(entry.parent),
                });
            }
        }
        Ok(())
    }

    fn describe_parent(&self, parent: Option<EntryId>) -> String {
        match parent.and_then(|id| self.entries.get(id.0)) {
            Some(p) => format!("'{}'", p.title),
            None => "the root menu".to_string(),
        }
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    /// Every registered entry, built-ins included, in registration order
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// The active sub-menu; `None` is the root level
    pub fn current_position(&self) -> Option<EntryId> {
        self.current
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    pub fn has_children(&self, id: EntryId) -> bool {
        self.entries.iter().any(|e| e.parent == Some(id))
    }

    pub fn children(&self, id: EntryId) -> Vec<EntryId> {
        self.entries()
            .filter(|(_, e)| e.parent == Some(id))
            .map(|(child, _)| child)
            .collect()
    }

    /// Entries selectable at the current position, in display order.
    pub fn visible_entries(&self) -> Vec<EntryId> {
        let at_root = self.current.is_none();
        let mut visible: Vec<EntryId> = self
            .entries()
            .filter(|(_, e)| {
                if e.is_go_back() {
                    return !at_root;
                }
                e.parent == self.current || e.always_visible
            })
            .map(|(id, _)| id)
            .collect();

        visible.sort_by(|a, b| {
            selector::compare(&self.entries[a.0].selector, &self.entries[b.0].selector)
        });
        visible
    }

    /// Look up `input` among the visible entries, ignoring case.
    pub fn resolve(&self, input: &str) -> Option<EntryId> {
        self.visible_entries()
            .into_iter()
            .find(|id| selector::matches(&self.entries[id.0].selector, input))
    }

    /// Titles from the root down to the current position
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut cursor = self.current;
        while let Some(id) = cursor {
            let entry = &self.entries[id.0];
            path.push(entry.title.as_str());
            cursor = entry.parent;
        }
        path.reverse();
        path
    }

    /// Move into the sub-menu rooted at `id`
    pub(crate) fn enter(&mut self, id: EntryId) {
        debug!(selector = %self.entries[id.0].selector, "entering sub-menu");
        self.current = Some(id);
    }

    /// Move one level up; a no-op at the root
    pub fn go_back(&mut self) {
        self.current = self.current.and_then(|id| self.entries[id.0].parent);
        debug!(position = ?self.current, "went back");
    }

    pub fn reset_position(&mut self) {
        self.current = None;
    }
}
