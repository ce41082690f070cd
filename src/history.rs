use crate::foundation::geom::Selection;
use crate::mask::registry::MaskKind;

/// One applied action: everything needed to replay it (forward registry)
/// or undo it (reverse registry).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub kind: MaskKind,
    pub selection: Selection,
    /// The action's extra argument, e.g. a cp code.
    pub arg: Option<String>,
}

impl HistoryEntry {
    pub fn new(kind: MaskKind, selection: Selection) -> Self {
        Self {
            kind,
            selection,
            arg: None,
        }
    }

    pub fn with_arg(kind: MaskKind, selection: Selection, arg: impl Into<String>) -> Self {
        Self {
            kind,
            selection,
            arg: Some(arg.into()),
        }
    }
}

/// Availability notifications the host uses to enable/disable its
/// undo/redo controls. All methods default to no-ops.
pub trait HistoryHooks {
    fn undo_available(&mut self) {}
    fn undo_unavailable(&mut self) {}
    fn redo_available(&mut self) {}
    fn redo_unavailable(&mut self) {}
}

/// Append-only, cursor-based undo/redo log.
///
/// The cursor sits on the most recently applied entry, or at -1 when
/// nothing is applied. Appending while the cursor is not at the tail
/// discards the redo branch past it.
pub struct History {
    entries: Vec<HistoryEntry>,
    position: isize,
    hooks: Option<Box<dyn HistoryHooks>>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: -1,
            hooks: None,
        }
    }

    pub fn with_hooks(hooks: Box<dyn HistoryHooks>) -> Self {
        Self {
            entries: Vec::new(),
            position: -1,
            hooks: Some(hooks),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position: the index of the last applied entry, -1 if none.
    pub fn position(&self) -> isize {
        self.position
    }

    pub fn can_undo(&self) -> bool {
        self.position >= 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len() as isize
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Record a newly applied action. Any redo branch past the cursor is
    /// discarded first.
    pub fn add(&mut self, entry: HistoryEntry) {
        let keep = (self.position + 1) as usize;
        if keep < self.entries.len() {
            tracing::debug!(discarded = self.entries.len() - keep, "truncating redo branch");
            self.entries.truncate(keep);
        }
        self.entries.push(entry);
        self.position = self.entries.len() as isize - 1;

        if let Some(hooks) = &mut self.hooks {
            hooks.undo_available();
            hooks.redo_unavailable();
        }
    }

    /// Advance the cursor and return the entry to re-apply (via the forward
    /// registry). `None` when already at the tail.
    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.position += 1;
        let entry = self.entries[self.position as usize].clone();

        if let Some(hooks) = &mut self.hooks {
            hooks.undo_available();
            if self.position + 1 == self.entries.len() as isize {
                hooks.redo_unavailable();
            }
        }
        Some(entry)
    }

    /// Return the entry at the cursor (to undo via the reverse registry)
    /// and step the cursor back. `None` when nothing is left to undo.
    pub fn backward(&mut self) -> Option<HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        let entry = self.entries[self.position as usize].clone();
        self.position -= 1;

        if let Some(hooks) = &mut self.hooks {
            hooks.redo_available();
            if self.position == -1 {
                hooks.undo_unavailable();
            }
        }
        Some(entry)
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .field("position", &self.position)
            .field("hooks", &self.hooks.as_ref().map(|_| ".."))
            .finish()
    }
}
