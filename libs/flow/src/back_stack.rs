use crate::screen::ScreenId;

/// Ordered history of visited screens, bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<ScreenId>,
}

impl BackStack {
    pub fn new(root: ScreenId) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn top(&self) -> Option<ScreenId> {
        self.entries.last().copied()
    }

    pub fn push(&mut self, screen: ScreenId) {
        self.entries.push(screen);
    }

    /// Pop the top entry unless it is the last one. Returns the new top.
    pub fn pop(&mut self) -> Option<ScreenId> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.top()
    }

    /// Pop everything above the topmost `screen`, and `screen` itself when
    /// `inclusive` is set. Returns how many entries were removed; a screen
    /// that is not on the stack removes nothing.
    pub fn pop_up_to(&mut self, screen: ScreenId, inclusive: bool) -> usize {
        let Some(position) = self.entries.iter().rposition(|s| *s == screen) else {
            return 0;
        };
        let keep = if inclusive { position } else { position + 1 };
        let removed = self.entries.len() - keep;
        self.entries.truncate(keep);
        removed
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.entries.contains(&screen)
    }

    pub fn as_slice(&self) -> &[ScreenId] {
        &self.entries
    }
}
