use crate::back_stack::BackStack;
use crate::screen::ScreenId;

/// Navigation state: the current screen plus its back stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
    back_stack: BackStack,
}

impl Navigator {
    pub fn new(start: ScreenId) -> Self {
        Self {
            current: start,
            back_stack: BackStack::new(start),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn history(&self) -> &[ScreenId] {
        self.back_stack.as_slice()
    }

    /// Whether `screen` can still be reached with back navigation.
    pub fn can_reach_by_back(&self, screen: ScreenId) -> bool {
        self.back_stack.contains(screen)
    }

    /// Make `target` current. Returns `false` when it already was.
    ///
    /// Leaving the splash screen pops it (inclusive) before the push, so it
    /// never appears in the history again.
    ///
    /// # Panics
    ///
    /// Splash is only valid as the root of the flow; navigating to it from
    /// any other screen is a caller bug.
    pub fn transition(&mut self, target: ScreenId) -> bool {
        if target == self.current {
            return false;
        }
        assert!(
            target != ScreenId::Splash,
            "splash cannot be entered from {}",
            self.current
        );

        if self.current == ScreenId::Splash {
            let evicted = self.back_stack.pop_up_to(ScreenId::Splash, true);
            tracing::debug!(evicted, "splash popped from back stack");
        }
        self.back_stack.push(target);
        self.current = target;
        true
    }

    /// Pop one entry. `None` when the current screen is the root.
    pub fn back(&mut self) -> Option<ScreenId> {
        let top = self.back_stack.pop()?;
        self.current = top;
        Some(top)
    }
}
