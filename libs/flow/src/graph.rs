use crate::content::screen_config;
use crate::screen::ScreenId;
use crate::types::{NavAction, Trigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: ScreenId,
    pub trigger: Trigger,
    pub to: ScreenId,
}

const fn edge(from: ScreenId, trigger: Trigger, to: ScreenId) -> Edge {
    Edge { from, trigger, to }
}

const EDGES: [Edge; 9] = [
    edge(ScreenId::Splash, Trigger::TimerElapsed, ScreenId::Onboarding1),
    edge(ScreenId::Onboarding1, Trigger::Action(NavAction::Next), ScreenId::Onboarding2),
    edge(ScreenId::Onboarding1, Trigger::Action(NavAction::Skip), ScreenId::Onboarding3),
    edge(ScreenId::Onboarding2, Trigger::Action(NavAction::Back), ScreenId::Onboarding1),
    edge(ScreenId::Onboarding2, Trigger::Action(NavAction::Next), ScreenId::Onboarding3),
    edge(ScreenId::Onboarding2, Trigger::Action(NavAction::Skip), ScreenId::Onboarding3),
    edge(ScreenId::Onboarding3, Trigger::Action(NavAction::Back), ScreenId::Onboarding2),
    edge(ScreenId::Onboarding3, Trigger::Action(NavAction::Next), ScreenId::Onboarding1),
    edge(ScreenId::Onboarding3, Trigger::Action(NavAction::Skip), ScreenId::Onboarding1),
];

/// Every edge of the flow, timer edge first.
pub fn edges() -> &'static [Edge] {
    &EDGES
}

/// Resolve the target of `trigger` fired on `from`.
///
/// Button actions are answered by the screen's content record so that hidden
/// buttons never resolve. The timer only leaves the splash screen.
pub fn target(from: ScreenId, trigger: Trigger) -> Option<ScreenId> {
    match trigger {
        Trigger::TimerElapsed => {
            (from == ScreenId::Splash).then_some(ScreenId::Onboarding1)
        }
        Trigger::Action(action) => screen_config(from).ok()?.target_for(action),
    }
}

pub fn outgoing(from: ScreenId) -> impl Iterator<Item = &'static Edge> {
    EDGES.iter().filter(move |e| e.from == from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edge_enters_splash() {
        assert!(edges().iter().all(|e| e.to != ScreenId::Splash));
    }

    #[test]
    fn splash_only_leaves_on_the_timer() {
        let from_splash: Vec<_> = outgoing(ScreenId::Splash).collect();
        assert_eq!(from_splash.len(), 1);
        assert_eq!(from_splash[0].trigger, Trigger::TimerElapsed);
        assert_eq!(target(ScreenId::Splash, Trigger::Action(NavAction::Next)), None);
    }

    #[test]
    fn timer_is_ignored_off_splash() {
        assert_eq!(target(ScreenId::Onboarding2, Trigger::TimerElapsed), None);
    }
}
