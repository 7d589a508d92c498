#![allow(clippy::unwrap_used, clippy::expect_used)]

use smarttasks_flow::{
    FlowConfig, FlowEvent, FlowOrchestrator, FlowUpdate, NavAction, ScreenId, TimerPhase,
    Trigger, edges, graph, screen_config,
};
use std::time::Duration;
use tokio::sync::mpsc;

fn flow_at(start: ScreenId) -> (FlowOrchestrator, mpsc::Receiver<FlowEvent>) {
    let (tx, rx) = mpsc::channel(8);
    let config = FlowConfig {
        start,
        ..FlowConfig::default()
    };
    let mut flow = FlowOrchestrator::new(config, tx);
    flow.start().expect("start flow");
    (flow, rx)
}

/// Feed timer events back into the flow until one is accepted.
async fn pump_timer(flow: &mut FlowOrchestrator, rx: &mut mpsc::Receiver<FlowEvent>) -> FlowUpdate {
    let event = rx.recv().await.expect("timer event");
    flow.handle(event)
}

#[test]
fn content_targets_match_the_edge_table() {
    for edge in edges() {
        match edge.trigger {
            Trigger::TimerElapsed => assert_eq!(edge.from, ScreenId::Splash),
            Trigger::Action(action) => {
                let config = screen_config(edge.from).unwrap();
                let expected = match action {
                    NavAction::Next => Some(config.next_target),
                    NavAction::Back => config.back_target,
                    NavAction::Skip => Some(config.skip_target),
                };
                assert_eq!(expected, Some(edge.to), "{:?}", edge);
            }
        }
    }
}

#[test]
fn every_resolvable_action_is_in_the_edge_table() {
    for from in ScreenId::ONBOARDING {
        for action in [NavAction::Back, NavAction::Next, NavAction::Skip] {
            let resolved = graph::target(from, Trigger::Action(action));
            let listed = edges()
                .iter()
                .find(|e| e.from == from && e.trigger == Trigger::Action(action))
                .map(|e| e.to);
            assert_eq!(resolved, listed, "{from} {action:?}");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn splash_timer_lands_on_first_page_and_splash_is_gone() {
    let (mut flow, mut rx) = flow_at(ScreenId::Splash);
    let started = tokio::time::Instant::now();

    let update = pump_timer(&mut flow, &mut rx).await;

    assert_eq!(update, FlowUpdate::Navigated(ScreenId::Onboarding1));
    assert!(started.elapsed() >= Duration::from_millis(2_500));
    assert_eq!(flow.current(), ScreenId::Onboarding1);
    assert!(!flow.can_reach_by_back(ScreenId::Splash));
    assert_eq!(flow.system_back(), FlowUpdate::Exit);

    flow.dispatch(ScreenId::Onboarding1, NavAction::Next);
    assert_eq!(flow.system_back(), FlowUpdate::Navigated(ScreenId::Onboarding1));
    assert_eq!(flow.system_back(), FlowUpdate::Exit);
}

#[tokio::test(start_paused = true)]
async fn timer_does_not_fire_early() {
    let (flow, mut rx) = flow_at(ScreenId::Splash);

    tokio::time::advance(Duration::from_millis(2_499)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(flow.current(), ScreenId::Splash);
    assert_eq!(flow.timer_phase(), Some(TimerPhase::Waiting));
}

#[tokio::test(start_paused = true)]
async fn teardown_before_expiry_never_transitions() {
    let (mut flow, mut rx) = flow_at(ScreenId::Splash);

    tokio::time::advance(Duration::from_millis(1_200)).await;
    flow.teardown();
    assert_eq!(flow.timer_phase(), None);

    let outcome = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
    assert!(
        matches!(outcome, Ok(None) | Err(_)),
        "timer fired after teardown: {outcome:?}"
    );
    assert_eq!(flow.current(), ScreenId::Splash);
}

#[tokio::test(start_paused = true)]
async fn stale_expiry_after_teardown_is_ignored() {
    let (mut flow, _rx) = flow_at(ScreenId::Splash);
    flow.teardown();

    let update = flow.handle(FlowEvent::SplashElapsed { generation: 1 });
    assert_eq!(update, FlowUpdate::Unchanged);
    assert_eq!(flow.current(), ScreenId::Splash);
}

#[tokio::test(start_paused = true)]
async fn user_input_on_splash_has_no_effect() {
    let (mut flow, _rx) = flow_at(ScreenId::Splash);
    for action in [NavAction::Back, NavAction::Next, NavAction::Skip] {
        assert_eq!(flow.dispatch(ScreenId::Splash, action), FlowUpdate::Unchanged);
    }
    assert_eq!(flow.current(), ScreenId::Splash);
}

#[tokio::test]
async fn double_tap_next_lands_once() {
    let (mut flow, _rx) = flow_at(ScreenId::Onboarding1);

    let first = flow.dispatch(ScreenId::Onboarding1, NavAction::Next);
    let second = flow.dispatch(ScreenId::Onboarding1, NavAction::Next);

    assert_eq!(first, FlowUpdate::Navigated(ScreenId::Onboarding2));
    assert_eq!(second, FlowUpdate::Unchanged);
    assert_eq!(flow.current(), ScreenId::Onboarding2);
    assert_eq!(flow.history(), &[ScreenId::Onboarding1, ScreenId::Onboarding2]);
}

#[tokio::test]
async fn repeated_transition_to_same_target_is_single_top() {
    let (mut flow, _rx) = flow_at(ScreenId::Onboarding1);
    assert!(flow.transition(ScreenId::Onboarding2));
    assert!(!flow.transition(ScreenId::Onboarding2));
    assert_eq!(flow.history().len(), 2);
}

#[tokio::test]
async fn skip_from_first_page_goes_to_last() {
    let (mut flow, _rx) = flow_at(ScreenId::Onboarding1);
    flow.handle(FlowEvent::Action {
        origin: ScreenId::Onboarding1,
        action: NavAction::Skip,
    });
    assert_eq!(flow.current(), ScreenId::Onboarding3);
}

#[tokio::test]
async fn back_from_second_page_goes_to_first() {
    let (mut flow, _rx) = flow_at(ScreenId::Onboarding2);
    flow.handle(FlowEvent::Action {
        origin: ScreenId::Onboarding2,
        action: NavAction::Back,
    });
    assert_eq!(flow.current(), ScreenId::Onboarding1);
}

#[tokio::test]
async fn get_started_loops_back_to_first_page() {
    let (mut flow, _rx) = flow_at(ScreenId::Onboarding3);
    let update = flow.handle(FlowEvent::Action {
        origin: ScreenId::Onboarding3,
        action: NavAction::Next,
    });
    assert_eq!(update, FlowUpdate::Navigated(ScreenId::Onboarding1));
}

#[tokio::test(start_paused = true)]
async fn full_walk_through_the_carousel() {
    let (mut flow, mut rx) = flow_at(ScreenId::Splash);
    pump_timer(&mut flow, &mut rx).await;

    let steps = [
        (NavAction::Next, ScreenId::Onboarding2),
        (NavAction::Next, ScreenId::Onboarding3),
        (NavAction::Back, ScreenId::Onboarding2),
        (NavAction::Skip, ScreenId::Onboarding3),
        (NavAction::Skip, ScreenId::Onboarding1),
    ];
    for (action, expected) in steps {
        let origin = flow.current();
        assert_eq!(flow.dispatch(origin, action), FlowUpdate::Navigated(expected));
    }
    assert!(flow.history().iter().all(|s| *s != ScreenId::Splash));
}
