use super::*;
use crate::util::variants::{StaggerSpec, container, fade_up};

fn group(orch: &mut RevealOrchestrator, children: usize) -> (TargetId, Vec<TargetId>) {
    let parent = orch.register(container(600, StaggerSpec::new(200, 100)));
    let kids = (0..children)
        .map(|_| {
            let (id, commands) = orch.register_child(parent, fade_up(600)).expect("parent exists");
            assert!(commands.is_empty());
            id
        })
        .collect();
    (parent, kids)
}

// =============================================================
// Subject lifecycle
// =============================================================

#[test]
fn registered_subject_starts_unobserved_and_hidden() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    assert_eq!(orch.phase(id), Some(RevealPhase::Unobserved));
    assert!(!orch.is_visible(id));
}

#[test]
fn membership_before_observe_does_not_trigger() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    assert!(orch.set_membership(id, true).is_empty());
    assert!(!orch.is_triggered(id));
}

#[test]
fn observe_with_known_membership_triggers_immediately() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    orch.set_membership(id, true);
    let commands = orch.observe(id).expect("subject");
    assert_eq!(commands, vec![RevealCommand::Show(id)]);
    assert!(orch.is_triggered(id));
}

#[test]
fn entering_viewport_triggers_once() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    assert!(orch.observe(id).expect("subject").is_empty());
    assert_eq!(orch.phase(id), Some(RevealPhase::Observed));

    assert_eq!(orch.set_membership(id, true), vec![RevealCommand::Show(id)]);
    assert!(orch.is_visible(id));

    // Leaving and re-entering never re-arms.
    assert!(orch.set_membership(id, false).is_empty());
    assert!(orch.set_membership(id, true).is_empty());
    assert!(orch.is_visible(id));
    assert_eq!(orch.phase(id), Some(RevealPhase::Triggered));
}

#[test]
fn repeated_in_viewport_reports_do_not_retrigger() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    orch.observe(id).expect("subject");
    assert_eq!(orch.set_membership(id, true).len(), 1);
    assert!(orch.set_membership(id, true).is_empty());
}

#[test]
fn reobserving_a_triggered_subject_is_a_noop() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    orch.observe(id).expect("subject");
    orch.set_membership(id, true);
    assert_eq!(orch.observe(id), Ok(Vec::new()));
    assert!(orch.is_triggered(id));
}

#[test]
fn subject_without_visibility_signal_stays_hidden() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    orch.observe(id).expect("subject");
    assert!(!orch.is_visible(id));
    assert_eq!(orch.phase(id), Some(RevealPhase::Observed));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn observe_unknown_target_errors() {
    let mut orch = RevealOrchestrator::default();
    let id = orch.register(fade_up(600));
    orch.unmount(id);
    assert_eq!(orch.observe(id), Err(RevealError::UnknownTarget(id)));
}

#[test]
fn observe_child_target_errors() {
    let mut orch = RevealOrchestrator::default();
    let (_, kids) = group(&mut orch, 1);
    assert_eq!(orch.observe(kids[0]), Err(RevealError::NotASubject(kids[0])));
}

#[test]
fn register_child_under_unknown_parent_errors() {
    let mut orch = RevealOrchestrator::default();
    let parent = orch.register(fade_up(600));
    orch.unmount(parent);
    assert!(matches!(
        orch.register_child(parent, fade_up(600)),
        Err(RevealError::UnknownTarget(_))
    ));
}

// =============================================================
// Staggered children
// =============================================================

#[test]
fn trigger_schedules_children_in_declaration_order() {
    let mut orch = RevealOrchestrator::default();
    let (parent, kids) = group(&mut orch, 6);
    orch.observe(parent).expect("subject");
    let commands = orch.set_membership(parent, true);

    assert_eq!(commands[0], RevealCommand::Show(parent));
    let scheduled = commands[1..]
        .iter()
        .map(|cmd| match cmd {
            RevealCommand::Schedule { target, delay_ms } => (*target, *delay_ms),
            RevealCommand::Show(_) => panic!("children must be scheduled, not shown"),
        })
        .collect::<Vec<_>>();
    let expected = kids.iter().copied().zip([200, 300, 400, 500, 600, 700]).collect::<Vec<_>>();
    assert_eq!(scheduled, expected);
    assert!(kids.iter().all(|kid| !orch.is_visible(*kid)));
}

#[test]
fn fire_reveals_child_once() {
    let mut orch = RevealOrchestrator::default();
    let (parent, kids) = group(&mut orch, 2);
    orch.observe(parent).expect("subject");
    orch.set_membership(parent, true);

    assert_eq!(orch.fire(kids[1]), vec![RevealCommand::Show(kids[1])]);
    assert!(orch.fire(kids[1]).is_empty());
    assert!(orch.is_visible(kids[1]));
    assert!(!orch.is_visible(kids[0]));
}

#[test]
fn fire_before_parent_trigger_is_ignored() {
    let mut orch = RevealOrchestrator::default();
    let (_, kids) = group(&mut orch, 1);
    assert!(orch.fire(kids[0]).is_empty());
    assert!(!orch.is_visible(kids[0]));
}

#[test]
fn nested_group_staggers_relative_to_its_own_reveal() {
    let mut orch = RevealOrchestrator::default();
    let parent = orch.register(container(600, StaggerSpec::new(200, 100)));
    let (heading, _) = orch.register_child(parent, fade_up(600)).expect("parent");
    let (inner, _) = orch
        .register_child(parent, container(600, StaggerSpec::new(50, 25)))
        .expect("parent");
    let (a, _) = orch.register_child(inner, fade_up(600)).expect("inner");
    let (b, _) = orch.register_child(inner, fade_up(600)).expect("inner");

    orch.observe(parent).expect("subject");
    let commands = orch.set_membership(parent, true);
    assert_eq!(
        commands,
        vec![
            RevealCommand::Show(parent),
            RevealCommand::Schedule { target: heading, delay_ms: 200 },
            RevealCommand::Schedule { target: inner, delay_ms: 300 },
        ]
    );

    assert_eq!(
        orch.fire(inner),
        vec![
            RevealCommand::Show(inner),
            RevealCommand::Schedule { target: a, delay_ms: 50 },
            RevealCommand::Schedule { target: b, delay_ms: 75 },
        ]
    );
}

#[test]
fn child_registered_after_parent_revealed_is_shown_immediately() {
    let mut orch = RevealOrchestrator::default();
    let (parent, _) = group(&mut orch, 1);
    orch.observe(parent).expect("subject");
    orch.set_membership(parent, true);

    let (late, commands) = orch.register_child(parent, fade_up(600)).expect("parent");
    assert_eq!(commands, vec![RevealCommand::Show(late)]);
    assert!(orch.is_visible(late));
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn unmount_removes_descendants_and_stales_pending_fires() {
    let mut orch = RevealOrchestrator::default();
    let (parent, kids) = group(&mut orch, 3);
    orch.observe(parent).expect("subject");
    orch.set_membership(parent, true);

    assert_eq!(orch.unmount(parent), 4);
    assert!(!orch.is_mounted(parent));
    for kid in kids {
        assert!(orch.fire(kid).is_empty());
        assert!(!orch.is_mounted(kid));
    }
    assert!(orch.set_membership(parent, true).is_empty());
}

#[test]
fn unmounting_a_child_detaches_it_from_parent() {
    let mut orch = RevealOrchestrator::default();
    let (parent, kids) = group(&mut orch, 3);
    assert_eq!(orch.unmount(kids[1]), 1);
    assert_eq!(orch.children(parent), &[kids[0], kids[2]]);
}

// =============================================================
// Policy
// =============================================================

#[test]
fn default_policy_admits_any_intersection() {
    let policy = RevealPolicy::default();
    assert!(policy.admits(true, 0.0));
    assert!(!policy.admits(false, 0.0));
    assert_eq!(policy.root_margin(), "0px");
}

#[test]
fn threshold_policy_requires_ratio() {
    let policy = RevealPolicy { amount: 0.25, root_margin_px: -40 };
    assert!(!policy.admits(true, 0.1));
    assert!(policy.admits(true, 0.25));
    assert_eq!(policy.root_margin(), "-40px");
}
