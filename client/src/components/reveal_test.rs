use super::*;
use crate::util::reveal::RevealPhase;
use crate::util::timer::ManualScheduler;
use crate::util::variants::{StaggerSpec, container, fade_up};

struct Page<V> {
    driver: RevealDriver<ManualScheduler>,
    scheduler: ManualScheduler,
    // Dropping the view disposes the child owners and unmounts nested targets.
    _view: V,
    _owner: Owner,
}

fn render<V>(build: impl FnOnce() -> V) -> Page<V> {
    let scheduler = ManualScheduler::new();
    let driver = RevealDriver::new(RevealPolicy::default(), scheduler.clone());
    let owner = Owner::new();
    let view = owner.with(|| {
        provide_context(RevealContext::from_driver(driver.clone()));
        build()
    });
    Page { driver, scheduler, _view: view, _owner: owner }
}

fn id(raw: u64) -> TargetId {
    TargetId::from_raw(raw)
}

fn visible(page: &Page<impl Sized>, ids: std::ops::Range<u64>) -> Vec<bool> {
    ids.map(|raw| page.driver.is_visible(id(raw))).collect()
}

// =============================================================
// Subjects
// =============================================================

#[test]
fn sibling_reveals_are_independent_subjects() {
    let page = render(|| {
        view! {
            <Reveal variants=fade_up(600)><p>"first"</p></Reveal>
            <Reveal variants=fade_up(600)><p>"second"</p></Reveal>
        }
    });

    assert_eq!(page.driver.phase(id(0)), Some(RevealPhase::Observed));
    assert_eq!(page.driver.phase(id(1)), Some(RevealPhase::Observed));

    page.driver.set_membership(id(0), true);
    assert_eq!(visible(&page, 0..2), vec![true, false]);
}

#[test]
fn sibling_after_a_container_is_not_adopted_by_it() {
    let page = render(|| {
        view! {
            <Reveal variants=container(600, StaggerSpec::new(200, 100))>
                <Reveal variants=fade_up(600)><p>"item"</p></Reveal>
            </Reveal>
            <Reveal variants=fade_up(600)><h2>"next section"</h2></Reveal>
        }
    });

    assert_eq!(page.driver.phase(id(1)), None, "nested item is a child");
    assert_eq!(page.driver.phase(id(2)), Some(RevealPhase::Observed));
}

#[test]
fn mount_trigger_reveals_without_viewport_report() {
    let page = render(|| {
        view! { <Reveal variants=fade_up(600) trigger=RevealTrigger::Mount><p>"hero"</p></Reveal> }
    });
    assert_eq!(page.driver.phase(id(0)), Some(RevealPhase::Triggered));
    assert!(page.driver.is_visible(id(0)));
}

// =============================================================
// Stagger groups
// =============================================================

#[test]
fn list_items_stagger_off_their_container_in_order() {
    let page = render(|| {
        view! {
            <Reveal variants=container(600, StaggerSpec::new(200, 100))>
                {["a", "b", "c"]
                    .into_iter()
                    .map(|label| view! { <Reveal variants=fade_up(600)><p>{label}</p></Reveal> })
                    .collect_view()}
            </Reveal>
        }
    });
    for raw in 1..4 {
        assert_eq!(page.driver.phase(id(raw)), None, "item {raw} is a child");
    }

    page.driver.set_membership(id(0), true);
    assert_eq!(visible(&page, 0..4), vec![true, false, false, false]);

    page.scheduler.advance(200.0);
    assert_eq!(visible(&page, 0..4), vec![true, true, false, false]);
    page.scheduler.advance(100.0);
    assert_eq!(visible(&page, 0..4), vec![true, true, true, false]);
    page.scheduler.advance(100.0);
    assert_eq!(visible(&page, 0..4), vec![true, true, true, true]);
}

#[test]
fn nested_container_owns_its_items() {
    // 0: outer { 1: a, 2: inner { 3: x, 4: y }, 5: b }
    let page = render(|| {
        view! {
            <Reveal variants=container(600, StaggerSpec::new(200, 100))>
                <Reveal variants=fade_up(600)><p>"a"</p></Reveal>
                <Reveal variants=container(600, StaggerSpec::new(50, 50))>
                    <Reveal variants=fade_up(600)><p>"x"</p></Reveal>
                    <Reveal variants=fade_up(600)><p>"y"</p></Reveal>
                </Reveal>
                <Reveal variants=fade_up(600)><p>"b"</p></Reveal>
            </Reveal>
        }
    });

    page.driver.set_membership(id(0), true);
    page.scheduler.advance(200.0);
    assert_eq!(visible(&page, 0..6), vec![true, true, false, false, false, false]);

    // inner at 300, x at 350; b and y both land at 400
    page.scheduler.advance(100.0);
    assert_eq!(visible(&page, 0..6), vec![true, true, true, false, false, false]);
    page.scheduler.advance(50.0);
    assert_eq!(visible(&page, 0..6), vec![true, true, true, true, false, false]);
    page.scheduler.advance(50.0);
    assert_eq!(visible(&page, 0..6), vec![true; 6]);
}

#[test]
fn explicit_trigger_inside_a_container_is_its_own_subject() {
    let page = render(|| {
        view! {
            <Reveal variants=container(600, StaggerSpec::new(200, 100))>
                <Reveal variants=fade_up(600) trigger=RevealTrigger::InView><p>"portrait"</p></Reveal>
                <Reveal variants=fade_up(600)><p>"text"</p></Reveal>
            </Reveal>
        }
    });

    assert_eq!(page.driver.phase(id(1)), Some(RevealPhase::Observed));
    page.driver.set_membership(id(0), true);
    page.scheduler.advance(1000.0);
    assert!(!page.driver.is_visible(id(1)), "gated by its own viewport report");
    assert!(page.driver.is_visible(id(2)));
}
