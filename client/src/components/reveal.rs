//! Reveal wrappers binding the reveal driver to the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RevealContext` holds the page's single `RevealDriver`. A [`Reveal`]
//! given a `trigger`, or with no enclosing `Reveal`, is a subject: it is
//! observed through an `IntersectionObserver` (or revealed right after mount
//! with [`RevealTrigger::Mount`]). A `Reveal` without a trigger nested inside
//! another becomes a child of the nearest enclosing one and is gated by that
//! parent's trigger, never by its own visibility. Registration happens while
//! rendering, so children stagger in declaration order. The parent target is
//! provided through a `Provider`, scoped to the wrapper's own children, so it
//! never leaks to later siblings.
//!
//! Each wrapper renders its variant set as inline style and flips a local
//! signal when the driver shows it. Unmounting unregisters the target so any
//! pending stagger timer becomes a no-op.

#[cfg(all(test, not(feature = "csr")))]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::context::Provider;
use leptos::prelude::*;

use crate::util::reveal::{RevealPolicy, TargetId};
use crate::util::reveal_driver::RevealDriver;
use crate::util::timer::PlatformScheduler;
use crate::util::variants::AnimationVariantSet;

/// What starts a subject's reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First report of the element entering the viewport.
    #[default]
    InView,
    /// Right after the element is mounted.
    Mount,
}

/// Page-wide reveal driver, provided once by `App`.
#[derive(Clone, Copy)]
pub struct RevealContext {
    driver: StoredValue<RevealDriver<PlatformScheduler>, LocalStorage>,
}

impl RevealContext {
    #[must_use]
    pub fn new(policy: RevealPolicy) -> Self {
        Self::from_driver(RevealDriver::new(policy, PlatformScheduler::default()))
    }

    #[must_use]
    pub fn from_driver(driver: RevealDriver<PlatformScheduler>) -> Self {
        Self { driver: StoredValue::new_local(driver) }
    }

    /// `None` once the owning scope is disposed.
    #[must_use]
    pub fn driver(&self) -> Option<RevealDriver<PlatformScheduler>> {
        self.driver.try_get_value()
    }
}

/// Nearest enclosing reveal target, for child registration.
#[derive(Clone, Copy, Debug)]
struct RevealParent(TargetId);

/// Animated wrapper `<div>`; see the module docs for subject/child rules.
#[component]
pub fn Reveal(
    variants: AnimationVariantSet,
    /// Makes this wrapper a subject even when nested.
    #[prop(optional)]
    trigger: Option<RevealTrigger>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<RevealContext>();
    let parent = if trigger.is_some() { None } else { use_context::<RevealParent>() };
    let visible = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    if let Err(err) = variants.validate() {
        leptos::logging::warn!("reveal variants rejected: {err}");
    }

    let on_reveal = move || {
        let _ = visible.try_set(true);
    };
    let target = ctx.driver().and_then(|driver| match parent {
        Some(RevealParent(parent)) => match driver.register_child(parent, variants, on_reveal) {
            Ok(id) => Some(id),
            Err(err) => {
                leptos::logging::warn!("reveal child not registered: {err}");
                None
            }
        },
        None => Some(driver.register(variants, on_reveal)),
    });

    if let Some(target) = target {
        if parent.is_none() {
            bind_subject(ctx, target, trigger.unwrap_or_default(), node_ref);
        }
        on_cleanup(move || {
            if let Some(driver) = ctx.driver() {
                driver.unmount(target);
            }
        });
    } else {
        // Unregistered content is never left hidden.
        visible.set(true);
    }

    let content = match target {
        Some(target) => view! { <Provider value=RevealParent(target)>{children()}</Provider> }.into_any(),
        None => children(),
    };

    view! {
        <div node_ref=node_ref id=id class=class style=move || variants.style_for(visible.get())>
            {content}
        </div>
    }
}

#[cfg(feature = "csr")]
fn bind_subject(ctx: RevealContext, target: TargetId, trigger: RevealTrigger, node_ref: NodeRef<leptos::html::Div>) {
    use crate::util::viewport::ViewportObserver;

    let Some(driver) = ctx.driver() else {
        return;
    };
    if let Err(err) = driver.observe(target) {
        leptos::logging::warn!("{target} not observed: {err}");
        return;
    }

    match trigger {
        RevealTrigger::Mount => {
            // Deferred to an effect so the hidden style is painted first.
            Effect::new(move || {
                if let Some(driver) = ctx.driver() {
                    driver.set_membership(target, true);
                }
            });
        }
        RevealTrigger::InView => {
            let observer = StoredValue::new_local(None::<ViewportObserver>);
            Effect::new(move || {
                let Some(el) = node_ref.get() else {
                    return;
                };
                if observer.with_value(Option::is_some) {
                    return;
                }
                let policy = driver.policy();
                let driver = driver.clone();
                match ViewportObserver::observe(&el, policy, move |in_view| driver.set_membership(target, in_view)) {
                    Ok(bound) => observer.set_value(Some(bound)),
                    // Without a visibility signal the subject stays hidden.
                    Err(err) => leptos::logging::warn!("{target}: viewport observer unavailable: {err:?}"),
                }
            });
            on_cleanup(move || {
                let _ = observer.try_update_value(|slot| slot.take());
            });
        }
    }
}

#[cfg(not(feature = "csr"))]
fn bind_subject(ctx: RevealContext, target: TargetId, trigger: RevealTrigger, node_ref: NodeRef<leptos::html::Div>) {
    let _ = node_ref;
    let Some(driver) = ctx.driver() else {
        return;
    };
    if let Err(err) = driver.observe(target) {
        leptos::logging::warn!("{target} not observed: {err}");
        return;
    }
    if trigger == RevealTrigger::Mount {
        driver.set_membership(target, true);
    }
}
