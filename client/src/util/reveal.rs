//! One-shot, viewport-triggered reveal orchestration.
//!
//! DESIGN
//! ======
//! Every observed element is a *subject* moving through
//! `Unobserved -> Observed -> Triggered`. The transition into `Triggered` is
//! monotonic: later viewport changes are recorded but never re-arm the
//! reveal, so call sites do not need to remember to unsubscribe.
//!
//! Children hang off a parent target in declaration order. The parent's
//! trigger alone gates the group; each child is scheduled at the parent's
//! stagger offset for its index and never by its own intersection timing.
//! A child may itself have children, which are staggered relative to the
//! instant that child is revealed.
//!
//! The orchestrator is pure. It never touches timers or the DOM; it returns
//! [`RevealCommand`]s that `util::reveal_driver` executes.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;

use serde::Deserialize;

use super::variants::AnimationVariantSet;

/// Stable identifier for a registered element. Never reused, so timer
/// callbacks holding a stale id always miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

#[cfg(all(test, not(feature = "csr")))]
impl TargetId {
    /// Ids are allocated from zero in registration order.
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reveal#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("unknown reveal target {0}")]
    UnknownTarget(TargetId),
    #[error("{0} is a child target and cannot be observed directly")]
    NotASubject(TargetId),
}

/// Subject lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unobserved,
    Observed,
    Triggered,
}

/// System-wide trigger policy. Reveals are always one-shot.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealPolicy {
    /// Minimum intersection ratio; `0.0` triggers on the first visible pixel.
    pub amount: f64,
    /// Grows (positive) or shrinks (negative) the viewport edges.
    pub root_margin_px: i32,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self { amount: 0.0, root_margin_px: 0 }
    }
}

impl RevealPolicy {
    /// Whether an intersection report counts as viewport membership.
    #[must_use]
    pub fn admits(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.amount
    }

    /// `IntersectionObserver` `rootMargin` value.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Side effect requested by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCommand {
    /// Apply the `visible` variant to this target now.
    Show(TargetId),
    /// Call [`RevealOrchestrator::fire`] for this target after `delay_ms`.
    Schedule { target: TargetId, delay_ms: u32 },
}

#[derive(Clone, Copy, Debug)]
struct SubjectState {
    phase: RevealPhase,
    in_viewport: bool,
}

#[derive(Clone, Debug)]
struct Target {
    variants: AnimationVariantSet,
    parent: Option<TargetId>,
    children: Vec<TargetId>,
    visible: bool,
    pending: bool,
    subject: Option<SubjectState>,
}

impl Target {
    fn new(variants: AnimationVariantSet, parent: Option<TargetId>) -> Self {
        let subject = parent.is_none().then_some(SubjectState { phase: RevealPhase::Unobserved, in_viewport: false });
        Self { variants, parent, children: Vec::new(), visible: false, pending: false, subject }
    }
}

/// Registry of reveal targets and their one-shot state machines.
#[derive(Clone, Debug, Default)]
pub struct RevealOrchestrator {
    policy: RevealPolicy,
    targets: HashMap<TargetId, Target>,
    next_id: u64,
}

impl RevealOrchestrator {
    #[must_use]
    pub fn new(policy: RevealPolicy) -> Self {
        Self { policy, targets: HashMap::new(), next_id: 0 }
    }

    #[must_use]
    pub fn policy(&self) -> &RevealPolicy {
        &self.policy
    }

    /// Register a top-level subject. It stays hidden until observed and
    /// reported inside the viewport.
    pub fn register(&mut self, variants: AnimationVariantSet) -> TargetId {
        let id = self.allocate();
        self.targets.insert(id, Target::new(variants, None));
        id
    }

    /// Register a child under `parent`, appended after its existing siblings.
    ///
    /// A child arriving after its parent was already revealed is shown
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::UnknownTarget`] if `parent` is not registered.
    pub fn register_child(
        &mut self,
        parent: TargetId,
        variants: AnimationVariantSet,
    ) -> Result<(TargetId, Vec<RevealCommand>), RevealError> {
        if !self.targets.contains_key(&parent) {
            return Err(RevealError::UnknownTarget(parent));
        }
        let id = self.allocate();
        self.targets.insert(id, Target::new(variants, Some(parent)));
        let parent_visible = match self.targets.get_mut(&parent) {
            Some(target) => {
                target.children.push(id);
                target.visible
            }
            None => false,
        };

        let mut commands = Vec::new();
        if parent_visible {
            log::debug!("{id} joined revealed parent {parent}; showing immediately");
            self.reveal(id, &mut commands);
        }
        Ok((id, commands))
    }

    /// Start watching a subject. Re-observing is a no-op; observing a subject
    /// whose membership is already known to be inside the viewport triggers it.
    ///
    /// # Errors
    ///
    /// Fails for unknown ids and for child targets, which are gated by their
    /// parent instead of their own visibility.
    pub fn observe(&mut self, target: TargetId) -> Result<Vec<RevealCommand>, RevealError> {
        let entry = self.targets.get_mut(&target).ok_or(RevealError::UnknownTarget(target))?;
        let subject = entry.subject.as_mut().ok_or(RevealError::NotASubject(target))?;
        if subject.phase != RevealPhase::Unobserved {
            return Ok(Vec::new());
        }
        subject.phase = RevealPhase::Observed;
        if subject.in_viewport {
            return Ok(self.trigger(target));
        }
        Ok(Vec::new())
    }

    /// Record a viewport membership change for a subject.
    ///
    /// Only an `Observed` subject entering the viewport triggers. Reports for
    /// unknown or already-triggered subjects are ignored.
    pub fn set_membership(&mut self, target: TargetId, in_viewport: bool) -> Vec<RevealCommand> {
        let Some(subject) = self.targets.get_mut(&target).and_then(|t| t.subject.as_mut()) else {
            log::debug!("ignoring membership report for {target}");
            return Vec::new();
        };
        let entered = in_viewport && !subject.in_viewport;
        subject.in_viewport = in_viewport;
        if entered && subject.phase == RevealPhase::Observed {
            return self.trigger(target);
        }
        Vec::new()
    }

    /// Complete a scheduled child reveal.
    ///
    /// Stale fires (target unmounted, already shown, or never scheduled) are
    /// no-ops.
    pub fn fire(&mut self, target: TargetId) -> Vec<RevealCommand> {
        let Some(entry) = self.targets.get_mut(&target) else {
            log::debug!("dropping stale reveal fire for {target}");
            return Vec::new();
        };
        if !entry.pending || entry.visible {
            return Vec::new();
        }
        entry.pending = false;
        let mut commands = Vec::new();
        self.reveal(target, &mut commands);
        commands
    }

    /// Remove a target and all of its descendants. Returns how many targets
    /// were removed.
    pub fn unmount(&mut self, target: TargetId) -> usize {
        let Some(entry) = self.targets.get(&target) else {
            return 0;
        };
        if let Some(parent) = entry.parent
            && let Some(parent) = self.targets.get_mut(&parent)
        {
            parent.children.retain(|child| *child != target);
        }

        let mut removed = 0;
        let mut stack = vec![target];
        while let Some(id) = stack.pop() {
            if let Some(entry) = self.targets.remove(&id) {
                stack.extend(entry.children);
                removed += 1;
            }
        }
        removed
    }

    #[must_use]
    pub fn phase(&self, target: TargetId) -> Option<RevealPhase> {
        self.targets.get(&target)?.subject.map(|s| s.phase)
    }

    #[must_use]
    pub fn is_triggered(&self, target: TargetId) -> bool {
        self.phase(target) == Some(RevealPhase::Triggered)
    }

    #[must_use]
    pub fn is_visible(&self, target: TargetId) -> bool {
        self.targets.get(&target).is_some_and(|t| t.visible)
    }

    #[must_use]
    pub fn is_mounted(&self, target: TargetId) -> bool {
        self.targets.contains_key(&target)
    }

    /// Children of `target` in declaration order.
    #[must_use]
    pub fn children(&self, target: TargetId) -> &[TargetId] {
        self.targets.get(&target).map_or(&[], |t| t.children.as_slice())
    }

    fn allocate(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        id
    }

    fn trigger(&mut self, target: TargetId) -> Vec<RevealCommand> {
        let mut commands = Vec::new();
        if let Some(subject) = self.targets.get_mut(&target).and_then(|t| t.subject.as_mut()) {
            subject.phase = RevealPhase::Triggered;
            log::debug!("{target} entered viewport; revealing");
            self.reveal(target, &mut commands);
        }
        commands
    }

    fn reveal(&mut self, target: TargetId, out: &mut Vec<RevealCommand>) {
        let Some(entry) = self.targets.get_mut(&target) else {
            return;
        };
        if entry.visible {
            return;
        }
        entry.visible = true;
        entry.pending = false;
        out.push(RevealCommand::Show(target));

        let variants = entry.variants;
        let children = entry.children.clone();
        for (index, child) in children.into_iter().enumerate() {
            let Some(child_entry) = self.targets.get_mut(&child) else {
                continue;
            };
            if child_entry.visible {
                continue;
            }
            child_entry.pending = true;
            out.push(RevealCommand::Schedule { target: child, delay_ms: variants.child_delay_ms(index) });
        }
    }
}
