//! Declarative reveal animation states.
//!
//! DESIGN
//! ======
//! Variants are plain immutable records shared by many elements. The only
//! behavior that consumes them lives in `util::reveal`; this module just
//! describes where an element starts (`hidden`), where it lands (`visible`),
//! and how a container spaces out its children.
//!
//! Rendering is CSS-driven: each state projects to an inline style string and
//! the browser interpolates between them using the `visible` transition.

#[cfg(test)]
#[path = "variants_test.rs"]
mod variants_test;

use serde::Deserialize;

/// Error returned by [`AnimationVariant::validate`] and
/// [`AnimationVariantSet::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VariantError {
    #[error("{state} opacity must be within 0.0..=1.0, got {value}")]
    Opacity { state: VariantName, value: f64 },
    #[error("{state} scale must be finite and non-negative, got {value}")]
    Scale { state: VariantName, value: f64 },
    #[error("{state} offset must be finite, got ({dx}, {dy})")]
    Offset { state: VariantName, dx: f64, dy: f64 },
    #[error("{state} cubic-bezier x control points must be within 0.0..=1.0")]
    Bezier { state: VariantName },
}

/// The two states every reveal variant set defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantName {
    Hidden,
    Visible,
}

impl VariantName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

impl std::fmt::Display for VariantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing curve for a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS `transition-timing-function` value.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }
}

/// Positional part of a variant: translation in CSS pixels plus uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self { dx: 0.0, dy: 0.0, scale: 1.0 }
    }
}

/// One named animation state and the transition used to arrive at it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationVariant {
    pub offset: Offset,
    pub opacity: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Default for AnimationVariant {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl AnimationVariant {
    /// Fully opaque, untransformed, instantaneous.
    #[must_use]
    pub fn at_rest() -> Self {
        Self { offset: Offset::default(), opacity: 1.0, duration_ms: 0, delay_ms: 0, easing: Easing::default() }
    }

    #[must_use]
    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset.dx = dx;
        self.offset.dy = dy;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.offset.scale = scale;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check value ranges; `state` only labels the error.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field found.
    pub fn validate(&self, state: VariantName) -> Result<(), VariantError> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(VariantError::Opacity { state, value: self.opacity });
        }
        let Offset { dx, dy, scale } = self.offset;
        if !scale.is_finite() || scale < 0.0 {
            return Err(VariantError::Scale { state, value: scale });
        }
        if !dx.is_finite() || !dy.is_finite() {
            return Err(VariantError::Offset { state, dx, dy });
        }
        if let Easing::CubicBezier(x1, y1, x2, y2) = self.easing {
            let finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
            if !finite || !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(VariantError::Bezier { state });
            }
        }
        Ok(())
    }

    /// Inline CSS for an element resting in this state.
    #[must_use]
    pub fn style(&self) -> String {
        let Offset { dx, dy, scale } = self.offset;
        let easing = self.easing.css();
        let (duration, delay) = (self.duration_ms, self.delay_ms);
        format!(
            "opacity: {opacity}; transform: translate3d({dx}px, {dy}px, 0) scale({scale}); \
             transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;",
            opacity = self.opacity,
        )
    }
}

/// Child scheduling for a container: child `i` starts at
/// `delay_children_ms + i * stagger_ms` after the container is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaggerSpec {
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

impl StaggerSpec {
    #[must_use]
    pub fn new(delay_children_ms: u32, stagger_ms: u32) -> Self {
        Self { delay_children_ms, stagger_ms }
    }

    /// Effective delay for the child at `index` in declaration order.
    #[must_use]
    pub fn child_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }
}

/// A `hidden`/`visible` pair plus optional child staggering.
///
/// Both states are mandatory fields, so a set can never lack one of them;
/// `visible` is the terminal state of every reveal.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AnimationVariantSet {
    pub hidden: AnimationVariant,
    pub visible: AnimationVariant,
    #[serde(default)]
    pub stagger: Option<StaggerSpec>,
}

impl AnimationVariantSet {
    #[must_use]
    pub fn new(hidden: AnimationVariant, visible: AnimationVariant) -> Self {
        Self { hidden, visible, stagger: None }
    }

    #[must_use]
    pub fn with_stagger(mut self, stagger: StaggerSpec) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Replace the `visible` transition delay (the element's own delay, not
    /// its children's).
    #[must_use]
    pub fn with_visible_delay(mut self, delay_ms: u32) -> Self {
        self.visible.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn variant(&self, name: VariantName) -> &AnimationVariant {
        match name {
            VariantName::Hidden => &self.hidden,
            VariantName::Visible => &self.visible,
        }
    }

    /// Delay for the child at `index` relative to this element's reveal.
    /// Containers without a stagger reveal all children together.
    #[must_use]
    pub fn child_delay_ms(&self, index: usize) -> u32 {
        self.stagger.map_or(0, |stagger| stagger.child_delay_ms(index))
    }

    /// # Errors
    ///
    /// Returns the first invalid field of either state.
    pub fn validate(&self) -> Result<(), VariantError> {
        self.hidden.validate(VariantName::Hidden)?;
        self.visible.validate(VariantName::Visible)
    }

    /// Inline style for the current reveal state.
    #[must_use]
    pub fn style_for(&self, visible: bool) -> String {
        if visible {
            self.visible.style()
        } else {
            self.hidden.style()
        }
    }
}

// =============================================================
// Presets
// =============================================================

/// Rise 20px while fading in.
#[must_use]
pub fn fade_up(duration_ms: u32) -> AnimationVariantSet {
    AnimationVariantSet::new(
        AnimationVariant::at_rest().with_opacity(0.0).with_offset(0.0, 20.0),
        AnimationVariant::at_rest().with_duration(duration_ms),
    )
}

/// Drop in from 20px above while fading in.
#[must_use]
pub fn fade_down(duration_ms: u32) -> AnimationVariantSet {
    AnimationVariantSet::new(
        AnimationVariant::at_rest().with_opacity(0.0).with_offset(0.0, -20.0),
        AnimationVariant::at_rest().with_duration(duration_ms),
    )
}

#[must_use]
pub fn fade_in(duration_ms: u32) -> AnimationVariantSet {
    AnimationVariantSet::new(
        AnimationVariant::at_rest().with_opacity(0.0),
        AnimationVariant::at_rest().with_duration(duration_ms),
    )
}

/// Grow from 80% while fading in.
#[must_use]
pub fn scale_in(duration_ms: u32) -> AnimationVariantSet {
    AnimationVariantSet::new(
        AnimationVariant::at_rest().with_opacity(0.0).with_scale(0.8),
        AnimationVariant::at_rest().with_duration(duration_ms),
    )
}

/// Slide horizontally by `dx` pixels into place while fading in.
#[must_use]
pub fn slide_in(dx: f64, duration_ms: u32) -> AnimationVariantSet {
    AnimationVariantSet::new(
        AnimationVariant::at_rest().with_opacity(0.0).with_offset(dx, 0.0),
        AnimationVariant::at_rest().with_duration(duration_ms),
    )
}

/// Fading container that staggers its children.
#[must_use]
pub fn container(duration_ms: u32, stagger: StaggerSpec) -> AnimationVariantSet {
    fade_in(duration_ms).with_stagger(stagger)
}
