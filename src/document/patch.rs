//! Patch descriptions
//!
//! Services compute a list of visual changes instead of mutating the
//! document. A rendering surface applies them in order.

use super::{ElementRef, Marker, Styling};

/// Cosmetic transition when an element appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeIn,
}

/// One visual change
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    SetDisabled { target: ElementRef, disabled: bool },
    SetValue { target: ElementRef, value: String },
    SetChecked { target: ElementRef, checked: bool },
    Focus(ElementRef),
    ScrollIntoView(ElementRef),
    AddMarker { target: ElementRef, marker: Marker },
    RemoveMarker { target: ElementRef, marker: Marker },
    AddContainerMarker { target: ElementRef, marker: Marker },
    RemoveContainerMarker { target: ElementRef, marker: Marker },
    /// `None` removes the adjacent message
    SetFeedback { target: ElementRef, message: Option<String> },
    SetText { target: ElementRef, text: String },
    SetStyling { target: ElementRef, styling: Styling },
    Show { target: ElementRef, transition: Option<Transition> },
    Hide(ElementRef),
}

/// An ordered list of changes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    ops: Vec<PatchOp>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: PatchOp) {
        self.ops.push(op);
    }

    /// Append every change from `other`
    pub fn extend(&mut self, other: Patch) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[PatchOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether any change targets `target`
    pub fn touches(&self, target: ElementRef) -> bool {
        self.ops.iter().any(|op| op.target() == target)
    }
}

impl FromIterator<PatchOp> for Patch {
    fn from_iter<I: IntoIterator<Item = PatchOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl PatchOp {
    /// The element this change applies to
    pub fn target(&self) -> ElementRef {
        match self {
            Self::SetDisabled { target, .. }
            | Self::SetValue { target, .. }
            | Self::SetChecked { target, .. }
            | Self::AddMarker { target, .. }
            | Self::RemoveMarker { target, .. }
            | Self::AddContainerMarker { target, .. }
            | Self::RemoveContainerMarker { target, .. }
            | Self::SetFeedback { target, .. }
            | Self::SetText { target, .. }
            | Self::SetStyling { target, .. }
            | Self::Show { target, .. } => *target,
            Self::Focus(target) | Self::ScrollIntoView(target) | Self::Hide(target) => *target,
        }
    }
}

/// Anything a patch can be applied to
pub trait RenderSurface {
    /// Apply a single change
    fn apply_op(&mut self, op: &PatchOp);

    /// Apply every change in order
    fn apply(&mut self, patch: &Patch) {
        for op in patch.ops() {
            self.apply_op(op);
        }
    }
}
