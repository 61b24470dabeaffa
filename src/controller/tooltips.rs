//! Optional tooltip capability
//!
//! A rendering surface that can show tooltips injects a provider; without
//! one, tooltip setup is simply skipped.

use std::collections::HashMap;

use crate::document::ElementRef;

/// Something that can show tooltips for elements
pub trait TooltipProvider {
    /// Register tooltip text for an element
    fn attach(&mut self, target: ElementRef, text: &str);

    /// Tooltip registered for an element
    fn tooltip_for(&self, target: ElementRef) -> Option<&str>;
}

/// Tooltips shown as a hint line for the focused element
#[derive(Debug, Clone, Default)]
pub struct HintTooltips {
    hints: HashMap<ElementRef, String>,
}

impl HintTooltips {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl TooltipProvider for HintTooltips {
    fn attach(&mut self, target: ElementRef, text: &str) {
        self.hints.insert(target, text.to_string());
    }

    fn tooltip_for(&self, target: ElementRef) -> Option<&str> {
        self.hints.get(&target).map(String::as_str)
    }
}
