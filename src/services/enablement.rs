//! Expense field enablement
//!
//! Ties each category checkbox to its amount input: a checked box makes the
//! amount editable and focused, an unchecked box disables and clears it.

use crate::document::{ExpenseBinding, Marker, Patch, PatchOp};

/// Changes that bring the amount field in line with its checkbox
pub fn sync_amount_field(binding: &ExpenseBinding, checked: bool) -> Patch {
    let mut patch = Patch::new();
    let amount = binding.amount;

    if checked {
        patch.push(PatchOp::SetDisabled {
            target: amount,
            disabled: false,
        });
        patch.push(PatchOp::Focus(amount));
        patch.push(PatchOp::AddContainerMarker {
            target: amount,
            marker: Marker::ExpenseEnabled,
        });
    } else {
        patch.push(PatchOp::SetDisabled {
            target: amount,
            disabled: true,
        });
        patch.push(PatchOp::SetValue {
            target: amount,
            value: String::new(),
        });
        patch.push(PatchOp::RemoveContainerMarker {
            target: amount,
            marker: Marker::ExpenseEnabled,
        });
    }

    patch
}

/// Clear an amount typed while its checkbox is unchecked
pub fn clear_unless_checked(binding: &ExpenseBinding, checked: bool) -> Patch {
    let mut patch = Patch::new();
    if !checked {
        patch.push(PatchOp::SetValue {
            target: binding.amount,
            value: String::new(),
        });
    }
    patch
}
