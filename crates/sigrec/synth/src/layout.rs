//! Layout planning: signature to fixed attribute storage.

use serde::{Deserialize, Serialize};

use sigrec_types::{ParamKind, Signature};

/// What one attribute slot stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// A single value from one non-variadic parameter.
    Scalar,
    /// The tuple holding excess positional values.
    Sequence,
    /// The mapping holding excess keyword values.
    Mapping,
}

/// One named attribute slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Attribute name, equal to the declaring parameter's name.
    pub name: String,
    /// What the slot stores.
    pub kind: SlotKind,
}

/// The fixed, ordered attribute storage plan for a record type.
///
/// Slot order equals declaration order and is significant both for the
/// textual representation and for positional destructuring. At most one
/// `Sequence` and one `Mapping` slot exist; the `Mapping` slot, when
/// present, is always last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLayout {
    slots: Vec<Slot>,
}

impl AttributeLayout {
    /// Plan the layout for a validated signature: one slot per parameter,
    /// in declaration order.
    pub fn plan(signature: &Signature) -> Self {
        let slots = signature
            .params()
            .iter()
            .map(|param| Slot {
                name: param.name().to_string(),
                kind: match param.kind() {
                    ParamKind::VarPositional => SlotKind::Sequence,
                    ParamKind::VarKeyword => SlotKind::Mapping,
                    _ => SlotKind::Scalar,
                },
            })
            .collect();
        Self { slots }
    }

    /// The slots, in declaration order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Attribute names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Number of attribute slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the layout has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the named slot, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Ordered schema equality: same names and slot kinds in the same
    /// order. This is the comparison record equality uses to decide
    /// whether two instances are comparable at all.
    pub fn matches(&self, other: &AttributeLayout) -> bool {
        self.slots == other.slots
    }
}
