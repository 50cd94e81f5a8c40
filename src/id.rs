use gpui::{ElementId, EntityId, SharedString};

/// Element id namespace of one pin input, derived from its state entity.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PinId(SharedString);

impl PinId {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    pub fn from_entity(entity_id: EntityId) -> Self {
        Self(format!("smooth-pin-{}", entity_id.as_u64()).into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn slot(&self, slot: &str) -> ElementId {
        ElementId::Name(format!("{}::{slot}", self.0).into())
    }

    pub fn slot_index(&self, slot: &str, index: impl std::fmt::Display) -> ElementId {
        ElementId::Name(format!("{}::{slot}::{index}", self.0).into())
    }
}

impl From<PinId> for ElementId {
    fn from(value: PinId) -> Self {
        ElementId::Name(value.0)
    }
}

impl From<&'static str> for PinId {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_namespaced_by_id() {
        let id = PinId::new("otp");
        assert_eq!(id.slot("root"), ElementId::Name("otp::root".into()));
        assert_eq!(
            id.slot_index("cell", 3),
            ElementId::Name("otp::cell::3".into())
        );
    }

    #[test]
    fn different_ids_never_share_slots() {
        assert_ne!(
            PinId::new("a").slot_index("shake", 1),
            PinId::new("b").slot_index("shake", 1)
        );
    }
}
