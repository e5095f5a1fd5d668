//! Resource identity (Type/Group/Instance).

use std::fmt;

/// The Type/Group/Instance triple that identifies a resource inside a container.
///
/// Records are keyed by the low 32 bits of the instance; the high half, when the
/// index carries one, stays available on [`IndexEntry`](super::models::IndexEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub type_id: u32,
    pub group_id: u32,
    pub instance: u32,
}

impl ResourceKey {
    pub const fn new(type_id: u32, group_id: u32, instance: u32) -> Self {
        Self {
            type_id,
            group_id,
            instance,
        }
    }
}

impl From<(u32, u32, u32)> for ResourceKey {
    fn from((type_id, group_id, instance): (u32, u32, u32)) -> Self {
        Self::new(type_id, group_id, instance)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:08X}-{:08X}",
            self.type_id, self.group_id, self.instance
        )
    }
}
