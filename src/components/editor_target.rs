//! Edit Target Type
//!
//! Which record a create/edit modal is working on.

/// Edit target - a new record or an existing one by ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// Creating a new record
    New,
    /// Editing the record with this ID
    Existing(u32),
}

impl EditTarget {
    pub fn is_new(&self) -> bool {
        matches!(self, EditTarget::New)
    }
}
