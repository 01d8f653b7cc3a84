use crate::emoji_ty::EmojiRecord;

/// Groups with fewer records than this are dropped from a registry.
pub const MIN_GROUP_LEN: usize = 2;

/// A named section of the registry and the records listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiGroup {
    name: String,
    records: Vec<EmojiRecord>,
}

impl EmojiGroup {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        EmojiGroup {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: EmojiRecord) {
        self.records.push(record);
    }

    /// Section name, e.g. "Smileys & People".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in source order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Number of records, components included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the group has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.records.len() >= MIN_GROUP_LEN
    }
}
