use crate::{category::Category, registry::EmojiRegistry};
use std::fmt;

/// Emoji symbols bucketed by [`Category`].
///
/// Skin-tone variants are left out, everything else is kept in registry order
/// without deduplication. `Display` renders the single-line JSON document
/// `{"emojis":{"people":[...],...,"flags":[...]}}` with every category key
/// present, in [`Category::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListing<'a> {
    buckets: [Vec<&'a str>; 8],
}

impl<'a> CategoryListing<'a> {
    /// Buckets the symbols of every listed group of `registry`.
    pub fn from_registry(registry: &'a EmojiRegistry) -> Self {
        let mut listing = CategoryListing::default();
        for group in registry.groups() {
            let Some(category) = Category::for_group(group.name()) else {
                log::debug!("group {:?} is not listed", group.name());
                continue;
            };
            listing.buckets[category.index()].extend(
                group
                    .records()
                    .iter()
                    .filter(|record| !record.is_skin_tone_variant())
                    .map(|record| record.symbol()),
            );
        }
        listing
    }

    /// Symbols listed under `category`.
    pub fn symbols(&self, category: Category) -> &[&'a str] {
        &self.buckets[category.index()]
    }

    /// Renders the listing as JSON.
    pub fn to_json(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CategoryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // keys are emitted by hand, serde_json maps do not keep this order
        write!(f, "{{\"emojis\":{{")?;
        for (idx, category) in Category::ALL.iter().enumerate() {
            if idx != 0 {
                write!(f, ",")?;
            }
            let symbols =
                serde_json::to_string(self.symbols(*category)).map_err(|_| fmt::Error)?;
            write!(f, "\"{}\":{}", category.key(), symbols)?;
        }
        write!(f, "}}}}")
    }
}
