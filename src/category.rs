/// Output bucket of the categorized emoji listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Smileys, emotions, people and body parts.
    People,
    /// Animals and nature.
    Nature,
    /// Food and drink.
    Food,
    /// Travel and places.
    Travel,
    /// Activities.
    Activity,
    /// Objects.
    Objects,
    /// Symbols.
    Symbols,
    /// Flags.
    Flags,
}

/// Registry group names and the category they are listed under.
/// `None` marks groups that are left out of the listing.
const GROUP_CATEGORIES: &[(&str, Option<Category>)] = &[
    ("Component", None),
    ("Smileys & People", Some(Category::People)),
    ("Smileys & Emotion", Some(Category::People)),
    ("People & Body", Some(Category::People)),
    ("Animals & Nature", Some(Category::Nature)),
    ("Food & Drink", Some(Category::Food)),
    ("Travel & Places", Some(Category::Travel)),
    ("Activities", Some(Category::Activity)),
    ("Objects", Some(Category::Objects)),
    ("Symbols", Some(Category::Symbols)),
    ("Flags", Some(Category::Flags)),
];

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 8] = [
        Category::People,
        Category::Nature,
        Category::Food,
        Category::Travel,
        Category::Activity,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    /// JSON key of the category.
    pub const fn key(self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Nature => "nature",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Activity => "activity",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags",
        }
    }

    /// Category a registry group is listed under, or `None` if the group is
    /// unknown or left out.
    pub fn for_group(name: &str) -> Option<Self> {
        GROUP_CATEGORIES
            .iter()
            .find(|(group, _)| *group == name)
            .and_then(|(_, category)| *category)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
