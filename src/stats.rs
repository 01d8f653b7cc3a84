use crate::registry::EmojiRegistry;
use std::{fmt, io};

/// Record count of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCount<'a> {
    /// Group name.
    pub name: &'a str,
    /// Records in the group, components included.
    pub records: usize,
}

/// Record counts of a registry.
///
/// `Display` renders the human-readable report: one `<group>:  <n> emojies`
/// line per group, then the unique and total counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiStats<'a> {
    groups: Vec<GroupCount<'a>>,
    unique: usize,
    total: usize,
}

impl<'a> EmojiStats<'a> {
    /// Counts the records of `registry` in one pass.
    pub fn collect(registry: &'a EmojiRegistry) -> Self {
        let mut stats = EmojiStats::default();
        for group in registry.groups() {
            stats.groups.push(GroupCount {
                name: group.name(),
                records: group.len(),
            });
            stats.total += group.len();
            stats.unique += group
                .records()
                .iter()
                .filter(|record| !record.is_skin_tone_variant())
                .count();
        }
        stats
    }

    /// Per-group counts, in registry order.
    pub fn groups(&self) -> &[GroupCount<'a>] {
        &self.groups
    }

    /// Records that are not skin-tone variants.
    pub fn unique(&self) -> usize {
        self.unique
    }

    /// All records.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Writes the report to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for EmojiStats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}:  {} emojies", group.name, group.records)?;
        }
        writeln!(f, "{} uniq emojies", self.unique)?;
        writeln!(f, "Summary {} emojies", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::GroupCount;
    use crate::registry::EmojiRegistry;

    const SAMPLE: &[&str] = &[
        "# group: Smileys & People",
        "1F600 ; fully-qualified # 😀 grinning face",
        "1F604 ; fully-qualified # 😄 grinning face with smiling eyes",
        "1F600 1F3FB ; fully-qualified # 😀🏻 grinning face with light skin tone",
        "# group: Component",
        "1F3FB ; component # 🏻 light skin tone",
        "1F9B0 ; component # 🦰 red hair",
    ];

    #[test]
    fn test_counts() {
        let registry = EmojiRegistry::parse_lines(SAMPLE);
        let stats = registry.stats();
        assert_eq!(
            &[
                GroupCount {
                    name: "Smileys & People",
                    records: 3
                },
                GroupCount {
                    name: "Component",
                    records: 2
                },
            ],
            stats.groups()
        );
        assert_eq!(3, stats.unique());
        assert_eq!(5, stats.total());
    }

    #[test]
    fn test_report() {
        let registry = EmojiRegistry::parse_lines(SAMPLE);
        let mut out = Vec::new();
        registry.stats().write_to(&mut out).unwrap();
        assert_eq!(
            "Smileys & People:  3 emojies\nComponent:  2 emojies\n3 uniq emojies\nSummary 5 emojies\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_empty_report() {
        let registry = EmojiRegistry::default();
        assert_eq!(
            "0 uniq emojies\nSummary 0 emojies\n",
            registry.stats().to_string()
        );
    }
}
