use crate::{
    code_range::{self, UnicodeRange},
    emoji_group::EmojiGroup,
    emoji_json::CategoryListing,
    emoji_ty::{EmojiRecord, Qualification},
    error::{RangeError, RegistryError, Result},
    line_filter::{filter_lines, GROUP_MARKER},
    stats::EmojiStats,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    mem,
    path::Path,
};

/// The parsed registry: every complete group, in the order their headers appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiRegistry {
    groups: Vec<EmojiGroup>,
}

impl EmojiRegistry {
    /// Reads and parses a registry file.
    ///
    /// The file is read to the end and closed before parsing starts.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RegistryError::io(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| RegistryError::io(path, e))?;
        let registry = Self::parse_lines(lines);
        log::info!(
            "loaded {} groups, {} records from {}",
            registry.groups.len(),
            registry.records().count(),
            path.display()
        );
        Ok(registry)
    }

    /// Reads all lines of `reader`, then parses them.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::parse_lines(lines))
    }

    /// Parses the raw lines of a registry, preamble included.
    pub fn parse_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_lines(filter_lines(lines))
    }

    /// Builds groups from lines that start at a group header.
    ///
    /// A group is closed by the next header or by the end of input, and kept
    /// only if it holds at least two records. Lines that are neither headers
    /// nor fully-qualified or component records are ignored.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut groups = Vec::new();
        let mut current = EmojiGroup::new(String::new());
        for line in lines {
            let line = line.as_ref();
            if line.contains(GROUP_MARKER) {
                let next = EmojiGroup::new(group_name(line));
                finish_group(&mut groups, mem::replace(&mut current, next));
                continue;
            }
            let Some(qualification) = Qualification::detect(line) else {
                continue;
            };
            match EmojiRecord::from_line(current.name(), line, qualification) {
                Ok(record) => current.push(record),
                Err(err) => log::warn!("skipping record line {:?}: {}", line, err),
            }
        }
        finish_group(&mut groups, current);
        EmojiRegistry { groups }
    }

    /// Complete groups in header order.
    pub fn groups(&self) -> &[EmojiGroup] {
        &self.groups
    }

    /// Every record of every group, in traversal order.
    pub fn records(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.groups.iter().flat_map(|group| group.records())
    }

    /// Every code point of every record, repeats included.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.records()
            .flat_map(|record| record.code_points().iter().copied())
    }

    /// Symbols bucketed by output category.
    pub fn category_listing(&self) -> CategoryListing<'_> {
        CategoryListing::from_registry(self)
    }

    /// The compacted `unicode-range` covering every code point of the registry.
    pub fn unicode_range(&self) -> std::result::Result<UnicodeRange, RangeError> {
        code_range::compact(self.code_points())
    }

    /// Per-group and aggregate record counts.
    pub fn stats(&self) -> EmojiStats<'_> {
        EmojiStats::collect(self)
    }
}

fn group_name(line: &str) -> &str {
    line.split(": ").nth(1).unwrap_or_default()
}

fn finish_group(groups: &mut Vec<EmojiGroup>, group: EmojiGroup) {
    if group.is_complete() {
        groups.push(group);
    } else if !group.name().is_empty() {
        log::debug!(
            "dropping group {:?} with {} record(s)",
            group.name(),
            group.len()
        );
    }
}
