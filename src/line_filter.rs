/// Marker that opens a section of the registry.
pub const GROUP_MARKER: &str = "# group:";

/// Drops the preamble of a registry: yields the first line containing
/// [`GROUP_MARKER`] and every line after it, unchanged and in order.
///
/// Input without a marker yields nothing.
pub fn filter_lines<I>(lines: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .skip_while(|line| !line.as_ref().contains(GROUP_MARKER))
}
