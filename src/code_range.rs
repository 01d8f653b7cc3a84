use crate::error::RangeError;
use std::fmt;

/// Code points up to this value (ASCII controls, digits and punctuation used
/// by keycap sequences) are left out of a unicode-range.
pub const MAX_IGNORED_CODE_POINT: u32 = 57;

/// An inclusive run of consecutive code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRange {
    start: u32,
    end: u32,
}

impl CodeRange {
    /// A run covering a single code point.
    pub const fn single(code_point: u32) -> Self {
        CodeRange {
            start: code_point,
            end: code_point,
        }
    }

    /// First code point of the run.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last code point of the run, inclusive.
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of code points in the run.
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    fn try_extend(&mut self, code_point: u32) -> bool {
        if self.end.checked_add(1) == Some(code_point) {
            self.end = code_point;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:x}", self.start)
        } else {
            write!(f, "U+{:x}-{:x}", self.start, self.end)
        }
    }
}

/// A CSS `unicode-range` descriptor: ascending, disjoint, non-adjacent runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeRange(Vec<CodeRange>);

impl UnicodeRange {
    /// The runs, in ascending order.
    pub fn ranges(&self) -> &[CodeRange] {
        &self.0
    }
}

impl fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unicode-range: ")?;
        for (idx, range) in self.0.iter().enumerate() {
            if idx != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

/// Compacts code points into a [`UnicodeRange`].
///
/// Repeated code points count once and values up to
/// [`MAX_IGNORED_CODE_POINT`] are dropped; the rest are sorted and merged into
/// maximal runs of consecutive values.
pub fn compact<I>(code_points: I) -> Result<UnicodeRange, RangeError>
where
    I: IntoIterator<Item = u32>,
{
    let mut code_points = code_points
        .into_iter()
        .filter(|&cp| cp > MAX_IGNORED_CODE_POINT)
        .collect::<Vec<_>>();
    code_points.sort_unstable();
    code_points.dedup();

    let mut ranges: Vec<CodeRange> = Vec::new();
    for cp in code_points {
        let extended = ranges.last_mut().map_or(false, |last| last.try_extend(cp));
        if !extended {
            ranges.push(CodeRange::single(cp));
        }
    }
    if ranges.is_empty() {
        return Err(RangeError::Empty);
    }
    Ok(UnicodeRange(ranges))
}

#[cfg(test)]
mod tests {
    use super::{compact, CodeRange};
    use crate::error::RangeError;

    fn render(code_points: &[u32]) -> String {
        compact(code_points.iter().copied()).unwrap().to_string()
    }

    #[test]
    fn test_runs() {
        assert_eq!("unicode-range: U+41-43", render(&[0x41, 0x42, 0x43]));
        assert_eq!("unicode-range: U+41", render(&[0x41]));
        assert_eq!("unicode-range: U+41,U+43", render(&[0x41, 0x43]));
        assert_eq!(
            "unicode-range: U+a9,U+1f1e6-1f1e8,U+1f600-1f601",
            render(&[0x1F601, 0xA9, 0x1F1E8, 0x1F600, 0x1F1E6, 0x1F1E7])
        );
    }

    #[test]
    fn test_repeats_count_once() {
        let with_repeats = [0x1F44B, 0x1F3FB, 0x1F44B, 0x1F3FC, 0x1F3FB, 0x1F44C];
        let mut deduped = with_repeats.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(render(&with_repeats), render(&deduped));
        assert_eq!(
            "unicode-range: U+1f3fb-1f3fc,U+1f44b-1f44c",
            render(&with_repeats)
        );
    }

    #[test]
    fn test_low_code_points_are_dropped() {
        // keycap: digit one
        assert_eq!("unicode-range: U+20e3,U+fe0f", render(&[0x31, 0xFE0F, 0x20E3]));
        assert_eq!("unicode-range: U+3a", render(&[0x23, 0x39, 0x3A]));
    }

    #[test]
    fn test_empty_is_an_error() {
        assert_eq!(Err(RangeError::Empty), compact(Vec::new()));
        assert_eq!(Err(RangeError::Empty), compact([0x23, 0x30, 0x39]));
    }

    #[test]
    fn test_code_range_len() {
        let range = compact([0x1F600, 0x1F601, 0x1F602]).unwrap();
        assert_eq!(&[CodeRange { start: 0x1F600, end: 0x1F602 }], range.ranges());
        assert_eq!(3, range.ranges()[0].len());
        assert_eq!(1, CodeRange::single(0xA9).len());
    }
}
