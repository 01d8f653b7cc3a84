use crate::error::ParseError;
use std::fmt;

/// Inline storage for the code points of one emoji sequence.
///
/// Most sequences are a single code point, ZWJ families and tag flags run up to seven.
pub type CodePointVec = smallvec::SmallVec<[u32; 8]>;

/// Description fragment shared by all skin-tone modifier records and variants.
pub const SKIN_TONE: &str = "skin tone";

/// Qualification status of a record line, as written in its status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualification {
    /// A complete, renderable emoji sequence.
    FullyQualified,
    /// A modifier listed on its own, such as a skin tone or hair style.
    Component,
}

impl Qualification {
    /// Record kinds in the order a line is checked against them.
    pub const ALL: [Qualification; 2] = [Qualification::FullyQualified, Qualification::Component];

    /// The separator and status word that identify this kind of record line.
    pub const fn marker(self) -> &'static str {
        match self {
            Qualification::FullyQualified => "; fully-qualified",
            Qualification::Component => "; component",
        }
    }

    /// Returns the record kind of `line`, or `None` for headers, comments and
    /// records of other statuses.
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|qualification| line.contains(qualification.marker()))
    }
}

/// One emoji record of the registry.
#[derive(Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    group: String,
    symbol: String,
    description: String,
    version: Option<String>,
    sequence: String,
    code_points: CodePointVec,
    qualification: Qualification,
}

impl EmojiRecord {
    /// Tokenizes a record line and stamps it with the name of its group.
    ///
    /// Text left of `qualification`'s marker holds the hexadecimal code points,
    /// text right of it is the `# <symbol> [E<version>] <description>` comment.
    /// Tokens that are not valid hexadecimal are skipped; the line is rejected
    /// only when no code point is left, or when the comment carries no symbol.
    pub fn from_line(
        group: &str,
        line: &str,
        qualification: Qualification,
    ) -> Result<Self, ParseError> {
        let marker = qualification.marker();
        let (sequence, comment) = line
            .split_once(marker)
            .ok_or(ParseError::MarkerNotFound { marker })?;
        let sequence = sequence.trim();
        let comment = comment.trim();

        let code_points = sequence
            .split(' ')
            .filter(|token| !token.is_empty())
            .filter_map(|token| u32::from_str_radix(token, 16).ok())
            .collect::<CodePointVec>();
        if code_points.is_empty() {
            return Err(ParseError::NoCodePoints {
                sequence: sequence.to_owned(),
            });
        }

        // token 0 is the `#` that opens the comment
        let mut tokens = comment.split(' ').skip(1);
        let symbol = tokens
            .next()
            .filter(|symbol| !symbol.is_empty())
            .ok_or_else(|| ParseError::MissingSymbol {
                comment: comment.to_owned(),
            })?;
        let mut rest = tokens.collect::<Vec<_>>();
        let version = if rest.first().map_or(false, |token| is_version_token(token)) {
            Some(rest.remove(0).to_owned())
        } else {
            None
        };

        let record = EmojiRecord {
            group: group.to_owned(),
            symbol: symbol.to_owned(),
            description: rest.join(" "),
            version,
            sequence: sequence.to_owned(),
            code_points,
            qualification,
        };
        if !record.is_single_grapheme() {
            log::debug!("{:?} renders as more than one grapheme cluster", record);
        }
        if !record.symbol_matches_code_points() {
            log::debug!("{:?} symbol differs from its code points", record);
        }
        Ok(record)
    }

    /// Name of the group this record was listed under.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The rendered emoji.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Free-text name, e.g. "grinning face".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Emoji version the sequence was introduced in, e.g. `E1.0`.
    /// Registries before 13.0 do not list it.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The code point column as written in the registry, trimmed.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Decoded code points, in source order. Never empty.
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// Qualification status of the line this record came from.
    pub fn qualification(&self) -> Qualification {
        self.qualification
    }

    /// Whether this is a skin-tone modifier or a skin-tone variant of another emoji.
    pub fn is_skin_tone_variant(&self) -> bool {
        self.description.contains(SKIN_TONE)
    }

    /// Whether the symbol forms exactly one extended grapheme cluster.
    pub fn is_single_grapheme(&self) -> bool {
        use unicode_segmentation::UnicodeSegmentation;

        let mut graphemes = self.symbol.graphemes(true);
        graphemes.next().is_some() && graphemes.next().is_none()
    }

    /// Whether the symbol is exactly the code point sequence of the record.
    pub fn symbol_matches_code_points(&self) -> bool {
        self.symbol
            .chars()
            .map(u32::from)
            .eq(self.code_points.iter().copied())
    }
}

impl fmt::Debug for EmojiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmojiRecord({} ", self.sequence)?;
        for ch in self.symbol.chars() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, " {:?})", self.description)
    }
}

fn is_version_token(token: &str) -> bool {
    match token.strip_prefix('E').and_then(|v| v.split_once('.')) {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.bytes().chain(minor.bytes()).all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
