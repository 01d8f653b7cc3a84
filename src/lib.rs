#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Emoji listings and font subsetting ranges derived from the Unicode emoji-test registry.
//!
//! The registry (`emoji-test.txt`) lists every emoji sequence on its own line, under
//! `# group:` section headers:
//!
//! ```text
//! # group: Smileys & Emotion
//! 1F600 ; fully-qualified # 😀 E1.0 grinning face
//! 1F3FB ; component       # 🏻 E1.0 light skin tone
//! ```
//!
//! `EmojiRegistry` parses it into groups of `EmojiRecord`s. Three read-only views are
//! derived from a registry:
//!
//! * `CategoryListing`, the symbols bucketed into eight fixed categories and rendered
//!   as a JSON document with a stable key order;
//! * `UnicodeRange`, every code point compacted into a CSS `unicode-range` descriptor;
//! * `EmojiStats`, per-group and aggregate record counts.
//!
//! # Parsing rules
//!
//! * Everything before the first `# group:` header is ignored.
//! * Only `fully-qualified` and `component` records are read. Unqualified and
//!   minimally-qualified records, subgroup headers and comments are skipped.
//! * A group that ends with fewer than two records is dropped.
//! * Records whose code point column holds no hexadecimal value are skipped with a
//!   warning.
//!
//! Skin-tone variants (records whose description contains "skin tone") stay in the
//! registry. They are left out of the category listing and of the unique count, but
//! contribute their code points to the unicode-range.

pub(crate) mod error;

pub(crate) mod line_filter;

pub(crate) mod emoji_ty;

pub(crate) mod emoji_group;

pub(crate) mod registry;

pub(crate) mod category;

pub(crate) mod emoji_json;

pub(crate) mod code_range;

pub(crate) mod stats;

pub use error::{ParseError, RangeError, RegistryError, Result};

pub use line_filter::{filter_lines, GROUP_MARKER};

pub use emoji_ty::{CodePointVec, EmojiRecord, Qualification, SKIN_TONE};

pub use emoji_group::{EmojiGroup, MIN_GROUP_LEN};

pub use registry::EmojiRegistry;

pub use category::Category;

pub use emoji_json::CategoryListing;

pub use code_range::{compact, CodeRange, UnicodeRange, MAX_IGNORED_CODE_POINT};

pub use stats::{EmojiStats, GroupCount};
