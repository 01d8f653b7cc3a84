//! `emojiset` command line: prints the category listing, the unicode-range and the
//! statistics of an emoji-test registry file.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use emojiset::EmojiRegistry;
use std::{ffi::OsString, io, path::PathBuf};

const USAGE: &str = "\
Generating emojis list and its unicode ranges
Arguments:
\t--emoji\tGenerating list of emojis
\t--range\tGenerating unicode ranges for CSS
\t--stats\tGenerate statistics about emojis
\t--input\tPath to emoji-test.txt (default: ./emoji-test.txt)";

/// Emoji listings and unicode ranges from the Unicode emoji-test registry.
///
/// The registry can be downloaded from https://unicode.org/Public/emoji/
#[derive(Parser, Debug)]
#[command(name = "emojiset", version)]
struct Cli {
    /// Print the emoji symbols grouped by category, as JSON
    #[arg(long)]
    emoji: bool,

    /// Print the unicode-range covering every emoji, for CSS
    #[arg(long)]
    range: bool,

    /// Print record counts per group
    #[arg(long)]
    stats: bool,

    /// Registry file to read
    #[arg(short, long, value_name = "FILE", default_value = "emoji-test.txt")]
    input: PathBuf,
}

impl Cli {
    fn wants_output(&self) -> bool {
        self.emoji || self.range || self.stats
    }
}

/// Keeps only the flags the command defines, with the value of each option,
/// so anything else is ignored rather than rejected.
fn known_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();
    let mut switches = Vec::new();
    let mut options = Vec::new();
    for arg in cmd.get_arguments() {
        let names = if arg.get_action().takes_values() {
            &mut options
        } else {
            &mut switches
        };
        if let Some(long) = arg.get_long() {
            names.push(format!("--{}", long));
        }
        if let Some(short) = arg.get_short() {
            names.push(format!("-{}", short));
        }
    }

    let mut args = args.into_iter().peekable();
    let mut kept = args.next().into_iter().collect::<Vec<_>>();
    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            log::debug!("ignoring unrecognized argument {:?}", arg);
            continue;
        };
        if switches.iter().any(|name| name == text) {
            kept.push(arg);
        } else if options.iter().any(|name| name == text) {
            match args.next_if(|value| !value.to_string_lossy().starts_with('-')) {
                Some(value) => {
                    kept.push(arg);
                    kept.push(value);
                }
                None => log::debug!("ignoring {:?} without a value", arg),
            }
        } else if options.iter().any(|name| {
            name.starts_with("--")
                && text
                    .strip_prefix(name.as_str())
                    .map_or(false, |rest| rest.starts_with('='))
        }) {
            kept.push(arg);
        } else {
            log::debug!("ignoring unrecognized argument {:?}", arg);
        }
    }
    kept
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse_from(known_args(std::env::args_os()));
    if !cli.wants_output() {
        println!("{}", USAGE);
        return Ok(());
    }

    let registry = EmojiRegistry::from_path(&cli.input)?;

    if cli.emoji {
        println!("{}", registry.category_listing());
    }
    if cli.range {
        let range = registry
            .unicode_range()
            .with_context(|| format!("no unicode-range for {}", cli.input.display()))?;
        println!("{}", range);
    }
    if cli.stats {
        registry.stats().write_to(io::stdout().lock())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{known_args, Cli};
    use clap::{CommandFactory, Parser};
    use std::{ffi::OsString, path::PathBuf};

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_flags_are_dropped() {
        assert_eq!(
            args(&["emojiset", "--range", "-i", "data.txt", "--stats"]),
            known_args(args(&["emojiset", "--bogus", "--range", "-i", "data.txt", "-x", "--stats"]))
        );
        assert_eq!(
            args(&["emojiset", "--input=data.txt"]),
            known_args(args(&["emojiset", "--input=data.txt", "--colour=never"]))
        );
    }

    #[test]
    fn test_stray_words_are_dropped() {
        assert_eq!(args(&["emojiset"]), known_args(args(&["emojiset", "foo"])));
        assert_eq!(args(&["emojiset"]), known_args(args(&["emojiset", "-"])));
        assert_eq!(
            args(&["emojiset", "--range"]),
            known_args(args(&["emojiset", "--bogus", "value", "--range"]))
        );
        assert_eq!(
            args(&["emojiset", "--range"]),
            known_args(args(&["emojiset", "--range", "extra"]))
        );
    }

    #[test]
    fn test_switch_with_value_is_dropped() {
        assert_eq!(
            args(&["emojiset", "--stats"]),
            known_args(args(&["emojiset", "--emoji=true", "--stats"]))
        );
    }

    #[test]
    fn test_option_without_value_is_dropped() {
        assert_eq!(
            args(&["emojiset", "--range"]),
            known_args(args(&["emojiset", "--input", "--range"]))
        );
        assert_eq!(args(&["emojiset"]), known_args(args(&["emojiset", "-i"])));
    }

    #[test]
    fn test_leftover_input_parses() {
        let lists: [&[&str]; 5] = [
            &["emojiset", "foo"],
            &["emojiset", "--bogus", "value"],
            &["emojiset", "--emoji=true"],
            &["emojiset", "-"],
            &["emojiset", "--input"],
        ];
        for list in lists {
            let cli = Cli::try_parse_from(known_args(args(list))).unwrap();
            assert!(!cli.wants_output());
        }
    }

    #[test]
    fn test_unknown_only_wants_no_output() {
        let cli = Cli::parse_from(known_args(args(&["emojiset", "--all"])));
        assert!(!cli.wants_output());
    }

    #[test]
    fn test_flags_combine() {
        let cli = Cli::parse_from(args(&["emojiset", "--stats", "--emoji"]));
        assert!(cli.emoji && cli.stats && !cli.range);
        assert_eq!(PathBuf::from("emoji-test.txt"), cli.input);
    }
}
