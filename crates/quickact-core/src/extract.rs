//! Command extraction from free-form text
//!
//! Scans text line by line, collecting `/keyword arg...` lines as
//! [`Invocation`] values and removing them from the display text. Extraction
//! is a pure function: re-extracting the same text yields identical results.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One command occurrence extracted from text
///
/// The keyword is carried verbatim whether or not it resolves to a registered
/// command; unresolved keywords are reported as invalid by the executor
/// rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Keyword as written after the slash
    pub keyword: String,

    /// Raw whitespace-separated argument tokens
    pub args: Vec<String>,

    /// 1-indexed source line the command appeared on
    pub line: usize,
}

/// Result of extracting commands from a text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Display text with all command lines removed
    pub cleaned_text: String,

    /// Extracted commands in order of appearance
    pub invocations: Vec<Invocation>,
}

/// Extract quick-action invocations from raw text
///
/// A line is a command if, after trimming surrounding whitespace, it starts
/// with `/` followed by a keyword token (`[A-Za-z0-9_]+`) terminated by
/// whitespace or end of line. Command lines are removed from the cleaned
/// text; a blank run created by removal collapses to at most one blank line,
/// and when anything was removed, blank lines dangling at the end of the
/// cleaned text are trimmed.
///
/// Texts containing no command lines are returned byte-for-byte unchanged.
pub fn extract(text: &str) -> Extraction {
    let mut invocations: Vec<Invocation> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();
    // True while the lines being scanned directly follow a removed command
    // line, with nothing but blanks in between.
    let mut removal_pending = false;

    for (index, line) in text.lines().enumerate() {
        if let Some((keyword, args)) = parse_command_line(line) {
            debug!(keyword = %keyword, line = index + 1, "extracted command line");
            invocations.push(Invocation {
                keyword,
                args,
                line: index + 1,
            });
            removal_pending = true;
            continue;
        }

        if line.trim().is_empty() {
            // A blank adjacent to a removal site is dropped when the cleaned
            // text already ends in a blank (or is still empty), so a removed
            // command block leaves at most one blank line behind.
            if removal_pending && kept.last().map_or(true, |l| l.trim().is_empty()) {
                continue;
            }
        } else {
            removal_pending = false;
        }
        kept.push(line);
    }

    if invocations.is_empty() {
        return Extraction {
            cleaned_text: text.to_string(),
            invocations,
        };
    }

    while kept.last().map_or(false, |l| l.trim().is_empty()) {
        kept.pop();
    }

    Extraction {
        cleaned_text: kept.join("\n"),
        invocations,
    }
}

/// Parse a single line as a command
///
/// Returns the keyword and raw argument tokens, or None if the line is
/// display text.
fn parse_command_line(line: &str) -> Option<(String, Vec<String>)> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('/')?;

    let keyword_len = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count();
    if keyword_len == 0 {
        return None;
    }

    // Keyword chars are all ASCII, so the char count is also the byte offset.
    let (keyword, tail) = rest.split_at(keyword_len);
    if !tail.is_empty() && !tail.starts_with(char::is_whitespace) {
        return None;
    }

    let args = tail.split_whitespace().map(str::to_string).collect();
    Some((keyword.to_string(), args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_commands_is_unchanged() {
        let text = "plain description\n\nwith a blank line\n";
        let extraction = extract(text);

        assert_eq!(extraction.cleaned_text, text);
        assert!(extraction.invocations.is_empty());
    }

    #[test]
    fn test_trailing_command_is_stripped() {
        let extraction = extract("bug description\n/remove_milestone");

        assert_eq!(extraction.cleaned_text, "bug description");
        assert_eq!(extraction.invocations.len(), 1);
        assert_eq!(extraction.invocations[0].keyword, "remove_milestone");
        assert_eq!(extraction.invocations[0].line, 2);
    }

    #[test]
    fn test_command_only_text_cleans_to_empty() {
        let extraction = extract("/remove_milestone");

        assert_eq!(extraction.cleaned_text, "");
        assert_eq!(extraction.invocations.len(), 1);
    }

    #[test]
    fn test_command_arguments_are_tokenized() {
        let extraction = extract("/milestone %v1.0");

        assert_eq!(extraction.invocations[0].keyword, "milestone");
        assert_eq!(extraction.invocations[0].args, vec!["%v1.0".to_string()]);
    }

    #[test]
    fn test_multiple_commands_preserve_order() {
        let extraction = extract("/milestone %v1.0\nsome text\n/close");

        let keywords: Vec<&str> = extraction
            .invocations
            .iter()
            .map(|i| i.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["milestone", "close"]);
        assert_eq!(extraction.cleaned_text, "some text");
    }

    #[test]
    fn test_blank_run_collapses_to_one_blank() {
        let extraction = extract("first paragraph\n\n/close\n\nsecond paragraph");

        assert_eq!(extraction.cleaned_text, "first paragraph\n\nsecond paragraph");
    }

    #[test]
    fn test_leading_command_leaves_no_leading_blank() {
        let extraction = extract("/close\n\nbody text");

        assert_eq!(extraction.cleaned_text, "body text");
    }

    #[test]
    fn test_indented_command_line_matches() {
        let extraction = extract("  /remove_milestone  ");

        assert_eq!(extraction.invocations.len(), 1);
        assert_eq!(extraction.cleaned_text, "");
    }

    #[test]
    fn test_unrecognized_keyword_is_still_extracted() {
        let extraction = extract("/shrug nothing here");

        assert_eq!(extraction.invocations.len(), 1);
        assert_eq!(extraction.invocations[0].keyword, "shrug");
    }

    #[test]
    fn test_slash_without_keyword_is_display_text() {
        let extraction = extract("/ not a command\n// also not\n/");

        assert!(extraction.invocations.is_empty());
        assert_eq!(extraction.cleaned_text, "/ not a command\n// also not\n/");
    }

    #[test]
    fn test_inline_slash_word_is_display_text() {
        let extraction = extract("see the /etc directory for details");

        // Only whole lines can be commands; a slash mid-line is display text.
        assert!(extraction.invocations.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "a\n/close\n\nb\n/remove_milestone";
        assert_eq!(extract(text), extract(text));
    }
}
