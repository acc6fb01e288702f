use derive_more::Display;
use snafu::Snafu;
use tracing::debug;

use crate::diagram::{
    EntryKind, PathEntry,
    entry::is_safe_segment,
    glyphs::{self, CELL_WIDTH, INDENT_CHARS},
};

/// Something the parser had to skip or guess while reading a diagram.
/// Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseIssue {
    #[display("input is not valid UTF-8 text")]
    NotText,
    #[display("line {line}: indent of {indent} is not a multiple of 4")]
    MisalignedIndent { line: usize, indent: usize },
    #[display("line {line}: depth {depth} skips a level (deepest allowed is {max_depth})")]
    DepthJump {
        line: usize,
        depth: usize,
        max_depth: usize,
    },
    #[display("line {line}: '{name}' is not a valid file or directory name")]
    InvalidName { line: usize, name: String },
    #[display("line {line}: '{name}' is nested under the file '{parent}'")]
    ChildOfFile {
        line: usize,
        name: String,
        parent: String,
    },
    #[display("line {line}: additional root '{name}'")]
    AdditionalRoot { line: usize, name: String },
    #[display("line {line}: a directory listing was not available ({text})")]
    Placeholder { line: usize, text: String },
}

/// The result of reading a diagram. Parsing never fails; problems are
/// collected in `issues` and the affected lines are left out of `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDiagram {
    pub root: Option<String>,
    pub entries: Vec<PathEntry>,
    pub issues: Vec<ParseIssue>,
}

impl ParsedDiagram {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Accepts the diagram only if it parsed without issues and describes at
    /// least one entry.
    pub fn validated(self) -> Result<ParsedDiagram, FormatError> {
        if let Some(issue) = self.issues.first() {
            return Err(FormatError::Malformed {
                issue: issue.clone(),
                count: self.issues.len(),
            });
        }
        if self.entries.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(self)
    }
}

#[derive(Debug, Snafu)]
pub enum FormatError {
    #[snafu(display("The diagram does not describe any files or directories"))]
    Empty,
    #[snafu(display("The diagram is malformed ({} issue(s)), first: {}", count, issue))]
    Malformed { issue: ParseIssue, count: usize },
}

/// Reads raw bytes, e.g. a file or stdin. Anything that is not UTF-8 gives
/// an empty diagram with a [`ParseIssue::NotText`] issue.
pub fn parse_bytes(bytes: &[u8]) -> ParsedDiagram {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse(text),
        Err(err) => {
            debug!("Diagram is not UTF-8: {}", err);
            ParsedDiagram {
                issues: vec![ParseIssue::NotText],
                ..ParsedDiagram::default()
            }
        }
    }
}

/// Reads diagram text into path entries in line order.
pub fn parse(text: &str) -> ParsedDiagram {
    let mut parser = TreeParser::default();
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line);
    }
    parser.finish()
}

/// A diagram line split into its indentation and its name.
#[derive(Debug, PartialEq, Eq)]
struct SplitLine<'a> {
    indent: usize,
    name: &'a str,
    kind: EntryKind,
}

fn split_line(line: &str) -> SplitLine<'_> {
    let clean = line.trim_start_matches(INDENT_CHARS);
    let indent = line.chars().count() - clean.chars().count();
    let clean = clean.trim_end_matches('\r');

    // Whitespace after a trailing `/` is padding, anywhere else it is part
    // of the name.
    let unpadded = clean.trim_end();
    let (name, kind) = if unpadded.ends_with(glyphs::DIRECTORY_SUFFIX) {
        (
            unpadded.trim_end_matches(glyphs::DIRECTORY_SUFFIX),
            EntryKind::Directory,
        )
    } else {
        (clean, EntryKind::File)
    };
    SplitLine { indent, name, kind }
}

#[derive(Debug, Default)]
struct TreeParser {
    /// Ancestry of the next line. Index 0 is the root line, which may be
    /// anonymous when the diagram starts indented.
    stack: Vec<(String, EntryKind)>,
    parsed: ParsedDiagram,
}

impl TreeParser {
    fn feed(&mut self, line_number: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let split = split_line(line);
        if split.name.is_empty() && split.kind == EntryKind::File {
            // Only glyphs on this line, e.g. a `│` spacer.
            return;
        }
        if split.kind == EntryKind::File && glyphs::is_placeholder(split.name) {
            self.issue(ParseIssue::Placeholder {
                line: line_number,
                text: split.name.to_string(),
            });
            return;
        }

        if split.indent % CELL_WIDTH != 0 {
            self.issue(ParseIssue::MisalignedIndent {
                line: line_number,
                indent: split.indent,
            });
        }
        let depth = split.indent / CELL_WIDTH;

        if !is_safe_segment(split.name) {
            self.issue(ParseIssue::InvalidName {
                line: line_number,
                name: split.name.to_string(),
            });
            return;
        }

        if depth == 0 {
            self.enter_root(line_number, split.name);
            return;
        }

        if self.stack.is_empty() {
            self.stack.push((String::new(), EntryKind::Directory));
        }
        if depth > self.stack.len() {
            self.issue(ParseIssue::DepthJump {
                line: line_number,
                depth,
                max_depth: self.stack.len(),
            });
            return;
        }

        self.stack.truncate(depth);
        if let Some((parent, EntryKind::File)) = self.stack.last() {
            let parent = parent.clone();
            self.issue(ParseIssue::ChildOfFile {
                line: line_number,
                name: split.name.to_string(),
                parent,
            });
            return;
        }

        self.stack.push((split.name.to_string(), split.kind));
        let segments = self.stack[1..]
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        self.parsed.entries.push(PathEntry::new(segments, split.kind));
    }

    fn enter_root(&mut self, line_number: usize, name: &str) {
        self.stack.clear();
        self.stack.push((name.to_string(), EntryKind::Directory));
        if self.parsed.root.is_none() {
            self.parsed.root = Some(name.to_string());
        } else {
            self.issue(ParseIssue::AdditionalRoot {
                line: line_number,
                name: name.to_string(),
            });
        }
    }

    fn issue(&mut self, issue: ParseIssue) {
        debug!("Diagram issue: {}", issue);
        self.parsed.issues.push(issue);
    }

    fn finish(self) -> ParsedDiagram {
        self.parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn pairs(parsed: &ParsedDiagram) -> Vec<(String, bool)> {
        parsed
            .entries
            .iter()
            .map(|entry| (entry.to_string(), entry.is_directory()))
            .collect()
    }

    fn owned(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
        expected
            .iter()
            .map(|(path, is_dir)| (path.to_string(), *is_dir))
            .collect()
    }

    #[test]
    fn test_depth_is_recovered_from_indentation() {
        let diagram = "root/\n├── a/\n│   └── b.txt\n└── c.txt";

        let parsed = parse(diagram);

        assert_eq!(
            pairs(&parsed),
            owned(&[("a", true), ("a/b.txt", false), ("c.txt", false)])
        );
        assert_eq!(parsed.root.as_deref(), Some("root"));
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_shallower_lines_pop_the_stack() {
        let diagram = "\
project/
├── src/
│   └── pkg/
│       ├── core/
│       │   └── utils.py
│       └── cli.py
├── tests/
│   └── conftest.py
└── README.md";

        let parsed = parse(diagram);

        assert_eq!(
            pairs(&parsed),
            owned(&[
                ("src", true),
                ("src/pkg", true),
                ("src/pkg/core", true),
                ("src/pkg/core/utils.py", false),
                ("src/pkg/cli.py", false),
                ("tests", true),
                ("tests/conftest.py", false),
                ("README.md", false),
            ])
        );
    }

    #[test]
    fn test_trailing_slash_is_the_only_kind_signal() {
        let parsed = parse("root/\n├── venv/\n├── Makefile\n└── src/");

        assert_eq!(
            pairs(&parsed),
            owned(&[("venv", true), ("Makefile", false), ("src", true)])
        );
    }

    #[rstest]
    #[case("")]
    #[case("\n\n   \n")]
    #[case("just some words")]
    #[case("Lorem ipsum dolor sit amet,\nconsectetur adipiscing elit.\nSed do eiusmod.")]
    #[case("root/")]
    fn test_non_tree_text_yields_no_entries(#[case] text: &str) {
        let parsed = parse(text);

        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_binary_input_is_not_text() {
        let parsed = parse_bytes(&[0xff, 0xfe, 0x00, 0x9f, 0x92, 0x96]);

        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.issues, vec![ParseIssue::NotText]);
        assert!(matches!(parsed.validated(), Err(FormatError::Malformed { .. })));
    }

    #[test]
    fn test_crlf_and_blank_lines_are_tolerated() {
        let parsed = parse("root/\r\n\r\n├── a.txt\r\n\r\n└── b/\r\n");

        assert_eq!(pairs(&parsed), owned(&[("a.txt", false), ("b", true)]));
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_spacer_lines_are_ignored() {
        let parsed = parse("root/\n├── a/\n│\n│   └── b.txt\n└── c.txt");

        assert_eq!(
            pairs(&parsed),
            owned(&[("a", true), ("a/b.txt", false), ("c.txt", false)])
        );
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_placeholders_are_skipped_and_reported() {
        let parsed = parse("root/\n├── locked/\n│   └── <Permission Denied>\n└── ok.txt");

        assert_eq!(pairs(&parsed), owned(&[("locked", true), ("ok.txt", false)]));
        assert_eq!(
            parsed.issues,
            vec![ParseIssue::Placeholder {
                line: 3,
                text: "<Permission Denied>".to_string()
            }]
        );
        assert!(matches!(parsed.validated(), Err(FormatError::Malformed { .. })));
    }

    #[test]
    fn test_error_placeholders_are_reported() {
        let parsed = parse("root/\n└── flaky/\n    └── <Error: device unplugged>");

        assert_eq!(pairs(&parsed), owned(&[("flaky", true)]));
        assert!(matches!(
            parsed.issues.as_slice(),
            [ParseIssue::Placeholder { line: 3, .. }]
        ));
    }

    #[rstest]
    #[case("<draft>")]
    #[case("<Permission Denied>")]
    #[case("<notes")]
    fn test_angle_bracket_names_are_entries(#[case] name: &str) {
        let diagram = format!("root/\n├── {name}/\n│   └── <draft>\n└── a.txt");

        let parsed = parse(&diagram);

        let expected_child = format!("{name}/<draft>");
        assert_eq!(
            pairs(&parsed),
            vec![
                (name.to_string(), true),
                (expected_child, false),
                ("a.txt".to_string(), false)
            ]
        );
        assert!(parsed.is_clean(), "issues: {:?}", parsed.issues);
    }

    #[test]
    fn test_misaligned_indent_floors_and_is_reported() {
        let parsed = parse("root/\n├── a/\n│  └── b.txt");

        // indent 7 floors to depth 1
        assert_eq!(pairs(&parsed), owned(&[("a", true), ("b.txt", false)]));
        assert_eq!(
            parsed.issues,
            vec![ParseIssue::MisalignedIndent { line: 3, indent: 7 }]
        );
    }

    #[test]
    fn test_depth_jumps_are_skipped() {
        let parsed = parse("root/\n├── a/\n│       └── deep.txt\n└── c.txt");

        assert_eq!(pairs(&parsed), owned(&[("a", true), ("c.txt", false)]));
        assert_eq!(
            parsed.issues,
            vec![ParseIssue::DepthJump {
                line: 3,
                depth: 3,
                max_depth: 2
            }]
        );
    }

    #[test]
    fn test_children_of_files_are_rejected() {
        let parsed = parse("root/\n├── a.txt\n│   └── b.txt\n└── c/");

        assert_eq!(pairs(&parsed), owned(&[("a.txt", false), ("c", true)]));
        assert!(matches!(
            parsed.issues.as_slice(),
            [ParseIssue::ChildOfFile { line: 3, .. }]
        ));
    }

    #[rstest]
    #[case("root/\n└── ../")]
    #[case("root/\n└── .")]
    #[case("root/\n└── a/b.txt")]
    #[case("root/\n└── a\\b.txt")]
    fn test_unsafe_names_are_rejected(#[case] diagram: &str) {
        let parsed = parse(diagram);

        assert!(parsed.entries.is_empty());
        assert!(matches!(
            parsed.issues.as_slice(),
            [ParseIssue::InvalidName { line: 2, .. }]
        ));
    }

    #[test]
    fn test_multiple_trailing_slashes_collapse() {
        let parsed = parse("root/\n└── data//");

        assert_eq!(pairs(&parsed), owned(&[("data", true)]));
    }

    #[test]
    fn test_diagram_without_root_line_has_anonymous_root() {
        let parsed = parse("├── a/\n│   └── b.txt\n└── c.txt");

        assert_eq!(parsed.root, None);
        assert_eq!(
            pairs(&parsed),
            owned(&[("a", true), ("a/b.txt", false), ("c.txt", false)])
        );
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_plain_space_indentation_is_accepted() {
        let parsed = parse("root/\n    a/\n        b.txt\n    c.txt");

        assert_eq!(
            pairs(&parsed),
            owned(&[("a", true), ("a/b.txt", false), ("c.txt", false)])
        );
    }

    #[test]
    fn test_additional_root_resets_the_stack() {
        let parsed = parse("one/\n└── a.txt\ntwo/\n└── b.txt");

        assert_eq!(parsed.root.as_deref(), Some("one"));
        assert_eq!(pairs(&parsed), owned(&[("a.txt", false), ("b.txt", false)]));
        assert!(matches!(
            parsed.issues.as_slice(),
            [ParseIssue::AdditionalRoot { line: 3, .. }]
        ));
    }

    #[test]
    fn test_names_with_inner_spaces_survive() {
        let parsed = parse("root/\n└── my notes.md");

        assert_eq!(pairs(&parsed), owned(&[("my notes.md", false)]));
    }

    #[test]
    fn test_trailing_spaces_belong_to_file_names() {
        let parsed = parse("root/\n├── notes \n└── x");

        assert_eq!(pairs(&parsed), owned(&[("notes ", false), ("x", false)]));
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_spaces_after_a_directory_slash_are_padding() {
        let parsed = parse("root/  \n├── src/ \n│   └── main.rs\n└── draft /");

        assert_eq!(parsed.root.as_deref(), Some("root"));
        assert_eq!(
            pairs(&parsed),
            owned(&[("src", true), ("src/main.rs", false), ("draft ", true)])
        );
    }

    #[test]
    fn test_lone_carriage_return_is_trimmed() {
        let parsed = parse("root/\r\n└── a.txt\r");

        assert_eq!(pairs(&parsed), owned(&[("a.txt", false)]));
    }

    #[test]
    fn test_validated_rejects_empty_diagrams() {
        assert!(matches!(parse("root/").validated(), Err(FormatError::Empty)));
        assert!(matches!(parse("").validated(), Err(FormatError::Empty)));
    }

    #[test]
    fn test_validated_accepts_clean_diagrams() {
        let parsed = parse("root/\n└── a.txt").validated().expect("Diagram should be valid");

        assert_eq!(parsed.entries.len(), 1);
    }

    #[test]
    fn test_format_error_display_names_the_first_issue() {
        let error = parse("root/\n├── a/\n│  └── b.txt\n│       └── c.txt")
            .validated()
            .expect_err("Diagram should be invalid");

        let message = error.to_string();
        assert!(message.contains("2 issue(s)"), "{message}");
        assert!(message.contains("line 3"), "{message}");
    }

    #[test]
    fn test_split_line_counts_characters_not_bytes() {
        assert_eq!(
            split_line("│   └── b.txt"),
            SplitLine {
                indent: 8,
                name: "b.txt",
                kind: EntryKind::File
            }
        );
    }
}
