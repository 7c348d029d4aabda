//! Source loading.

/// Marks a comment line when it is the first non-blank character.
pub const COMMENT: char = '#';

/// Blank out comment lines.
///
/// The lines stay in place (as empty lines) so the driver's line numbers
/// still match the file.
pub fn strip_comments(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            if line.trim_start().starts_with(COMMENT) {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comment_lines_become_blank() {
        let source = "# pairs\nP = PAIR A B\n  # indented\nFST P";
        assert_eq!(strip_comments(source), "\nP = PAIR A B\n\nFST P");
    }

    #[test]
    fn hash_inside_a_line_is_kept() {
        assert_eq!(strip_comments("f #x"), "f #x");
    }

    #[test]
    fn line_count_is_preserved() {
        let source = "a\n#b\n\n#c\nd";
        assert_eq!(strip_comments(source).lines().count(), source.lines().count());
    }
}
