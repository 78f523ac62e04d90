use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};

/// Heredoc delimiter for the structured-output block.
pub const BODY_MARKER: &str = "RELEASE_NOTES_EOF";

/// Markdown-escaped variant substituted for literal marker occurrences.
const BODY_MARKER_ESCAPED: &str = r"RELEASE\_NOTES\_EOF";

/// Delivers the document to the structured-output channel or stdout.
///
/// With an output path (the CI runner's `GITHUB_OUTPUT` file), appends a
/// delimited `body` block. Without one, writes the document verbatim to
/// stdout.
pub fn emit(output_path: Option<&str>, document: &str) -> Result<()> {
    match output_path {
        Some(path) => append_output_block(Path::new(path), document),
        None => {
            print!("{}", document);
            Ok(())
        }
    }
}

/// Appends `body<<MARKER\n<doc>\nMARKER\n` to the structured-output file.
///
/// A literal marker inside the body would end the block early, so occurrences
/// are replaced with an escaped variant first. Textual guard only, not a
/// rigorous escape.
fn append_output_block(path: &Path, document: &str) -> Result<()> {
    let body = escape_marker(document);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ReleaseNotesError::output(format!("cannot open {}: {}", path.display(), e))
        })?;
    write!(file, "body<<{}\n{}\n{}\n", BODY_MARKER, body, BODY_MARKER)?;
    Ok(())
}

/// Replaces literal marker occurrences with the escaped variant.
pub fn escape_marker(document: &str) -> String {
    document.replace(BODY_MARKER, BODY_MARKER_ESCAPED)
}
