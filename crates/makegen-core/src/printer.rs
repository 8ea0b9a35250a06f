//! Makefile text rendering.
//!
//! Target and dependency names are written verbatim; nothing is escaped.

use std::io::{self, Write};

use makegen_model::{BuildRule, Makefile, MakefileEntry};

pub fn write_rule<W: Write>(out: &mut W, rule: &BuildRule) -> io::Result<()> {
    if let Some(comment) = &rule.comment {
        writeln!(out, "## {comment}")?;
    }
    writeln!(out, "{}: {}", rule.target, rule.dependencies.join(" "))?;
    for line in &rule.recipe {
        writeln!(out, "\t{line}")?;
    }
    writeln!(out)
}

pub fn write_makefile<W: Write>(out: &mut W, makefile: &Makefile) -> io::Result<()> {
    for entry in &makefile.entries {
        match entry {
            MakefileEntry::Line(line) => writeln!(out, "{line}")?,
            MakefileEntry::Blank => writeln!(out)?,
            MakefileEntry::Rule(rule) => write_rule(out, rule)?,
        }
    }
    Ok(())
}

/// Render `makefile` to a string.
///
/// # Errors
///
/// Returns `InvalidData` if the rendered text is not UTF-8.
pub fn render_makefile(makefile: &Makefile) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_makefile(&mut buffer, makefile)?;
    String::from_utf8(buffer).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}
