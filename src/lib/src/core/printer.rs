use std::io::Write;

use crate::error::DriveError;
use crate::model::Entry;
use crate::util::ByteFormatter;

const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Per row formatting state handed down the walk
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub human: bool,
    pub parent: &'a str,
}

/// Renders entries as fixed column rows.
///
/// `{d|-}{s |- }[{role:<10} ]{size:<10} {path:<6} {modified}`
///
/// Scripts parse this layout, keep it byte for byte stable.
#[derive(Debug, Default)]
pub struct Printer {
    bytes: ByteFormatter,
}

impl Printer {
    pub fn new() -> Printer {
        Printer::default()
    }

    pub fn format_row(&mut self, entry: &Entry, context: &RenderContext) -> String {
        let mut row = String::new();
        row.push(if entry.is_dir { 'd' } else { '-' });
        row.push_str(if entry.shared { "s " } else { "- " });
        if let Some(role) = &entry.user_role {
            row.push_str(&format!("{role:<10} "));
        }

        let size = if context.human {
            self.bytes.format(entry.size).to_string()
        } else {
            entry.size.to_string()
        };
        let path = entry.path_under(context.parent);
        let modified = entry.modified.format(MODIFIED_FORMAT);
        row.push_str(&format!("{size:<10} {path:<6} {modified}"));
        row
    }

    pub fn pretty(
        &mut self,
        entry: &Entry,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> Result<(), DriveError> {
        let row = self.format_row(entry, context);
        writeln!(out, "{row}")?;
        Ok(())
    }
}
