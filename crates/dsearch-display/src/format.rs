//! Page layout: headings, `key :: value` rows and run numbering.

use dsearch_core::{Page, Record, Result, Section};

use crate::colour;

/// Formats one page into a single text block.
///
/// Construction validates the page up front; nothing is emitted for a page
/// that fails its contract, so callers never see partial output.
pub struct PageFormatter<'a> {
    page: &'a Page,
}

impl<'a> PageFormatter<'a> {
    pub fn new(page: &'a Page) -> Result<Self> {
        page.validate()?;
        Ok(Self { page })
    }

    /// Render sections strictly in display order.
    pub fn format(&self) -> String {
        let mut out = String::from("\n");
        for label in &self.page.display_order {
            push_heading(&mut out, &format!("{label} details"));
            let Some(section) = self.page.section(label) else {
                continue;
            };
            match section {
                Section::Single(record) => push_record(&mut out, record),
                Section::List(records) => {
                    for (i, record) in records.iter().enumerate() {
                        push_heading(&mut out, &format!("{} {}", label, i + 1));
                        push_record(&mut out, record);
                        out.push('\n');
                    }
                }
                Section::Text(value) => push_row(&mut out, label.trim(), value.trim()),
            }
            out.push('\n');
        }
        out
    }
}

pub fn format_page(page: &Page) -> Result<String> {
    Ok(PageFormatter::new(page)?.format())
}

fn push_heading(out: &mut String, heading: &str) {
    out.push_str(colour::MAGENTA_UNDERLINED);
    out.push_str(&heading.to_uppercase());
    out.push_str(colour::RESET);
    out.push('\n');
}

/// One `key :: value` row; the key carries the field colour.
fn push_row(out: &mut String, key: &str, value: &str) {
    out.push_str(colour::GREEN);
    out.push_str(key);
    out.push_str(colour::RESET);
    out.push_str(" :: ");
    out.push_str(value);
    out.push('\n');
}

/// Fields sorted alphabetically by name, keys and values trimmed.
fn push_record(out: &mut String, record: &Record) {
    let mut names: Vec<&str> = record.field_names().collect();
    names.sort_unstable();
    for name in names {
        if let Some(value) = record.get(name) {
            push_row(out, name.trim(), value.to_string().trim());
        }
    }
}
