//! Search results page parser.
//!
//! The results page lays out hits as a grid of links, each wrapping a list
//! item with two `div`s: the emoticon itself first, its label second.
//!
//! ```html
//! <div class="grid">
//!   <a href="/e/blush"><li><div>(°o°)</div><div>Blush</div></li></a>
//! </div>
//! ```

use crate::domain::{EmotermError, EmoticonEntry, Result};
use scraper::{ElementRef, Html, Selector};

/// Result items inside the results grid.
const ITEM_SELECTOR: &str = ".grid a li";

/// Text fields inside one result item, in positional order.
const FIELD_SELECTOR: &str = "div";

/// Extracts emoticon entries from a search results page.
///
/// For each result item, the first `div` holds the value and the second the
/// name. Items missing either field, or with a field that is empty after
/// trimming, are skipped. A page without a results grid yields an empty
/// vector.
///
/// # Errors
///
/// Returns [`EmotermError::Parse`] if the built-in selectors fail to compile.
///
/// # Examples
///
/// ```
/// use emoterm::fetch::parse_entries;
///
/// let html = r#"<div class="grid"><a><li><div>(^_^)</div><div>Happy</div></li></a></div>"#;
/// let entries = parse_entries(html)?;
/// assert_eq!(entries[0].name, "Happy");
/// assert_eq!(entries[0].value, "(^_^)");
/// # Ok::<(), emoterm::EmotermError>(())
/// ```
pub fn parse_entries(html: &str) -> Result<Vec<EmoticonEntry>> {
    let item_selector = compile(ITEM_SELECTOR)?;
    let field_selector = compile(FIELD_SELECTOR)?;

    let _span = tracing::debug_span!("parse_entries", html_len = html.len()).entered();

    let document = Html::parse_document(html);
    let mut dropped = 0_usize;

    let entries: Vec<EmoticonEntry> = document
        .select(&item_selector)
        .filter_map(|item| {
            let entry = parse_item(item, &field_selector);
            if entry.is_none() {
                dropped += 1;
            }
            entry
        })
        .collect();

    tracing::debug!(parsed = entries.len(), dropped, "search results parsed");

    Ok(entries)
}

fn parse_item(item: ElementRef<'_>, field_selector: &Selector) -> Option<EmoticonEntry> {
    let mut fields = item.select(field_selector).map(element_text);
    let value = fields.next()?;
    let name = fields.next()?;
    EmoticonEntry::new(&name, &value)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| EmotermError::Parse(format!("invalid selector {selector:?}: {e}")))
}
