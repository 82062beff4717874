use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::wikipedia::WikipediaPage;

const SENTENCE_DELIMITER: &str = ". ";

/// Removes every `<...>` run, keeping the text between tags. A `<` with no
/// closing `>` after it is left untouched, as is a stray `>`.
pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        result.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => break,
        }
    }
    result.push_str(rest);

    result
}

pub fn first_sentence(text: &str) -> &str {
    match text.split_once(SENTENCE_DELIMITER) {
        Some((first, _)) => first,
        None => text,
    }
}

/// Picks the first page with a non-empty extract and reduces it to its
/// first plain-text sentence.
pub fn short_description(pages: &BTreeMap<String, WikipediaPage>) -> Result<String> {
    if pages.is_empty() {
        return Err(AppError::NoPageFound);
    }

    pages
        .values()
        .find(|page| !page.extract.is_empty())
        .map(|page| first_sentence(&strip_tags(&page.extract)).to_string())
        .ok_or(AppError::DescriptionNotFound)
}
