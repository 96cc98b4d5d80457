//! Results page navigation
//!
//! Locates the parts of an Eijiro results page:
//! - `#resultsList` containers holding `.midashi` / `.midashi_je` headwords
//! - the content element following each headword
//! - `.ex_sentence` / `.kana` noise that never reaches the terminal
//! - the `#sas_word` suggestion block

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Node, Selector};

use crate::core::model::DisplayRange;

/// Compiled CSS selectors for every element the renderer touches
#[derive(Debug)]
pub struct Selectors {
    pub noise: Selector,
    pub results: Selector,
    pub headword: Selector,
    pub attribute: Selector,
    pub word_class: Selector,
    pub list: Selector,
    pub list_item: Selector,
    pub suggestions: Selector,
    pub suggestion_link: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            noise: parse_selector(".ex_sentence, .kana")?,
            results: parse_selector("#resultsList")?,
            headword: parse_selector(".midashi, .midashi_je")?,
            attribute: parse_selector(".attr")?,
            word_class: parse_selector(".wordclass")?,
            list: parse_selector("ul, ol")?,
            list_item: parse_selector("ol > li, ul > li")?,
            suggestions: parse_selector("#sas_word")?,
            suggestion_link: parse_selector("span > a")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {:?}", css, e))
}

/// A headword and the content element that follows it
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// 1-based position within its results container
    pub position: usize,
    pub headword: ElementRef<'a>,
    pub content: Option<ElementRef<'a>>,
}

/// Detach every noise element from the document, returning how many were removed
pub fn strip_noise(doc: &mut Html, selectors: &Selectors) -> usize {
    let ids: Vec<_> = doc.select(&selectors.noise).map(|el| el.id()).collect();

    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    ids.len()
}

/// Collect the entries whose position falls inside `range`.
///
/// Positions restart at 1 in every results container.
pub fn select_entries<'a>(
    doc: &'a Html,
    selectors: &Selectors,
    range: DisplayRange,
) -> Vec<Entry<'a>> {
    let mut entries = Vec::new();

    for results in doc.select(&selectors.results) {
        for (i, headword) in results.select(&selectors.headword).enumerate() {
            let position = i + 1;
            if !range.contains(position) {
                continue;
            }

            entries.push(Entry {
                position,
                headword,
                content: next_element(headword),
            });
        }
    }

    entries
}

/// The element immediately after `el` among its siblings
pub fn next_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// All text beneath `el`, in document order
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// All text beneath `el`, with each `<br>` replaced by `line_break(br)`
pub fn text_with_breaks<'a, F>(el: ElementRef<'a>, line_break: F) -> String
where
    F: Fn(ElementRef<'a>) -> String,
{
    let mut text = String::new();

    for node in el.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if e.name() == "br" => {
                if let Some(br) = ElementRef::wrap(node) {
                    text.push_str(&line_break(br));
                }
            }
            _ => {}
        }
    }

    text
}

/// Whether `ancestor` is `el` or contains it
pub fn contains_element(ancestor: ElementRef<'_>, el: ElementRef<'_>) -> bool {
    el.ancestors()
        .chain(std::iter::once(*el))
        .any(|node| node.id() == ancestor.id())
}
