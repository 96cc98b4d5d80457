//! Entry formatting
//!
//! Writes headwords, attributes, word classes, definition lists and
//! suggestions of a results page as colored terminal text.

use scraper::{ElementRef, Html};
use std::io::{self, Write};

use crate::core::model::DisplayRange;
use crate::core::render::{paint, Tone};
use crate::core::util::{clean_attribute, continuation_break, index_label};
use crate::dictionary::document::{
    contains_element, element_text, next_element, select_entries, text_with_breaks, Entry,
    Selectors,
};

/// Counts gathered while rendering a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub entries: usize,
    pub suggestion_blocks: usize,
}

/// Renderer for a results page
pub struct PageRenderer<'s> {
    selectors: &'s Selectors,
}

impl<'s> PageRenderer<'s> {
    pub fn new(selectors: &'s Selectors) -> Self {
        Self { selectors }
    }

    /// Render the entries inside `range`, then every suggestion block
    pub fn render_page<W: Write>(
        &self,
        doc: &Html,
        range: DisplayRange,
        out: &mut W,
    ) -> io::Result<PageSummary> {
        let entries = select_entries(doc, self.selectors, range);
        for entry in &entries {
            self.render_entry(entry, out)?;
        }

        let suggestion_blocks = self.render_suggestions(doc, out)?;

        Ok(PageSummary {
            entries: entries.len(),
            suggestion_blocks,
        })
    }

    /// Render one headword with its attributes and definitions
    pub fn render_entry<W: Write>(&self, entry: &Entry<'_>, out: &mut W) -> io::Result<()> {
        tracing::debug!(position = entry.position, "rendering entry");
        writeln!(
            out,
            "{}",
            paint(&element_text(entry.headword), Tone::Headword)
        )?;

        let Some(content) = entry.content else {
            return Ok(());
        };

        for attr in content.select(&self.selectors.attribute) {
            let text = clean_attribute(&element_text(attr));
            writeln!(out, "{}", paint(&text, Tone::Attribute))?;
        }

        if content.value().name() != "div" {
            return Ok(());
        }

        let word_classes: Vec<_> = content.select(&self.selectors.word_class).collect();
        if !word_classes.is_empty() {
            for word_class in word_classes {
                writeln!(
                    out,
                    "{}",
                    paint(&element_text(word_class), Tone::WordClass)
                )?;
                self.render_content(next_element(word_class).as_slice(), out)?;
            }
            return Ok(());
        }

        let lists: Vec<_> = content.select(&self.selectors.list).collect();
        if !lists.is_empty() {
            self.render_content(&lists, out)
        } else {
            self.render_content(&[content], out)
        }
    }

    /// Render a content selection.
    ///
    /// List items under the selection are numbered, and line breaks inside an
    /// item are indented to sit under the item text. Without list items the
    /// whole selection is printed as one block with bare line breaks.
    pub fn render_content<W: Write>(
        &self,
        nodes: &[ElementRef<'_>],
        out: &mut W,
    ) -> io::Result<()> {
        let items = self.list_items(nodes);

        if items.is_empty() {
            let text: String = nodes
                .iter()
                .map(|node| text_with_breaks(*node, |_| "\n".to_string()))
                .collect();
            return writeln!(out, "{}", text);
        }

        for (i, item) in items.iter().enumerate() {
            let label = index_label(i + 1);
            // A break in a nested item belongs to the outermost item holding it.
            let text = text_with_breaks(*item, |br| {
                let owner = items
                    .iter()
                    .position(|candidate| contains_element(*candidate, br))
                    .unwrap_or(i);
                continuation_break(&index_label(owner + 1))
            });
            writeln!(out, "{} {}", paint(&label, Tone::Label), text)?;
        }

        Ok(())
    }

    /// Print each suggestion block, returning how many were found
    pub fn render_suggestions<W: Write>(&self, doc: &Html, out: &mut W) -> io::Result<usize> {
        let mut blocks = 0;

        for block in doc.select(&self.selectors.suggestions) {
            let words: Vec<String> = block
                .select(&self.selectors.suggestion_link)
                .map(element_text)
                .collect();

            writeln!(out, "Suggestion:")?;
            writeln!(out, "\t{}", paint(&words.join(", "), Tone::Suggestion))?;
            blocks += 1;
        }

        Ok(blocks)
    }

    /// `ol > li, ul > li` beneath any node of the selection, without
    /// duplicates, in the order they are found
    fn list_items<'a>(&self, nodes: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
        let mut items: Vec<ElementRef<'a>> = Vec::new();

        for node in nodes {
            for item in node.select(&self.selectors.list_item) {
                if !items.iter().any(|seen| seen.id() == item.id()) {
                    items.push(item);
                }
            }
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::document::strip_noise;
    use scraper::Selector;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn render_page(html: &str, range: DisplayRange) -> (String, PageSummary) {
        no_color();
        let mut doc = Html::parse_document(html);
        let selectors = Selectors::new().unwrap();
        strip_noise(&mut doc, &selectors);

        let mut out = Vec::new();
        let summary = PageRenderer::new(&selectors)
            .render_page(&doc, range, &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    fn render_content_of(html: &str, css: &str) -> String {
        no_color();
        let doc = Html::parse_document(html);
        let selectors = Selectors::new().unwrap();
        let nodes: Vec<_> = doc.select(&Selector::parse(css).unwrap()).collect();

        let mut out = Vec::new();
        PageRenderer::new(&selectors)
            .render_content(&nodes, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn entry(headword: &str, content: &str) -> String {
        format!("<li><span class=\"midashi\">{headword}</span>{content}</li>")
    }

    fn results(entries: &[String]) -> String {
        format!("<div id=\"resultsList\"><ul>{}</ul></div>", entries.concat())
    }

    #[test]
    fn test_list_item_break_is_indented() {
        let output = render_content_of(
            "<ol id=\"c\"><li>first</li><li>second<br>more</li><li>third</li></ol>",
            "#c",
        );
        assert_eq!(output, "1. first\n2. second\n   more\n3. third\n");
    }

    #[test]
    fn test_list_padding_grows_with_label() {
        let items: String = (1..=10)
            .map(|i| if i == 10 { "<li>a<br>b</li>".to_string() } else { format!("<li>{i}</li>") })
            .collect();
        let output = render_content_of(&format!("<ol id=\"c\">{items}</ol>"), "#c");
        assert!(output.ends_with("10. a\n    b\n"));
    }

    #[test]
    fn test_plain_breaks_are_not_indented() {
        let output = render_content_of("<div id=\"c\">one<br>two<br>three</div>", "#c");
        assert_eq!(output, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_list_items_found_below_selection() {
        let output = render_content_of(
            "<div id=\"c\"><p>intro</p><ul><li>x</li><li>y</li></ul></div>",
            "#c",
        );
        assert_eq!(output, "1. x\n2. y\n");
    }

    #[test]
    fn test_nested_item_break_uses_outer_padding() {
        let output = render_content_of(
            "<ol id=\"c\"><li>a<ul><li>b<br>c</li></ul></li></ol>",
            "#c",
        );
        assert_eq!(output, "1. ab\n   c\n2. b\n   c\n");
    }

    #[test]
    fn test_empty_selection_prints_blank_line() {
        let output = render_content_of("<p>nothing</p>", "#missing");
        assert_eq!(output, "\n");
    }

    #[test]
    fn test_entry_attributes_are_cleaned() {
        let html = results(&[entry(
            "foo",
            "<div><span class=\"attr\">【レベル】3、foo</span><span class=\"attr\">【＠】フー</span></div>",
        )]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 3));

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "foo");
        assert_eq!(lines[1], "foo");
        assert_eq!(lines[2], "【カナ】フー");
    }

    #[test]
    fn test_entry_word_classes() {
        let html = results(&[entry(
            "run",
            "<div><span class=\"wordclass\">【自動】</span><ol><li>走る</li><li>逃げる</li></ol>\
             <span class=\"wordclass\">【名】</span><ol><li>走ること</li></ol></div>",
        )]);
        let (output, summary) = render_page(&html, DisplayRange::new(1, 3));

        assert_eq!(
            output,
            "run\n【自動】\n1. 走る\n2. 逃げる\n【名】\n1. 走ること\n"
        );
        assert_eq!(summary.entries, 1);
    }

    #[test]
    fn test_entry_word_class_without_sibling() {
        let html = results(&[entry("x", "<div><span class=\"wordclass\">【名】</span></div>")]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 1));
        assert_eq!(output, "x\n【名】\n\n");
    }

    #[test]
    fn test_entry_list_without_word_class() {
        let html = results(&[entry(
            "dog",
            "<div><span class=\"attr\">【＠】ドッグ</span><ul><li>犬</li><li>やつ<br>男</li></ul></div>",
        )]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 1));
        assert_eq!(output, "dog\n【カナ】ドッグ\n1. 犬\n2. やつ\n   男\n");
    }

    #[test]
    fn test_entry_plain_content() {
        let html = results(&[entry("cat", "<div>猫<br>ネコ科の動物</div>")]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 1));
        assert_eq!(output, "cat\n猫\nネコ科の動物\n");
    }

    #[test]
    fn test_entry_non_div_content_prints_headword_and_attributes() {
        let html = results(&[entry(
            "ant",
            "<p><span class=\"attr\">【レベル】5、attr</span>ignored body</p>",
        )]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 1));
        assert_eq!(output, "ant\nattr\n");
    }

    #[test]
    fn test_noise_is_not_rendered() {
        let html = results(&[entry(
            "go",
            "<div><ol><li>行く<span class=\"kana\">いく</span><div class=\"ex_sentence\">I go.</div></li></ol></div>",
        )]);
        let (output, _) = render_page(&html, DisplayRange::new(1, 1));
        assert_eq!(output, "go\n1. 行く\n");
    }

    #[test]
    fn test_range_limits_entries() {
        let entries: Vec<String> = (1..=5)
            .map(|i| entry(&format!("w{i}"), &format!("<div>d{i}</div>")))
            .collect();
        let html = results(&entries);

        let (output, summary) = render_page(&html, DisplayRange::new(1, 3));
        assert_eq!(output, "w1\nd1\nw2\nd2\nw3\nd3\n");
        assert_eq!(summary.entries, 3);

        let (output, _) = render_page(&html, DisplayRange::new(5, 5));
        assert_eq!(output, "w5\nd5\n");
    }

    #[test]
    fn test_suggestions_print_without_entries() {
        let html = "<div id=\"resultsList\"></div>\
            <div id=\"sas_word\"><span><a>colour</a></span><span><a>color</a></span><a>skip</a></div>";
        let (output, summary) = render_page(html, DisplayRange::new(1, 3));

        assert_eq!(output, "Suggestion:\n\tcolour, color\n");
        assert_eq!(
            summary,
            PageSummary {
                entries: 0,
                suggestion_blocks: 1
            }
        );
    }

    #[test]
    fn test_suggestions_ignore_range() {
        let html = format!(
            "{}<div id=\"sas_word\"><span><a>x</a></span></div>",
            results(&[entry("a", "<div>b</div>")])
        );
        let (output, _) = render_page(&html, DisplayRange::new(0, 0));
        assert_eq!(output, "Suggestion:\n\tx\n");
    }
}
