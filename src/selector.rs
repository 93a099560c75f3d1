//! Tag-path selection
//!
//! Walks a [`TagPath`] against a parsed document. Each step replaces the
//! working set with every descendant (at any depth) of every working element
//! whose tag matches the step. Order is discovery order; duplicates from
//! nested matches are kept.

use scraper::{ElementRef, Html};

use crate::directive::{ClassRestriction, TagPath};

/// Capability the selector needs from a parsed tree.
pub trait DescendantSearch: Sized {
    /// All descendants named `tag`, in document order.
    fn find_descendants(&self, tag: &str) -> Vec<Self>;

    /// Same as `find_descendants`, but only elements carrying `class_name`.
    fn find_descendants_with_class(&self, tag: &str, class_name: &str) -> Vec<Self>;

    /// Concatenated descendant text, untrimmed.
    fn text_content(&self) -> String;
}

/// Either the document itself or one of its elements.
#[derive(Debug, Clone, Copy)]
pub enum HtmlNode<'a> {
    Document(&'a Html),
    Element(ElementRef<'a>),
}

impl<'a> HtmlNode<'a> {
    fn candidates(&self) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a> {
        match *self {
            // The document node sits above <html>, so <html> itself is a candidate.
            HtmlNode::Document(doc) => {
                Box::new(doc.root_element().descendants().filter_map(ElementRef::wrap))
            }
            HtmlNode::Element(el) => {
                Box::new(el.descendants().skip(1).filter_map(ElementRef::wrap))
            }
        }
    }
}

fn has_class(el: &ElementRef<'_>, class_name: &str) -> bool {
    let value = el.value();
    value.classes().any(|c| c == class_name)
        || value.attr("class").map(str::trim) == Some(class_name)
}

impl<'a> DescendantSearch for HtmlNode<'a> {
    fn find_descendants(&self, tag: &str) -> Vec<Self> {
        self.candidates()
            .filter(|el| el.value().name() == tag)
            .map(HtmlNode::Element)
            .collect()
    }

    fn find_descendants_with_class(&self, tag: &str, class_name: &str) -> Vec<Self> {
        self.candidates()
            .filter(|el| el.value().name() == tag && has_class(el, class_name))
            .map(HtmlNode::Element)
            .collect()
    }

    fn text_content(&self) -> String {
        match self {
            HtmlNode::Document(doc) => doc.root_element().text().collect(),
            HtmlNode::Element(el) => el.text().collect(),
        }
    }
}

/// Evaluate `path` from `root` and return the trimmed text of every match.
pub fn evaluate<N: DescendantSearch>(
    root: N,
    path: &TagPath,
    restriction: Option<&ClassRestriction>,
) -> Vec<String> {
    let mut current = vec![root];

    for tag in path.tags() {
        let class_name = restriction
            .filter(|r| r.applies_to(tag))
            .map(|r| r.class_name.as_str());

        current = current
            .iter()
            .flat_map(|node| match class_name {
                Some(class_name) => node.find_descendants_with_class(tag, class_name),
                None => node.find_descendants(tag),
            })
            .collect();

        if current.is_empty() {
            break;
        }
    }

    current
        .iter()
        .map(|node| node.text_content().trim().to_string())
        .collect()
}

/// Parse `html` and evaluate `path` against the whole document.
pub fn select_text(
    html: &str,
    path: &TagPath,
    restriction: Option<&ClassRestriction>,
) -> Vec<String> {
    let document = Html::parse_document(html);
    evaluate(HtmlNode::Document(&document), path, restriction)
}
