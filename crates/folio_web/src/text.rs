//! Split-text intro for `.split` headings.

use folio_core::text::{node_transitions, split_words};
use web_sys::{Document, Element, Window};

use crate::dom;
use crate::error::WebResult;
use crate::frame::{self, RafScheduler};

/// Rebuilds each `.split` node as words of chars and fades them in.
pub fn mount(window: &Window) -> WebResult<()> {
    let document = dom::document()?;
    let mut chars = Vec::new();
    for node in dom::query_all(&document, ".split")? {
        let words = split_words(&node.text_content().unwrap_or_default());
        let node_chars = rebuild(&document, &node, &words)?;
        for (ch, transition) in node_chars.iter().zip(node_transitions(&words)) {
            dom::set_style(ch, "opacity", "0")?;
            dom::set_style(ch, "transform", "translateY(12px)")?;
            dom::set_style(ch, "transition", &transition)?;
        }
        chars.extend(node_chars);
    }
    if chars.is_empty() {
        return Ok(());
    }

    // One frame later the transitions run from the hidden state.
    frame::start_loop(window.clone(), Intro(chars), show)
}

/// Replaces `node`'s text with `span.word > span.char` markup.
fn rebuild(document: &Document, node: &Element, words: &[Vec<char>]) -> WebResult<Vec<Element>> {
    node.set_text_content(Some(""));
    let mut chars = Vec::new();
    for word in words {
        let span_word = document.create_element("span")?;
        span_word.set_class_name("word");
        for ch in word {
            let span_char = document.create_element("span")?;
            span_char.set_class_name("char");
            span_char.set_text_content(Some(&ch.to_string()));
            span_word.append_child(&span_char)?;
            chars.push(span_char);
        }
        node.append_child(&span_word)?;
        node.append_with_str_1(" ")?;
    }
    Ok(chars)
}

/// Chars waiting for their first frame.
struct Intro(Vec<Element>);

fn show(intro: &mut Intro, _now: f64, _scheduler: &mut RafScheduler) {
    for ch in &intro.0 {
        let shown = dom::set_style(ch, "opacity", "1")
            .and_then(|()| dom::set_style(ch, "transform", "translateY(0)"));
        if let Err(err) = shown {
            tracing::debug!(error = %err, "char not shown");
            return;
        }
    }
}
