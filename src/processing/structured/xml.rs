// src/processing/structured/xml.rs

use super::StructuredOutput;
use crate::constants::{MAX_ANALYSIS_DEPTH, XML_DECLARATION};
use crate::core_types::{StructureStats, SubFormat, XmlStats};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;

/// An owned element tree. Text and attribute values keep their original escaping
/// and whitespace.
#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug)]
struct Document {
    root: Element,
    total_elements: usize,
    max_depth: usize,
}

/// Parses XML into a tree, re-indents it, and prepends a declaration.
///
/// Only whitespace-only runs between child elements are rewritten; any text
/// with content is written back unchanged. Comments, processing instructions,
/// and the doctype are not carried into the re-serialized document.
pub(super) fn process(content: &str, indent: usize) -> StructuredOutput {
    let document = match parse(content) {
        Ok(document) => document,
        Err(message) => {
            return StructuredOutput::invalid(
                content,
                SubFormat::Xml,
                format!("XML parsing error: {}", message),
            )
        }
    };

    let indent = " ".repeat(indent);
    let mut pretty = String::with_capacity(content.len() + XML_DECLARATION.len() + 1);
    pretty.push_str(XML_DECLARATION);
    pretty.push('\n');
    write_element(&mut pretty, &document.root, 0, &indent);

    let stats = stats(&document);
    StructuredOutput::valid(pretty, StructureStats::Xml(stats))
}

fn parse(content: &str) -> Result<Document, String> {
    let mut reader = Reader::from_str(content);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut total_elements = 0;
    let mut max_depth = 0;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{} (at byte {})", e, reader.error_position()))?;
        let position = reader.buffer_position() as u64;

        match event {
            Event::Start(_) | Event::Empty(_) if root.is_some() && stack.is_empty() => {
                return Err(format!("junk after document element (at byte {})", position));
            }
            Event::Start(start) => {
                let element = open(&start, position)?;
                enter(&stack, &mut total_elements, &mut max_depth, position)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open(&start, position)?;
                enter(&stack, &mut total_elements, &mut max_depth, position)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| format!("unexpected closing tag (at byte {})", position))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                text.unescape()
                    .map_err(|e| format!("{} (at byte {})", e, position))?;
                let raw = String::from_utf8_lossy(&text).into_owned();
                push_text(&mut stack, raw, position)?;
            }
            Event::CData(data) => {
                let raw = format!("<![CDATA[{}]]>", String::from_utf8_lossy(&data));
                push_text(&mut stack, raw, position)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(format!(
            "unclosed element <{}> at end of input",
            unclosed.name
        ));
    }
    let root = root.ok_or_else(|| "no element found".to_string())?;
    Ok(Document {
        root,
        total_elements,
        max_depth,
    })
}

fn open(start: &BytesStart, position: u64) -> Result<Element, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| format!("{} (at byte {})", e, position))?;
        attribute
            .unescape_value()
            .map_err(|e| format!("{} (at byte {})", e, position))?;
        attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attribute.value).into_owned(),
        ));
    }
    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Records a new element at the current depth, rejecting excessive nesting.
fn enter(
    stack: &[Element],
    total_elements: &mut usize,
    max_depth: &mut usize,
    position: u64,
) -> Result<(), String> {
    let depth = stack.len();
    if depth > MAX_ANALYSIS_DEPTH {
        return Err(format!(
            "elements nested deeper than {} levels (at byte {})",
            MAX_ANALYSIS_DEPTH, position
        ));
    }
    *total_elements += 1;
    *max_depth = (*max_depth).max(depth);
    Ok(())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: String, position: u64) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None if is_blank(&text) => Ok(()),
        None => Err(format!("text outside the root element (at byte {})", position)),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn write_element(out: &mut String, element: &Element, level: usize, indent: &str) {
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        let quote = if value.contains('"') { '\'' } else { '"' };
        out.push_str(&format!(" {}={}{}{}", key, quote, value, quote));
    }
    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    let has_elements = element
        .children
        .iter()
        .any(|child| matches!(child, Node::Element(_)));
    if !has_elements {
        for child in &element.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
    } else {
        // Runs of text between child elements are laid out only when blank.
        let inner = format!("\n{}", indent.repeat(level + 1));
        let outer = format!("\n{}", indent.repeat(level));
        let mut run = String::new();
        for child in &element.children {
            match child {
                Node::Text(text) => run.push_str(text),
                Node::Element(child) => {
                    out.push_str(if is_blank(&run) { &inner } else { &run });
                    run.clear();
                    write_element(out, child, level + 1, indent);
                }
            }
        }
        out.push_str(if is_blank(&run) { &outer } else { &run });
    }
    out.push_str(&format!("</{}>", element.name));
}

fn stats(document: &Document) -> XmlStats {
    let root = &document.root;
    let mut namespaces = BTreeMap::new();
    let mut root_attributes = 0;
    for (key, value) in &root.attributes {
        if key == "xmlns" {
            namespaces.insert("default".to_string(), value.clone());
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.insert(prefix.to_string(), value.clone());
        } else {
            root_attributes += 1;
        }
    }
    XmlStats {
        root_tag: root.name.clone(),
        total_elements: document.total_elements,
        max_depth: document.max_depth,
        root_attributes,
        namespaces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Validity;

    fn xml_stats(output: &StructuredOutput) -> &XmlStats {
        match &output.stats {
            StructureStats::Xml(stats) => stats,
            other => panic!("Expected XML stats, got {:?}", other),
        }
    }

    #[test]
    fn test_reindents_nested_elements() {
        let output = process("<root><a x=\"1\"><b>text</b></a><c/></root>", 2);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(
            output.content,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  <a x=\"1\">\n    <b>text</b>\n  </a>\n  <c />\n</root>"
        );
        let stats = xml_stats(&output);
        assert_eq!(stats.root_tag, "root");
        assert_eq!(stats.total_elements, 4);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_attributes, 0);
    }

    #[test]
    fn test_existing_declaration_is_replaced_not_duplicated() {
        let output = process("<?xml version=\"1.0\"?>\n<!-- note -->\n<a>\n  <b/>\n</a>\n", 4);
        assert_eq!(
            output.content,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n    <b />\n</a>"
        );
        assert_eq!(output.content.matches("<?xml").count(), 1);
    }

    #[test]
    fn test_mixed_content_text_is_kept() {
        let output = process("<p>Hello <b>world</b> again</p>", 2);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(
            output.content,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<p>Hello <b>world</b> again</p>"
        );
    }

    #[test]
    fn test_only_blank_runs_are_reindented() {
        let source = "<doc>\n<title>  padded  </title>\n<para>Intro <em>key</em>, end.</para>\n<pre>  a\n    b\n</pre>\n<blank> </blank>\n</doc>\n";
        let output = process(source, 2);
        assert_eq!(
            output.content,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <doc>\n  <title>  padded  </title>\n  <para>Intro <em>key</em>, end.</para>\n  \
             <pre>  a\n    b\n</pre>\n  <blank> </blank>\n</doc>"
        );
    }

    #[test]
    fn test_mismatched_tags_are_invalid() {
        let original = "<a><b></a>";
        let output = process(original, 2);
        assert_eq!(output.validity, Validity::Invalid);
        assert_eq!(output.content, original);
        let error = output.parse_error.unwrap_or_default();
        assert!(error.starts_with("XML parsing error: "), "{}", error);
        assert!(error.len() > "XML parsing error: ".len());
    }

    #[test]
    fn test_unclosed_root_is_invalid() {
        let output = process("<a><b></b>", 2);
        assert_eq!(output.validity, Validity::Invalid);
        assert!(output
            .parse_error
            .unwrap_or_default()
            .contains("unclosed element <a>"));
    }

    #[test]
    fn test_structural_errors() {
        for (input, expected) in [
            ("", "no element found"),
            ("<a/><b/>", "junk after document element"),
            ("hello", "text outside the root element"),
            ("<a>&undefined;</a>", "XML parsing error"),
        ] {
            let output = process(input, 2);
            assert_eq!(output.validity, Validity::Invalid, "input: {:?}", input);
            let error = output.parse_error.unwrap_or_default();
            assert!(error.contains(expected), "{:?} -> {}", input, error);
        }
    }

    #[test]
    fn test_namespaces_and_root_attributes() {
        let input = r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="4"><modelVersion>4.0.0</modelVersion></project>"#;
        let output = process(input, 2);
        let stats = xml_stats(&output);
        assert_eq!(stats.root_attributes, 1);
        assert_eq!(
            stats.namespaces.get("default").map(String::as_str),
            Some("http://maven.apache.org/POM/4.0.0")
        );
        assert_eq!(
            stats.namespaces.get("xsi").map(String::as_str),
            Some("http://www.w3.org/2001/XMLSchema-instance")
        );
    }

    #[test]
    fn test_escaping_is_preserved() {
        let output = process(r#"<a title='say "hi"'>1 &lt; 2<![CDATA[<raw>]]></a>"#, 2);
        assert_eq!(output.validity, Validity::Valid);
        assert!(output.content.contains(r#"<a title='say "hi"'>"#));
        assert!(output.content.contains("1 &lt; 2<![CDATA[<raw>]]></a>"));
    }

    #[test]
    fn test_nesting_beyond_limit_is_invalid() {
        let depth = MAX_ANALYSIS_DEPTH + 2;
        let input = format!("{}{}", "<n>".repeat(depth), "</n>".repeat(depth));
        let output = process(&input, 1);
        assert_eq!(output.validity, Validity::Invalid);
        assert!(output.parse_error.unwrap_or_default().contains("nested deeper"));

        let ok = format!(
            "{}{}",
            "<n>".repeat(MAX_ANALYSIS_DEPTH + 1),
            "</n>".repeat(MAX_ANALYSIS_DEPTH + 1)
        );
        let output = process(&ok, 1);
        assert_eq!(xml_stats(&output).max_depth, MAX_ANALYSIS_DEPTH);
    }
}
