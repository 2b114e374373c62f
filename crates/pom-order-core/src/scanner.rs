//! Streaming container scanner with byte-accurate span tracking.
//!
//! Walks the document with the quick-xml SAX reader and records where the
//! container's top-level children begin and end. A depth counter closes a
//! child only when nesting returns to the container level, so a child that
//! contains a same-named grandchild spans to its matching close tag. The
//! reader's default end-name checking keeps the depth counter from
//! desyncing on mismatched tags; any reader error makes the whole document
//! inert instead.

use crate::types::{ChildSpan, ContainerLayout};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Locates the first element named `container` and partitions its inner
/// content into top-level child spans.
///
/// Returns `None` when the document has no such element, when the element
/// is self-closing, or when the reader fails before the container's
/// closing tag. Callers treat `None` as "leave the document unchanged".
pub fn scan_container(text: &str, container: &str) -> Option<ContainerLayout> {
    let mut reader = Reader::from_str(text);

    // Phase 1: first matching start tag wins, at any depth.
    let content_start = loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == container.as_bytes() => {
                break reader.buffer_position() as usize;
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == container.as_bytes() => {
                tracing::debug!("container <{container}/> is self-closing; nothing to reorder");
                return None;
            }
            Ok(Event::Eof) => return None,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(
                    "tokenizer error at byte {} while looking for <{container}>: {err}",
                    reader.buffer_position()
                );
                return None;
            }
        }
    };

    // Phase 2: collect child spans until the container closes. The span of
    // a child starts where the previous one ended, so interstitial
    // whitespace and comments travel with the element that follows them.
    let mut children = Vec::new();
    let mut cursor = content_start;
    let mut current: Option<String> = None;
    let mut depth = 0usize;

    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if depth == 0 {
                    current = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                if depth == 0 {
                    let end = reader.buffer_position() as usize;
                    children.push(ChildSpan {
                        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        start: cursor,
                        end,
                    });
                    cursor = end;
                }
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    // The container's own closing tag; the rest of the
                    // document is left unread and untouched.
                    return Some(ContainerLayout {
                        content_start,
                        content_end: pos,
                        children,
                        trailing_start: cursor,
                    });
                }
                depth -= 1;
                if depth == 0 {
                    let end = reader.buffer_position() as usize;
                    children.push(ChildSpan {
                        name: current.take().unwrap_or_default(),
                        start: cursor,
                        end,
                    });
                    cursor = end;
                }
            }
            Ok(Event::Eof) => {
                tracing::debug!("<{container}> never closed; leaving document unchanged");
                return None;
            }
            // Text, CDATA, comments, PIs and entity references between
            // children are swept into the next child's leading span (or
            // into the trailing residue after the last child).
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("tokenizer error at byte {pos} inside <{container}>: {err}");
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(layout: &ContainerLayout) -> Vec<&str> {
        layout.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_simple_children() {
        let doc = "<project><b>1</b><a>2</a></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(layout.content_start, 9);
        assert_eq!(layout.content_end, 25);
        assert_eq!(names(&layout), ["b", "a"]);
        assert_eq!(layout.children[0].text(doc), "<b>1</b>");
        assert_eq!(layout.children[1].text(doc), "<a>2</a>");
        assert_eq!(layout.trailing(doc), "");
    }

    #[test]
    fn test_spans_partition_content_losslessly() {
        let doc = "<project>\n  <b>1</b>\n  <!-- note -->\n  <a>2</a>\n  <c/>\n</project>";
        let layout = scan_container(doc, "project").unwrap();
        let mut rebuilt = String::new();
        for child in &layout.children {
            rebuilt.push_str(child.text(doc));
        }
        rebuilt.push_str(layout.trailing(doc));
        assert_eq!(rebuilt, &doc[layout.content_start..layout.content_end]);
    }

    #[test]
    fn test_comment_travels_with_following_child() {
        let doc = "<project><!-- c --><a/></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(layout.children.len(), 1);
        assert_eq!(layout.children[0].text(doc), "<!-- c --><a/>");
    }

    #[test]
    fn test_leading_whitespace_included_in_span() {
        let doc = "<project>\n\n  <a>1</a>\n</project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(layout.children[0].text(doc), "\n\n  <a>1</a>");
        assert_eq!(layout.trailing(doc), "\n");
    }

    #[test]
    fn test_self_closing_child_is_captured() {
        let doc = "<project><modules/><groupId>g</groupId></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(names(&layout), ["modules", "groupId"]);
        assert_eq!(layout.children[0].text(doc), "<modules/>");
    }

    #[test]
    fn test_nested_same_name_spans_to_matching_close() {
        let doc =
            "<project><build><x><build>i</build></x></build><artifactId>a</artifactId></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(names(&layout), ["build", "artifactId"]);
        assert_eq!(
            layout.children[0].text(doc),
            "<build><x><build>i</build></x></build>"
        );
    }

    #[test]
    fn test_no_container() {
        assert!(scan_container("<notproject><foo>bar</foo></notproject>", "project").is_none());
    }

    #[test]
    fn test_unclosed_container() {
        assert!(scan_container("<project><a>", "project").is_none());
    }

    #[test]
    fn test_mismatched_end_tag() {
        assert!(scan_container("<project><a></b></project>", "project").is_none());
    }

    #[test]
    fn test_self_closing_container() {
        assert!(scan_container("<project/>", "project").is_none());
    }

    #[test]
    fn test_container_nested_in_other_root() {
        let doc = "<root><project><b/><a/></project></root>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(layout.content_start, 15);
        assert_eq!(names(&layout), ["b", "a"]);
    }

    #[test]
    fn test_self_similar_nesting_uses_first_container() {
        let doc = "<project><project>x</project><a/></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(names(&layout), ["project", "a"]);
        assert_eq!(layout.children[0].text(doc), "<project>x</project>");
        assert_eq!(layout.content_end, 33);
    }

    #[test]
    fn test_prolog_and_attributes() {
        let doc = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- pom -->\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <groupId>g</groupId>\n</project>\n";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(names(&layout), ["groupId"]);
        assert_eq!(layout.children[0].text(doc), "\n  <groupId>g</groupId>");
    }

    #[test]
    fn test_namespace_prefixed_child_keeps_full_name() {
        let doc = "<project><m:properties xmlns:m=\"urn:m\">x</m:properties></project>";
        let layout = scan_container(doc, "project").unwrap();
        assert_eq!(names(&layout), ["m:properties"]);
    }
}
