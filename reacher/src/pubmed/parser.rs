//! Streaming extraction of abstract text from EFetch XML records

use std::io::BufReader;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

use crate::error::{ReacherError, Result};

/// Path of abstract fragments inside an EFetch record, relative to the
/// document root element
const ABSTRACT_TEXT_PATH: [&str; 5] = [
    "PubmedArticle",
    "MedlineCitation",
    "Article",
    "Abstract",
    "AbstractText",
];

/// Extract the abstract text from an EFetch XML record
///
/// Collects every `AbstractText` element found at
/// `PubmedArticle/MedlineCitation/Article/Abstract` directly under the
/// document root. Within a fragment, direct text and the text of nested
/// inline markup (labels render as attributes and are skipped; `<i>`,
/// `<sup>` and similar contribute their text) are concatenated in document
/// order without separators. Fragments are joined with a single newline.
///
/// # Returns
///
/// * `Ok(Some(text))` - the joined abstract, whitespace preserved
/// * `Ok(None)` - the record carries no abstract, or only whitespace
/// * `Err(ReacherError::XmlParseError)` - the record is not parseable XML
///
/// # Example
///
/// ```
/// use reacher::extract_abstract;
///
/// let xml = r#"<PubmedArticleSet>
///     <PubmedArticle><MedlineCitation><Article>
///         <Abstract><AbstractText>MEK phosphorylates ERK.</AbstractText></Abstract>
///     </Article></MedlineCitation></PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let abstract_text = extract_abstract(xml).unwrap();
/// assert_eq!(abstract_text.as_deref(), Some("MEK phosphorylates ERK."));
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn extract_abstract(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));

    let mut buf = Vec::new();
    let mut open_path: Vec<String> = Vec::new();
    let mut fragments: Vec<String> = Vec::new();
    let mut current_fragment = String::new();
    // Nesting depth inside the AbstractText element currently being
    // captured; 0 means not capturing.
    let mut capture_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                open_path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if capture_depth > 0 {
                    capture_depth += 1;
                } else if is_abstract_text_path(&open_path) {
                    capture_depth = 1;
                    current_fragment.clear();
                }
            }
            Ok(Event::End(_)) => {
                open_path.pop();
                if capture_depth > 0 {
                    capture_depth -= 1;
                    if capture_depth == 0 {
                        fragments.push(std::mem::take(&mut current_fragment));
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                if capture_depth == 0 {
                    open_path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    if is_abstract_text_path(&open_path) {
                        // <AbstractText/> contributes an empty fragment
                        fragments.push(String::new());
                    }
                    open_path.pop();
                }
            }
            Ok(Event::Text(e)) => {
                if capture_depth > 0 {
                    let text = e.unescape().map_err(|_| ReacherError::XmlParseError {
                        message: "Failed to decode XML text".to_string(),
                    })?;
                    current_fragment.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if capture_depth > 0 {
                    current_fragment.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ReacherError::XmlParseError {
                    message: format!("XML parsing error: {}", e),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    let joined = fragments.join("\n");
    if joined.trim().is_empty() {
        debug!("No abstract text found in record");
        return Ok(None);
    }

    debug!(
        fragment_count = fragments.len(),
        abstract_length = joined.len(),
        "Extracted abstract text"
    );
    Ok(Some(joined))
}

/// The root element's own name is not constrained; everything below it is.
fn is_abstract_text_path(open_path: &[String]) -> bool {
    open_path.len() == ABSTRACT_TEXT_PATH.len() + 1
        && open_path[1..]
            .iter()
            .zip(ABSTRACT_TEXT_PATH)
            .all(|(open, expected)| open == expected)
}
