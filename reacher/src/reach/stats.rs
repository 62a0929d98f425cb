//! Summarization of FRIES analysis results

use std::io::{self, Write};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Result;

/// Counts of extracted events grouped by frame type
///
/// Built from a raw FRIES JSON document. Per-type counts keep the order in
/// which each type first appears in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStats {
    /// Total number of event frames in the result
    pub total: usize,
    /// Per-type counts in first-seen order
    pub by_type: Vec<(String, usize)>,
}

impl EventStats {
    /// Count the event frames in a raw FRIES JSON document
    ///
    /// The `events` section and its `frames` array are both optional; a
    /// document without them summarizes to zero events. Frames lacking a
    /// string `type` field count toward the total but belong to no group.
    ///
    /// # Errors
    ///
    /// * `ReacherError::JsonError` - If the document is not valid JSON
    ///
    /// # Example
    ///
    /// ```
    /// use reacher::EventStats;
    ///
    /// let raw = r#"{"events": {"frames": [
    ///     {"type": "phosphorylation"},
    ///     {"type": "activation"},
    ///     {"type": "phosphorylation"}
    /// ]}}"#;
    ///
    /// let stats = EventStats::from_json(raw).unwrap();
    /// assert_eq!(stats.total, 3);
    /// assert_eq!(stats.by_type[0], ("phosphorylation".to_string(), 2));
    /// ```
    #[instrument(skip(raw), fields(json_size = raw.len()))]
    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(raw)?;

        let frames = doc
            .get("events")
            .and_then(|events| events.get("frames"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let mut by_type: Vec<(String, usize)> = Vec::new();
        for frame in frames {
            if let Some(frame_type) = frame.get("type").and_then(Value::as_str) {
                match by_type.iter_mut().find(|entry| entry.0 == frame_type) {
                    Some(entry) => entry.1 += 1,
                    None => by_type.push((frame_type.to_string(), 1)),
                }
            }
        }

        debug!(
            total = frames.len(),
            distinct_types = by_type.len(),
            "Summarized event frames"
        );

        Ok(Self {
            total: frames.len(),
            by_type,
        })
    }

    /// Write the human-readable event report
    ///
    /// Emits the total, a header, and one indented line per distinct frame
    /// type in first-seen order:
    ///
    /// ```text
    /// events extracted: 3
    /// number of events of each type:
    ///   'phosphorylation': 2
    ///   'activation': 1
    /// ```
    pub fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "events extracted: {}", self.total)?;
        writeln!(writer, "number of events of each type:")?;
        for (frame_type, count) in &self.by_type {
            writeln!(writer, "  '{}': {}", frame_type, count)?;
        }
        Ok(())
    }
}
