//! Display model for extraction results.
//!
//! Components render [`RecordView`]s rather than raw [`ExtractionResult`]s,
//! so missing fields and list formatting are decided in one place.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::types::ExtractionResult;

/// Separator between skills.
pub const SKILL_SEPARATOR: &str = ", ";

/// Heading for history entries without a usable timestamp.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Same layout as `toLocaleString()` in an en-US browser.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Text of one result card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: Vec<String>,
}

impl RecordView {
    /// Label/value pairs shown above the experience list.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Skills", self.skills.as_str()),
        ]
    }

    /// Lines shown above the experience list, as the card renders them.
    pub fn lines(&self) -> Vec<FieldLine> {
        self.fields()
            .iter()
            .map(|(label, value)| FieldLine::new(label, value))
            .collect()
    }
}

/// One `Label: value` line of a result card.
///
/// The card puts [`heading`](Self::heading) in bold and appends
/// [`tail`](Self::tail); an empty value leaves only the heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLine {
    heading: String,
    tail: String,
}

impl FieldLine {
    pub fn new(label: &str, value: &str) -> Self {
        let tail = if value.is_empty() {
            String::new()
        } else {
            format!(" {}", value)
        };
        Self {
            heading: format!("{}:", label),
            tail,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Text as read on screen.
    pub fn text(&self) -> String {
        format!("{}{}", self.heading, self.tail)
    }
}

impl From<&ExtractionResult> for RecordView {
    fn from(result: &ExtractionResult) -> Self {
        Self {
            name: result.name.clone().unwrap_or_default(),
            email: result.email.clone().unwrap_or_default(),
            phone: result.phone.clone().unwrap_or_default(),
            skills: result
                .skills
                .as_deref()
                .map(|skills| skills.join(SKILL_SEPARATOR))
                .unwrap_or_default(),
            experience: result.experience.clone().unwrap_or_default(),
        }
    }
}

/// Header text of a history row.
///
/// RFC 3339 timestamps are shown in local time; naive ISO timestamps are
/// taken as already local. Anything else is shown verbatim.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp.map(str::trim).filter(|t| !t.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
