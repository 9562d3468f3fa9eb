use std::collections::{BTreeMap, BTreeSet};

use super::RenderError;

const OPEN: &str = "<<";
const CLOSE: &str = ">>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Plot source with `<<name>>` placeholders.
///
/// Placeholders use angle brackets so that the braces of LaTeX and pgfplots can
/// appear in the template unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotTemplate {
    segments: Vec<Segment>,
}

impl PlotTemplate {
    /// Parse a template, rejecting unterminated or malformed placeholders.
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or(RenderError::Unterminated(offset + start))?;

            let name = after_open[..end].trim();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RenderError::InvalidPlaceholder {
                    name: name.to_string(),
                    offset: offset + start,
                });
            }
            segments.push(Segment::Placeholder(name.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Placeholder names declared by the template
    pub fn placeholders(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute values into the template.
    ///
    /// Every supplied name must be declared by the template and every declared
    /// placeholder must be supplied; otherwise nothing is rendered.
    pub fn render(&self, values: &BTreeMap<&str, String>) -> Result<String, RenderError> {
        let declared = self.placeholders();
        if let Some(name) = values.keys().find(|k| !declared.contains(*k)) {
            return Err(RenderError::UnusedValue(name.to_string()));
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name.as_str())
                        .ok_or_else(|| RenderError::UndefinedPlaceholder(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}
