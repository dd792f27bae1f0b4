// Field records: the bracketed intermediate form between tagger and verbalizer.
//
// A tagger emits text like `cardinal { negative: "-" integer: "23" }`;
// the verbalizer consumes the same syntax. This module gives that form a
// typed in-memory representation with a canonical renderer and parser,
// so callers can inspect or build records without string surgery.

use crate::ItnError;

/// Which tagger produced (or which verbalizer should consume) a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Cardinal,
    Decimal,
    Ordinal,
}

impl RecordKind {
    /// The label used in the bracketed surface form.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Cardinal => "cardinal",
            RecordKind::Decimal => "decimal",
            RecordKind::Ordinal => "ordinal",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "cardinal" => Some(RecordKind::Cardinal),
            "decimal" => Some(RecordKind::Decimal),
            "ordinal" => Some(RecordKind::Ordinal),
            _ => None,
        }
    }
}

/// Field labels that may appear inside a record.
///
/// Field order within a record is fixed by the tagger that emits it;
/// absent optional fields are omitted entirely, never emitted empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Negative,
    Integer,
    IntegerPart,
    FractionalPart,
    Quantity,
}

impl FieldName {
    /// The label used in the bracketed surface form.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Negative => "negative",
            FieldName::Integer => "integer",
            FieldName::IntegerPart => "integer_part",
            FieldName::FractionalPart => "fractional_part",
            FieldName::Quantity => "quantity",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "negative" => Some(FieldName::Negative),
            "integer" => Some(FieldName::Integer),
            "integer_part" => Some(FieldName::IntegerPart),
            "fractional_part" => Some(FieldName::FractionalPart),
            "quantity" => Some(FieldName::Quantity),
            _ => None,
        }
    }
}

/// One `name: "value"` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub value: String,
}

/// A parsed field record: kind plus ordered fields.
///
/// Field values are quoted literal text; a value containing an unescaped
/// `"` cannot be represented and is rejected at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    kind: RecordKind,
    fields: Vec<Field>,
}

impl FieldRecord {
    /// Create an empty record of the given kind.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Append a field. Fails if the value contains a quote character.
    pub fn push(
        &mut self,
        name: FieldName,
        value: impl Into<String>,
    ) -> Result<(), ItnError> {
        let value = value.into();
        if value.contains('"') {
            return Err(ItnError::malformed(format!(
                "field {} value contains an unescaped quote",
                name.as_str()
            )));
        }
        self.fields.push(Field { name, value });
        Ok(())
    }

    /// Return the value of the first field with the given name.
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Render the canonical bracketed surface form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(self.kind.as_str());
        out.push_str(" {");
        for field in &self.fields {
            out.push(' ');
            out.push_str(field.name.as_str());
            out.push_str(": \"");
            out.push_str(&field.value);
            out.push('"');
        }
        out.push_str(" }");
        out
    }

    /// Parse a bracketed surface form produced by [`FieldRecord::render`]
    /// or by a tagger transducer.
    pub fn parse(text: &str) -> Result<Self, ItnError> {
        let mut rest = text.trim();

        let brace = rest
            .find('{')
            .ok_or_else(|| ItnError::malformed("missing opening brace"))?;
        let label = rest[..brace].trim();
        let kind = RecordKind::from_label(label)
            .ok_or_else(|| ItnError::malformed(format!("unknown record kind {label:?}")))?;
        rest = &rest[brace + 1..];

        let close = rest
            .rfind('}')
            .ok_or_else(|| ItnError::malformed("missing closing brace"))?;
        if !rest[close + 1..].trim().is_empty() {
            return Err(ItnError::malformed("trailing text after closing brace"));
        }
        rest = rest[..close].trim();

        let mut record = FieldRecord::new(kind);
        while !rest.is_empty() {
            let colon = rest
                .find(':')
                .ok_or_else(|| ItnError::malformed("field without colon"))?;
            let name_label = rest[..colon].trim();
            let name = FieldName::from_label(name_label).ok_or_else(|| {
                ItnError::malformed(format!("unknown field name {name_label:?}"))
            })?;
            rest = rest[colon + 1..].trim_start();

            if !rest.starts_with('"') {
                return Err(ItnError::malformed(format!(
                    "field {name_label} value is not quoted"
                )));
            }
            let value_end = rest[1..]
                .find('"')
                .ok_or_else(|| ItnError::malformed("unterminated field value"))?;
            let value = &rest[1..1 + value_end];
            record.push(name, value)?;
            rest = rest[1 + value_end + 1..].trim_start();
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_cardinal_record() {
        let mut record = FieldRecord::new(RecordKind::Cardinal);
        record.push(FieldName::Negative, "-").unwrap();
        record.push(FieldName::Integer, "23").unwrap();
        assert_eq!(record.render(), "cardinal { negative: \"-\" integer: \"23\" }");
    }

    #[test]
    fn render_empty_record() {
        let record = FieldRecord::new(RecordKind::Ordinal);
        assert_eq!(record.render(), "ordinal { }");
    }

    #[test]
    fn parse_roundtrip() {
        let mut record = FieldRecord::new(RecordKind::Decimal);
        record.push(FieldName::IntegerPart, "5").unwrap();
        record.push(FieldName::FractionalPart, "25").unwrap();
        record.push(FieldName::Quantity, "万").unwrap();
        let parsed = FieldRecord::parse(&record.render()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn parse_preserves_field_order() {
        let parsed =
            FieldRecord::parse("cardinal { negative: \"-\" integer: \"7\" }").unwrap();
        assert_eq!(parsed.fields()[0].name, FieldName::Negative);
        assert_eq!(parsed.fields()[1].name, FieldName::Integer);
        assert_eq!(parsed.get(FieldName::Integer), Some("7"));
    }

    #[test]
    fn reject_quote_in_value() {
        let mut record = FieldRecord::new(RecordKind::Cardinal);
        let err = record.push(FieldName::Integer, "1\"2").unwrap_err();
        assert!(matches!(err, ItnError::MalformedFieldRecord { .. }));
    }

    #[test]
    fn reject_unknown_kind() {
        let err = FieldRecord::parse("money { integer: \"1\" }").unwrap_err();
        assert!(matches!(err, ItnError::MalformedFieldRecord { .. }));
    }

    #[test]
    fn reject_unknown_field() {
        let err = FieldRecord::parse("cardinal { units: \"1\" }").unwrap_err();
        assert!(matches!(err, ItnError::MalformedFieldRecord { .. }));
    }

    #[test]
    fn reject_unquoted_value() {
        let err = FieldRecord::parse("cardinal { integer: 12 }").unwrap_err();
        assert!(matches!(err, ItnError::MalformedFieldRecord { .. }));
    }

    #[test]
    fn reject_missing_braces() {
        assert!(FieldRecord::parse("cardinal integer: \"1\"").is_err());
        assert!(FieldRecord::parse("cardinal { integer: \"1\"").is_err());
    }

    #[test]
    fn reject_trailing_text() {
        let err = FieldRecord::parse("cardinal { integer: \"1\" } extra").unwrap_err();
        assert!(matches!(err, ItnError::MalformedFieldRecord { .. }));
    }
}
