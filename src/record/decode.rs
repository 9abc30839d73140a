//! Apply a field map to one fixed-width line.

use super::{Conversion, DecodedRecord, FieldMap, Value};
use crate::error::IsdError;

/// Decodes `line` with the given field map.
///
/// Text fields are trimmed; every other field hands its raw slice to the
/// field's converter.
pub fn decode(line: &str, field_map: &FieldMap) -> Result<DecodedRecord, IsdError> {
    if let Some(short) = field_map
        .fields()
        .iter()
        .find(|f| f.byte_range.end > line.len())
    {
        return Err(IsdError::RecordTooShort {
            field: short.name,
            required: short.byte_range.end,
            actual: line.len(),
        });
    }

    let mut record = DecodedRecord::with_capacity(field_map.len());

    for field in field_map.fields() {
        let raw = line
            .get(field.byte_range.clone())
            .ok_or_else(|| IsdError::format("record encoding", line))?;

        let value = match field.conversion {
            Conversion::Text => Value::Text(raw.trim().to_string()),
            Conversion::With(convert) => convert(raw)?,
        };

        record.push(field.name, value);
    }

    Ok(record)
}

/// Decodes `line` with the ISD mandatory section field map.
///
/// Lines must carry the full 105-byte mandatory data section.
pub fn decode_isd(line: &str) -> Result<DecodedRecord, IsdError> {
    decode(line, &FieldMap::isd())
}

// -- Tests -------------------------------------------------------------------
