//! Byte offsets of the ISD mandatory data section and how each is decoded.
//!
//! Offsets are zero-based and end-exclusive. Several fields read the same
//! bytes to expose a native-unit and a derived-unit view.

use std::{collections::HashSet, fmt, ops::Range};

use super::{convert, Value};
use crate::error::IsdError;

pub type Converter = fn(&str) -> Result<Value, IsdError>;

#[derive(Clone, Copy)]
pub enum Conversion {
    /// Whitespace-trimmed text.
    Text,
    /// Raw, untrimmed slice handed to a conversion function.
    With(Converter),
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Text => write!(f, "Text"),
            Conversion::With(_) => write!(f, "With(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub byte_range: Range<usize>,
    pub conversion: Conversion,
}

impl FieldSpec {
    pub const fn new(name: &'static str, byte_range: Range<usize>, conversion: Conversion) -> Self {
        FieldSpec {
            name,
            byte_range,
            conversion,
        }
    }

    pub const fn text(name: &'static str, byte_range: Range<usize>) -> Self {
        Self::new(name, byte_range, Conversion::Text)
    }

    pub const fn with(name: &'static str, byte_range: Range<usize>, f: Converter) -> Self {
        Self::new(name, byte_range, Conversion::With(f))
    }
}

/// Mandatory data section, bytes 0..105.
pub const ISD_MANDATORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::with("total_var_chars", 0..4, convert::integer),
    FieldSpec::text("usaf_id", 4..10),
    FieldSpec::text("wban_id", 10..15),
    FieldSpec::with("obs_dtg_utc", 15..27, convert::parse_timestamp),
    FieldSpec::text("obs_src_flag", 27..28),
    FieldSpec::with("obs_lat_dec", 28..34, convert::scale_coordinate),
    FieldSpec::with("obs_lon_dec", 34..41, convert::scale_coordinate),
    FieldSpec::text("report_type_code", 41..46),
    FieldSpec::with("obs_elevation_meter", 46..51, convert::integer),
    FieldSpec::with("obs_elevation_feet", 46..51, convert::obs_elevation_feet),
    FieldSpec::text("station_call_id", 51..56),
    FieldSpec::text("obs_quality_proc_name", 56..60),
    FieldSpec::with("wind_direction_true", 60..63, convert::integer),
    FieldSpec::text("wind_dir_qual_code", 63..64),
    FieldSpec::text("wind_obs_type_code", 64..65),
    FieldSpec::with("wind_speed_meters_sec", 65..69, convert::integer),
    FieldSpec::with("wind_speed_kts", 65..69, convert::meters_per_sec_to_knots),
    FieldSpec::text("wind_obs_spd_qual_code", 69..70),
    FieldSpec::with("ceiling_height_meters", 70..75, convert::integer),
    FieldSpec::with("ceiling_height_feet", 70..75, convert::ceiling_height_feet),
    FieldSpec::text("ceiling_qual_code", 75..76),
    FieldSpec::text("ceiling_determination_code", 76..77),
    FieldSpec::text("cavok_code", 77..78),
    FieldSpec::with("visibility_meters", 78..84, convert::integer),
    FieldSpec::with("visibility_miles", 78..84, convert::meters_to_statute_miles),
    FieldSpec::text("visibility_qual_code", 84..85),
    FieldSpec::text("visibility_variability_code", 85..86),
    FieldSpec::text("visibility_variability_qual_code", 86..87),
    FieldSpec::with("air_temp_celsius", 87..92, convert::scale_air_temp),
    FieldSpec::text("air_temp_qual_code", 92..93),
    FieldSpec::with("dew_point_celsius", 93..98, convert::scale_air_temp),
    FieldSpec::text("dew_point_qual_code", 98..99),
    FieldSpec::with(
        "sea_level_pressure_hecto",
        99..104,
        convert::scale_sea_level_pressure_hecto,
    ),
    FieldSpec::with(
        "sea_level_pressure_in_hg",
        99..104,
        convert::sea_level_pressure_in_hg,
    ),
    FieldSpec::text("sea_level_pressure_qual_code", 104..105),
];

/// An ordered, name-unique set of fields to decode from each line.
#[derive(Debug, Clone)]
pub struct FieldMap {
    fields: Vec<FieldSpec>,
}

impl FieldMap {
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, IsdError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(IsdError::DuplicateField(field.name));
            }
        }

        Ok(FieldMap { fields })
    }

    /// The full ISD mandatory data section.
    pub fn isd() -> Self {
        FieldMap {
            fields: ISD_MANDATORY_FIELDS.to_vec(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::isd()
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(map: &'a FieldMap, name: &str) -> &'a FieldSpec {
        map.fields().iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn should_have_unique_names_in_default_map() {
        let map = FieldMap::new(ISD_MANDATORY_FIELDS.to_vec()).unwrap();
        assert_eq!(map.len(), ISD_MANDATORY_FIELDS.len());
    }

    #[test]
    fn should_cover_mandatory_section() {
        let end = FieldMap::isd()
            .fields()
            .iter()
            .map(|f| f.byte_range.end)
            .max();
        assert_eq!(end, Some(105));
    }

    #[test]
    fn should_share_bytes_between_unit_views() {
        let map = FieldMap::isd();
        let meters = field(&map, "ceiling_height_meters");
        let feet = field(&map, "ceiling_height_feet");

        assert_eq!(meters.byte_range, 70..75);
        assert_eq!(meters.byte_range, feet.byte_range);
    }

    #[test]
    fn should_reject_duplicate_names() {
        let fields = vec![
            FieldSpec::text("usaf_id", 4..10),
            FieldSpec::text("usaf_id", 10..15),
        ];

        let e = FieldMap::new(fields).unwrap_err();
        assert!(matches!(e, IsdError::DuplicateField("usaf_id")));
    }

    #[test]
    fn should_keep_declared_order() {
        let names: Vec<_> = FieldMap::isd().names().take(4).collect();
        assert_eq!(
            names,
            vec!["total_var_chars", "usaf_id", "wban_id", "obs_dtg_utc"]
        );
    }
}
