//! Unit conversions applied to raw fixed-width sub-fields.
//!
//! See the "ISD format document" (ish-format-document.pdf), section
//! "Mandatory data section", for the scaling factors and missing-value
//! markers. Missing markers are returned as values, not as errors.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::Value;
use crate::error::IsdError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

const FEET_PER_METER: Decimal = Decimal::from_parts(328084, 0, 0, false, 5);
const KNOTS_PER_METER_SEC: Decimal = Decimal::from_parts(194384, 0, 0, false, 5);
const MILES_PER_METER: Decimal = Decimal::from_parts(621371, 0, 0, false, 9);
const IN_HG_PER_HECTOPASCAL: Decimal = Decimal::from_parts(2953, 0, 0, false, 4);

const COORDINATE_SCALE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Parses `YYYYMMDDHHMM` as a UTC timestamp.
pub fn parse_timestamp(text: &str) -> Result<Value, IsdError> {
    let dtg = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| IsdError::format("observation timestamp", text))?;

    Ok(Value::Timestamp(dtg.and_utc()))
}

/// Plain integer at the field's native scale.
pub fn integer(text: &str) -> Result<Value, IsdError> {
    parse_integer(text).map(Value::Integer)
}

pub fn scale_coordinate(text: &str) -> Result<Value, IsdError> {
    Ok(Value::Decimal(parse_decimal(text)? / COORDINATE_SCALE))
}

pub fn meters_to_feet(text: &str) -> Result<Value, IsdError> {
    Ok(Value::Decimal(parse_decimal(text)? * FEET_PER_METER))
}

/// Tenths to units: wind speed, temperature, pressure, precipitation depth.
pub fn scale_down_ten(text: &str) -> Result<Value, IsdError> {
    Ok(Value::Decimal(tenths(text)?))
}

/// Wind speed in tenths of m/s to knots. `9999` (missing) passes through.
pub fn meters_per_sec_to_knots(text: &str) -> Result<Value, IsdError> {
    if text == "9999" {
        return Ok(Value::Decimal(Decimal::from(9999)));
    }

    Ok(Value::Decimal(tenths(text)? * KNOTS_PER_METER_SEC))
}

/// Station elevation in feet. `+9999` (missing) passes through as an integer.
pub fn obs_elevation_feet(text: &str) -> Result<Value, IsdError> {
    if text == "+9999" {
        return integer(text);
    }

    meters_to_feet(text)
}

/// Ceiling height in feet. `99999` (missing) passes through as an integer.
pub fn ceiling_height_feet(text: &str) -> Result<Value, IsdError> {
    if text == "99999" {
        return integer(text);
    }

    meters_to_feet(text)
}

pub fn meters_to_statute_miles(text: &str) -> Result<Value, IsdError> {
    Ok(Value::Decimal(parse_decimal(text)? * MILES_PER_METER))
}

/// Air or dew point temperature in degrees Celsius.
pub fn scale_air_temp(text: &str) -> Result<Value, IsdError> {
    if text == "+9999" {
        return integer(text);
    }

    scale_down_ten(text)
}

pub fn scale_sea_level_pressure_hecto(text: &str) -> Result<Value, IsdError> {
    if text == "99999" {
        return integer(text);
    }

    scale_down_ten(text)
}

pub fn sea_level_pressure_in_hg(text: &str) -> Result<Value, IsdError> {
    if text == "99999" {
        return integer(text);
    }

    Ok(Value::Decimal(tenths(text)? * IN_HG_PER_HECTOPASCAL))
}

fn tenths(text: &str) -> Result<Decimal, IsdError> {
    Ok(parse_decimal(text)? / Decimal::TEN)
}

// ISD signed fields carry an explicit `+`.
fn numeric_text(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix('+').unwrap_or(trimmed)
}

fn parse_integer(text: &str) -> Result<i64, IsdError> {
    numeric_text(text)
        .parse()
        .map_err(|_| IsdError::format("integer", text))
}

fn parse_decimal(text: &str) -> Result<Decimal, IsdError> {
    Decimal::from_str(numeric_text(text)).map_err(|_| IsdError::format("decimal", text))
}

// -- Tests -------------------------------------------------------------------
