//! Rows of the station history file (`isd-history.csv`).

use std::io::Read;

use serde::Deserialize;

/// One row of `isd-history.csv`. Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryRow {
    #[serde(rename = "USAF")]
    pub usaf: String,
    #[serde(rename = "WBAN")]
    pub wban: String,
    #[serde(rename = "STATION NAME")]
    pub name: String,
    #[serde(rename = "CTRY")]
    pub country: String,
    #[serde(rename = "STATE")]
    pub state: String,
    #[serde(rename = "ICAO")]
    pub icao: String,
    #[serde(rename = "BEGIN")]
    pub begin: String,
    #[serde(rename = "END")]
    pub end: String,
}

/// Reads every row of a station history file.
pub fn read_history<R: Read>(reader: R) -> Result<Vec<HistoryRow>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = r#""USAF","WBAN","STATION NAME","CTRY","STATE","ICAO","LAT","LON","ELEV(M)","BEGIN","END"
"727930","24233","SEATTLE-TACOMA INTERNATIONAL AIRPORT","US","WA","KSEA","+47.444","-122.314","+0112.8","19480101","20250824"
"999999","99999","NO ICAO STATION","US","","","","","","20000101","20001231"
"#;

    #[test]
    fn should_read_history_rows() {
        let rows = read_history(HISTORY.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].usaf, "727930");
        assert_eq!(rows[0].wban, "24233");
        assert_eq!(rows[0].name, "SEATTLE-TACOMA INTERNATIONAL AIRPORT");
        assert_eq!(rows[0].state, "WA");
        assert_eq!(rows[0].icao, "KSEA");
        assert_eq!(rows[0].begin, "19480101");
        assert_eq!(rows[1].icao, "");
    }

    #[test]
    fn should_fail_on_missing_column() {
        let data = "USAF,WBAN\n727930,24233\n";
        assert!(read_history(data.as_bytes()).is_err());
    }
}
