//! Where the ISD archive lives.

pub const ISD_HOST: &str = "www.ncei.noaa.gov";
pub const BASE_ISD_PATH: &str = "/pub/data/noaa";
pub const HISTORY_FILE_NAME: &str = "isd-history.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    pub host: String,
    pub base_path: String,
    pub history_file: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            host: ISD_HOST.to_string(),
            base_path: BASE_ISD_PATH.to_string(),
            history_file: HISTORY_FILE_NAME.to_string(),
        }
    }
}

impl ArchiveConfig {
    pub fn new(host: &str, base_path: &str) -> Self {
        ArchiveConfig {
            host: host.to_string(),
            base_path: base_path.to_string(),
            ..Default::default()
        }
    }

    /// Directory holding the observation files for `year`.
    pub fn year_path(&self, year: i32) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), year)
    }

    pub fn url(&self, path: &str, filename: &str) -> String {
        let host = self.host.trim_end_matches('/');
        let host = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        format!(
            "{}/{}/{}",
            host,
            path.trim_matches('/'),
            filename.trim_start_matches('/')
        )
    }

    pub fn history_url(&self) -> String {
        self.url(&self.base_path, &self.history_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_history_url() {
        let config = ArchiveConfig::default();
        assert_eq!(
            config.history_url(),
            "https://www.ncei.noaa.gov/pub/data/noaa/isd-history.csv"
        );
    }

    #[test]
    fn should_build_year_file_url() {
        let config = ArchiveConfig::new("http://localhost:8080/", "/mirror/noaa/");
        let url = config.url(&config.year_path(2015), "727930-24233-2015.gz");

        assert_eq!(url, "http://localhost:8080/mirror/noaa/2015/727930-24233-2015.gz");
    }
}
