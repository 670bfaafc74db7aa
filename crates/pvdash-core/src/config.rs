use serde::{Deserialize, Serialize};

/// Version string shown in the dashboard header.
pub const DEFAULT_VERSION: &str = "Version 1.0a";

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct Config<'a> {
    pub internet: InternetConfig<'a>,
    pub source: SourceConfig<'a>,
    pub display: DisplayConfig<'a>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
pub struct InternetConfig<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

/// Where the aggregator publishes the telemetry document.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
pub struct SourceConfig<'a> {
    pub url: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct DisplayConfig<'a> {
    pub version: &'a str,
}

impl Default for DisplayConfig<'_> {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version() {
        let config = Config::default();
        assert_eq!(config.display.version, "Version 1.0a");
        assert_eq!(config.internet.ssid, "");
    }

    #[test]
    fn test_deserialize_borrowed() {
        let raw = r#"{
            "internet": { "ssid": "garage", "password": "hunter2" },
            "source": { "url": "http://10.0.0.2/solar.php" },
            "display": { "version": "Version 2.0" }
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.internet.ssid, "garage");
        assert_eq!(config.source.url, "http://10.0.0.2/solar.php");
        assert_eq!(config.display.version, "Version 2.0");
    }
}
