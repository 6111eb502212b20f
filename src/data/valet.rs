//! Bank of Canada Valet API integration for the `bond_yields_all` group.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::domain::BondYieldsData;
use crate::error::AppError;

pub const DEFAULT_URL: &str = "https://www.banqueducanada.ca/valet/observations/group/bond_yields_all/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_URL: &str = "BOC_VALET_URL";
const ENV_TIMEOUT: &str = "BOC_HTTP_TIMEOUT_SECS";

/// Where and how to fetch the group payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValetConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ValetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ValetConfig {
    /// Read `BOC_VALET_URL` / `BOC_HTTP_TIMEOUT_SECS` (after loading `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_URL).filter(|u| !u.trim().is_empty()) {
            config.url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| AppError::new(2, format!("Invalid {ENV_TIMEOUT} '{raw}': {e}")))?;
            config.timeout = timeout_from_secs(secs, ENV_TIMEOUT)?;
        }
        Ok(config)
    }
}

/// HTTP timeout from a seconds setting. Zero would fail every request, so it
/// is a config error; `source` names the env var or flag in the message.
pub fn timeout_from_secs(secs: u64, source: &str) -> Result<Duration, AppError> {
    if secs == 0 {
        return Err(AppError::new(2, format!("Invalid {source} '0': timeout must be at least 1 second")));
    }
    Ok(Duration::from_secs(secs))
}

pub struct ValetClient {
    client: Client,
    config: ValetConfig,
}

impl ValetClient {
    pub fn new(config: ValetConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ValetConfig::from_env()?)
    }

    /// Fetch and decode the whole group. One request, no retry.
    pub fn fetch_group(&self) -> Result<BondYieldsData, AppError> {
        debug!(url = %self.config.url, "fetching Valet group");

        let resp = self
            .client
            .get(&self.config.url)
            .send()
            .map_err(|e| AppError::new(4, format!("Valet request failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| AppError::new(4, format!("Failed to read Valet response body: {e}")))?;

        if !status.is_success() {
            return Err(AppError::new(
                4,
                format!("Valet request failed with status {status}.\n\nResponse: {body}"),
            ));
        }

        let data = parse_group(&body)?;
        info!(
            observations = data.observations.len(),
            group = %data.group_detail.label,
            "fetched Valet group"
        );
        Ok(data)
    }
}

/// Decode a Valet group JSON body.
pub fn parse_group(body: &str) -> Result<BondYieldsData, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::new(4, format!("Failed to parse Valet response: {e}")))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::domain::YieldSeries;

    /// Trimmed-down `bond_yields_all` payload.
    pub(crate) const FIXTURE: &str = r#"{
        "terms": {"url": "https://www.bankofcanada.ca/terms/"},
        "groupDetail": {
            "label": "Selected bond yields",
            "description": "Government of Canada marketable bonds: average yield",
            "link": "https://www.bankofcanada.ca/rates/interest-rates/canadian-bonds/"
        },
        "seriesDetail": {
            "BD.CDN.2YR.DQ.YLD": {
                "label": "2 year",
                "description": "Government of Canada benchmark bond yields - 2 year",
                "dimension": {"key": "d", "name": "Date"}
            },
            "BD.CDN.10YR.DQ.YLD": {
                "label": "10 year",
                "description": "Government of Canada benchmark bond yields - 10 year",
                "dimension": {"key": "d", "name": "Date"}
            }
        },
        "observations": [
            {"d": "2022-05-24", "BD.CDN.2YR.DQ.YLD": {"v": "2.57"}, "BD.CDN.3YR.DQ.YLD": {"v": "2.58"}, "BD.CDN.5YR.DQ.YLD": {"v": "2.64"}, "BD.CDN.10YR.DQ.YLD": {"v": "2.79"}},
            {"d": "2022-05-25", "BD.CDN.2YR.DQ.YLD": {"v": "2.53"}, "BD.CDN.3YR.DQ.YLD": {"v": "2.54"}, "BD.CDN.5YR.DQ.YLD": {"v": "2.60"}, "BD.CDN.10YR.DQ.YLD": {"v": "2.76"}},
            {"d": "2022-05-26", "BD.CDN.2YR.DQ.YLD": {"v": "2.55"}, "BD.CDN.3YR.DQ.YLD": {"v": "2.55"}, "BD.CDN.5YR.DQ.YLD": {"v": "2.62"}, "BD.CDN.10YR.DQ.YLD": {"v": "2.77"}, "CDN.AVG.1YTO3Y.AVG": {"v": "2.61"}}
        ]
    }"#;

    #[test]
    fn parse_group_decodes_fixture() {
        let data = parse_group(FIXTURE).unwrap();
        assert_eq!(data.group_detail.label, "Selected bond yields");
        assert_eq!(data.terms.url, "https://www.bankofcanada.ca/terms/");
        assert_eq!(data.observations.len(), 3);
        assert_eq!(data.observations[0].d, "2022-05-24");
        assert_eq!(data.observations[0].value(YieldSeries::Yield2Year).v, "2.57");
        assert_eq!(data.observations[2].value(YieldSeries::Average1To3Year).v, "2.61");
        assert_eq!(data.series_detail.detail(YieldSeries::Yield10Year).label, "10 year");
        assert!(data.series_detail.detail(YieldSeries::YieldRrb).label.is_empty());
    }

    #[test]
    fn parse_group_rejects_garbage() {
        let err = parse_group("<html>maintenance</html>").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn config_from_lookup() {
        let config = ValetConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ValetConfig::default());

        let config = ValetConfig::from_lookup(|key| match key {
            ENV_URL => Some(" http://localhost:8080/group.json ".to_string()),
            ENV_TIMEOUT => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.url, "http://localhost:8080/group.json");
        assert_eq!(config.timeout, Duration::from_secs(5));

        let err = ValetConfig::from_lookup(|key| (key == ENV_TIMEOUT).then(|| "soon".to_string())).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = ValetConfig::from_lookup(|key| (key == ENV_TIMEOUT).then(|| "0".to_string())).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(ENV_TIMEOUT));
    }

    /// Serve one canned HTTP response on an ephemeral port; returns the URL.
    pub(crate) fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/valet/observations/group/bond_yields_all/json")
    }

    pub(crate) fn local_client(url: String) -> ValetClient {
        ValetClient::new(ValetConfig {
            url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn non_success_status_reports_status_and_body() {
        let client = local_client(serve_once("503 Service Unavailable", "maintenance"));
        let err = client.fetch_group().unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("503 Service Unavailable"), "{err}");
        assert!(err.to_string().ends_with("Response: maintenance"), "{err}");
    }

    #[test]
    fn success_body_is_decoded() {
        let client = local_client(serve_once("200 OK", FIXTURE));
        let data = client.fetch_group().unwrap();
        assert_eq!(data.observations.len(), 3);
        assert_eq!(data.group_detail.label, "Selected bond yields");
    }

    #[test]
    fn success_status_with_bad_body_is_a_decode_error() {
        let client = local_client(serve_once("200 OK", "not json"));
        let err = client.fetch_group().unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("Failed to parse Valet response"), "{err}");
    }

    #[test]
    fn unreachable_endpoint_is_a_fetch_error() {
        let client = ValetClient::new(ValetConfig {
            url: "http://127.0.0.1:9/valet".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();
        let err = client.fetch_group().unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
