use crate::errors::Result;

pub const DEFAULT_SERVER_ADDR: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ENDPOINT_PATH: &str = "/upload-resume/";

pub const SERVER_ADDR_ENV: &str = "RESUME_SCORER_SERVER_ADDR";
pub const ENDPOINT_PATH_ENV: &str = "RESUME_SCORER_ENDPOINT_PATH";

/// Where submissions are posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_addr: url::Url,
    pub endpoint_path: String,
}

impl ClientConfig {
    pub fn new(server_addr: &str, endpoint_path: impl Into<String>) -> Result<ClientConfig> {
        Ok(ClientConfig {
            server_addr: url::Url::parse(server_addr)?,
            endpoint_path: endpoint_path.into(),
        })
    }

    /// Load configuration from environment variables, falling back to the
    /// loopback defaults for anything unset.
    pub fn from_env() -> Result<ClientConfig> {
        let server_addr =
            std::env::var(SERVER_ADDR_ENV).unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let endpoint_path =
            std::env::var(ENDPOINT_PATH_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT_PATH.to_string());
        ClientConfig::new(&server_addr, endpoint_path)
    }

    /// The endpoint path is appended below any path already on the server
    /// address, so a server mounted under a prefix keeps that prefix.
    pub fn endpoint_url(&self) -> Result<url::Url> {
        let mut base = self.server_addr.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(self.endpoint_path.trim_start_matches('/'))?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_addr: url::Url::parse(DEFAULT_SERVER_ADDR)
                .expect("default server address is a valid URL"),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn default_points_at_loopback_upload_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:8000/upload-resume/"
        );
    }

    #[test]
    fn custom_server_and_path() {
        let config = ClientConfig::new("https://scorer.example.com:9443", "/v2/score/").unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "https://scorer.example.com:9443/v2/score/"
        );
    }

    #[test]
    fn server_path_prefix_is_kept() {
        let config =
            ClientConfig::new("http://gateway.local/scorer", DEFAULT_ENDPOINT_PATH).unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://gateway.local/scorer/upload-resume/"
        );
    }

    #[test]
    fn server_path_prefix_with_trailing_slash() {
        let config = ClientConfig::new("http://gateway.local/scorer/", "upload-resume/").unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://gateway.local/scorer/upload-resume/"
        );
        let config =
            ClientConfig::new("http://gateway.local/scorer/", DEFAULT_ENDPOINT_PATH).unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://gateway.local/scorer/upload-resume/"
        );
    }

    #[test]
    fn malformed_address_is_config_error() {
        let err = ClientConfig::new("not a url", DEFAULT_ENDPOINT_PATH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn env_overrides_defaults() {
        std::env::set_var(SERVER_ADDR_ENV, "http://10.0.0.5:8080");
        std::env::set_var(ENDPOINT_PATH_ENV, "/score/");
        let config = ClientConfig::from_env();
        std::env::remove_var(SERVER_ADDR_ENV);
        std::env::remove_var(ENDPOINT_PATH_ENV);

        let config = config.unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://10.0.0.5:8080/score/"
        );
    }
}
