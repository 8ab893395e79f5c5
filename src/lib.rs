use std::future::Future;

pub mod analysis;
pub mod config;
pub mod errors;
pub mod handler;
pub mod render;
pub mod submission;

pub use analysis::{AnalysisResult, Metrics};
pub use config::{ClientConfig, DEFAULT_ENDPOINT_PATH, DEFAULT_SERVER_ADDR};
pub use errors::{ErrorKind, ScorerError};
pub use handler::{SubmissionHandler, SubmissionOutcome};
pub use render::{BarChart, RegionContent, ResultsSurface, TerminalSurface};
pub use submission::{ResumeFile, SubmissionInput, SubmissionPayload};

/// Anything that can turn a submission payload into an analysis.
pub trait ScoringService: Send + Sync {
    fn score(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = errors::Result<AnalysisResult>> + Send;
}

#[derive(Debug, Clone)]
pub struct ResumeScorerClient {
    endpoint_url: url::Url,
    http_client: reqwest::Client,
}

impl ResumeScorerClient {
    pub fn new() -> errors::Result<ResumeScorerClient> {
        ResumeScorerClient::new_for_server(DEFAULT_SERVER_ADDR)
    }

    pub fn new_for_server(server_addr: &str) -> errors::Result<ResumeScorerClient> {
        ResumeScorerClient::from_config(&ClientConfig::new(server_addr, DEFAULT_ENDPOINT_PATH)?)
    }

    pub fn from_config(config: &ClientConfig) -> errors::Result<ResumeScorerClient> {
        let scheme = config.server_addr.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ScorerError::BadScheme {
                scheme: scheme.to_string(),
            });
        }
        Ok(ResumeScorerClient {
            endpoint_url: config.endpoint_url()?,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn endpoint_url(&self) -> &url::Url {
        &self.endpoint_url
    }

    pub async fn score_resume(&self, input: SubmissionInput) -> errors::Result<AnalysisResult> {
        let payload = SubmissionPayload::from_input(input)?;
        self.send_submission(payload).await
    }

    /// Post one submission and decode the reply.
    ///
    /// The body is decoded as JSON whatever the status; a body that is not
    /// JSON is a decode error on both the success and the failure path.
    pub async fn send_submission(
        &self,
        payload: SubmissionPayload,
    ) -> errors::Result<AnalysisResult> {
        let form = payload.into_form()?;

        log::debug!("posting submission to {}", self.endpoint_url);
        let resp = self
            .http_client
            .post(self.endpoint_url.clone())
            .multipart(form)
            .send()
            .await?;

        let resp_status = resp.status();
        log::debug!("{} responded with status {}", self.endpoint_url, resp_status);
        let resp_body_bytes = resp.bytes().await?;

        if !resp_status.is_success() {
            let data: analysis::ErrorResult = serde_json::from_slice(&resp_body_bytes)?;
            return Err(ScorerError::Server {
                endpoint_url: self.endpoint_url.to_string(),
                status: resp_status.as_u16(),
                error_message: data.message(&resp_body_bytes),
            });
        }
        Ok(serde_json::from_slice(&resp_body_bytes)?)
    }
}

impl ScoringService for ResumeScorerClient {
    async fn score(&self, payload: SubmissionPayload) -> errors::Result<AnalysisResult> {
        self.send_submission(payload).await
    }
}
