use crate::analysis::AnalysisResult;
use crate::errors::{ScorerError, MISSING_INPUT_MESSAGE};
use crate::render::{score_lines, BarChart, RegionContent, ResultsSurface, CHART_TARGET};
use crate::submission::{SubmissionInput, SubmissionPayload};
use crate::ScoringService;

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Input was incomplete; nothing was sent.
    Rejected,
    Scored(AnalysisResult),
    Failed(ScorerError),
}

impl SubmissionOutcome {
    pub fn is_scored(&self) -> bool {
        matches!(self, SubmissionOutcome::Scored(_))
    }
}

/// Runs one submission end to end and renders it onto a [`ResultsSurface`].
pub struct SubmissionHandler<S: ScoringService> {
    service: S,
}

impl<S: ScoringService> SubmissionHandler<S> {
    pub fn new(service: S) -> Self {
        SubmissionHandler { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn submit<R: ResultsSurface + ?Sized>(
        &self,
        input: SubmissionInput,
        surface: &mut R,
    ) -> SubmissionOutcome {
        log::debug!(
            "submission triggered (resume: {}, job description: {} bytes, extra prompt: {} bytes)",
            input.resume.is_some(),
            input.job_description.len(),
            input.extra_prompt.len()
        );

        let payload = match SubmissionPayload::from_input(input) {
            Ok(payload) => payload,
            Err(_) => {
                log::warn!("submission rejected: resume or job description missing");
                surface.alert(MISSING_INPUT_MESSAGE);
                return SubmissionOutcome::Rejected;
            }
        };

        surface.set_results(&RegionContent::Processing);

        match self.service.score(payload).await {
            Ok(result) => {
                log::info!(
                    "scored resume: overall {}, readability {}, ats {}",
                    result.metrics.overall_score,
                    result.metrics.readability_score,
                    result.metrics.ats_score
                );
                surface.set_results(&RegionContent::Scores(score_lines(&result.metrics)));
                surface.plot(CHART_TARGET, &BarChart::from_metrics(&result.metrics));
                SubmissionOutcome::Scored(result)
            }
            Err(err) => {
                log::warn!("submission failed ({:?}): {}", err.kind(), err);
                surface.set_results(&RegionContent::error(&err));
                SubmissionOutcome::Failed(err)
            }
        }
    }
}
