use std::io;
use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::errors::{Result, ScorerError};

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const EXTRA_PROMPT_FIELD: &str = "extra_prompt";

/// An uploaded resume: its file name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> ResumeFile {
        ResumeFile {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<ResumeFile> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(ResumeFile { file_name, content })
    }

    pub fn from_reader<R: io::Read>(file_name: impl Into<String>, mut r: R) -> Result<ResumeFile> {
        let mut content = Vec::new();
        r.read_to_end(&mut content)?;
        Ok(ResumeFile::new(file_name, content))
    }

    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// Form state captured at the moment a submission is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub resume: Option<ResumeFile>,
    pub job_description: String,
    pub extra_prompt: String,
}

impl SubmissionInput {
    pub fn new(
        resume: Option<ResumeFile>,
        job_description: impl Into<String>,
        extra_prompt: impl Into<String>,
    ) -> SubmissionInput {
        SubmissionInput {
            resume,
            job_description: job_description.into(),
            extra_prompt: extra_prompt.into(),
        }
    }

    /// Only presence is checked: a file must be selected and the job
    /// description must not be the empty string.
    pub fn is_complete(&self) -> bool {
        self.resume.is_some() && !self.job_description.is_empty()
    }
}

/// The three-part multipart body for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub resume: ResumeFile,
    pub job_description: String,
    pub extra_prompt: String,
}

impl SubmissionPayload {
    pub fn from_input(input: SubmissionInput) -> Result<SubmissionPayload> {
        if !input.is_complete() {
            return Err(ScorerError::MissingInput);
        }
        let SubmissionInput {
            resume,
            job_description,
            extra_prompt,
        } = input;
        Ok(SubmissionPayload {
            resume: resume.ok_or(ScorerError::MissingInput)?,
            job_description,
            extra_prompt,
        })
    }

    pub fn into_form(self) -> Result<Form> {
        let mime_type = self.resume.mime_type();
        let resume_part = Part::bytes(self.resume.content)
            .file_name(self.resume.file_name)
            .mime_str(&mime_type)?;

        Ok(Form::new()
            .part(RESUME_FIELD, resume_part)
            .text(JOB_DESCRIPTION_FIELD, self.job_description)
            .text(EXTRA_PROMPT_FIELD, self.extra_prompt))
    }
}
