use super::attachments::Attachment;
use super::draft::{IntakeDraft, TextUpdate, EMPTY_SUBMISSION_NOTICE};
use crate::error::{CoreError, CoreResult};
use crate::generation::client::GenerationClient;
use crate::generation::request::{GenerationRequest, GenerationResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const SUCCESS_NOTICE: &str = "Proposal PowerPoint generated successfully!";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// What `IntakeForm::compose` applied to the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeReport {
    pub text: Option<TextUpdate>,
    pub rejected: Vec<String>,
}

/// Owns a draft and the idle/submitting lifecycle around it.
///
/// The draft stays editable while a submission is in flight; the request
/// carries a snapshot taken by `begin_submission`.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    draft: IntakeDraft,
    phase: SubmitPhase,
    last_result: Option<GenerationResponse>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            draft: IntakeDraft::new(),
            phase: SubmitPhase::Idle,
            last_result: None,
        }
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut IntakeDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.draft.is_submittable()
    }

    pub fn last_result(&self) -> Option<&GenerationResponse> {
        self.last_result.as_ref()
    }

    /// Applies a description and a candidate batch in one step.
    ///
    /// A non-empty batch with no acceptable file fails the whole call; the
    /// caller must not submit after an error.
    pub fn compose(
        &mut self,
        text: Option<&str>,
        batch: Vec<Attachment>,
    ) -> CoreResult<ComposeReport> {
        let mut report = ComposeReport::default();
        if let Some(t) = text {
            report.text = Some(self.draft.set_text(t));
        }
        if !batch.is_empty() {
            report.rejected = self.draft.add_files(batch)?.rejected;
        }
        Ok(report)
    }

    pub fn begin_submission(&mut self) -> CoreResult<GenerationRequest> {
        if self.is_busy() {
            return Err(CoreError::Busy(
                "a proposal is already being generated".to_string(),
            ));
        }
        if self.draft.is_blank() {
            return Err(CoreError::Validation(EMPTY_SUBMISSION_NOTICE.to_string()));
        }
        self.phase = SubmitPhase::Submitting;
        Ok(GenerationRequest::from_draft(&self.draft))
    }

    /// Returns to idle whatever the outcome. The draft is kept either way.
    pub fn finish_submission(
        &mut self,
        result: CoreResult<GenerationResponse>,
    ) -> CoreResult<GenerationResponse> {
        if !self.is_busy() {
            return Err(CoreError::InvalidInput(
                "no submission in flight".to_string(),
            ));
        }
        self.phase = SubmitPhase::Idle;
        let resp = result?;
        self.last_result = Some(resp.clone());
        Ok(resp)
    }

    pub fn submit<C: GenerationClient + ?Sized>(
        &mut self,
        client: &C,
    ) -> CoreResult<GenerationResponse> {
        let req = self.begin_submission()?;
        info!(
            endpoint = client.endpoint(),
            text_chars = self.draft.char_count(),
            files = req.files.len(),
            "submitting proposal request"
        );
        let result = client.generate(&req);
        match &result {
            Ok(resp) => info!(submission_id = %resp.submission_id, "proposal generated"),
            Err(e) => warn!(error = %e, "proposal generation failed"),
        }
        self.finish_submission(result)
    }
}
