use contracts::domain::a002_user_sector::{Submission, SubmissionDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{execute, FetchError, PendingRequest};

/// POST /sectors
pub async fn create(dto: &SubmissionDto, pending: &PendingRequest) -> Result<Submission, FetchError> {
    let request = Request::post(&api_url("/sectors"))
        .abort_signal(Some(&pending.signal()))
        .json(dto);
    execute(request, pending).await
}

/// PUT /sectors/edit
pub async fn update(dto: &SubmissionDto, pending: &PendingRequest) -> Result<Submission, FetchError> {
    let request = Request::put(&api_url("/sectors/edit"))
        .abort_signal(Some(&pending.signal()))
        .json(dto);
    execute(request, pending).await
}
