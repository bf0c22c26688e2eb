//! Общая обёртка над gloo-net: таймаут, отмена, разбор ответа

use contracts::domain::a001_sector_tree::SectorTreeError;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// Таймаут любого запроса к серверу
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Request aborted")]
    Aborted,
    #[error(transparent)]
    InvalidTree(#[from] SectorTreeError),
}

/// Запрос в полёте: AbortController плюс таймер, который его отменяет.
/// Таймер снимается при drop.
pub struct PendingRequest {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl PendingRequest {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT_MS)
    }

    pub fn with_timeout(millis: u32) -> Result<Self, FetchError> {
        let controller = AbortController::new().map_err(|e| FetchError::Network(format!("{e:?}")))?;
        let timed_out = Rc::new(Cell::new(false));

        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        Ok(Self {
            controller,
            timed_out,
            _timer: timer,
        })
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    /// Handle for aborting from outside, e.g. when the component unmounts
    pub fn controller(&self) -> AbortController {
        self.controller.clone()
    }

    /// Timeout or Aborted if the signal fired, whatever stage the request was in
    fn interruption(&self) -> Option<FetchError> {
        interruption(self.timed_out.get(), self.controller.signal().aborted())
    }
}

fn interruption(timed_out: bool, aborted: bool) -> Option<FetchError> {
    if timed_out {
        Some(FetchError::Timeout)
    } else if aborted {
        Some(FetchError::Aborted)
    } else {
        None
    }
}

/// Отправить подготовленный запрос и разобрать JSON-ответ
pub async fn execute<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
    pending: &PendingRequest,
) -> Result<T, FetchError> {
    let request = request.map_err(|e| FetchError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| pending.interruption().unwrap_or(FetchError::Network(e.to_string())))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    // Таймер продолжает идти, пока читается тело ответа
    response
        .json::<T>()
        .await
        .map_err(|e| pending.interruption().unwrap_or(FetchError::Decode(e.to_string())))
}
