use std::time::Duration;

use forge_client::ClientError;
use forge_core::error::CoreError;
use forge_db::DbError;

use crate::attachment::Attachment;

/// Why a step failed.
///
/// Only [`StepError::Assertion`] is an expected-vs-actual mismatch; the other
/// variants mean the scenario could not even be carried out.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("{message}")]
    Assertion {
        message: String,
        attachment: Option<Attachment>,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Db(#[from] DbError),

    /// A factory was asked for something it cannot build.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Scenario exceeded its {0:?} budget")]
    Timeout(Duration),

    #[error("Step needs {0}, which no earlier step produced")]
    MissingState(&'static str),
}

impl StepError {
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
            attachment: None,
        }
    }

    pub fn assertion_with(message: impl Into<String>, attachment: Attachment) -> Self {
        Self::Assertion {
            message: message.into(),
            attachment: Some(attachment),
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            Self::Assertion { attachment, .. } => attachment.as_ref(),
            _ => None,
        }
    }
}
