use crate::screen::ScreenId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("screen {0} has no onboarding content")]
    NoContent(ScreenId),

    #[error("flow event channel closed")]
    EventChannelClosed,
}
