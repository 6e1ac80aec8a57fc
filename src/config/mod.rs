use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use crate::error::TaskflowError;
use crate::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_VAR: &str = "TASKFLOW_API_URL";
pub const TIMEOUT_VAR: &str = "TASKFLOW_TIMEOUT_SECS";
pub const FAILURE_NOTICE_VAR: &str = "TASKFLOW_FAILURE_NOTICE";

/// How mutation failures reach the user. Creation failures always alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureNotice {
    /// Status-update and delete failures alert too.
    #[default]
    Alert,
    /// Status-update and delete failures are only logged.
    Silent,
}

impl FromStr for FailureNotice {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alert" => Ok(FailureNotice::Alert),
            "silent" => Ok(FailureNotice::Silent),
            other => Err(
                format!("unknown failure notice '{}', expected alert or silent", other).into(),
            ),
        }
    }
}

impl fmt::Display for FailureNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureNotice::Alert => f.write_str("alert"),
            FailureNotice::Silent => f.write_str("silent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub failure_notice: FailureNotice,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            failure_notice: FailureNotice::default(),
        }
    }
}

impl ClientConfig {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                TaskflowError::Config(format!("{} must be whole seconds: {}", TIMEOUT_VAR, e))
            })?;
            config = config.with_timeout_secs(secs);
        }
        if let Some(notice) = lookup(FAILURE_NOTICE_VAR) {
            config.failure_notice = notice.parse()?;
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Zero disables the timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    pub fn with_failure_notice(mut self, notice: FailureNotice) -> Self {
        self.failure_notice = notice;
        self
    }
}
