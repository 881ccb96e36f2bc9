//! Percentage thresholds for capacity checks

use thiserror::Error;

use crate::Status;

/// True if `used` is below `limit` percent of `available`
///
/// A zero or negative `available` can't be a meaningful capacity, so it is
/// never in limit.
pub fn in_limit(used: f64, available: f64, limit: f64) -> bool {
    if available > 0.0 {
        used / available * 100.0 < limit
    } else {
        false
    }
}

/// Space accounting as reported by a storage cluster, in kilobytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub total_kb: u64,
    pub used_kb: u64,
    pub available_kb: u64,
}

impl Capacity {
    /// Whether used and available add up to the total
    pub fn reconciles(&self) -> bool {
        self.used_kb.checked_add(self.available_kb) == Some(self.total_kb)
    }

    pub fn percent_used(&self) -> Option<f64> {
        if self.total_kb == 0 {
            None
        } else {
            Some(self.used_kb as f64 / self.total_kb as f64 * 100.0)
        }
    }
}

/// Convert kilobytes to gigabytes (base 1024)
pub fn kb_to_gb(kb: u64) -> f64 {
    kb as f64 / 1024_f64.powi(2)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("{0} threshold must be a positive percentage, got {1}")]
    NotAPercentage(&'static str, f64),
    #[error("critical threshold ({critical}%) must be above the warning threshold ({warning}%)")]
    CriticalBelowWarning { warning: f64, critical: f64 },
}

/// Warning and critical limits on percent used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    warning: f64,
    critical: f64,
}

impl ThresholdPolicy {
    pub fn new(warning: f64, critical: f64) -> Result<ThresholdPolicy, ThresholdError> {
        if !(warning.is_finite() && warning > 0.0) {
            return Err(ThresholdError::NotAPercentage("warning", warning));
        }
        if !(critical.is_finite() && critical > 0.0) {
            return Err(ThresholdError::NotAPercentage("critical", critical));
        }
        if critical <= warning {
            return Err(ThresholdError::CriticalBelowWarning { warning, critical });
        }
        Ok(ThresholdPolicy { warning, critical })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn critical(&self) -> f64 {
        self.critical
    }

    /// Decide the status of a cluster's capacity
    ///
    /// Accounting that doesn't add up is a warning on its own, whatever the
    /// usage. Usage is measured against the total, and the tighter critical
    /// bound is tested first.
    pub fn classify(&self, capacity: &Capacity) -> Status {
        let used = capacity.used_kb as f64;
        let total = capacity.total_kb as f64;
        if !capacity.reconciles() {
            Status::Warning
        } else if !in_limit(used, total, self.critical) {
            Status::Critical
        } else if !in_limit(used, total, self.warning) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}
