//! Usage and quota types.
//!
//! Provides read-only models for account consumption reporting.

use serde::{Deserialize, Serialize};

/// Screenshot count quota for the current billing period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaDetail {
    /// Allowed screenshots per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Screenshots consumed so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<u32>,

    /// Screenshots remaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,

    /// Consumed percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_used: Option<u32>,
}

/// Bandwidth quota for the current billing period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandwidthQuota {
    /// Allowed bytes per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_bytes: Option<u64>,

    /// Human-readable rendering of the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_formatted: Option<String>,

    /// Bytes consumed so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_bytes: Option<u64>,

    /// Human-readable rendering of usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_formatted: Option<String>,

    /// Bytes remaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_bytes: Option<u64>,

    /// Human-readable rendering of the remainder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_formatted: Option<String>,

    /// Consumed percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_used: Option<u32>,
}

/// Combined screenshot and bandwidth quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    /// Screenshot count quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<QuotaDetail>,

    /// Bandwidth quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<BandwidthQuota>,
}

/// Consumption within one billing period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodUsage {
    /// First day of the period (ISO date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    /// Last day of the period (ISO date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    /// Screenshots captured in the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots_count: Option<u32>,

    /// Bandwidth consumed in the period, in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_bytes: Option<u64>,

    /// Human-readable rendering of the bandwidth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_formatted: Option<String>,
}

/// Lifetime consumption totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Screenshots captured across all periods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots_count: Option<u64>,

    /// Bandwidth consumed across all periods, in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_bytes: Option<u64>,

    /// Human-readable rendering of the bandwidth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_formatted: Option<String>,
}

/// Full account usage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Subscription tier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Consumption in the current billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period: Option<PeriodUsage>,

    /// Quota the current period counts against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<Quota>,

    /// Consumption in past periods, newest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<PeriodUsage>,

    /// Lifetime totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Totals>,
}

/// Point-in-time quota snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    /// Subscription tier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Screenshot count quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<QuotaDetail>,

    /// Bandwidth quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<BandwidthQuota>,

    /// When the current period rolls over (ISO date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_ends: Option<String>,
}
