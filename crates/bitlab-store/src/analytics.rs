//! Usage analytics accumulation and summaries.
//!
//! Analytics is one aggregate record: total visits, per-tool counters, and
//! a capped log of conversion events. The summary view derives the recent
//! and popular slices on read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::StoreError;
use crate::store::{unix_now, JsonStore, ANALYTICS_FILE};

/// Maximum number of conversion events retained.
pub const CONVERSION_LOG_CAP: usize = 1000;

const RECENT_CONVERSIONS: usize = 10;
const POPULAR_TOOLS: usize = 5;

/// One tracked conversion event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionEvent {
    /// UNIX seconds when the event was tracked.
    pub timestamp: u64,
    /// The tool that produced the conversion, when reported.
    pub tool: Option<String>,
    /// Opaque event payload from the client.
    pub data: Value,
}

/// The persisted analytics aggregate.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Total tracked requests.
    pub total_visits: u64,
    /// Per-tool usage counters.
    pub tool_usage: BTreeMap<String, u64>,
    /// Conversion log, oldest first, capped at [`CONVERSION_LOG_CAP`].
    pub conversions: Vec<ConversionEvent>,
}

/// Per-tool entry of the popularity ranking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolCount {
    /// Tool name.
    pub tool: String,
    /// Times the tool was tracked.
    pub count: u64,
}

/// Read-side summary of the analytics aggregate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Total tracked requests.
    pub total_visits: u64,
    /// Per-tool usage counters.
    pub tool_usage: BTreeMap<String, u64>,
    /// The most recent conversions, oldest first.
    pub recent_conversions: Vec<ConversionEvent>,
    /// The most used tools, busiest first.
    pub popular_tools: Vec<ToolCount>,
}

impl JsonStore {
    /// Tracks one usage event. A `tool` bumps its counter; an `action` of
    /// `"conversion"` with a payload appends to the conversion log.
    ///
    /// # Errors
    ///
    /// Any backing-file error.
    pub fn track(
        &self,
        tool: Option<&str>,
        action: Option<&str>,
        data: Option<Value>,
    ) -> Result<(), StoreError> {
        let mut analytics: Analytics = self.read_json(ANALYTICS_FILE)?;
        analytics.total_visits += 1;

        if let Some(tool) = tool {
            *analytics.tool_usage.entry(tool.to_owned()).or_insert(0) += 1;
        }

        if action == Some("conversion") {
            if let Some(data) = data {
                analytics.conversions.push(ConversionEvent {
                    timestamp: unix_now(),
                    tool: tool.map(str::to_owned),
                    data,
                });
                if analytics.conversions.len() > CONVERSION_LOG_CAP {
                    let excess = analytics.conversions.len() - CONVERSION_LOG_CAP;
                    analytics.conversions.drain(..excess);
                }
            }
        }

        self.write_json(ANALYTICS_FILE, &analytics)
    }

    /// Builds the read-side summary: totals, the last ten conversions, and
    /// the five busiest tools.
    ///
    /// # Errors
    ///
    /// Any backing-file error.
    pub fn summary(&self) -> Result<AnalyticsSummary, StoreError> {
        let analytics: Analytics = self.read_json(ANALYTICS_FILE)?;

        let recent_start = analytics.conversions.len().saturating_sub(RECENT_CONVERSIONS);
        let recent_conversions = analytics.conversions[recent_start..].to_vec();

        let mut popular_tools: Vec<ToolCount> = analytics
            .tool_usage
            .iter()
            .map(|(tool, &count)| ToolCount {
                tool: tool.clone(),
                count,
            })
            .collect();
        popular_tools.sort_by(|a, b| b.count.cmp(&a.count).then(a.tool.cmp(&b.tool)));
        popular_tools.truncate(POPULAR_TOOLS);

        Ok(AnalyticsSummary {
            total_visits: analytics.total_visits,
            tool_usage: analytics.tool_usage,
            recent_conversions,
            popular_tools,
        })
    }
}
