//! Guardrails configuration aggregate
//!
//! Holds one [`ThresholdConfig`] per [`GuardedResource`]. Providers hand
//! these out per request context, usually behind an `Arc`.

use super::threshold_config::{RawThresholdConfig, ThresholdConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource bounded by a threshold guardrail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardedResource {
    /// Number of user keyspaces
    Keyspaces,
    /// Number of user tables
    Tables,
    /// Number of columns in a single table
    ColumnsPerTable,
    /// Number of secondary indexes on a single table
    SecondaryIndexesPerTable,
    /// Number of materialized views on a single table
    MaterializedViewsPerTable,
    /// Requested page size
    PageSize,
    /// Partition keys restricted in a single SELECT
    PartitionKeysInSelect,
    /// Cartesian product of IN restrictions in a single SELECT
    InSelectCartesianProduct,
}

impl GuardedResource {
    /// Every guarded resource, in configuration order
    pub const ALL: [GuardedResource; 8] = [
        Self::Keyspaces,
        Self::Tables,
        Self::ColumnsPerTable,
        Self::SecondaryIndexesPerTable,
        Self::MaterializedViewsPerTable,
        Self::PageSize,
        Self::PartitionKeysInSelect,
        Self::InSelectCartesianProduct,
    ];

    /// Configuration name of the resource
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyspaces => "keyspaces",
            Self::Tables => "tables",
            Self::ColumnsPerTable => "columns_per_table",
            Self::SecondaryIndexesPerTable => "secondary_indexes_per_table",
            Self::MaterializedViewsPerTable => "materialized_views_per_table",
            Self::PageSize => "page_size",
            Self::PartitionKeysInSelect => "partition_keys_in_select",
            Self::InSelectCartesianProduct => "in_select_cartesian_product",
        }
    }

    /// Human-readable description used in guardrail messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::Keyspaces => "number of keyspaces",
            Self::Tables => "number of tables",
            Self::ColumnsPerTable => "number of columns",
            Self::SecondaryIndexesPerTable => "number of secondary indexes",
            Self::MaterializedViewsPerTable => "number of materialized views",
            Self::PageSize => "page size",
            Self::PartitionKeysInSelect => "number of partition keys",
            Self::InSelectCartesianProduct => "IN cartesian product",
        }
    }
}

impl fmt::Display for GuardedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GuardedResource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.name() == s)
            .ok_or_else(|| {
                let available: Vec<&str> = Self::ALL.iter().map(GuardedResource::name).collect();
                Error::configuration(format!(
                    "Unknown guardrail '{}'. Available guardrails: {:?}",
                    s, available
                ))
            })
    }
}

/// Threshold values in force for one evaluation context
///
/// Deserialization validates every pair and names the offending resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGuardrailsConfig")]
pub struct GuardrailsConfig {
    /// Limits on the number of user keyspaces
    pub keyspaces: ThresholdConfig,
    /// Limits on the number of user tables
    pub tables: ThresholdConfig,
    /// Limits on columns per table
    pub columns_per_table: ThresholdConfig,
    /// Limits on secondary indexes per table
    pub secondary_indexes_per_table: ThresholdConfig,
    /// Limits on materialized views per table
    pub materialized_views_per_table: ThresholdConfig,
    /// Limits on the requested page size
    pub page_size: ThresholdConfig,
    /// Limits on partition keys in a SELECT
    pub partition_keys_in_select: ThresholdConfig,
    /// Limits on the IN cartesian product of a SELECT
    pub in_select_cartesian_product: ThresholdConfig,
}

/// Unchecked limits per resource as written in configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGuardrailsConfig {
    keyspaces: RawThresholdConfig,
    tables: RawThresholdConfig,
    columns_per_table: RawThresholdConfig,
    secondary_indexes_per_table: RawThresholdConfig,
    materialized_views_per_table: RawThresholdConfig,
    page_size: RawThresholdConfig,
    partition_keys_in_select: RawThresholdConfig,
    in_select_cartesian_product: RawThresholdConfig,
}

impl TryFrom<RawGuardrailsConfig> for GuardrailsConfig {
    type Error = Error;

    fn try_from(raw: RawGuardrailsConfig) -> Result<Self> {
        let entries = [
            (GuardedResource::Keyspaces, raw.keyspaces),
            (GuardedResource::Tables, raw.tables),
            (GuardedResource::ColumnsPerTable, raw.columns_per_table),
            (GuardedResource::SecondaryIndexesPerTable, raw.secondary_indexes_per_table),
            (GuardedResource::MaterializedViewsPerTable, raw.materialized_views_per_table),
            (GuardedResource::PageSize, raw.page_size),
            (GuardedResource::PartitionKeysInSelect, raw.partition_keys_in_select),
            (GuardedResource::InSelectCartesianProduct, raw.in_select_cartesian_product),
        ];

        entries
            .into_iter()
            .try_fold(Self::default(), |config, (resource, limits)| {
                config.with_thresholds(resource, limits.warn_threshold, limits.abort_threshold)
            })
    }
}

impl GuardrailsConfig {
    /// A configuration where every guardrail is disabled
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Limits on the number of tables
    pub fn tables(&self) -> &ThresholdConfig {
        &self.tables
    }

    /// Limits for `resource`
    pub fn threshold(&self, resource: GuardedResource) -> &ThresholdConfig {
        match resource {
            GuardedResource::Keyspaces => &self.keyspaces,
            GuardedResource::Tables => &self.tables,
            GuardedResource::ColumnsPerTable => &self.columns_per_table,
            GuardedResource::SecondaryIndexesPerTable => &self.secondary_indexes_per_table,
            GuardedResource::MaterializedViewsPerTable => &self.materialized_views_per_table,
            GuardedResource::PageSize => &self.page_size,
            GuardedResource::PartitionKeysInSelect => &self.partition_keys_in_select,
            GuardedResource::InSelectCartesianProduct => &self.in_select_cartesian_product,
        }
    }

    fn threshold_mut(&mut self, resource: GuardedResource) -> &mut ThresholdConfig {
        match resource {
            GuardedResource::Keyspaces => &mut self.keyspaces,
            GuardedResource::Tables => &mut self.tables,
            GuardedResource::ColumnsPerTable => &mut self.columns_per_table,
            GuardedResource::SecondaryIndexesPerTable => &mut self.secondary_indexes_per_table,
            GuardedResource::MaterializedViewsPerTable => &mut self.materialized_views_per_table,
            GuardedResource::PageSize => &mut self.page_size,
            GuardedResource::PartitionKeysInSelect => &mut self.partition_keys_in_select,
            GuardedResource::InSelectCartesianProduct => &mut self.in_select_cartesian_product,
        }
    }

    /// Limits for the resource called `name`, if it exists
    pub fn threshold_by_name(&self, name: &str) -> Option<&ThresholdConfig> {
        name.parse::<GuardedResource>()
            .ok()
            .map(|resource| self.threshold(resource))
    }

    /// Replace both limits of `resource`
    pub fn set_thresholds(&mut self, resource: GuardedResource, warn: i64, abort: i64) -> Result<()> {
        self.threshold_mut(resource)
            .set_named(resource.name(), warn, abort)
    }

    /// Builder-style variant of [`GuardrailsConfig::set_thresholds`]
    pub fn with_thresholds(mut self, resource: GuardedResource, warn: i64, abort: i64) -> Result<Self> {
        self.set_thresholds(resource, warn, abort)?;
        Ok(self)
    }

    /// Validate every threshold
    pub fn validate(&self) -> Result<()> {
        GuardedResource::ALL
            .iter()
            .try_for_each(|resource| self.threshold(*resource).validate(resource.name()))
    }
}
