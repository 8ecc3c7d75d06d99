//! Per-entity and per-run import counts.

use std::fmt;

use crate::importers::Entity;
use crate::mapper::SkipReason;

/// A source record that was not imported, or a dependent row that was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub source_id: String,
    pub reason: SkipReason,
}

/// Outcome of importing one entity.
#[derive(Debug, Clone)]
pub struct EntitySummary {
    pub entity: Entity,
    /// Source records read from the export.
    pub records: usize,
    /// Rows written, including rows that do not come from a source record.
    pub imported: usize,
    /// Source records that were not imported.
    pub skipped: Vec<SkippedRecord>,
    /// Dependent rows dropped from otherwise imported records.
    pub warnings: Vec<SkippedRecord>,
}

impl EntitySummary {
    pub fn new(entity: Entity, records: usize) -> Self {
        Self {
            entity,
            records,
            imported: 0,
            skipped: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    /// Count a skipped source record and log why.
    pub fn record_skipped(&mut self, source_id: &str, reason: SkipReason) {
        tracing::warn!(
            entity = self.entity.label(),
            source_id,
            reason = %reason,
            "Skipping record",
        );
        self.skipped.push(SkippedRecord {
            source_id: source_id.to_string(),
            reason,
        });
    }

    /// Log a dependent row dropped from an imported record.
    pub fn record_warning(&mut self, source_id: &str, reason: SkipReason) {
        tracing::warn!(
            entity = self.entity.label(),
            source_id,
            reason = %reason,
            "Dropping linked row",
        );
        self.warnings.push(SkippedRecord {
            source_id: source_id.to_string(),
            reason,
        });
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Whether any skip or warning mentions `needle` in its source id or reason.
    pub fn mentions(&self, needle: &str) -> bool {
        self.skipped
            .iter()
            .chain(&self.warnings)
            .any(|s| s.source_id.contains(needle) || s.reason.to_string().contains(needle))
    }
}

impl fmt::Display for EntitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} imported, {} skipped ({} records)",
            self.entity.label(),
            self.imported,
            self.skipped_count(),
            self.records,
        )?;
        if !self.warnings.is_empty() {
            write!(f, ", {} warnings", self.warnings.len())?;
        }
        Ok(())
    }
}

/// Outcome of a complete run, in import order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Rows deleted per table before importing.
    pub cleared: Vec<(&'static str, u64)>,
    pub entities: Vec<EntitySummary>,
}

impl RunSummary {
    pub fn get(&self, entity: Entity) -> Option<&EntitySummary> {
        self.entities.iter().find(|s| s.entity == entity)
    }

    pub fn imported(&self, entity: Entity) -> usize {
        self.get(entity).map_or(0, |s| s.imported)
    }

    pub fn skipped(&self, entity: Entity) -> usize {
        self.get(entity).map_or(0, EntitySummary::skipped_count)
    }

    pub fn total_imported(&self) -> usize {
        self.entities.iter().map(|s| s.imported).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.entities.iter().map(EntitySummary::skipped_count).sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Import complete: {} rows imported, {} records skipped",
            self.total_imported(),
            self.total_skipped(),
        )
    }
}
