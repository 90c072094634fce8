//! Performance metrics.
//!
//! Computes the textbook per-process measures from a finished record
//! set and the execution timeline, plus their arithmetic means:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Response | first dispatch − arrival |
//!
//! Collection is a pure function over completed records: running it
//! twice on the same set yields identical output.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Timeline};
use crate::{Ms, SimError};

/// Final metrics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: String,
    /// Arrival time (ms).
    pub arrival_ms: Ms,
    /// Total CPU demand (ms).
    pub burst_ms: Ms,
    /// Scheduling priority (lower = higher priority).
    pub priority: i32,
    /// First instant on the CPU (ms).
    pub start_ms: Ms,
    /// Instant the last tick of burst finished (ms).
    pub completion_ms: Ms,
    /// completion − arrival (ms).
    pub turnaround_ms: Ms,
    /// turnaround − burst (ms): time spent ready but not running.
    pub waiting_ms: Ms,
    /// start − arrival (ms): time until first dispatch.
    pub response_ms: Ms,
}

/// Arithmetic means across all completed processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Mean waiting time (ms).
    pub waiting_ms: f64,
    /// Mean turnaround time (ms).
    pub turnaround_ms: f64,
    /// Mean response time (ms).
    pub response_ms: f64,
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-process metrics, sorted by process ID.
    pub per_process: Vec<ProcessMetrics>,
    /// Aggregate means. `None` for an empty process set — undefined,
    /// not zero.
    pub averages: Option<AverageMetrics>,
    /// Execution history (Gantt data).
    pub timeline: Timeline,
}

impl SimulationReport {
    /// The report for an empty process set.
    pub fn empty() -> Self {
        Self {
            per_process: Vec::new(),
            averages: None,
            timeline: Timeline::new(),
        }
    }
}

/// Computes per-process and aggregate metrics from completed records.
#[derive(Debug, Clone, Copy)]
pub struct MetricsCollector;

impl MetricsCollector {
    /// Builds a [`SimulationReport`] from a finished record set.
    ///
    /// Every record must be completed; the per-process count always
    /// equals the input count. Cross-checks each process's timeline
    /// CPU time against its burst, and rejects negative waiting or
    /// response times.
    ///
    /// # Errors
    /// `SimError::InvariantViolation` on any inconsistency — these
    /// indicate an engine bug, never a property of valid input.
    pub fn collect(
        records: &[ProcessRecord],
        timeline: &Timeline,
    ) -> Result<SimulationReport, SimError> {
        let mut per_process = Vec::with_capacity(records.len());

        for record in records {
            let spec = &record.spec;
            let completion_ms = record.completion_ms.ok_or_else(|| {
                SimError::InvariantViolation(format!(
                    "process '{}' has no completion time",
                    spec.id
                ))
            })?;
            let start_ms = record.start_ms.ok_or_else(|| {
                SimError::InvariantViolation(format!("process '{}' was never dispatched", spec.id))
            })?;

            let turnaround_ms = completion_ms - spec.arrival_ms;
            let waiting_ms = turnaround_ms - spec.burst_ms;
            let response_ms = start_ms - spec.arrival_ms;

            if waiting_ms < 0 || response_ms < 0 {
                return Err(SimError::InvariantViolation(format!(
                    "process '{}' has negative waiting ({waiting_ms}) or response ({response_ms})",
                    spec.id
                )));
            }

            let executed_ms = timeline.busy_ms(&spec.id);
            if executed_ms != spec.burst_ms {
                return Err(SimError::InvariantViolation(format!(
                    "process '{}' executed {executed_ms} ms of a {} ms burst",
                    spec.id, spec.burst_ms
                )));
            }

            per_process.push(ProcessMetrics {
                id: spec.id.clone(),
                arrival_ms: spec.arrival_ms,
                burst_ms: spec.burst_ms,
                priority: spec.priority,
                start_ms,
                completion_ms,
                turnaround_ms,
                waiting_ms,
                response_ms,
            });
        }

        per_process.sort_by(|a, b| a.id.cmp(&b.id));

        let averages = if per_process.is_empty() {
            None
        } else {
            let count = per_process.len() as f64;
            Some(AverageMetrics {
                waiting_ms: per_process.iter().map(|m| m.waiting_ms as f64).sum::<f64>() / count,
                turnaround_ms: per_process
                    .iter()
                    .map(|m| m.turnaround_ms as f64)
                    .sum::<f64>()
                    / count,
                response_ms: per_process
                    .iter()
                    .map(|m| m.response_ms as f64)
                    .sum::<f64>()
                    / count,
            })
        };

        Ok(SimulationReport {
            per_process,
            averages,
            timeline: timeline.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionSlice, ProcessSpec};

    fn completed_record(
        id: &str,
        arrival: i64,
        burst: i64,
        start: i64,
        completion: i64,
    ) -> ProcessRecord {
        let mut record = ProcessRecord::new(ProcessSpec::new(id, arrival, burst));
        record.dispatch(start);
        record.run_for(burst);
        record.complete(completion);
        record
    }

    fn timeline_of(slices: &[(&str, i64, i64)]) -> Timeline {
        let mut timeline = Timeline::new();
        for &(id, start, end) in slices {
            timeline.push(ExecutionSlice::new(id, start, end));
        }
        timeline
    }

    #[test]
    fn test_basic_metrics() {
        let records = vec![
            completed_record("P0", 0, 5, 0, 5),
            completed_record("P1", 1, 3, 5, 8),
        ];
        let timeline = timeline_of(&[("P0", 0, 5), ("P1", 5, 8)]);
        let report = MetricsCollector::collect(&records, &timeline).unwrap();

        assert_eq!(report.per_process.len(), 2);
        let p1 = &report.per_process[1];
        assert_eq!(p1.turnaround_ms, 7);
        assert_eq!(p1.waiting_ms, 4);
        assert_eq!(p1.response_ms, 4);

        let avg = report.averages.unwrap();
        assert!((avg.waiting_ms - 2.0).abs() < 1e-10);
        assert!((avg.turnaround_ms - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_conservation_per_process() {
        let records = vec![completed_record("P0", 2, 6, 4, 13)];
        let timeline = timeline_of(&[("P0", 4, 7), ("P1", 7, 10), ("P0", 10, 13)]);
        let report = MetricsCollector::collect(&records, &timeline).unwrap();
        let m = &report.per_process[0];
        assert_eq!(m.waiting_ms + m.burst_ms, m.turnaround_ms);
    }

    #[test]
    fn test_output_sorted_by_id() {
        let records = vec![
            completed_record("P1", 0, 2, 2, 4),
            completed_record("P0", 0, 2, 0, 2),
        ];
        let timeline = timeline_of(&[("P0", 0, 2), ("P1", 2, 4)]);
        let report = MetricsCollector::collect(&records, &timeline).unwrap();
        assert_eq!(report.per_process[0].id, "P0");
        assert_eq!(report.per_process[1].id, "P1");
    }

    #[test]
    fn test_idempotent() {
        let records = vec![completed_record("P0", 0, 4, 0, 4)];
        let timeline = timeline_of(&[("P0", 0, 4)]);
        let first = MetricsCollector::collect(&records, &timeline).unwrap();
        let second = MetricsCollector::collect(&records, &timeline).unwrap();
        assert_eq!(first.per_process, second.per_process);
        assert_eq!(first.averages, second.averages);
    }

    #[test]
    fn test_empty_set_has_undefined_averages() {
        let report = MetricsCollector::collect(&[], &Timeline::new()).unwrap();
        assert!(report.per_process.is_empty());
        assert!(report.averages.is_none());
    }

    #[test]
    fn test_incomplete_record_is_invariant_violation() {
        let records = vec![ProcessRecord::new(ProcessSpec::new("P0", 0, 4))];
        let err = MetricsCollector::collect(&records, &Timeline::new()).unwrap_err();
        assert!(matches!(err, SimError::InvariantViolation(_)));
    }

    #[test]
    fn test_timeline_burst_mismatch_is_invariant_violation() {
        let records = vec![completed_record("P0", 0, 4, 0, 4)];
        // Timeline claims only 3 ms executed
        let timeline = timeline_of(&[("P0", 0, 3)]);
        let err = MetricsCollector::collect(&records, &timeline).unwrap_err();
        assert!(matches!(err, SimError::InvariantViolation(_)));
    }

    #[test]
    fn test_report_serializes() {
        let records = vec![completed_record("P0", 0, 4, 0, 4)];
        let timeline = timeline_of(&[("P0", 0, 4)]);
        let report = MetricsCollector::collect(&records, &timeline).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["per_process"][0]["waiting_ms"], 0);
        assert_eq!(json["averages"]["response_ms"], 0.0);
    }
}
