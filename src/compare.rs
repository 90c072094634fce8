//! Cross-policy comparison.
//!
//! Runs several policies against the same logical input and collects
//! one report per policy. Every run builds its own process records from
//! the shared descriptors, so no mutable state leaks between runs and
//! the order of the policy list never affects any result.

use serde::{Deserialize, Serialize};

use crate::engine::Simulator;
use crate::metrics::SimulationReport;
use crate::models::ProcessSpec;
use crate::policy::PolicyConfig;
use crate::{Ms, SimError};

/// One policy's results over the shared input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// The policy that produced the report.
    pub policy: PolicyConfig,
    /// The full simulation report.
    pub report: SimulationReport,
}

/// Runs each policy over the given process set.
///
/// # Errors
/// The first `SimError` from any run; input validation failures are
/// reported identically for every policy except the Round Robin
/// quantum check.
pub fn compare(
    specs: &[ProcessSpec],
    policies: &[PolicyConfig],
) -> Result<Vec<PolicyComparison>, SimError> {
    policies
        .iter()
        .map(|&policy| {
            let report = Simulator::new(policy).run(specs)?;
            Ok(PolicyComparison { policy, report })
        })
        .collect()
}

/// Runs all four policies, with the given quantum for Round Robin.
pub fn compare_all(
    specs: &[ProcessSpec],
    quantum_ms: Ms,
) -> Result<Vec<PolicyComparison>, SimError> {
    compare(
        specs,
        &[
            PolicyConfig::Fcfs,
            PolicyConfig::Srtf,
            PolicyConfig::Priority,
            PolicyConfig::RoundRobin { quantum_ms },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P0", 0, 8).with_priority(2),
            ProcessSpec::new("P1", 1, 4).with_priority(1),
            ProcessSpec::new("P2", 2, 9).with_priority(3),
            ProcessSpec::new("P3", 3, 5).with_priority(1),
        ]
    }

    fn avg_waiting(comparison: &PolicyComparison) -> f64 {
        comparison.report.averages.as_ref().unwrap().waiting_ms
    }

    #[test]
    fn test_compare_all_runs_four_policies() {
        let results = compare_all(&sample_specs(), 4).unwrap();
        assert_eq!(results.len(), 4);
        let names: Vec<_> = results.iter().map(|c| c.policy.name()).collect();
        assert_eq!(names, vec!["FCFS", "SRTF", "Priority", "RoundRobin"]);
        for c in &results {
            assert_eq!(c.report.per_process.len(), 4);
        }
    }

    #[test]
    fn test_srtf_minimizes_mean_waiting() {
        // SRTF is optimal for mean waiting time on a single CPU
        let results = compare_all(&sample_specs(), 4).unwrap();
        let srtf = avg_waiting(&results[1]);
        for c in &results {
            assert!(srtf <= avg_waiting(c) + 1e-10, "{}", c.policy.name());
        }
    }

    #[test]
    fn test_runs_do_not_share_state() {
        // The same policy listed twice sees identical fresh input
        let specs = sample_specs();
        let results = compare(&specs, &[PolicyConfig::Srtf, PolicyConfig::Srtf]).unwrap();
        assert_eq!(results[0].report.per_process, results[1].report.per_process);
        // And the shared descriptors are untouched
        assert_eq!(specs, sample_specs());
    }

    #[test]
    fn test_error_propagates() {
        let err = compare_all(&sample_specs(), 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_policy_list() {
        let results = compare(&sample_specs(), &[]).unwrap();
        assert!(results.is_empty());
    }
}
