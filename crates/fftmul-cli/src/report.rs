//! Machine-readable multiplication report (JSON).

use serde::{Deserialize, Serialize};

use crate::interfaces::MulOutcome;

/// Serializable summary of one multiplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MulReport {
    /// Product in decimal.
    pub product: String,
    /// Digits in the product.
    pub product_digits: usize,
    /// Digits in each operand.
    pub operand_digits: [usize; 2],
    /// Coefficient vector length (0 when no transform ran).
    pub transform_len: usize,
    /// Butterfly stages.
    pub stages: u32,
    /// Bytes held by the working vectors.
    pub working_bytes: usize,
    /// Rounding tolerance.
    pub tolerance: f64,
    /// Wall time in microseconds.
    pub duration_us: u64,
}

impl MulReport {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_outcome(outcome: &MulOutcome) -> Self {
        let product = outcome.product.to_string();
        let (transform_len, stages, working_bytes) = outcome
            .plan
            .map_or((0, 0, 0), |p| (p.transform_len, p.stages, p.working_bytes));
        Self {
            product_digits: product.len(),
            product,
            operand_digits: [outcome.a.len(), outcome.b.len()],
            transform_len,
            stages,
            working_bytes,
            tolerance: outcome.tolerance,
            duration_us: outcome.duration.as_micros() as u64,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fftmul_core::{DigitSequence, MulPlan};

    use super::*;

    fn outcome(a: u64, b: u64) -> MulOutcome {
        let a = DigitSequence::from(a);
        let b = DigitSequence::from(b);
        MulOutcome {
            plan: MulPlan::new(a.len(), b.len()),
            product: fftmul_core::multiply(&a, &b),
            a,
            b,
            tolerance: 0.05,
            duration: Duration::from_micros(250),
        }
    }

    #[test]
    fn report_fields() {
        let report = MulReport::from_outcome(&outcome(999, 999));
        assert_eq!(report.product, "998001");
        assert_eq!(report.product_digits, 6);
        assert_eq!(report.operand_digits, [3, 3]);
        assert_eq!(report.transform_len, 8);
        assert_eq!(report.stages, 3);
        assert_eq!(report.duration_us, 250);
    }

    #[test]
    fn report_serialization() {
        let report = MulReport::from_outcome(&outcome(7, 8));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"product\": \"56\""));
        let back: MulReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn report_without_transform() {
        let mut o = outcome(7, 8);
        o.b = DigitSequence::new();
        o.product = DigitSequence::new();
        o.plan = None;
        let report = MulReport::from_outcome(&o);
        assert_eq!(report.product, "0");
        assert_eq!(report.transform_len, 0);
    }
}
