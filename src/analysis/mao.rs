//! Maximum allowable offer math under ARV percentage rules

use serde::{Deserialize, Serialize};

/// ARV percentage rule for an offer ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OfferRule {
    /// The classic conservative flip guideline
    Percent70,
    Percent75,
    Percent80,
    /// Arbitrary ARV percentage
    Custom(f64),
}

impl OfferRule {
    pub fn percentage(&self) -> f64 {
        match self {
            OfferRule::Percent70 => 70.0,
            OfferRule::Percent75 => 75.0,
            OfferRule::Percent80 => 80.0,
            OfferRule::Custom(pct) => *pct,
        }
    }

    /// The three standard rules, plus one custom percentage when given,
    /// in display order
    pub fn standard_set(custom: Option<f64>) -> Vec<OfferRule> {
        let mut rules = vec![
            OfferRule::Percent70,
            OfferRule::Percent75,
            OfferRule::Percent80,
        ];
        if let Some(pct) = custom {
            rules.push(OfferRule::Custom(pct));
        }
        rules
    }
}

/// One row of a side-by-side MAO comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaoQuote {
    pub rule: OfferRule,
    pub percentage: f64,
    pub mao: f64,
}

/// `arv * pct/100 - rehab_cost`, unclamped.
///
/// A negative result means the deal does not work at that percentage; it
/// is a valid signal for the caller, not an error.
pub fn compute_mao(arv: f64, rehab_cost: f64, rule: OfferRule) -> f64 {
    arv * (rule.percentage() / 100.0) - rehab_cost
}

/// Evaluate one input set across several rules so the caller can show the
/// 70/75/80/custom offers side by side.
pub fn compute_mao_table(arv: f64, rehab_cost: f64, rules: &[OfferRule]) -> Vec<MaoQuote> {
    rules
        .iter()
        .map(|&rule| MaoQuote {
            rule,
            percentage: rule.percentage(),
            mao: compute_mao(arv, rehab_cost, rule),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventy_percent_example() {
        let mao = compute_mao(250_000.0, 30_000.0, OfferRule::Percent70);
        assert_eq!(mao, 145_000.0);
    }

    #[test]
    fn test_strictly_increasing_in_percentage() {
        let arv = 250_000.0;
        let rehab = 30_000.0;
        let mao_70 = compute_mao(arv, rehab, OfferRule::Percent70);
        let mao_75 = compute_mao(arv, rehab, OfferRule::Percent75);
        let mao_80 = compute_mao(arv, rehab, OfferRule::Percent80);

        assert!(mao_80 > mao_75);
        assert!(mao_75 > mao_70);
    }

    #[test]
    fn test_negative_mao_is_valid_output() {
        // Heavy rehab on a cheap ARV: the rule says walk away
        let mao = compute_mao(80_000.0, 70_000.0, OfferRule::Percent70);
        assert_eq!(mao, -14_000.0);
    }

    #[test]
    fn test_table_covers_standard_and_custom() {
        let table = compute_mao_table(250_000.0, 30_000.0, &OfferRule::standard_set(Some(65.0)));

        assert_eq!(table.len(), 4);
        assert_eq!(table[0].percentage, 70.0);
        assert_eq!(table[3].rule, OfferRule::Custom(65.0));
        assert_eq!(table[3].mao, 250_000.0 * 0.65 - 30_000.0);
    }
}
