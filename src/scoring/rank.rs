use crate::types::riasec::{PercentileSet, RankedCode, Trait};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub code: RankedCode,
    /// All six traits, highest percentile first.
    pub ordered: Vec<(Trait, u8)>,
}

/// Orders traits by descending percentile. The sort is stable over the
/// canonical R-I-A-S-E-C order, so ties keep that order.
pub fn rank(percentiles: &PercentileSet) -> Ranking {
    let mut ordered = percentiles.iter().collect::<Vec<_>>();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    let code = RankedCode::new([ordered[0].0, ordered[1].0, ordered[2].0]);
    Ranking { code, ordered }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percentiles(values: [u8; 6]) -> PercentileSet {
        PercentileSet::from_fn(|t| values[t as usize])
    }

    #[test]
    fn rank_orders_by_percentile_not_alphabet() {
        // R, I, A, S, E, C
        let ranking = rank(&percentiles([90, 10, 95, 85, 20, 30]));
        assert_eq!(ranking.code.to_string(), "ARS");

        let ranking = rank(&percentiles([90, 10, 95, 92, 20, 30]));
        assert_eq!(ranking.code.to_string(), "ASR");
    }

    #[test]
    fn rank_breaks_ties_in_canonical_order() {
        let ranking = rank(&percentiles([50, 50, 50, 50, 50, 50]));
        assert_eq!(ranking.code.to_string(), "RIA");

        let ranking = rank(&percentiles([10, 70, 20, 70, 70, 5]));
        assert_eq!(ranking.code.to_string(), "ISE");
    }

    #[test]
    fn rank_returns_full_descending_list() {
        let ranking = rank(&percentiles([40, 95, 90, 10, 60, 20]));
        assert_eq!(ranking.code.to_string(), "IAE");
        assert_eq!(
            ranking.ordered,
            vec![
                (Trait::Investigative, 95),
                (Trait::Artistic, 90),
                (Trait::Enterprising, 60),
                (Trait::Realistic, 40),
                (Trait::Conventional, 20),
                (Trait::Social, 10),
            ]
        );
    }
}
