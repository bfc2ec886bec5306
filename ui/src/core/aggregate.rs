//! Per-idea score aggregation over the immutable dataset.

use api::{Dataset, Factor};

/// Summed scores of one idea, one slot per factor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdeaProfile {
    pub strengths: f64,
    pub weaknesses: f64,
    pub opportunities: f64,
    pub threats: f64,
}

impl IdeaProfile {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Strengths => self.strengths,
            Factor::Weaknesses => self.weaknesses,
            Factor::Opportunities => self.opportunities,
            Factor::Threats => self.threats,
        }
    }

    fn add(&mut self, factor: Factor, score: f64) {
        match factor {
            Factor::Strengths => self.strengths += score,
            Factor::Weaknesses => self.weaknesses += score,
            Factor::Opportunities => self.opportunities += score,
            Factor::Threats => self.threats += score,
        }
    }

    /// Values in [`Factor::ALL`] order.
    pub fn as_array(&self) -> [f64; 4] {
        Factor::ALL.map(|factor| self.get(factor))
    }

    /// (Strengths + Opportunities) - (Weaknesses + Threats).
    pub fn composite(&self) -> f64 {
        (self.strengths + self.opportunities) - (self.weaknesses + self.threats)
    }

    /// Sum of the given factors only.
    #[cfg(test)]
    pub(crate) fn total_for(&self, factors: &[Factor]) -> f64 {
        factors.iter().map(|factor| self.get(*factor)).sum()
    }
}

/// Read-only view over a dataset that answers per-idea score queries.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    dataset: &'a Dataset,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Summed scores for `idea`. Factors without records (and unknown ideas) sum to 0.
    pub fn scores_for(&self, idea: &str) -> IdeaProfile {
        self.dataset
            .records()
            .iter()
            .filter(|record| record.idea == idea)
            .fold(IdeaProfile::default(), |mut profile, record| {
                profile.add(record.factor, record.score);
                profile
            })
    }

    pub fn composite_score(&self, idea: &str) -> f64 {
        self.scores_for(idea).composite()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use api::ScoreRecord;

    /// Two-idea dataset shared by the chart and controller tests.
    pub(crate) fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            ScoreRecord::new("A", Factor::Strengths, 2.0),
            ScoreRecord::new("A", Factor::Weaknesses, 1.0),
            ScoreRecord::new("A", Factor::Opportunities, 3.0),
            ScoreRecord::new("A", Factor::Threats, 0.0),
            ScoreRecord::new("B", Factor::Strengths, 1.0),
            ScoreRecord::new("B", Factor::Weaknesses, 1.0),
            ScoreRecord::new("B", Factor::Opportunities, 1.0),
            ScoreRecord::new("B", Factor::Threats, 1.0),
        ])
    }

    #[test]
    fn scores_match_worked_example() {
        let dataset = sample_dataset();
        let agg = ScoreAggregator::new(&dataset);

        assert_eq!(agg.scores_for("A").as_array(), [2.0, 1.0, 3.0, 0.0]);
        assert_eq!(agg.composite_score("A"), 4.0);
        assert_eq!(agg.scores_for("B").as_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(agg.composite_score("B"), 0.0);
    }

    #[test]
    fn missing_factor_sums_to_zero() {
        let dataset = Dataset::from_records(vec![
            ScoreRecord::new("Solo", Factor::Strengths, 1.5),
            ScoreRecord::new("Solo", Factor::Strengths, 0.5),
        ]);
        let profile = ScoreAggregator::new(&dataset).scores_for("Solo");
        assert_eq!(profile.as_array(), [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_idea_is_all_zero() {
        let dataset = sample_dataset();
        let profile = ScoreAggregator::new(&dataset).scores_for("Z");
        assert_eq!(profile, IdeaProfile::default());
    }

    #[test]
    fn total_for_restricts_to_factors() {
        let dataset = sample_dataset();
        let profile = ScoreAggregator::new(&dataset).scores_for("A");
        assert_eq!(profile.total_for(&[Factor::Strengths, Factor::Opportunities]), 5.0);
        assert_eq!(profile.total_for(&[]), 0.0);
    }
}
