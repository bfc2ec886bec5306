//! User-controlled filter selections.
//!
//! Both selections are ordered lists without duplicates. Turning a value on
//! appends it, so the factor list order is the order the user checked them in
//! and drives the stacking order of the bar chart.

use api::{Dataset, Factor};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    factors: Vec<Factor>,
    ideas: Vec<String>,
}

impl FilterState {
    /// Everything selected: factors in aggregation order, ideas in dataset order.
    pub fn all_selected(dataset: &Dataset) -> Self {
        Self {
            factors: Factor::ALL.to_vec(),
            ideas: dataset.ideas().to_vec(),
        }
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn ideas(&self) -> &[String] {
        &self.ideas
    }

    pub fn toggle_factor(&mut self, factor: Factor) {
        if let Some(pos) = self.factors.iter().position(|f| *f == factor) {
            self.factors.remove(pos);
        } else {
            self.factors.push(factor);
        }
    }

    pub fn toggle_idea(&mut self, idea: &str) {
        if let Some(pos) = self.ideas.iter().position(|i| i == idea) {
            self.ideas.remove(pos);
        } else {
            self.ideas.push(idea.to_string());
        }
    }

    /// Replace the factor selection, dropping duplicates but keeping order.
    pub fn set_factors(&mut self, factors: impl IntoIterator<Item = Factor>) {
        self.factors.clear();
        for factor in factors {
            if !self.factors.contains(&factor) {
                self.factors.push(factor);
            }
        }
    }

    /// Replace the idea selection, dropping duplicates but keeping order.
    pub fn set_ideas<S: Into<String>>(&mut self, ideas: impl IntoIterator<Item = S>) {
        self.ideas.clear();
        for idea in ideas {
            let idea = idea.into();
            if !self.ideas.contains(&idea) {
                self.ideas.push(idea);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::tests::sample_dataset;

    #[test]
    fn starts_with_everything_selected() {
        let state = FilterState::all_selected(&sample_dataset());
        assert_eq!(state.factors(), &Factor::ALL);
        assert_eq!(state.ideas(), &["A", "B"]);
    }

    #[test]
    fn toggling_back_on_appends() {
        let mut state = FilterState::all_selected(&sample_dataset());
        state.toggle_factor(Factor::Strengths);
        assert!(!state.factors().contains(&Factor::Strengths));
        state.toggle_factor(Factor::Strengths);
        assert_eq!(
            state.factors(),
            &[
                Factor::Weaknesses,
                Factor::Opportunities,
                Factor::Threats,
                Factor::Strengths
            ]
        );
    }

    #[test]
    fn toggle_idea_round_trip() {
        let mut state = FilterState::all_selected(&sample_dataset());
        state.toggle_idea("A");
        assert_eq!(state.ideas(), &["B"]);
        state.toggle_idea("A");
        assert_eq!(state.ideas(), &["B", "A"]);
    }

    #[test]
    fn setters_drop_duplicates() {
        let mut state = FilterState::all_selected(&sample_dataset());
        state.set_factors([Factor::Threats, Factor::Threats, Factor::Strengths]);
        assert_eq!(state.factors(), &[Factor::Threats, Factor::Strengths]);
        state.set_ideas(["B", "B", "A"]);
        assert_eq!(state.ideas(), &["B", "A"]);
    }
}
