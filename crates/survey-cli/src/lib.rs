//! Offline survey planning over an estate description file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use survey_core::{
    plan_survey, plan_survey_with_budget_using, Estate, GridTraversal, LandingPoint, SurveyPlan,
    Tree,
};

/// Estate plus its trees, as read from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyInput {
    pub estate: Estate,
    #[serde(default)]
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyOutput {
    pub plan: SurveyPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<LandingPoint>,
}

impl SurveyInput {
    pub fn from_json(raw: &str) -> Result<Self> {
        let input: SurveyInput =
            serde_json::from_str(raw).context("failed to parse survey input")?;
        input.validate()?;
        Ok(input)
    }

    /// Reject dimensions and plots the planner would silently accept.
    pub fn validate(&self) -> Result<()> {
        if self.estate.length == 0 || self.estate.width == 0 {
            bail!(
                "estate dimensions must be positive, got {}x{}",
                self.estate.length,
                self.estate.width
            );
        }
        for tree in &self.trees {
            if tree.x == 0 || tree.x > self.estate.length || tree.y == 0 || tree.y > self.estate.width
            {
                bail!("tree at ({}, {}) is outside the estate", tree.x, tree.y);
            }
        }
        Ok(())
    }
}

/// Plan the survey and, given a budget, the landing point.
pub fn run(
    input: &SurveyInput,
    max_distance: Option<i64>,
    traversal: GridTraversal,
) -> Result<SurveyOutput> {
    match max_distance {
        None => Ok(SurveyOutput {
            plan: plan_survey(&input.estate, &input.trees)?,
            landing: None,
        }),
        Some(budget) => {
            let budgeted =
                plan_survey_with_budget_using(&input.estate, &input.trees, budget, traversal)?;
            Ok(SurveyOutput {
                plan: budgeted.plan,
                landing: Some(budgeted.landing),
            })
        }
    }
}
