//! Billing period toggle and plan selection.
//!
//! Selection is visual only; nothing is ordered.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SELECTED_PLAN;
use crate::models::PlanTier;

/// How plan prices are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Price suffix: `mo` or `yr`.
    pub fn suffix(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "mo",
            BillingPeriod::Yearly => "yr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly",
        }
    }
}

/// Price as displayed on a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLabel {
    pub amount: u32,
    pub suffix: &'static str,
    /// Yearly price spread over twelve months, rounded.
    pub per_month: Option<u32>,
}

impl PriceLabel {
    pub fn for_plan(plan: &PlanTier, period: BillingPeriod) -> Self {
        match period {
            BillingPeriod::Monthly => Self {
                amount: plan.monthly_price,
                suffix: period.suffix(),
                per_month: None,
            },
            BillingPeriod::Yearly => Self {
                amount: plan.yearly_price,
                suffix: period.suffix(),
                per_month: Some((f64::from(plan.yearly_price) / 12.0).round() as u32),
            },
        }
    }
}

/// Plan card state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSelector {
    len: usize,
    billing: BillingPeriod,
    selected: usize,
    hovered: Option<usize>,
}

impl PlanSelector {
    /// Starts on monthly billing with the popular plan selected, or the
    /// second plan when none is flagged.
    pub fn new(plans: &[PlanTier]) -> Self {
        let fallback = DEFAULT_SELECTED_PLAN.min(plans.len().saturating_sub(1));
        let selected = plans.iter().position(|p| p.popular).unwrap_or(fallback);
        Self {
            len: plans.len(),
            billing: BillingPeriod::default(),
            selected,
            hovered: None,
        }
    }

    pub fn billing_period(&self) -> BillingPeriod {
        self.billing
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.billing = period;
    }

    pub fn select_plan(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.len);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// True while another card is hovered.
    pub fn is_dimmed(&self, index: usize) -> bool {
        matches!(self.hovered, Some(h) if h != index)
    }

    pub fn price(&self, plan: &PlanTier) -> PriceLabel {
        PriceLabel::for_plan(plan, self.billing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLANS;

    #[test]
    fn test_defaults_to_popular_plan() {
        let selector = PlanSelector::new(PLANS);
        assert_eq!(selector.selected(), 1);
        assert_eq!(selector.billing_period(), BillingPeriod::Monthly);
    }

    #[test]
    fn test_fallback_without_popular_plan() {
        let plans: Vec<PlanTier> = PLANS
            .iter()
            .cloned()
            .map(|p| PlanTier { popular: false, ..p })
            .collect();
        assert_eq!(PlanSelector::new(&plans).selected(), 1);
        assert_eq!(PlanSelector::new(&plans[..1]).selected(), 0);
    }

    #[test]
    fn test_billing_toggle_swaps_prices_keeps_selection() {
        let mut selector = PlanSelector::new(PLANS);
        selector.select_plan(2);

        let monthly: Vec<u32> = PLANS.iter().map(|p| selector.price(p).amount).collect();
        assert_eq!(monthly, vec![49, 129, 299]);

        selector.set_billing_period(BillingPeriod::Yearly);
        let yearly: Vec<u32> = PLANS.iter().map(|p| selector.price(p).amount).collect();
        assert_eq!(yearly, vec![490, 1290, 2990]);
        assert_eq!(selector.selected(), 2);
    }

    #[test]
    fn test_yearly_per_month_rounding() {
        let labels: Vec<_> = PLANS
            .iter()
            .map(|p| PriceLabel::for_plan(p, BillingPeriod::Yearly))
            .collect();
        assert_eq!(labels[0].per_month, Some(41));
        assert_eq!(labels[1].per_month, Some(108));
        assert_eq!(labels[2].per_month, Some(249));
        assert_eq!(labels[0].suffix, "yr");

        let monthly = PriceLabel::for_plan(&PLANS[0], BillingPeriod::Monthly);
        assert_eq!(monthly.per_month, None);
        assert_eq!(monthly.suffix, "mo");
    }

    #[test]
    fn test_hover_dims_other_cards() {
        let mut selector = PlanSelector::new(PLANS);
        assert!(!selector.is_dimmed(0));

        selector.hover(Some(0));
        assert!(!selector.is_dimmed(0));
        assert!(selector.is_dimmed(1));
        assert!(selector.is_dimmed(2));

        selector.hover(None);
        assert!(!selector.is_dimmed(1));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut selector = PlanSelector::new(PLANS);
        selector.select_plan(9);
        assert_eq!(selector.selected(), 1);
    }

    #[test]
    fn test_billing_period_serde() {
        let json = serde_json::to_string(&BillingPeriod::Yearly).unwrap();
        assert_eq!(json, "\"yearly\"");
    }
}
