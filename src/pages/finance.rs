//! Finance page
//!
//! Two tabs: a revenue overview over the seeded transaction log, and the
//! subscription plan manager with a modal plan editor. Plan prices are kept
//! in whole CFA francs; there is no payment processing here, only the
//! records an operator curates.

use tracing::info;

use crate::config::StorefrontConfig;
use crate::models::billing::{PlanDuration, SubscriptionPlan, Transaction, TransactionStatus};
use crate::seed;
use crate::utils::errors::{AdminError, Result};
use crate::utils::ids::next_id;
use crate::utils::logging::log_admin_action;

/// Finance page tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinanceTab {
    #[default]
    Overview,
    Plans,
}

/// Local state of the finance page
#[derive(Debug, Clone)]
pub struct FinanceState {
    plans: Vec<SubscriptionPlan>,
    transactions: Vec<Transaction>,
    tab: FinanceTab,
    editing: Option<SubscriptionPlan>,
    storefront: StorefrontConfig,
}

impl FinanceState {
    pub fn new(storefront: StorefrontConfig) -> Self {
        Self::with_data(seed::plans(), seed::transactions(), storefront)
    }

    pub fn with_data(
        plans: Vec<SubscriptionPlan>,
        transactions: Vec<Transaction>,
        storefront: StorefrontConfig,
    ) -> Self {
        Self {
            plans,
            transactions,
            tab: FinanceTab::Overview,
            editing: None,
            storefront,
        }
    }

    pub fn tab(&self) -> FinanceTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: FinanceTab) {
        self.tab = tab;
    }

    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of successful transactions, in whole currency units
    pub fn total_revenue(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Success)
            .map(|tx| tx.amount)
            .sum()
    }

    // --- plan editor -----------------------------------------------------

    /// Open the editor with creation defaults
    pub fn create_plan(&mut self) {
        self.editing = Some(SubscriptionPlan {
            id: String::new(),
            name: String::new(),
            price: 0,
            currency: self.storefront.default_currency.clone(),
            duration: PlanDuration::Monthly,
            features: vec![String::new()],
            active: true,
            highlight: false,
        });
    }

    /// Open the editor with a copy of an existing plan
    pub fn edit_plan(&mut self, plan_id: &str) -> Result<()> {
        let plan = self
            .plans
            .iter()
            .find(|p| p.id == plan_id)
            .cloned()
            .ok_or_else(|| AdminError::PlanNotFound {
                plan_id: plan_id.to_string(),
            })?;
        self.editing = Some(plan);
        Ok(())
    }

    pub fn editing(&self) -> Option<&SubscriptionPlan> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut SubscriptionPlan> {
        self.editing.as_mut()
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Append an empty feature row to the open draft
    pub fn add_feature(&mut self) -> Result<()> {
        let draft = self
            .editing
            .as_mut()
            .ok_or_else(|| AdminError::NoOpenForm("plan".to_string()))?;
        draft.features.push(String::new());
        Ok(())
    }

    pub fn update_feature(&mut self, index: usize, text: &str) -> Result<()> {
        let draft = self
            .editing
            .as_mut()
            .ok_or_else(|| AdminError::NoOpenForm("plan".to_string()))?;
        let slot = draft.features.get_mut(index).ok_or_else(|| {
            AdminError::Validation(format!("No feature row at index {}", index))
        })?;
        *slot = text.to_string();
        Ok(())
    }

    pub fn remove_feature(&mut self, index: usize) -> Result<()> {
        let draft = self
            .editing
            .as_mut()
            .ok_or_else(|| AdminError::NoOpenForm("plan".to_string()))?;
        if index >= draft.features.len() {
            return Err(AdminError::Validation(format!(
                "No feature row at index {}",
                index
            )));
        }
        draft.features.remove(index);
        Ok(())
    }

    /// Persist the open draft: replace by id, or append with a fresh
    /// `plan_<timestamp>` id. Blank feature rows are dropped on save.
    /// Returns the saved id.
    pub fn save_plan(&mut self) -> Result<String> {
        let mut draft = self
            .editing
            .take()
            .ok_or_else(|| AdminError::NoOpenForm("plan".to_string()))?;

        if draft.name.trim().is_empty() {
            self.editing = Some(draft);
            return Err(AdminError::Validation("Plan name is required".to_string()));
        }
        if draft.price < 0 {
            self.editing = Some(draft);
            return Err(AdminError::Validation(
                "Plan price cannot be negative".to_string(),
            ));
        }

        draft.features.retain(|f| !f.trim().is_empty());

        let id = if draft.id.is_empty() {
            let id = next_id("plan");
            draft.id = id.clone();
            log_admin_action("plan_created", Some(&id), Some(&draft.name));
            self.plans.push(draft);
            id
        } else {
            let id = draft.id.clone();
            log_admin_action("plan_updated", Some(&id), Some(&draft.name));
            match self.plans.iter_mut().find(|p| p.id == id) {
                Some(slot) => *slot = draft,
                None => self.plans.push(draft),
            }
            id
        };
        Ok(id)
    }

    /// Flip a plan's storefront visibility
    pub fn toggle_visibility(&mut self, plan_id: &str) -> Result<bool> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| AdminError::PlanNotFound {
                plan_id: plan_id.to_string(),
            })?;
        plan.active = !plan.active;
        info!(plan_id = plan_id, active = plan.active, "Plan visibility toggled");
        Ok(plan.active)
    }
}
