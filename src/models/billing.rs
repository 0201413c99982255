//! Billing models: transactions and subscription plans

use serde::{Deserialize, Serialize};

use super::account::SubscriptionTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
}

/// Payment channels available on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Orange Money
    Om,
    /// MTN Mobile Money
    Momo,
    Visa,
}

/// A payment record. Read-only in the console; there is no create or update
/// path, transactions arrive from the (unmodeled) payment processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// Denormalized copy of the payer's name at transaction time
    pub user_name: String,
    pub amount: i64,
    pub currency: String,
    pub date: String,
    pub status: TransactionStatus,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl PlanDuration {
    /// The subscription tier an account holds after buying a plan of this
    /// duration. A 24h pass grants no recurring tier.
    pub fn tier(&self) -> SubscriptionTier {
        match self {
            PlanDuration::Daily => SubscriptionTier::Free,
            PlanDuration::Weekly => SubscriptionTier::Weekly,
            PlanDuration::Monthly => SubscriptionTier::Monthly,
            PlanDuration::Annual => SubscriptionTier::Annual,
        }
    }
}

/// A purchasable subscription tier. `active` controls visibility on the
/// storefront; inactive plans stay editable here but are hidden from buyers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    pub duration: PlanDuration,
    /// Ordered list of selling points shown on the plan card
    pub features: Vec<String>,
    pub active: bool,
    #[serde(default)]
    pub highlight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_maps_to_tier() {
        assert_eq!(PlanDuration::Weekly.tier(), SubscriptionTier::Weekly);
        assert_eq!(PlanDuration::Annual.tier(), SubscriptionTier::Annual);
        assert_eq!(PlanDuration::Daily.tier(), SubscriptionTier::Free);
    }

    #[test]
    fn test_method_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(PaymentMethod::Momo).unwrap(),
            serde_json::json!("MOMO")
        );
    }

    #[test]
    fn test_plan_highlight_defaults_false() {
        let json = serde_json::json!({
            "id": "plan_1",
            "name": "Découverte (24h)",
            "price": 1500,
            "currency": "CFA",
            "duration": "daily",
            "features": ["Accès 24h complet"],
            "active": true
        });
        let plan: SubscriptionPlan = serde_json::from_value(json).unwrap();
        assert!(!plan.highlight);
    }
}
