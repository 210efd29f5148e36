//! Role and ownership rule evaluation.

use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_database::store::{DealScope, InvestmentScope, PropertyScope};
use haven_entity::deal::Deal;
use haven_entity::investment::Investment;
use haven_entity::property::Property;
use haven_entity::user::UserRole;

use super::actor::Actor;

/// Evaluates access rules for platform operations.
///
/// Checks are first-match: an admin override, where one exists, is
/// tested before ownership. Deal confirmation has no admin override;
/// only the landlord named on the deal can confirm it.
#[derive(Debug, Clone, Default)]
pub struct AccessEvaluator;

impl AccessEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Require the admin role.
    pub fn require_admin(&self, actor: &Actor) -> AppResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Admin access required"))
        }
    }

    /// Require a role allowed to list properties.
    pub fn require_lister(&self, actor: &Actor) -> AppResult<()> {
        match actor.role {
            UserRole::Admin | UserRole::Landlord | UserRole::Agent => Ok(()),
            UserRole::Tenant | UserRole::Investor => Err(AppError::authorization(
                "Only landlords and agents can list properties",
            )),
        }
    }

    /// Require ownership of the property, with an admin override.
    pub fn require_property_manage(&self, actor: &Actor, property: &Property) -> AppResult<()> {
        if actor.is_admin() || property.is_owned_by(actor.id) {
            Ok(())
        } else {
            Err(AppError::authorization("You do not own this property"))
        }
    }

    /// Require the actor to be a party to the deal, with an admin override.
    pub fn require_deal_party(&self, actor: &Actor, deal: &Deal) -> AppResult<()> {
        if actor.is_admin() || deal.is_party(actor.id) {
            Ok(())
        } else {
            Err(AppError::authorization("You are not a party to this deal"))
        }
    }

    /// Require the actor to be the landlord named on the deal.
    ///
    /// Deliberately has no admin override: confirmation is consent,
    /// and only the landlord can give it.
    pub fn require_deal_confirmer(&self, actor: &Actor, deal: &Deal) -> AppResult<()> {
        if deal.landlord_id == actor.id {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Only the landlord can confirm this deal",
            ))
        }
    }

    /// Require ownership of the investment, with an admin override.
    pub fn require_investment_owner(
        &self,
        actor: &Actor,
        investment: &Investment,
    ) -> AppResult<()> {
        if actor.is_admin() || investment.is_held_by(actor.id) {
            Ok(())
        } else {
            Err(AppError::authorization("You do not own this investment"))
        }
    }

    /// Check whether the actor (or an anonymous visitor) may view a property.
    ///
    /// Approved properties are public. Pending, rejected, and closed
    /// properties are visible to the owner and admins only.
    pub fn can_view_property(&self, actor: Option<&Actor>, property: &Property) -> bool {
        if property.is_publicly_visible() {
            return true;
        }
        match actor {
            Some(actor) => actor.is_admin() || property.is_owned_by(actor.id),
            None => false,
        }
    }

    /// Resolve the property listing scope for an optional actor.
    pub fn property_scope(&self, actor: Option<&Actor>) -> PropertyScope {
        match actor {
            Some(actor) => match actor.role {
                UserRole::Admin => PropertyScope::All,
                UserRole::Landlord => PropertyScope::OwnedBy(actor.id),
                UserRole::Tenant | UserRole::Investor | UserRole::Agent => {
                    PropertyScope::ApprovedOnly
                }
            },
            None => PropertyScope::ApprovedOnly,
        }
    }

    /// Resolve the deal listing scope for an actor.
    ///
    /// Agents broker listings but are never a deal party, so they have
    /// no deal view at all.
    pub fn deal_scope(&self, actor: &Actor) -> AppResult<DealScope> {
        match actor.role {
            UserRole::Admin => Ok(DealScope::All),
            UserRole::Landlord => Ok(DealScope::Landlord(actor.id)),
            UserRole::Tenant | UserRole::Investor => Ok(DealScope::Buyer(actor.id)),
            UserRole::Agent => Err(AppError::authorization("Not authorized to view deals")),
        }
    }

    /// Resolve the investment listing scope for an actor.
    pub fn investment_scope(&self, actor: &Actor) -> InvestmentScope {
        match actor.role {
            UserRole::Admin => InvestmentScope::All,
            UserRole::Landlord | UserRole::Tenant | UserRole::Investor | UserRole::Agent => {
                InvestmentScope::Investor(actor.id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haven_core::error::ErrorKind;
    use haven_entity::deal::{DealKind, DealStatus, PaymentStatus};
    use haven_entity::property::{PropertyKind, PropertyStatus};
    use uuid::Uuid;

    fn actor(role: UserRole) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
            name: "Test User".to_string(),
        }
    }

    fn property(owner_id: Uuid, status: PropertyStatus) -> Property {
        let now = Utc::now();
        Property {
            id: Uuid::new_v4(),
            owner_id,
            title: "Two-bedroom apartment".to_string(),
            description: "Bright and quiet".to_string(),
            kind: PropertyKind::Apartment,
            price: 120_000_000,
            address: "12 Riverside Road".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(1),
            area_sqm: Some(64),
            is_premium: false,
            status,
            approved_by: None,
            approved_at: None,
            rejected_at: None,
            rejection_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn deal(buyer_id: Uuid, landlord_id: Uuid) -> Deal {
        let now = Utc::now();
        Deal {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            buyer_id,
            landlord_id,
            kind: DealKind::Sale,
            amount: 100_000_000,
            amount_paid: 0,
            status: DealStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_reference: None,
            transaction_id: None,
            notes: None,
            cancellation_reason: None,
            closed_at: None,
            cancelled_at: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn investment(investor_id: Uuid) -> Investment {
        let now = Utc::now();
        Investment {
            id: Uuid::new_v4(),
            investor_id,
            property_id: None,
            title: "REIT basket".to_string(),
            kind: haven_entity::investment::InvestmentKind::Reit,
            initial_amount: 50_000_000,
            current_value: 50_000_000,
            roi: 0.0,
            expected_annual_return: 8.0,
            status: haven_entity::investment::InvestmentStatus::Active,
            returns: sqlx::types::Json(vec![]),
            notes: None,
            closed_at: None,
            close_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn admin_check_rejects_other_roles() {
        let evaluator = AccessEvaluator::new();
        assert!(evaluator.require_admin(&actor(UserRole::Admin)).is_ok());
        for role in [
            UserRole::Landlord,
            UserRole::Tenant,
            UserRole::Agent,
            UserRole::Investor,
        ] {
            let err = evaluator.require_admin(&actor(role)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Authorization);
        }
    }

    #[test]
    fn listers_are_landlords_agents_and_admins() {
        let evaluator = AccessEvaluator::new();
        assert!(evaluator.require_lister(&actor(UserRole::Landlord)).is_ok());
        assert!(evaluator.require_lister(&actor(UserRole::Agent)).is_ok());
        assert!(evaluator.require_lister(&actor(UserRole::Admin)).is_ok());
        assert!(evaluator.require_lister(&actor(UserRole::Tenant)).is_err());
        assert!(evaluator.require_lister(&actor(UserRole::Investor)).is_err());
    }

    #[test]
    fn property_manage_allows_owner_and_admin() {
        let evaluator = AccessEvaluator::new();
        let owner = actor(UserRole::Landlord);
        let stranger = actor(UserRole::Landlord);
        let admin = actor(UserRole::Admin);
        let prop = property(owner.id, PropertyStatus::Approved);

        assert!(evaluator.require_property_manage(&owner, &prop).is_ok());
        assert!(evaluator.require_property_manage(&admin, &prop).is_ok());
        assert!(evaluator.require_property_manage(&stranger, &prop).is_err());
    }

    #[test]
    fn deal_party_check_covers_both_sides() {
        let evaluator = AccessEvaluator::new();
        let buyer = actor(UserRole::Tenant);
        let landlord = actor(UserRole::Landlord);
        let outsider = actor(UserRole::Tenant);
        let d = deal(buyer.id, landlord.id);

        assert!(evaluator.require_deal_party(&buyer, &d).is_ok());
        assert!(evaluator.require_deal_party(&landlord, &d).is_ok());
        assert!(evaluator.require_deal_party(&actor(UserRole::Admin), &d).is_ok());
        assert!(evaluator.require_deal_party(&outsider, &d).is_err());
    }

    #[test]
    fn only_the_landlord_confirms() {
        let evaluator = AccessEvaluator::new();
        let buyer = actor(UserRole::Tenant);
        let landlord = actor(UserRole::Landlord);
        let admin = actor(UserRole::Admin);
        let d = deal(buyer.id, landlord.id);

        assert!(evaluator.require_deal_confirmer(&landlord, &d).is_ok());
        let err = evaluator.require_deal_confirmer(&buyer, &d).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, "Only the landlord can confirm this deal");
        // No admin override for confirmation.
        assert!(evaluator.require_deal_confirmer(&admin, &d).is_err());
    }

    #[test]
    fn investment_owner_check_allows_holder_and_admin() {
        let evaluator = AccessEvaluator::new();
        let holder = actor(UserRole::Investor);
        let other = actor(UserRole::Investor);
        let inv = investment(holder.id);

        assert!(evaluator.require_investment_owner(&holder, &inv).is_ok());
        assert!(evaluator
            .require_investment_owner(&actor(UserRole::Admin), &inv)
            .is_ok());
        assert!(evaluator.require_investment_owner(&other, &inv).is_err());
    }

    #[test]
    fn approved_properties_are_public() {
        let evaluator = AccessEvaluator::new();
        let owner = actor(UserRole::Landlord);
        let prop = property(owner.id, PropertyStatus::Approved);

        assert!(evaluator.can_view_property(None, &prop));
        assert!(evaluator.can_view_property(Some(&actor(UserRole::Tenant)), &prop));
    }

    #[test]
    fn pending_properties_are_owner_and_admin_only() {
        let evaluator = AccessEvaluator::new();
        let owner = actor(UserRole::Landlord);
        let prop = property(owner.id, PropertyStatus::Pending);

        assert!(!evaluator.can_view_property(None, &prop));
        assert!(!evaluator.can_view_property(Some(&actor(UserRole::Tenant)), &prop));
        assert!(evaluator.can_view_property(Some(&owner), &prop));
        assert!(evaluator.can_view_property(Some(&actor(UserRole::Admin)), &prop));
    }

    #[test]
    fn property_scope_follows_role() {
        let evaluator = AccessEvaluator::new();
        assert!(matches!(evaluator.property_scope(None), PropertyScope::ApprovedOnly));

        let landlord = actor(UserRole::Landlord);
        match evaluator.property_scope(Some(&landlord)) {
            PropertyScope::OwnedBy(id) => assert_eq!(id, landlord.id),
            other => panic!("unexpected scope: {other:?}"),
        }

        assert!(matches!(
            evaluator.property_scope(Some(&actor(UserRole::Admin))),
            PropertyScope::All
        ));
        assert!(matches!(
            evaluator.property_scope(Some(&actor(UserRole::Agent))),
            PropertyScope::ApprovedOnly
        ));
    }

    #[test]
    fn deal_scope_excludes_agents() {
        let evaluator = AccessEvaluator::new();
        let tenant = actor(UserRole::Tenant);
        match evaluator.deal_scope(&tenant) {
            Ok(DealScope::Buyer(id)) => assert_eq!(id, tenant.id),
            other => panic!("unexpected scope: {other:?}"),
        }

        let landlord = actor(UserRole::Landlord);
        match evaluator.deal_scope(&landlord) {
            Ok(DealScope::Landlord(id)) => assert_eq!(id, landlord.id),
            other => panic!("unexpected scope: {other:?}"),
        }

        assert!(matches!(
            evaluator.deal_scope(&actor(UserRole::Admin)),
            Ok(DealScope::All)
        ));

        let err = evaluator.deal_scope(&actor(UserRole::Agent)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn investment_scope_is_self_unless_admin() {
        let evaluator = AccessEvaluator::new();
        let investor = actor(UserRole::Investor);
        match evaluator.investment_scope(&investor) {
            InvestmentScope::Investor(id) => assert_eq!(id, investor.id),
            other => panic!("unexpected scope: {other:?}"),
        }
        assert!(matches!(
            evaluator.investment_scope(&actor(UserRole::Admin)),
            InvestmentScope::All
        ));
    }
}
