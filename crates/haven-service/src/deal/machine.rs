//! Deal transition rules.
//!
//! Status graph: `pending -> confirmed -> completed`, with
//! `pending | confirmed -> cancelled`. Completed and cancelled are
//! terminal. Every function here is pure: it inspects a snapshot,
//! rejects invalid transitions, and describes what should happen. The
//! service applies the result through the store's compare-and-set
//! updates and emits the drafted notifications after the commit.

use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_entity::deal::{CreateDeal, Deal, DealKind, DealStatus};
use haven_entity::notification::{NewNotification, NotificationKind};
use haven_entity::property::{Property, PropertyStatus};

/// The outcome of a valid transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Property status to set in the same transaction, when the
    /// transition closes the listing.
    pub property_status: Option<PropertyStatus>,
    /// Notifications to emit after the transition commits.
    pub notifications: Vec<NewNotification>,
}

/// Validate a deal request against the listing and produce the row to
/// insert.
///
/// The landlord side is fixed to the property owner at submission time.
/// Live-deal uniqueness is not checked here; the store enforces it.
pub fn open(
    property: &Property,
    buyer_id: Uuid,
    kind: DealKind,
    amount: i64,
    notes: Option<String>,
) -> AppResult<CreateDeal> {
    if amount <= 0 {
        return Err(AppError::validation("Deal amount must be positive"));
    }
    if buyer_id == property.owner_id {
        return Err(AppError::validation(
            "You cannot open a deal on your own property",
        ));
    }
    if property.status != PropertyStatus::Approved {
        return Err(AppError::precondition(
            "Property is not available for deals",
        ));
    }

    Ok(CreateDeal {
        property_id: property.id,
        buyer_id,
        landlord_id: property.owner_id,
        kind,
        amount,
        notes,
    })
}

/// Draft the landlord's notification for a freshly submitted deal.
pub fn submitted(deal: &Deal, buyer_name: &str, property_title: &str) -> NewNotification {
    NewNotification {
        user_id: deal.landlord_id,
        kind: NotificationKind::DealSubmitted,
        title: "New deal request".to_string(),
        message: format!(
            "{buyer_name} wants to {} {property_title}",
            kind_verb(deal.kind)
        ),
        link: Some(format!("/landlord/deals/{}", deal.id)),
        property_id: Some(deal.property_id),
        deal_id: Some(deal.id),
    }
}

/// `pending -> confirmed`. The buyer is notified.
pub fn confirm(deal: &Deal) -> AppResult<Transition> {
    if deal.status != DealStatus::Pending {
        return Err(AppError::precondition(format!(
            "Cannot confirm a deal with status '{}'",
            deal.status
        )));
    }

    Ok(Transition {
        property_status: None,
        notifications: vec![NewNotification {
            user_id: deal.buyer_id,
            kind: NotificationKind::DealConfirmed,
            title: "Deal confirmed".to_string(),
            message: "The landlord confirmed your deal".to_string(),
            link: Some(format!("/tenant/deals/{}", deal.id)),
            property_id: Some(deal.property_id),
            deal_id: Some(deal.id),
        }],
    })
}

/// `confirmed -> completed`.
///
/// A sale marks the property sold and a rent marks it rented, in the
/// same store transaction as the deal update. A lease leaves the
/// listing on the market. The buyer and the landlord are both notified.
pub fn complete(deal: &Deal) -> AppResult<Transition> {
    if deal.status != DealStatus::Confirmed {
        return Err(AppError::precondition(
            "Deal must be confirmed before completion",
        ));
    }

    let property_status = match deal.kind {
        DealKind::Sale => Some(PropertyStatus::Sold),
        DealKind::Rent => Some(PropertyStatus::Rented),
        DealKind::Lease => None,
    };

    Ok(Transition {
        property_status,
        notifications: vec![
            NewNotification {
                user_id: deal.buyer_id,
                kind: NotificationKind::DealCompleted,
                title: "Deal completed".to_string(),
                message: "Your deal has been completed successfully".to_string(),
                link: Some(format!("/tenant/deals/{}", deal.id)),
                property_id: Some(deal.property_id),
                deal_id: Some(deal.id),
            },
            NewNotification {
                user_id: deal.landlord_id,
                kind: NotificationKind::PaymentReceived,
                title: "Payment received".to_string(),
                message: format!("Payment of {} received for your deal", deal.amount),
                link: Some(format!("/landlord/deals/{}", deal.id)),
                property_id: Some(deal.property_id),
                deal_id: Some(deal.id),
            },
        ],
    })
}

/// `pending | confirmed -> cancelled`. The counterparty is notified.
pub fn cancel(deal: &Deal, actor_id: Uuid, reason: Option<&str>) -> AppResult<Transition> {
    match deal.status {
        DealStatus::Completed => {
            return Err(AppError::precondition("Completed deals cannot be cancelled"));
        }
        DealStatus::Cancelled => {
            return Err(AppError::precondition("Deal is already cancelled"));
        }
        DealStatus::Pending | DealStatus::Confirmed => {}
    }

    let recipient = deal.counterparty(actor_id);
    let link = if recipient == deal.landlord_id {
        format!("/landlord/deals/{}", deal.id)
    } else {
        format!("/tenant/deals/{}", deal.id)
    };
    let message = match reason {
        Some(reason) => format!("The deal was cancelled: {reason}"),
        None => "The deal was cancelled".to_string(),
    };

    Ok(Transition {
        property_status: None,
        notifications: vec![NewNotification {
            user_id: recipient,
            kind: NotificationKind::DealCancelled,
            title: "Deal cancelled".to_string(),
            message,
            link: Some(link),
            property_id: Some(deal.property_id),
            deal_id: Some(deal.id),
        }],
    })
}

fn kind_verb(kind: DealKind) -> &'static str {
    match kind {
        DealKind::Sale => "buy",
        DealKind::Rent => "rent",
        DealKind::Lease => "lease",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haven_core::error::ErrorKind;
    use haven_entity::deal::PaymentStatus;
    use haven_entity::property::PropertyKind;

    fn property(status: PropertyStatus) -> Property {
        let now = Utc::now();
        Property {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Lakeside duplex".to_string(),
            description: "Water views".to_string(),
            kind: PropertyKind::Duplex,
            price: 250_000_000,
            address: "4 Shore Lane".to_string(),
            city: "Madison".to_string(),
            state: "WI".to_string(),
            bedrooms: Some(3),
            bathrooms: Some(2),
            area_sqm: Some(140),
            is_premium: true,
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

    fn deal(kind: DealKind, status: DealStatus) -> Deal {
        let now = Utc::now();
        Deal {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            buyer_id: Uuid::new_v4(),
            landlord_id: Uuid::new_v4(),
            kind,
            amount: 90_000_000,
            amount_paid: 0,
            status,
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

    #[test]
    fn open_requires_approved_property() {
        for status in [
            PropertyStatus::Pending,
            PropertyStatus::Rejected,
            PropertyStatus::Sold,
            PropertyStatus::Rented,
        ] {
            let err = open(&property(status), Uuid::new_v4(), DealKind::Sale, 1_000, None)
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Precondition);
            assert_eq!(err.message, "Property is not available for deals");
        }
    }

    #[test]
    fn open_rejects_non_positive_amount() {
        let prop = property(PropertyStatus::Approved);
        for amount in [0, -5] {
            let err = open(&prop, Uuid::new_v4(), DealKind::Rent, amount, None).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[test]
    fn open_rejects_own_property() {
        let prop = property(PropertyStatus::Approved);
        let err = open(&prop, prop.owner_id, DealKind::Sale, 1_000, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn open_fixes_landlord_to_owner() {
        let prop = property(PropertyStatus::Approved);
        let buyer = Uuid::new_v4();
        let create = open(&prop, buyer, DealKind::Sale, 80_000_000, None).unwrap();
        assert_eq!(create.landlord_id, prop.owner_id);
        assert_eq!(create.buyer_id, buyer);
        assert_eq!(create.property_id, prop.id);
    }

    #[test]
    fn confirm_only_from_pending() {
        let t = confirm(&deal(DealKind::Sale, DealStatus::Pending)).unwrap();
        assert_eq!(t.property_status, None);
        assert_eq!(t.notifications.len(), 1);
        assert_eq!(t.notifications[0].kind, NotificationKind::DealConfirmed);

        for status in [
            DealStatus::Confirmed,
            DealStatus::Completed,
            DealStatus::Cancelled,
        ] {
            let err = confirm(&deal(DealKind::Sale, status)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Precondition);
        }
    }

    #[test]
    fn complete_only_from_confirmed() {
        for status in [DealStatus::Pending, DealStatus::Completed, DealStatus::Cancelled] {
            let err = complete(&deal(DealKind::Sale, status)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Precondition);
            assert_eq!(err.message, "Deal must be confirmed before completion");
        }
    }

    #[test]
    fn complete_closes_listing_by_kind() {
        let sale = complete(&deal(DealKind::Sale, DealStatus::Confirmed)).unwrap();
        assert_eq!(sale.property_status, Some(PropertyStatus::Sold));

        let rent = complete(&deal(DealKind::Rent, DealStatus::Confirmed)).unwrap();
        assert_eq!(rent.property_status, Some(PropertyStatus::Rented));

        let lease = complete(&deal(DealKind::Lease, DealStatus::Confirmed)).unwrap();
        assert_eq!(lease.property_status, None);
    }

    #[test]
    fn complete_notifies_both_parties() {
        let d = deal(DealKind::Sale, DealStatus::Confirmed);
        let t = complete(&d).unwrap();
        assert_eq!(t.notifications.len(), 2);
        assert_eq!(t.notifications[0].user_id, d.buyer_id);
        assert_eq!(t.notifications[0].kind, NotificationKind::DealCompleted);
        assert_eq!(t.notifications[1].user_id, d.landlord_id);
        assert_eq!(t.notifications[1].kind, NotificationKind::PaymentReceived);
    }

    #[test]
    fn cancel_rejects_terminal_states() {
        let err = cancel(&deal(DealKind::Sale, DealStatus::Completed), Uuid::new_v4(), None)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Precondition);
        assert_eq!(err.message, "Completed deals cannot be cancelled");

        let err = cancel(&deal(DealKind::Sale, DealStatus::Cancelled), Uuid::new_v4(), None)
            .unwrap_err();
        assert_eq!(err.message, "Deal is already cancelled");
    }

    #[test]
    fn cancel_notifies_the_counterparty() {
        let d = deal(DealKind::Rent, DealStatus::Pending);

        let by_buyer = cancel(&d, d.buyer_id, Some("Found another place")).unwrap();
        assert_eq!(by_buyer.notifications[0].user_id, d.landlord_id);
        assert!(by_buyer.notifications[0].message.contains("Found another place"));
        assert_eq!(
            by_buyer.notifications[0].link.as_deref(),
            Some(format!("/landlord/deals/{}", d.id).as_str())
        );

        let by_landlord = cancel(&d, d.landlord_id, None).unwrap();
        assert_eq!(by_landlord.notifications[0].user_id, d.buyer_id);
        assert_eq!(
            by_landlord.notifications[0].link.as_deref(),
            Some(format!("/tenant/deals/{}", d.id).as_str())
        );
    }

    #[test]
    fn submitted_draft_targets_the_landlord() {
        let d = deal(DealKind::Sale, DealStatus::Pending);
        let draft = submitted(&d, "Alice Nguyen", "Lakeside duplex");
        assert_eq!(draft.user_id, d.landlord_id);
        assert_eq!(draft.kind, NotificationKind::DealSubmitted);
        assert_eq!(draft.message, "Alice Nguyen wants to buy Lakeside duplex");
        assert_eq!(draft.deal_id, Some(d.id));
    }
}
