//! Property listing lifecycle and visibility workflow tests.

mod fakes;

use fakes::{Harness, actor_for};
use haven_core::error::ErrorKind;
use haven_core::types::pagination::PageRequest;
use haven_entity::notification::NotificationKind;
use haven_entity::property::{PropertyKind, PropertyStatus, UpdateProperty};
use haven_entity::user::UserRole;
use haven_service::property::ListingDraft;

fn draft(title: &str, price: i64) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: "Bright two-bed with a balcony".to_string(),
        kind: PropertyKind::Apartment,
        price,
        address: "12 Harbor Way".to_string(),
        city: "Portside".to_string(),
        state: "OR".to_string(),
        bedrooms: Some(2),
        bathrooms: Some(1),
        area_sqm: Some(68),
        is_premium: false,
    }
}

fn patch(id: uuid::Uuid) -> UpdateProperty {
    UpdateProperty {
        id,
        title: None,
        description: None,
        price: None,
        address: None,
        city: None,
        state: None,
        bedrooms: None,
        bathrooms: None,
        area_sqm: None,
        is_premium: None,
    }
}

#[tokio::test]
async fn test_new_listing_starts_pending() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");

    let property = h
        .properties
        .create(&actor_for(&landlord), draft("Harbor flat", 24_000_000))
        .await
        .unwrap();

    assert_eq!(property.status, PropertyStatus::Pending);
    assert_eq!(property.owner_id, landlord.id);
}

#[tokio::test]
async fn test_only_listers_create_listings() {
    let h = Harness::new();
    let tenant = h.store.seed_user(UserRole::Tenant, "Tom Okafor");
    let agent = h.store.seed_user(UserRole::Agent, "Gail Moss");

    let err = h
        .properties
        .create(&actor_for(&tenant), draft("Harbor flat", 24_000_000))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(err.message, "Only landlords and agents can list properties");

    h.properties
        .create(&actor_for(&agent), draft("Harbor flat", 24_000_000))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unapproved_listings_read_as_missing() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let stranger = h.store.seed_user(UserRole::Tenant, "Tom Okafor");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 24_000_000, false);

    let err = h
        .properties
        .get(Some(&actor_for(&stranger)), property.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Property not found");

    let err = h.properties.get(None, property.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // Owner and admin still see it.
    h.properties
        .get(Some(&actor_for(&landlord)), property.id)
        .await
        .unwrap();
    h.properties
        .get(Some(&actor_for(&admin)), property.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_approval_notifies_the_owner() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 24_000_000, false);

    let approved = h
        .properties
        .approve(&actor_for(&admin), property.id)
        .await
        .unwrap();
    assert_eq!(approved.status, PropertyStatus::Approved);
    assert_eq!(approved.approved_by, Some(admin.id));
    assert!(approved.approved_at.is_some());

    let inbox = h.store.notifications_for(landlord.id);
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, NotificationKind::PropertyApproved);
    assert!(inbox[0].message.contains("Seeded listing"));
}

#[tokio::test]
async fn test_approve_requires_a_pending_listing() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 24_000_000, false);

    h.properties
        .approve(&actor_for(&admin), property.id)
        .await
        .unwrap();

    let err = h
        .properties
        .approve(&actor_for(&admin), property.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Precondition);
    assert_eq!(err.message, "Only pending properties can be approved");
}

#[tokio::test]
async fn test_rejection_records_a_default_reason() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 24_000_000, false);

    let rejected = h
        .properties
        .reject(&actor_for(&admin), property.id, Some("   ".to_string()))
        .await
        .unwrap();
    assert_eq!(rejected.status, PropertyStatus::Rejected);
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("Does not meet platform standards")
    );

    let inbox = h.store.notifications_for(landlord.id);
    assert_eq!(inbox[0].kind, NotificationKind::PropertyRejected);
    assert!(inbox[0].message.contains("Does not meet platform standards"));
}

#[tokio::test]
async fn test_moderation_is_admin_only() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 24_000_000, false);

    let err = h
        .properties
        .approve(&actor_for(&landlord), property.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(err.message, "Admin access required");

    let err = h
        .properties
        .reject(&actor_for(&landlord), property.id, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[tokio::test]
async fn test_closed_listings_cannot_be_edited() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Sold, 24_000_000, false);

    let mut update = patch(property.id);
    update.price = Some(25_000_000);

    let err = h
        .properties
        .update(&actor_for(&landlord), update)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Precondition);
    assert_eq!(err.message, "Sold or rented properties cannot be edited");
}

#[tokio::test]
async fn test_edits_require_ownership() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let other = h.store.seed_user(UserRole::Landlord, "Rob Vance");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Approved, 24_000_000, false);

    let mut update = patch(property.id);
    update.title = Some("Someone else's flat".to_string());

    let err = h
        .properties
        .update(&actor_for(&other), update.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(err.message, "You do not own this property");

    // Admins can edit any listing.
    let updated = h
        .properties
        .update(&actor_for(&admin), update)
        .await
        .unwrap();
    assert_eq!(updated.title, "Someone else's flat");
    assert_eq!(updated.version, property.version + 1);
}

#[tokio::test]
async fn test_listing_visibility_is_scoped() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let other = h.store.seed_user(UserRole::Landlord, "Rob Vance");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    h.store
        .seed_property(landlord.id, PropertyStatus::Approved, 1_000_000, false);
    h.store
        .seed_property(landlord.id, PropertyStatus::Pending, 2_000_000, false);
    h.store
        .seed_property(other.id, PropertyStatus::Approved, 3_000_000, false);

    // Anonymous browsing sees approved listings only.
    let public = h.properties.list(None, PageRequest::default()).await.unwrap();
    assert_eq!(public.total_items, 2);
    assert!(public.items.iter().all(|p| p.status == PropertyStatus::Approved));

    // Owners see their whole inventory and nobody else's.
    let own = h
        .properties
        .list(Some(&actor_for(&landlord)), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(own.total_items, 2);
    assert!(own.items.iter().all(|p| p.owner_id == landlord.id));

    let all = h
        .properties
        .list(Some(&actor_for(&admin)), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.total_items, 3);
}

#[tokio::test]
async fn test_moderation_queue_is_oldest_first() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let admin = h.store.seed_user(UserRole::Admin, "Ada Root");
    let first = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 1_000_000, false);
    let second = h
        .store
        .seed_property(landlord.id, PropertyStatus::Pending, 2_000_000, false);

    let err = h
        .properties
        .pending(&actor_for(&landlord), PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let queue = h
        .properties
        .pending(&actor_for(&admin), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(queue.items.len(), 2);
    assert_eq!(queue.items[0].id, first.id);
    assert_eq!(queue.items[1].id, second.id);
}

#[tokio::test]
async fn test_deleted_listing_is_gone() {
    let h = Harness::new();
    let landlord = h.store.seed_user(UserRole::Landlord, "Lena Hart");
    let property = h
        .store
        .seed_property(landlord.id, PropertyStatus::Approved, 24_000_000, false);

    h.properties
        .delete(&actor_for(&landlord), property.id)
        .await
        .unwrap();

    let err = h
        .properties
        .get(Some(&actor_for(&landlord)), property.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
