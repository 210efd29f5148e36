//! In-memory store fakes and a wired service harness for workflow tests.
//!
//! `MemStore` mirrors the Postgres repositories' observable behavior:
//! compare-and-set transitions return `None` on a status mismatch, the
//! live-deal uniqueness rule surfaces as a conflict, and newest-first
//! ordering follows insertion order.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use haven_auth::access::{AccessEvaluator, Actor};
use haven_auth::jwt::JwtEncoder;
use haven_auth::password::PasswordHasher;
use haven_core::config::auth::AuthConfig;
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::types::pagination::{PageRequest, PageResponse};
use haven_database::store::{
    DealScope, DealStore, InvestmentScope, InvestmentStore, NotificationStore, PropertyScope,
    PropertyStore, UserStore,
};
use haven_entity::deal::{CreateDeal, Deal, DealStatus, PaymentStatus};
use haven_entity::investment::{CreateInvestment, Investment, InvestmentReturn, InvestmentStatus};
use haven_entity::notification::{NewNotification, Notification};
use haven_entity::property::{CreateProperty, Property, PropertyStatus, UpdateProperty};
use haven_entity::user::{CreateUser, UpdateProfile, User, UserRole};
use haven_service::notification::StoreEmitter;
use haven_service::{
    AdminStatsService, AdminUserService, DealService, InvestmentService, NotificationService,
    PropertyService, UserService,
};

/// Shared in-memory backing store implementing every store trait.
#[derive(Default)]
pub struct MemStore {
    users: Mutex<Vec<User>>,
    properties: Mutex<Vec<Property>>,
    deals: Mutex<Vec<Deal>>,
    investments: Mutex<Vec<Investment>>,
    notifications: Mutex<Vec<Notification>>,
}

impl MemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a user directly, bypassing registration.
    pub fn seed_user(&self, role: UserRole, name: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            password_hash: "unused".to_string(),
            role,
            investor_token: None,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    /// Insert a property directly in the given status.
    pub fn seed_property(
        &self,
        owner_id: Uuid,
        status: PropertyStatus,
        price: i64,
        is_premium: bool,
    ) -> Property {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            owner_id,
            title: "Seeded listing".to_string(),
            description: "Seeded".to_string(),
            kind: haven_entity::property::PropertyKind::Apartment,
            price,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(1),
            area_sqm: Some(70),
            is_premium,
            status,
            approved_by: None,
            approved_at: None,
            rejected_at: None,
            rejection_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.properties.lock().unwrap().push(property.clone());
        property
    }

    /// Current state of a property row.
    pub fn property(&self, id: Uuid) -> Property {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap()
    }

    /// Current state of a deal row.
    pub fn deal(&self, id: Uuid) -> Deal {
        self.deals
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .unwrap()
    }

    /// Notifications delivered to a user, oldest first.
    pub fn notifications_for(&self, user_id: Uuid) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let users = self.users.lock().unwrap();
        let total = users.len() as u64;
        let items = users
            .iter()
            .rev()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(AppError::conflict("Email already registered"));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.to_lowercase(),
            phone: data.phone.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            investor_token: data.investor_token.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, data: &UpdateProfile) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == data.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;
        if let Some(ref name) = data.name {
            user.name = name.clone();
        }
        if let Some(ref phone) = data.phone {
            user.phone = Some(phone.clone());
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.role = role;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn count_by_role(&self) -> AppResult<Vec<(UserRole, i64)>> {
        let users = self.users.lock().unwrap();
        let mut counts = Vec::new();
        for role in [
            UserRole::Admin,
            UserRole::Landlord,
            UserRole::Tenant,
            UserRole::Agent,
            UserRole::Investor,
        ] {
            let count = users.iter().filter(|u| u.role == role).count() as i64;
            if count > 0 {
                counts.push((role, count));
            }
        }
        Ok(counts)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PropertyStore for MemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            title: data.title.clone(),
            description: data.description.clone(),
            kind: data.kind,
            price: data.price,
            address: data.address.clone(),
            city: data.city.clone(),
            state: data.state.clone(),
            bedrooms: data.bedrooms,
            bathrooms: data.bathrooms,
            area_sqm: data.area_sqm,
            is_premium: data.is_premium,
            status: PropertyStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejected_at: None,
            rejection_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.properties.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn update(&self, data: &UpdateProperty) -> AppResult<Option<Property>> {
        let mut properties = self.properties.lock().unwrap();
        let Some(property) = properties
            .iter_mut()
            .find(|p| p.id == data.id && !p.status.is_closed())
        else {
            return Ok(None);
        };
        if let Some(ref title) = data.title {
            property.title = title.clone();
        }
        if let Some(ref description) = data.description {
            property.description = description.clone();
        }
        if let Some(price) = data.price {
            property.price = price;
        }
        if let Some(ref address) = data.address {
            property.address = address.clone();
        }
        if let Some(ref city) = data.city {
            property.city = city.clone();
        }
        if let Some(ref state) = data.state {
            property.state = state.clone();
        }
        if let Some(bedrooms) = data.bedrooms {
            property.bedrooms = Some(bedrooms);
        }
        if let Some(bathrooms) = data.bathrooms {
            property.bathrooms = Some(bathrooms);
        }
        if let Some(area_sqm) = data.area_sqm {
            property.area_sqm = Some(area_sqm);
        }
        if let Some(is_premium) = data.is_premium {
            property.is_premium = is_premium;
        }
        property.version += 1;
        property.updated_at = Utc::now();
        Ok(Some(property.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| p.id != id);
        Ok(properties.len() < before)
    }

    async fn list(
        &self,
        scope: &PropertyScope,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        let properties = self.properties.lock().unwrap();
        let filtered: Vec<Property> = properties
            .iter()
            .rev()
            .filter(|p| match scope {
                PropertyScope::All => true,
                PropertyScope::OwnedBy(owner) => p.owner_id == *owner,
                PropertyScope::ApprovedOnly => p.status == PropertyStatus::Approved,
            })
            .cloned()
            .collect();
        let total = filtered.len() as u64;
        let items = filtered
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn pending(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let properties = self.properties.lock().unwrap();
        let filtered: Vec<Property> = properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Pending)
            .cloned()
            .collect();
        let total = filtered.len() as u64;
        let items = filtered
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn approve(&self, id: Uuid, admin_id: Uuid) -> AppResult<Option<Property>> {
        let mut properties = self.properties.lock().unwrap();
        let Some(property) = properties
            .iter_mut()
            .find(|p| p.id == id && p.status == PropertyStatus::Pending)
        else {
            return Ok(None);
        };
        property.status = PropertyStatus::Approved;
        property.approved_by = Some(admin_id);
        property.approved_at = Some(Utc::now());
        property.rejected_at = None;
        property.rejection_reason = None;
        property.version += 1;
        property.updated_at = Utc::now();
        Ok(Some(property.clone()))
    }

    async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Option<Property>> {
        let mut properties = self.properties.lock().unwrap();
        let Some(property) = properties
            .iter_mut()
            .find(|p| p.id == id && p.status == PropertyStatus::Pending)
        else {
            return Ok(None);
        };
        property.status = PropertyStatus::Rejected;
        property.rejected_at = Some(Utc::now());
        property.rejection_reason = Some(reason.to_string());
        property.version += 1;
        property.updated_at = Utc::now();
        Ok(Some(property.clone()))
    }

    async fn opportunities(&self, min_price: i64, limit: i64) -> AppResult<Vec<Property>> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| {
                p.status == PropertyStatus::Approved && (p.is_premium || p.price >= min_price)
            })
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.properties.lock().unwrap().len() as u64)
    }

    async fn count_by_status(&self) -> AppResult<Vec<(PropertyStatus, i64)>> {
        let properties = self.properties.lock().unwrap();
        let mut counts = Vec::new();
        for status in [
            PropertyStatus::Pending,
            PropertyStatus::Approved,
            PropertyStatus::Rejected,
            PropertyStatus::Sold,
            PropertyStatus::Rented,
        ] {
            let count = properties.iter().filter(|p| p.status == status).count() as i64;
            if count > 0 {
                counts.push((status, count));
            }
        }
        Ok(counts)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<Property>> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DealStore for MemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Deal>> {
        Ok(self.deals.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn find_live_for_buyer(
        &self,
        property_id: Uuid,
        buyer_id: Uuid,
    ) -> AppResult<Option<Deal>> {
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.property_id == property_id && d.buyer_id == buyer_id && d.status.is_live())
            .cloned())
    }

    async fn create(&self, data: &CreateDeal) -> AppResult<Deal> {
        let mut deals = self.deals.lock().unwrap();
        // Mirrors the partial unique index on live deals.
        if deals.iter().any(|d| {
            d.property_id == data.property_id && d.buyer_id == data.buyer_id && d.status.is_live()
        }) {
            return Err(AppError::conflict(
                "You already have an active deal for this property",
            ));
        }
        let now = Utc::now();
        let deal = Deal {
            id: Uuid::new_v4(),
            property_id: data.property_id,
            buyer_id: data.buyer_id,
            landlord_id: data.landlord_id,
            kind: data.kind,
            amount: data.amount,
            amount_paid: 0,
            status: DealStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_reference: None,
            transaction_id: None,
            notes: data.notes.clone(),
            cancellation_reason: None,
            closed_at: None,
            cancelled_at: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        deals.push(deal.clone());
        Ok(deal)
    }

    async fn list(&self, scope: &DealScope) -> AppResult<Vec<Deal>> {
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|d| match scope {
                DealScope::All => true,
                DealScope::Landlord(landlord) => d.landlord_id == *landlord,
                DealScope::Buyer(buyer) => d.buyer_id == *buyer,
            })
            .cloned()
            .collect())
    }

    async fn confirm(&self, id: Uuid) -> AppResult<Option<Deal>> {
        let mut deals = self.deals.lock().unwrap();
        let Some(deal) = deals
            .iter_mut()
            .find(|d| d.id == id && d.status == DealStatus::Pending)
        else {
            return Ok(None);
        };
        deal.status = DealStatus::Confirmed;
        deal.version += 1;
        deal.updated_at = Utc::now();
        Ok(Some(deal.clone()))
    }

    async fn complete(
        &self,
        id: Uuid,
        payment_reference: Option<&str>,
        transaction_id: Option<&str>,
        property_status: Option<PropertyStatus>,
    ) -> AppResult<Option<Deal>> {
        let mut deals = self.deals.lock().unwrap();
        let Some(deal) = deals
            .iter_mut()
            .find(|d| d.id == id && d.status == DealStatus::Confirmed)
        else {
            return Ok(None);
        };
        let now = Utc::now();
        deal.status = DealStatus::Completed;
        deal.payment_status = PaymentStatus::Paid;
        deal.amount_paid = deal.amount;
        if payment_reference.is_some() {
            deal.payment_reference = payment_reference.map(String::from);
        }
        if transaction_id.is_some() {
            deal.transaction_id = transaction_id.map(String::from);
        }
        deal.closed_at = Some(now);
        deal.version += 1;
        deal.updated_at = now;
        let completed = deal.clone();

        if let Some(status) = property_status {
            let mut properties = self.properties.lock().unwrap();
            if let Some(property) = properties.iter_mut().find(|p| p.id == completed.property_id) {
                property.status = status;
                property.version += 1;
                property.updated_at = now;
            }
        }

        Ok(Some(completed))
    }

    async fn cancel(&self, id: Uuid, reason: Option<&str>) -> AppResult<Option<Deal>> {
        let mut deals = self.deals.lock().unwrap();
        let Some(deal) = deals.iter_mut().find(|d| d.id == id && d.status.is_live()) else {
            return Ok(None);
        };
        deal.status = DealStatus::Cancelled;
        deal.cancellation_reason = reason.map(String::from);
        deal.cancelled_at = Some(Utc::now());
        deal.version += 1;
        deal.updated_at = Utc::now();
        Ok(Some(deal.clone()))
    }
}

#[async_trait]
impl InvestmentStore for MemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Investment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn create(&self, data: &CreateInvestment) -> AppResult<Investment> {
        let now = Utc::now();
        let investment = Investment {
            id: Uuid::new_v4(),
            investor_id: data.investor_id,
            property_id: data.property_id,
            title: data.title.clone(),
            kind: data.kind,
            initial_amount: data.initial_amount,
            current_value: data.initial_amount,
            roi: Investment::derive_roi(data.initial_amount, data.initial_amount),
            expected_annual_return: data.expected_annual_return,
            status: InvestmentStatus::Active,
            returns: Json(vec![]),
            notes: data.notes.clone(),
            closed_at: None,
            close_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.investments.lock().unwrap().push(investment.clone());
        Ok(investment)
    }

    async fn list(&self, scope: &InvestmentScope) -> AppResult<Vec<Investment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|i| match scope {
                InvestmentScope::All => true,
                InvestmentScope::Investor(investor) => i.investor_id == *investor,
            })
            .cloned()
            .collect())
    }

    async fn record_return(
        &self,
        id: Uuid,
        ret: &InvestmentReturn,
    ) -> AppResult<Option<Investment>> {
        let mut investments = self.investments.lock().unwrap();
        let Some(investment) = investments.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        investment.returns.0.push(ret.clone());
        investment.version += 1;
        investment.updated_at = Utc::now();
        Ok(Some(investment.clone()))
    }

    async fn revalue(
        &self,
        id: Uuid,
        current_value: i64,
        roi: f64,
    ) -> AppResult<Option<Investment>> {
        let mut investments = self.investments.lock().unwrap();
        let Some(investment) = investments
            .iter_mut()
            .find(|i| i.id == id && i.status.is_active())
        else {
            return Ok(None);
        };
        investment.current_value = current_value;
        investment.roi = roi;
        investment.version += 1;
        investment.updated_at = Utc::now();
        Ok(Some(investment.clone()))
    }

    async fn close(
        &self,
        id: Uuid,
        status: InvestmentStatus,
        reason: Option<&str>,
    ) -> AppResult<Option<Investment>> {
        let mut investments = self.investments.lock().unwrap();
        let Some(investment) = investments
            .iter_mut()
            .find(|i| i.id == id && i.status.is_active())
        else {
            return Ok(None);
        };
        investment.status = status;
        investment.close_reason = reason.map(String::from);
        investment.closed_at = Some(Utc::now());
        investment.version += 1;
        investment.updated_at = Utc::now();
        Ok(Some(investment.clone()))
    }
}

#[async_trait]
impl NotificationStore for MemStore {
    async fn create(&self, data: &NewNotification) -> AppResult<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            kind: data.kind,
            title: data.title.clone(),
            message: data.message.clone(),
            link: data.link.clone(),
            property_id: data.property_id,
            deal_id: data.deal_id,
            is_read: false,
            created_at: Utc::now(),
        };
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let notifications = self.notifications.lock().unwrap();
        let filtered: Vec<Notification> = notifications
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        let total = filtered.len() as u64;
        let items = filtered
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications.iter_mut().find(|n| n.id == id && n.user_id == user_id) {
            Some(notification) => {
                notification.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<i64> {
        let mut notifications = self.notifications.lock().unwrap();
        let mut changed = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            notification.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }
}

/// All services wired over one shared [`MemStore`].
pub struct Harness {
    pub store: Arc<MemStore>,
    pub users: UserService,
    pub admin_users: AdminUserService,
    pub properties: PropertyService,
    pub deals: DealService,
    pub investments: InvestmentService,
    pub notifications: NotificationService,
    pub stats: AdminStatsService,
}

impl Harness {
    pub fn new() -> Self {
        let store = MemStore::new();
        let evaluator = Arc::new(AccessEvaluator::new());
        let hasher = Arc::new(PasswordHasher::new());
        let auth_config = AuthConfig {
            jwt_secret: "workflow-test-secret".to_string(),
            token_ttl_hours: 1,
            password_min_length: 6,
        };
        let jwt = Arc::new(JwtEncoder::new(&auth_config));
        let emitter: Arc<StoreEmitter> = Arc::new(StoreEmitter::new(store.clone()));

        Self {
            users: UserService::new(store.clone(), hasher, jwt, &auth_config),
            admin_users: AdminUserService::new(store.clone(), evaluator.clone()),
            properties: PropertyService::new(store.clone(), evaluator.clone(), emitter.clone()),
            deals: DealService::new(
                store.clone(),
                store.clone(),
                evaluator.clone(),
                emitter.clone(),
            ),
            investments: InvestmentService::new(store.clone(), store.clone(), evaluator.clone()),
            notifications: NotificationService::new(store.clone()),
            stats: AdminStatsService::new(store.clone(), store.clone(), evaluator),
            store,
        }
    }
}

/// An actor for a seeded user.
pub fn actor_for(user: &User) -> Actor {
    Actor {
        id: user.id,
        role: user.role,
        name: user.name.clone(),
    }
}
