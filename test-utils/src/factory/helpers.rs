//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a visitor, an approved site and a completed payment by that visitor.
///
/// # Returns
/// - `Ok((visitor, site, payment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_payment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::site::Model,
        entity::payment::Model,
    ),
    DbErr,
> {
    let visitor = crate::factory::user::UserFactory::new(db)
        .role("visitor")
        .build()
        .await?;
    let site = crate::factory::site::create_site(db).await?;
    let payment = crate::factory::payment::create_payment(db, visitor.user_id, site.site_id).await?;

    Ok((visitor, site, payment))
}
