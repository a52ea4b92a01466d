use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests listing a researcher's submissions newest first with a limit.
///
/// Expected: Ok with the two newest sites of that researcher only
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;
    let other = factory::user::create_user_with_role(db, "researcher").await?;

    let repo = SiteRepository::new(db);
    repo.create(create_param("Old", Some(researcher.user_id), SiteStatus::Approved))
        .await?;
    let middle = repo
        .create(create_param("Middle", Some(researcher.user_id), SiteStatus::Pending))
        .await?;
    let newest = repo
        .create(create_param("New", Some(researcher.user_id), SiteStatus::Pending))
        .await?;
    repo.create(create_param("Other", Some(other.user_id), SiteStatus::Pending))
        .await?;

    let sites = repo.get_by_contributor(researcher.user_id, Some(2)).await?;

    let ids: Vec<i32> = sites.iter().map(|s| s.site_id).collect();
    assert_eq!(ids, vec![newest.site_id, middle.site_id]);

    let all = repo.get_by_contributor(researcher.user_id, None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests ordering by creation time rather than insertion order.
///
/// Expected: Ok with the site carrying the later timestamp first
#[tokio::test]
async fn orders_by_created_at() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    let later = factory::site::SiteFactory::new(db)
        .created_by(researcher.user_id)
        .build()
        .await?;
    let earlier = factory::site::SiteFactory::new(db)
        .created_by(researcher.user_id)
        .build()
        .await?;

    entity::prelude::Site::update_many()
        .col_expr(
            entity::site::Column::CreatedAt,
            sea_orm::sea_query::Expr::value(Utc::now() - Duration::days(3)),
        )
        .filter(entity::site::Column::SiteId.eq(earlier.site_id))
        .exec(db)
        .await?;

    let sites = SiteRepository::new(db)
        .get_by_contributor(researcher.user_id, None)
        .await?;

    assert_eq!(sites[0].site_id, later.site_id);
    assert_eq!(sites[1].site_id, earlier.site_id);

    Ok(())
}
