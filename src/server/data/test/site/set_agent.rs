use super::*;

/// Tests assigning and then clearing a guide.
///
/// Expected: Ok(Some(Site)) with the agent set, then with no agent
#[tokio::test]
async fn assigns_and_clears_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::user::create_user_with_role(db, "site_agent").await?;
    let site = factory::site::create_site(db).await?;

    let repo = SiteRepository::new(db);

    let assigned = repo.set_agent(site.site_id, Some(agent.user_id)).await?;
    assert_eq!(assigned.unwrap().agent_id, Some(agent.user_id));

    let cleared = repo.set_agent(site.site_id, None).await?;
    assert_eq!(cleared.unwrap().agent_id, None);

    Ok(())
}

/// Tests that deleting the guide clears the assignment.
///
/// Expected: Ok with agent_id None after the user is removed
#[tokio::test]
async fn clears_agent_when_user_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::user::create_user_with_role(db, "site_agent").await?;
    let site = factory::site::SiteFactory::new(db)
        .agent(agent.user_id)
        .build()
        .await?;

    crate::server::data::user::UserRepository::new(db)
        .delete(agent.user_id)
        .await?;

    let site = SiteRepository::new(db).find_by_id(site.site_id).await?;

    assert_eq!(site.unwrap().agent_id, None);

    Ok(())
}
