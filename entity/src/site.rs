use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub site_id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub entrance_fee: f64,
    pub created_by: Option<i32>,
    pub agent_id: Option<i32>,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Contributor,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AgentId",
        to = "super::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Agent,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
