//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. It handles user
//! creation, lookups, role-filtered counting and pagination, and account status changes.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    model::user::{UserRole, UserStatus},
    server::{
        error::AppError,
        model::{
            user::{CreateUserParam, User, UserFilter},
            PageParam,
        },
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with status `active`.
    ///
    /// # Arguments
    /// - `param` - Validated user fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email is already registered
    /// - `Err(AppError::DbErr)` - Any other insert failure
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            status: ActiveValue::Set(UserStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("Email is already registered".to_string())
            }
            _ => AppError::from(err),
        })?;

        User::from_entity(entity)
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored role/status
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by email.
    ///
    /// Emails are stored lowercase, callers pass a normalized address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether an account already uses the given email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts users, optionally restricted to a role and/or a status.
    ///
    /// Backs the home page counters (`site_agent` + `active` guides, all visitors) and
    /// the admin dashboard total.
    pub async fn count(
        &self,
        role: Option<UserRole>,
        status: Option<UserStatus>,
    ) -> Result<u64, AppError> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }
        if let Some(status) = status {
            query = query.filter(entity::user::Column::Status.eq(status.as_str()));
        }

        Ok(query.count(self.db).await?)
    }

    /// Checks if any admin account exists.
    ///
    /// Used at startup to decide whether to create the bootstrap admin.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(self.count(Some(UserRole::Admin), None).await? > 0)
    }

    /// Gets users with pagination, ordered by id.
    ///
    /// # Arguments
    /// - `filter` - Optional role restriction
    /// - `page` - Zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total matching row count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        filter: &UserFilter,
        page: PageParam,
    ) -> Result<(Vec<User>, u64), AppError> {
        let mut query = entity::prelude::User::find().order_by_asc(entity::user::Column::UserId);

        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query.paginate(self.db, page.per_page.max(1));
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;

        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Sets the account status of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No user with that id
    pub async fn set_status(&self, user_id: i32, status: UserStatus) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(entity::user::Column::Status, Expr::value(status.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user.
    ///
    /// Sites the user contributed or guides keep existing with the reference cleared.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
