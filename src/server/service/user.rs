//! User service for business logic.
//!
//! This module provides the `UserService` for account creation, listing, activation and
//! removal. It validates and normalizes input, hashes passwords and announces new guides
//! to admins, working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        notification::NotificationKind,
        user::{UserRole, UserStatus},
    },
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        model::{
            notification::CreateNotificationParam,
            user::{CreateUserParam, NewUserParam, User, UserFilter},
            PageParam, Paginated,
        },
        util::{
            password::{hash_password, MIN_PASSWORD_LEN},
            phone::normalize_phone,
        },
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after validating and normalizing the input.
    ///
    /// Names are trimmed, the email is trimmed and lower-cased, the phone number is
    /// normalized with its dial code and the password is hashed. Creating a site agent
    /// also sends a `guide_request` notification to admins.
    ///
    /// # Arguments
    /// - `param` - Raw account data
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty name, invalid email or short password
    /// - `Err(AppError::Conflict)` - Email is already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, param: NewUserParam) -> Result<User, AppError> {
        let first_name = param.first_name.trim().to_string();
        let last_name = param.last_name.trim().to_string();
        let email = param.email.trim().to_lowercase();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::BadRequest(
                "First and last name are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if param.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let phone = param
            .phone
            .as_deref()
            .and_then(|number| normalize_phone(number, param.dial_code.as_deref()));

        let user = user_repo
            .create(CreateUserParam {
                first_name,
                last_name,
                email,
                phone,
                password_hash: hash_password(&param.password)?,
                role: param.role,
            })
            .await?;

        tracing::info!("Created {} account {}", user.role.as_str(), user.user_id);

        if user.role == UserRole::SiteAgent {
            NotificationRepository::new(self.db)
                .create(CreateNotificationParam::for_admins(
                    NotificationKind::GuideRequest,
                    "New guide added",
                    format!("{} joined as a site agent", user.full_name()),
                ))
                .await?;
        }

        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves users ordered by id with pagination.
    pub async fn get_all_users(
        &self,
        filter: UserFilter,
        page: PageParam,
    ) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(&filter, page)
            .await?;

        Ok(Paginated::new(users, total, page))
    }

    /// Activates or deactivates an account.
    ///
    /// # Arguments
    /// - `actor_id` - Admin performing the change
    /// - `user_id` - Account to change
    /// - `status` - New status
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Admin tried to deactivate their own account
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_status(
        &self,
        actor_id: i32,
        user_id: i32,
        status: UserStatus,
    ) -> Result<User, AppError> {
        if actor_id == user_id && status == UserStatus::Inactive {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_status(user_id, status).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(
            "User {} set account {} to {}",
            actor_id,
            user_id,
            status.as_str()
        );

        self.get_user(user_id).await
    }

    /// Deletes an account.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Admin tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_user(&self, actor_id: i32, user_id: i32) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted account {}", actor_id, user_id);

        Ok(())
    }

    /// Creates the first admin account when none exists.
    ///
    /// # Arguments
    /// - `email` - Admin login email
    /// - `password` - Admin password
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account created
    /// - `Ok(None)` - An admin already exists, nothing changed
    /// - `Err(AppError)` - Validation or database error
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let admin = self
            .create_user(NewUserParam {
                first_name: "Portal".to_string(),
                last_name: "Admin".to_string(),
                email: email.to_string(),
                phone: None,
                dial_code: None,
                password: password.to_string(),
                role: UserRole::Admin,
            })
            .await?;

        Ok(Some(admin))
    }
}
