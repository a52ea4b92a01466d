//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserRole, UserStatus},
    server::{error::AppError, util::parse::parse_enum},
};

/// Portal account of any role.
///
/// The password hash is kept on the domain model for login verification and never
/// leaves the server through `into_dto`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidEnumValue))` - Unknown role or status stored
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            role: parse_enum("users.role", entity.role, UserRole::parse)?,
            status: parse_enum("users.status", entity.status, UserStatus::parse)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Parameters for inserting a user.
///
/// `password_hash` is already hashed; `email` is already normalized.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

/// Raw user input before validation and hashing.
#[derive(Debug, Clone)]
pub struct NewUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dial_code: Option<String>,
    pub password: String,
    pub role: UserRole,
}

impl NewUserParam {
    pub fn from_dto(dto: crate::model::user::CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            dial_code: dto.dial_code,
            password: dto.password,
            role: dto.role,
        }
    }

    /// Visitor self-registration, the role is always `Visitor`.
    pub fn from_register_dto(dto: crate::model::user::RegisterVisitorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            dial_code: dto.dial_code,
            password: dto.password,
            role: UserRole::Visitor,
        }
    }
}

/// Filter for paginated user listings.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
}
