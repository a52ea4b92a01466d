use crate::{
    model::user::{UserRole, UserStatus},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            user::{CreateUserParam, UserFilter},
            PageParam,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;
mod set_status;

fn create_param(email: &str, role: UserRole) -> CreateUserParam {
    CreateUserParam {
        first_name: "Abebe".to_string(),
        last_name: "Bikila".to_string(),
        email: email.to_string(),
        phone: Some("+251 911 000000".to_string()),
        password_hash: "$argon2id$placeholder".to_string(),
        role,
    }
}
