use chrono::{Duration, Utc};

use crate::{
    model::site::SiteStatus,
    server::{
        data::site::SiteRepository,
        error::AppError,
        model::{site::CreateSiteParam, PageParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod create;
mod get_by_contributor;
mod get_by_status;
mod set_agent;
mod set_status;

fn create_param(name: &str, created_by: Option<i32>, status: SiteStatus) -> CreateSiteParam {
    CreateSiteParam {
        name: name.to_string(),
        description: "Rock-hewn churches".to_string(),
        location: "Amhara".to_string(),
        image_url: None,
        entrance_fee: 50.0,
        created_by,
        agent_id: None,
        status,
    }
}
