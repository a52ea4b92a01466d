use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CountryDto {
    pub name: String,
    pub code: String,
    pub dial_code: String,
    pub flag: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CountryListDto {
    /// Country preselected by the phone input.
    pub default_code: String,
    pub countries: Vec<CountryDto>,
}
