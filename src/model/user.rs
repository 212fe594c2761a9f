use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as exposed to administrators. The password hash is never serialized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Stored role value, e.g. `ROLE_MANAGER`.
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    /// One of `admin`, `manager`, `processing`; anything else maps to front-desk.
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReassignQuery {
    pub reassign_to_user_id: i32,
}
