use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DbErr;

use crate::server::model::user::Role;

/// Parses a role value read from the `user.role` column.
///
/// # Arguments
/// - `value` - Stored role such as `ROLE_MANAGER`
///
/// # Returns
/// - `Ok(Role)` - Known stored value
/// - `Err(DbErr::Custom)` - The column holds a value outside the four known roles
pub fn parse_role(value: &str) -> Result<Role, DbErr> {
    Role::from_stored(value).ok_or_else(|| DbErr::Custom(format!("Unknown stored role: {value}")))
}

/// Extracts the first `id=N` reference from free text, case-insensitively.
///
/// Whitespace around `=` is allowed. Returns `None` when no reference is present or the
/// number does not fit in an `i32`.
pub fn parse_id_reference(text: &str) -> Option<i32> {
    static ID_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)id\s*=\s*(\d+)").expect("valid regex"));

    ID_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}
