//! User statistics shared by the home and about pages.

use std::collections::HashSet;

use crate::store::{RoleCount, User};

/// Label used when there is no role to report.
pub const NO_ROLE: &str = "N/A";

#[must_use]
pub fn active_count(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_active).count()
}

#[must_use]
pub fn inactive_count(users: &[User]) -> usize {
    users.iter().filter(|user| !user.is_active).count()
}

#[must_use]
pub fn distinct_role_count(users: &[User]) -> usize {
    users
        .iter()
        .map(|user| user.role.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Share of active users in percent. Zero for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn active_percentage(users: &[User]) -> f64 {
    if users.is_empty() {
        return 0.0;
    }
    active_count(users) as f64 / users.len() as f64 * 100.0
}

/// `active_percentage` rounded to the nearest whole percent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn active_percentage_rounded(users: &[User]) -> u32 {
    active_percentage(users).round() as u32
}

/// Role with the highest count. The earliest role wins a tie.
#[must_use]
pub fn most_common_role(roles: &[RoleCount]) -> &str {
    let mut best: Option<&RoleCount> = None;
    for role in roles {
        if best.is_none_or(|current| role.count > current.count) {
            best = Some(role);
        }
    }
    best.map_or(NO_ROLE, |role| role.name.as_str())
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
