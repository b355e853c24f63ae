//! Reporter identity as seen by the messaging platform.

use crate::utils::text::sanitize_field;

/// Profile of the user who sent a command. Only `id` is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl UserProfile {
    /// First and last name joined by a space, skipping missing or blank parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Best-effort display name: full name, then `@handle`, then the numeric id.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        let name = if !full.is_empty() {
            full
        } else if let Some(handle) = self.username.as_deref().filter(|h| !h.trim().is_empty()) {
            format!("@{}", handle.trim())
        } else {
            self.id.to_string()
        };

        sanitize_field(&name)
    }
}

/// Display name for an optional profile; no profile yields an empty name.
pub fn display_name(user: Option<&UserProfile>) -> String {
    user.map(UserProfile::display_name).unwrap_or_default()
}
