//! Utility functions

/// Masks the local part of an email so it can be written to logs.
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        match local.chars().count() {
            0 => format!("***{}", domain),
            1 | 2 => format!("{}***{}", local.chars().take(1).collect::<String>(), domain),
            _ => format!("{}***{}", local.chars().take(2).collect::<String>(), domain),
        }
    } else {
        "***".to_string()
    }
}

/// Trims and lower-cases an email so lookups and uniqueness checks agree.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
