//! Well-known role labels and the authority-tag mapping.
//!
//! Role labels are stored lowercase in the `user_roles` table; the seed data
//! lives in `20260815000001_create_user_roles_table.sql`. Authorization
//! decisions never compare raw labels -- they compare authority tags produced
//! by [`authority_tag`].

/// Role label for administrators.
pub const ROLE_ADMIN: &str = "admin";
/// Role label for general (non-admin) users.
pub const ROLE_GENERAL: &str = "general";

/// Authority tag granted to administrators.
pub const AUTHORITY_ADMIN: &str = "ROLE_ADMIN";

/// Map a stored role label to its standardized authority tag.
///
/// The tag is `"ROLE_"` followed by the upper-cased label, so `"admin"`
/// becomes `"ROLE_ADMIN"` and `"general"` becomes `"ROLE_GENERAL"`.
pub fn authority_tag(role_label: &str) -> String {
    format!("ROLE_{}", role_label.to_uppercase())
}
