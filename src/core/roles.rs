//! Role identity resolution and role-set classification
//!
//! Role identifiers are opaque tokens issued by the league backend; role
//! names are a separate string space used by the session provider. This
//! module labels the former for display and classifies sets of the latter
//! into coarse tiers. It never grants or denies access.

use serde::{Deserialize, Serialize};

/// Privilege display names for known role identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    Player,
    Staff,
    ClubRep,
    Director,
    SuperDirector,
    Superuser,
    /// Unrecognized or missing role identifier. A normal result, not an error.
    Unknown,
}

impl Privilege {
    /// Get the human-readable display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::Player => "Player",
            Privilege::Staff => "Staff",
            Privilege::ClubRep => "Club Rep",
            Privilege::Director => "Director",
            Privilege::SuperDirector => "Super Director",
            Privilege::Superuser => "Superuser",
            Privilege::Unknown => "Unknown",
        }
    }

    /// Resolve a backend role identifier to its privilege display name.
    ///
    /// Total and pure: every input, including a missing one, maps to exactly
    /// one variant. Tokens are compared by exact, case-sensitive equality.
    pub fn resolve(role_id: Option<&str>) -> Privilege {
        match role_id {
            Some("player") => Privilege::Player,
            Some("staff") => Privilege::Staff,
            Some("club_rep") => Privilege::ClubRep,
            Some("director") => Privilege::Director,
            Some("super_director") => Privilege::SuperDirector,
            Some("superuser") => Privilege::Superuser,
            _ => Privilege::Unknown,
        }
    }

    /// Known role identifiers with their privileges, in display order
    pub fn known() -> &'static [(&'static str, Privilege)] {
        &[
            ("player", Privilege::Player),
            ("staff", Privilege::Staff),
            ("club_rep", Privilege::ClubRep),
            ("director", Privilege::Director),
            ("super_director", Privilege::SuperDirector),
            ("superuser", Privilege::Superuser),
        ]
    }
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role names that mark an administrator-tier session
pub const ADMIN_TIER: &[&str] = &["Superuser", "Director", "SuperDirector"];

/// Role names that mark a team-member-tier session
pub const TEAM_MEMBER_TIER: &[&str] = &["Staff", "Family", "Player"];

/// Check whether a role-name set contains an administrator-tier role.
///
/// Order-independent and duplicate-insensitive; an empty set is not admin.
pub fn is_admin_tier<S: AsRef<str>>(roles: &[S]) -> bool {
    roles.iter().any(|r| ADMIN_TIER.contains(&r.as_ref()))
}

/// Check whether a role-name set contains a team-member-tier role.
pub fn is_team_member_tier<S: AsRef<str>>(roles: &[S]) -> bool {
    roles.iter().any(|r| TEAM_MEMBER_TIER.contains(&r.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tokens() {
        assert_eq!(Privilege::resolve(Some("player")), Privilege::Player);
        assert_eq!(Privilege::resolve(Some("staff")), Privilege::Staff);
        assert_eq!(Privilege::resolve(Some("club_rep")), Privilege::ClubRep);
        assert_eq!(Privilege::resolve(Some("director")), Privilege::Director);
        assert_eq!(
            Privilege::resolve(Some("super_director")),
            Privilege::SuperDirector
        );
        assert_eq!(Privilege::resolve(Some("superuser")), Privilege::Superuser);
    }

    #[test]
    fn test_resolve_unknown_is_a_normal_result() {
        assert_eq!(Privilege::resolve(Some("referee")), Privilege::Unknown);
        assert_eq!(Privilege::resolve(Some("")), Privilege::Unknown);
        assert_eq!(Privilege::resolve(None), Privilege::Unknown);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(Privilege::resolve(Some("Player")), Privilege::Unknown);
        assert_eq!(Privilege::resolve(Some("SUPERUSER")), Privilege::Unknown);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Privilege::ClubRep.to_string(), "Club Rep");
        assert_eq!(Privilege::SuperDirector.to_string(), "Super Director");
        assert_eq!(Privilege::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_known_covers_every_non_unknown_variant() {
        let known = Privilege::known();
        assert_eq!(known.len(), 6);
        for (id, privilege) in known {
            assert_eq!(Privilege::resolve(Some(id)), *privilege);
            assert_ne!(*privilege, Privilege::Unknown);
        }
    }

    #[test]
    fn test_admin_tier() {
        assert!(is_admin_tier(&["Director"]));
        assert!(is_admin_tier(&["SuperDirector"]));
        assert!(is_admin_tier(&["Superuser"]));
        assert!(is_admin_tier(&["Staff", "Director"]));
        assert!(!is_admin_tier(&["Staff"]));
        assert!(!is_admin_tier::<&str>(&[]));
    }

    #[test]
    fn test_team_member_tier() {
        assert!(is_team_member_tier(&["Player"]));
        assert!(is_team_member_tier(&["Family"]));
        assert!(is_team_member_tier(&["Staff"]));
        assert!(!is_team_member_tier(&["Director"]));
        assert!(!is_team_member_tier::<&str>(&[]));
    }

    #[test]
    fn test_tiers_ignore_duplicates_and_order() {
        assert!(is_admin_tier(&["Player", "Director", "Director"]));
        assert_eq!(
            is_team_member_tier(&["Family", "Staff"]),
            is_team_member_tier(&["Staff", "Family"])
        );
    }

    #[test]
    fn test_tier_names_are_not_role_ids() {
        // The classifier's role names and the resolver's role identifiers
        // are separate string spaces.
        assert_eq!(Privilege::resolve(Some("SuperDirector")), Privilege::Unknown);
        assert!(!is_admin_tier(&["super_director"]));
    }
}
