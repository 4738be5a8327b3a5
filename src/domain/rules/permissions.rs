//! Permission predicates
//!
//! Total and order-independent; no overlap is `false`, never an error.

use crate::domain::entities::Role;

/// True if `item` is an element of `set`
pub fn contains<S: AsRef<str>>(set: &[S], item: &str) -> bool {
    set.iter().any(|s| s.as_ref() == item)
}

/// True if any of `candidates` is an element of `set`
pub fn contains_any<S: AsRef<str>, C: AsRef<str>>(set: &[S], candidates: &[C]) -> bool {
    candidates.iter().any(|c| contains(set, c.as_ref()))
}

/// Exact (case-sensitive) name match
pub fn find_role_by_name<'a>(roles: &'a [Role], name: &str) -> Option<&'a Role> {
    roles.iter().find(|r| r.name == name)
}

pub fn find_role_by_id<'a>(roles: &'a [Role], id: &str) -> Option<&'a Role> {
    roles.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let set = vec!["a".to_string(), "b".to_string()];
        assert!(contains(&set, "a"));
        assert!(!contains(&set, "c"));
        assert!(!contains::<String>(&[], "a"));
    }

    #[test]
    fn test_contains_any_is_order_independent() {
        let admins = ["A1", "A2"];
        assert!(contains_any(&admins, &["X", "A2"]));
        assert!(contains_any(&["X", "A2"], &admins));
        assert!(!contains_any(&admins, &["X", "Y"]));
        assert!(!contains_any::<&str, &str>(&admins, &[]));
        assert!(!contains_any::<&str, &str>(&[], &["A1"]));
    }

    #[test]
    fn test_find_role() {
        let roles = vec![Role::new("R1", "He/Him"), Role::new("R2", "She/Her")];
        assert_eq!(find_role_by_name(&roles, "She/Her").map(|r| r.id.as_str()), Some("R2"));
        assert!(find_role_by_name(&roles, "she/her").is_none());
        assert_eq!(find_role_by_id(&roles, "R1").map(|r| r.name.as_str()), Some("He/Him"));
        assert!(find_role_by_id(&roles, "R3").is_none());
    }
}
