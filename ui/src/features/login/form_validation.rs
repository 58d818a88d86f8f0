/// Instances that are never accepted as a login target.
pub const BANNED_INSTANCES: &[&str] = &["wolfballs.com"];

/// Fixed set of instance names rejected by exact match.
#[derive(Debug, Clone, PartialEq)]
pub struct Denylist(Vec<String>);

impl Denylist {
    pub fn new<I, S>(instances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(instances.into_iter().map(Into::into).collect())
    }

    /// Exact match only: no trimming, no case folding.
    pub fn contains(&self, instance: &str) -> bool {
        self.0.iter().any(|banned| banned == instance)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(BANNED_INSTANCES.iter().copied())
    }
}

/// Validates that all login fields are filled and the instance is allowed
pub fn validate_login_fields(
    instance: &str,
    identifier: &str,
    secret: &str,
    denylist: &Denylist,
) -> bool {
    !instance.is_empty()
        && !identifier.is_empty()
        && !secret.is_empty()
        && !denylist.contains(instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_fields() {
        let denylist = Denylist::default();

        // Should be false with empty fields
        assert!(!validate_login_fields("", "", "", &denylist));

        // Should be true with all fields filled
        assert!(validate_login_fields("lemmy.ml", "alice", "pw", &denylist));

        // Any single empty field blocks the form
        assert!(!validate_login_fields("", "alice", "pw", &denylist));
        assert!(!validate_login_fields("lemmy.ml", "", "pw", &denylist));
        assert!(!validate_login_fields("lemmy.ml", "alice", "", &denylist));
    }

    #[test]
    fn test_banned_instance_is_invalid() {
        let denylist = Denylist::default();
        assert!(!validate_login_fields("wolfballs.com", "a", "b", &denylist));
    }

    #[test]
    fn test_denylist_is_exact_match() {
        let denylist = Denylist::default();
        assert!(denylist.contains("wolfballs.com"));
        assert!(!denylist.contains("Wolfballs.com"));
        assert!(!denylist.contains(" wolfballs.com"));
        assert!(!denylist.contains("sub.wolfballs.com"));
    }

    #[test]
    fn test_validity_matches_rule_for_all_combinations() {
        let denylist = Denylist::new(["banned.example"]);
        let instances = ["", "lemmy.ml", "banned.example"];
        let values = ["", "x", "  "];

        for instance in instances {
            for identifier in values {
                for secret in values {
                    let expected = !instance.is_empty()
                        && !identifier.is_empty()
                        && !secret.is_empty()
                        && instance != "banned.example";
                    assert_eq!(
                        validate_login_fields(instance, identifier, secret, &denylist),
                        expected,
                        "instance={:?} identifier={:?} secret={:?}",
                        instance,
                        identifier,
                        secret
                    );
                }
            }
        }
    }
}
