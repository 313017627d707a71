//! User id / role resolution over a request's claim set.
//!
//! Both lookups are pure reads of the supplied `Principal`.
//! Which claim types are consulted, and whether a missing principal is an error,
//! is decided by configuration (`IdentityExtractor::new`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Principal;

pub const DEFAULT_SUBJECT_CLAIM: &str = "https://hip.cs.upb.de/sub";
pub const DEFAULT_ROLES_CLAIM: &str = "https://hip.cs.upb.de/roles";

/// How `user_id` behaves when the request carries no authenticated principal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentityMode {
    /// Absence is a normal outcome (anonymous read access).
    #[default]
    Tolerant,
    /// Absence is `IdentityError::AuthenticationMissing`.
    Strict,
}

impl FromStr for IdentityMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerant" => Ok(Self::Tolerant),
            "strict" => Ok(Self::Strict),
            _ => Err(()),
        }
    }
}

impl fmt::Display for IdentityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerant => f.write_str("tolerant"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    #[error("no authenticated principal on the request")]
    AuthenticationMissing,
}

#[derive(Debug, Clone)]
pub struct IdentityExtractor {
    subject_claim_type: String,
    role_claim_type: String,
    mode: IdentityMode,
}

impl Default for IdentityExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT_CLAIM, DEFAULT_ROLES_CLAIM, IdentityMode::default())
    }
}

impl IdentityExtractor {
    pub fn new(
        subject_claim_type: impl Into<String>,
        role_claim_type: impl Into<String>,
        mode: IdentityMode,
    ) -> Self {
        Self {
            subject_claim_type: subject_claim_type.into(),
            role_claim_type: role_claim_type.into(),
            mode,
        }
    }

    pub fn with_mode(mut self, mode: IdentityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    pub fn subject_claim_type(&self) -> &str {
        &self.subject_claim_type
    }

    pub fn role_claim_type(&self) -> &str {
        &self.role_claim_type
    }

    /// Value of the first subject claim, in attachment order.
    ///
    /// A principal without any claims counts as "not authenticated".
    /// A principal that has claims but no subject claim yields `Ok(None)` in both modes.
    pub fn user_id<'a>(
        &self,
        principal: Option<&'a Principal>,
    ) -> Result<Option<&'a str>, IdentityError> {
        let Some(principal) = principal.filter(|p| !p.is_empty()) else {
            return match self.mode {
                IdentityMode::Tolerant => Ok(None),
                IdentityMode::Strict => Err(IdentityError::AuthenticationMissing),
            };
        };

        Ok(principal
            .find_first(&self.subject_claim_type)
            .map(|c| c.value.as_str()))
    }

    /// Every role claim value, in attachment order. Empty when there are none.
    pub fn user_roles<'a>(&self, principal: Option<&'a Principal>) -> Vec<&'a str> {
        principal
            .map(|p| {
                p.find_all(&self.role_claim_type)
                    .map(|c| c.value.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identity::Claim;
    use proptest::prelude::*;

    fn sample() -> Principal {
        Principal::from_claims([
            Claim::new(DEFAULT_SUBJECT_CLAIM, "u1"),
            Claim::new(DEFAULT_ROLES_CLAIM, "editor"),
            Claim::new(DEFAULT_ROLES_CLAIM, "admin"),
            Claim::new(DEFAULT_SUBJECT_CLAIM, "u2"),
        ])
    }

    #[test]
    fn first_subject_and_ordered_roles() {
        let extractor = IdentityExtractor::default();
        let p = sample();

        assert_eq!(extractor.user_id(Some(&p)), Ok(Some("u1")));
        assert_eq!(extractor.user_roles(Some(&p)), ["editor", "admin"]);
    }

    #[test]
    fn lookups_do_not_touch_the_claim_set() {
        let extractor = IdentityExtractor::default();
        let p = sample();
        let before = p.clone();

        let _ = extractor.user_id(Some(&p));
        let _ = extractor.user_roles(Some(&p));

        assert_eq!(p, before);
    }

    #[test]
    fn tolerant_mode_returns_none_without_principal() {
        let extractor = IdentityExtractor::default();
        let empty = Principal::new();

        assert_eq!(extractor.user_id(None), Ok(None));
        assert_eq!(extractor.user_id(Some(&empty)), Ok(None));
    }

    #[test]
    fn strict_mode_signals_authentication_missing() {
        let extractor = IdentityExtractor::default().with_mode(IdentityMode::Strict);
        let empty = Principal::new();

        assert_eq!(
            extractor.user_id(None),
            Err(IdentityError::AuthenticationMissing)
        );
        assert_eq!(
            extractor.user_id(Some(&empty)),
            Err(IdentityError::AuthenticationMissing)
        );
    }

    #[test]
    fn strict_mode_with_claims_but_no_subject_is_none() {
        let extractor = IdentityExtractor::default().with_mode(IdentityMode::Strict);
        let p = Principal::from_claims([Claim::new(DEFAULT_ROLES_CLAIM, "admin")]);

        assert_eq!(extractor.user_id(Some(&p)), Ok(None));
    }

    #[test]
    fn roles_are_total() {
        let extractor = IdentityExtractor::default().with_mode(IdentityMode::Strict);
        let p = Principal::from_claims([Claim::new(DEFAULT_SUBJECT_CLAIM, "u1")]);

        assert!(extractor.user_roles(None).is_empty());
        assert!(extractor.user_roles(Some(&Principal::new())).is_empty());
        assert!(extractor.user_roles(Some(&p)).is_empty());
    }

    #[test]
    fn custom_claim_types_are_honoured() {
        let extractor = IdentityExtractor::new("sub", "roles", IdentityMode::Tolerant);
        let p = Principal::from_claims([
            Claim::new(DEFAULT_SUBJECT_CLAIM, "namespaced"),
            Claim::new("sub", "plain"),
            Claim::new("roles", "reader"),
        ]);

        assert_eq!(extractor.user_id(Some(&p)), Ok(Some("plain")));
        assert_eq!(extractor.user_roles(Some(&p)), ["reader"]);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("STRICT".parse::<IdentityMode>(), Ok(IdentityMode::Strict));
        assert_eq!(" tolerant ".parse::<IdentityMode>(), Ok(IdentityMode::Tolerant));
        assert!("lenient".parse::<IdentityMode>().is_err());
    }

    fn claim_strategy() -> impl Strategy<Value = Claim> {
        (
            prop::sample::select(vec!["sub", "roles", "email"]),
            "[a-z0-9]{1,8}",
        )
            .prop_map(|(t, v)| Claim::new(t, v))
    }

    proptest! {
        #[test]
        fn user_id_is_first_matching_claim(claims in prop::collection::vec(claim_strategy(), 1..16)) {
            let extractor = IdentityExtractor::new("sub", "roles", IdentityMode::Strict);
            let p = Principal::from_claims(claims.clone());

            let expected = claims.iter().find(|c| c.claim_type == "sub").map(|c| c.value.as_str());
            prop_assert_eq!(extractor.user_id(Some(&p)), Ok(expected));
        }

        #[test]
        fn user_roles_are_all_matches_in_order(claims in prop::collection::vec(claim_strategy(), 0..16)) {
            let extractor = IdentityExtractor::new("sub", "roles", IdentityMode::Tolerant);
            let p = Principal::from_claims(claims.clone());

            let expected: Vec<&str> = claims
                .iter()
                .filter(|c| c.claim_type == "roles")
                .map(|c| c.value.as_str())
                .collect();
            prop_assert_eq!(extractor.user_roles(Some(&p)), expected);
        }
    }
}
