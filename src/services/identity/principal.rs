/*
 * Responsibility
 * - 認証済み主体 (Principal) と Claim の型
 * - claim は付与された順序 (attachment order) のまま保持する
 * - 検証済み JWT payload → Principal への平坦化
 *
 * Notes
 * - 検索は線形走査。claim 数は小さいので index は持たない
 */
use serde_json::{Map, Value};

/// A typed `(type, value)` assertion about an authenticated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// The authenticated entity of a request, represented by its claims.
///
/// Claims keep the order in which they were attached; lookups by type
/// return matches in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    claims: Vec<Claim>,
}

impl Principal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        Self {
            claims: claims.into_iter().collect(),
        }
    }

    /// Flatten a verified JWT payload into claims, keeping payload order.
    ///
    /// - string: one claim
    /// - array: one claim per element (non-strings are serialized as JSON)
    /// - number / bool: textual form
    /// - object: serialized JSON
    /// - null: skipped
    pub fn from_jwt_claims(payload: Map<String, Value>) -> Self {
        let mut principal = Self::new();
        for (claim_type, value) in payload {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(v) = claim_value(item) {
                            principal.push(Claim::new(claim_type.clone(), v));
                        }
                    }
                }
                other => {
                    if let Some(v) = claim_value(other) {
                        principal.push(Claim::new(claim_type, v));
                    }
                }
            }
        }
        principal
    }

    /// Attach a claim after all existing ones.
    pub fn push(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    pub fn find_all<'a>(&'a self, claim_type: &str) -> impl Iterator<Item = &'a Claim> {
        self.claims.iter().filter(move |c| c.claim_type == claim_type)
    }
}

fn claim_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
