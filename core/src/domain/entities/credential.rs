//! Credentials and the role/permission graph consumed from the user store.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use ids_shared::config::SeedUserConfig;

/// Roles mapped to the permission names they grant
///
/// Ordered maps keep scope derivation independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGraph {
    roles: BTreeMap<String, BTreeSet<String>>,
}

impl RoleGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role with its permissions, merging into an existing role of the same name
    pub fn with_role<I, S>(mut self, role: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_role(role, permissions);
        self
    }

    /// In-place variant of [`RoleGraph::with_role`]
    pub fn add_role<I, S>(&mut self, role: impl Into<String>, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles
            .entry(role.into())
            .or_default()
            .extend(permissions.into_iter().map(Into::into));
    }

    /// Role names in scope order
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Builds the scope claim
    ///
    /// Each role contributes `ROLE_<name>` followed by its bare permission names.
    /// A permission granted by two roles is listed under both.
    pub fn scope(&self) -> String {
        let mut entries: Vec<String> = Vec::new();
        for (role, permissions) in &self.roles {
            entries.push(format!("ROLE_{}", role));
            entries.extend(permissions.iter().cloned());
        }
        entries.join(" ")
    }
}

impl<R, P> FromIterator<(R, P)> for RoleGraph
where
    R: Into<String>,
    P: IntoIterator,
    P::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (R, P)>>(iter: T) -> Self {
        let mut graph = RoleGraph::new();
        for (role, permissions) in iter {
            graph.add_role(role, permissions);
        }
        graph
    }
}

/// A user's login credential as owned by the external user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique, case-sensitive username
    pub username: String,

    /// Stored password hash (bcrypt)
    pub password_hash: String,

    /// Current role/permission assignments
    pub roles: RoleGraph,
}

impl Credential {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, roles: RoleGraph) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            roles,
        }
    }

    /// Scope string for tokens issued to this user
    pub fn scope(&self) -> String {
        self.roles.scope()
    }
}

impl From<&SeedUserConfig> for Credential {
    fn from(seed: &SeedUserConfig) -> Self {
        let roles = seed.roles.iter().fold(RoleGraph::new(), |graph, role| {
            graph.with_role(role.name.clone(), role.permissions.iter().cloned())
        });
        Self::new(seed.username.clone(), seed.password_hash.clone(), roles)
    }
}
