use std::fmt;

use super::error::RouteError;
use super::route::{is_valid_path, Route};

/// A prefix scope holding routes and nested groups.
///
/// Everything a group contains, directly or through subgroups, has the
/// group's prefix prepended to its path. Adding a group moves it into its
/// parent, so a group always has at most one parent and the nesting is a tree.
/// It also means the prefix can no longer be changed once the group is
/// attached: there is no handle left to call [`Group::set_prefix`] on.
///
/// ```rust
/// use rtr::{get, Group, ResponseRecorder, ResponseSink};
///
/// type Req = http::Request<()>;
///
/// let mut users = Group::new();
/// users
///     .set_prefix("/users")
///     .add_route(get("", |w: &mut ResponseRecorder, _: &Req| {
///         w.write_body(b"List of users")
///     }));
///
/// let api = Group::new().with_prefix("/api").group(users);
/// assert_eq!(api.groups().len(), 1);
/// ```
pub struct Group<W, R> {
    prefix: String,
    routes: Vec<Route<W, R>>,
    groups: Vec<Group<W, R>>,
}

impl<W, R> Group<W, R> {
    /// Empty group with an empty prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            routes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Append a route. Duplicates are kept.
    pub fn add_route(&mut self, route: Route<W, R>) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Append a subgroup.
    pub fn add_group(&mut self, group: Group<W, R>) -> &mut Self {
        self.groups.push(group);
        self
    }

    /// By-value form of [`Group::set_prefix`].
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// By-value form of [`Group::add_route`].
    #[must_use]
    pub fn route(mut self, route: Route<W, R>) -> Self {
        self.add_route(route);
        self
    }

    /// By-value form of [`Group::add_group`].
    #[must_use]
    pub fn group(mut self, group: Group<W, R>) -> Self {
        self.add_group(group);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn routes(&self) -> &[Route<W, R>] {
        &self.routes
    }

    #[must_use]
    pub fn groups(&self) -> &[Group<W, R>] {
        &self.groups
    }

    /// Check this group and everything below it.
    pub(crate) fn validate(&self) -> Result<(), RouteError> {
        if !is_valid_path(&self.prefix) {
            return Err(RouteError::InvalidPrefix {
                prefix: self.prefix.clone(),
            });
        }
        for route in &self.routes {
            route.validate()?;
        }
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }

    /// Number of routes in this group and all subgroups.
    pub(crate) fn route_count(&self) -> usize {
        self.routes.len() + self.groups.iter().map(Group::route_count).sum::<usize>()
    }
}

impl<W, R> Default for Group<W, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, R> fmt::Debug for Group<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("prefix", &self.prefix)
            .field("routes", &self.routes)
            .field("groups", &self.groups)
            .finish()
    }
}
