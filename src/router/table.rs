//! Compiled route table.
//!
//! The registration tree is flattened once into a list of routes with their
//! effective paths, in pre-order with a group's own routes before its
//! subgroups. That order is the tie-breaker: for each (method, effective path)
//! only the first entry is reachable by lookup.
//!
//! Lookups go through a map from effective path to the methods registered for
//! it, so matching costs one hash of the request path plus a scan of at most
//! seven methods, regardless of how many routes are registered.

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

use super::group::Group;
use super::route::{Handler, Route};

/// Every supported method fits inline.
pub type MethodVec = SmallVec<[Method; 7]>;

/// A route with its effective path resolved.
pub(crate) struct CompiledRoute<W, R> {
    pub(crate) method: Method,
    pub(crate) path: Arc<str>,
    pub(crate) handler: Handler<W, R>,
}

/// First route index per method for one effective path, in first-registration
/// order.
#[derive(Default)]
struct PathSlot {
    methods: SmallVec<[(Method, usize); 7]>,
}

pub(crate) struct RouteTable<W, R> {
    entries: Vec<CompiledRoute<W, R>>,
    by_path: HashMap<Arc<str>, PathSlot>,
}

impl<W, R> RouteTable<W, R> {
    /// Flatten a router's top-level routes and groups.
    pub(crate) fn build(routes: &[Route<W, R>], groups: &[Group<W, R>]) -> Self {
        let mut entries = Vec::new();
        collect("", routes, groups, &mut entries);

        let mut by_path: HashMap<Arc<str>, PathSlot> = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let slot = by_path.entry(Arc::clone(&entry.path)).or_default();
            if !slot.methods.iter().any(|(m, _)| *m == entry.method) {
                slot.methods.push((entry.method.clone(), index));
            }
        }

        Self { entries, by_path }
    }

    /// First route registered for exactly `method` and `path`.
    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(usize, &CompiledRoute<W, R>)> {
        let slot = self.by_path.get(path)?;
        let (_, index) = slot.methods.iter().find(|(m, _)| m == method)?;
        self.entries.get(*index).map(|entry| (*index, entry))
    }

    /// Methods registered for `path`, in first-registration order.
    pub(crate) fn allowed_methods(&self, path: &str) -> MethodVec {
        self.by_path
            .get(path)
            .map(|slot| slot.methods.iter().map(|(m, _)| m.clone()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn entries(&self) -> &[CompiledRoute<W, R>] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn collect<W, R>(
    base: &str,
    routes: &[Route<W, R>],
    groups: &[Group<W, R>],
    out: &mut Vec<CompiledRoute<W, R>>,
) {
    for route in routes {
        out.push(CompiledRoute {
            method: route.method().clone(),
            path: Arc::from(join_path(base, route.path())),
            handler: Arc::clone(route.handler()),
        });
    }
    for group in groups {
        let base = join_path(base, group.prefix());
        collect(&base, group.routes(), group.groups(), out);
    }
}

/// Append `segment` to `base`, skipping empty components.
///
/// No separator is inserted: `/api` + `/status` is `/api/status`, and
/// `/users` + `` stays `/users`. A slash shared by the seam is kept once, so
/// a `/` prefix never yields `//`.
pub(crate) fn join_path(base: &str, segment: &str) -> String {
    let segment = match (base.ends_with('/'), segment.strip_prefix('/')) {
        (true, Some(rest)) => rest,
        _ => segment,
    };
    let mut path = String::with_capacity(base.len() + segment.len());
    path.push_str(base);
    path.push_str(segment);
    path
}
