use crate::routing::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    pub fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}
