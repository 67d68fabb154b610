use crate::{
    auth::session::AuthSession,
    routing::{navigator::Navigator, route::Route},
};

use super::models::nav_link::NavLink;

pub const BRAND: &str = "Rentamigo";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navbar {
    is_menu_open: bool,
    is_auth_dropdown_open: bool,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn is_auth_dropdown_open(&self) -> bool {
        self.is_auth_dropdown_open
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn toggle_auth_dropdown(&mut self) {
        self.is_auth_dropdown_open = !self.is_auth_dropdown_open;
    }

    /// Following a link from the mobile menu closes it.
    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    pub fn links(&self, auth: &dyn AuthSession) -> Vec<NavLink> {
        let mut links = vec![
            NavLink::new("Home", Route::Home),
            NavLink::new("Create a blog", Route::Create),
        ];

        match auth.is_authenticated() {
            true => links.push(NavLink::new("Dashboard", Route::Dashboard)),
            false => {
                links.push(NavLink::new("Login", Route::Login));
                links.push(NavLink::new("Sign up", Route::Signup));
            }
        }

        links
    }

    pub fn account_label(&self, auth: &dyn AuthSession) -> String {
        auth.current_user()
            .map(|u| u.username)
            .filter(|name| !name.is_empty())
            .unwrap_or("Account".to_string())
    }

    pub fn logout(&mut self, auth: &dyn AuthSession, navigator: &dyn Navigator) {
        auth.logout();
        navigator.navigate(Route::Home);
        self.is_auth_dropdown_open = false;
        self.is_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{auth::session::MockAuthSession, routing::navigator::HistoryNavigator};

    fn labels(links: Vec<NavLink>) -> Vec<&'static str> {
        links.into_iter().map(|l| l.label).collect()
    }

    #[test]
    fn anonymous_links() {
        let navbar = Navbar::new();
        let auth = MockAuthSession::anonymous();

        assert_eq!(
            labels(navbar.links(&auth)),
            vec!["Home", "Create a blog", "Login", "Sign up"]
        );
        assert_eq!(navbar.account_label(&auth), "Account");
    }

    #[test]
    fn authenticated_links() {
        let navbar = Navbar::new();
        let auth = MockAuthSession::signed_in("alex");

        assert_eq!(
            labels(navbar.links(&auth)),
            vec!["Home", "Create a blog", "Dashboard"]
        );
        assert_eq!(navbar.account_label(&auth), "alex");
    }

    #[test]
    fn toggles_are_independent() {
        let mut navbar = Navbar::new();
        navbar.toggle_menu();
        navbar.toggle_auth_dropdown();
        navbar.toggle_auth_dropdown();

        assert!(navbar.is_menu_open());
        assert!(!navbar.is_auth_dropdown_open());

        navbar.close_menu();
        assert!(!navbar.is_menu_open());
    }

    #[test]
    fn logout_closes_dropdown_and_goes_home() {
        let mut navbar = Navbar::new();
        let auth = MockAuthSession::signed_in("alex");
        let navigator = HistoryNavigator::new();
        navbar.toggle_auth_dropdown();
        navbar.toggle_menu();

        navbar.logout(&auth, &navigator);

        assert!(!auth.is_authenticated());
        assert!(!navbar.is_auth_dropdown_open());
        assert!(!navbar.is_menu_open());
        assert_eq!(navigator.history(), vec!["/"]);
        assert_eq!(
            labels(navbar.links(&auth)),
            vec!["Home", "Create a blog", "Login", "Sign up"]
        );
    }
}
