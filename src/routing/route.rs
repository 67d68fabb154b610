#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Edit(u64),
    BlogDetail(u64),
    Dashboard,
    Login,
    Signup,
}

impl Route {
    pub fn path(&self) -> String {
        match *self {
            Self::Home => "/".to_string(),
            Self::Create => "/create".to_string(),
            Self::Edit(id) => format!("/edit/{}", id),
            Self::BlogDetail(id) => format!("/blog/{}", id),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
        }
    }
}
