use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Blogs,
    Stats,
    Settings,
}

impl DashboardTab {
    pub fn all() -> [DashboardTab; 4] {
        [Self::Overview, Self::Blogs, Self::Stats, Self::Settings]
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Overview => "overview",
            Self::Blogs => "blogs",
            Self::Stats => "stats",
            Self::Settings => "settings",
        }
    }
}

impl FromStr for DashboardTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all().into_iter().find(|t| t.value() == s).ok_or(())
    }
}
