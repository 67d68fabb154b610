use chrono::Local;

use crate::{app::models::app_error::AppError, AppState};

use super::{
    enums::dashboard_tab::DashboardTab,
    models::{
        statistics::{DetailedStatistics, UserStatistics},
        user_blog::UserBlog,
        user_profile::UserProfile,
    },
    service,
};

const RECENT_BLOGS: usize = 3;

/// What the selected tab shows. Nothing here is editable.
#[derive(Debug, PartialEq)]
pub enum DashboardPanel<'a> {
    Overview {
        user: &'a UserProfile,
        stats: &'a UserStatistics,
        recent: &'a [UserBlog],
    },
    Blogs(&'a [UserBlog]),
    Stats(DetailedStatistics),
    Settings(&'a UserProfile),
}

pub struct Dashboard {
    active_tab: DashboardTab,
    user: UserProfile,
    stats: UserStatistics,
    blogs: Vec<UserBlog>,
}

impl Dashboard {
    pub fn new(user: UserProfile, stats: UserStatistics, blogs: Vec<UserBlog>) -> Self {
        Self {
            active_tab: DashboardTab::default(),
            user,
            stats,
            blogs,
        }
    }

    pub async fn load(state: &AppState, seed: u64) -> Result<Self, AppError> {
        let blogs = state.store.get_blogs().await?;
        let blogs = service::to_user_blogs(blogs, seed, Local::now().date_naive());

        tracing::debug!("dashboard loaded with {} blogs", blogs.len());

        Ok(Self::new(UserProfile::mock(), UserStatistics::mock(), blogs))
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn select_tab_value(&mut self, value: &str) {
        if let Ok(tab) = value.parse::<DashboardTab>() {
            self.select_tab(tab);
        }
    }

    pub fn blogs(&self) -> &[UserBlog] {
        &self.blogs
    }

    pub fn panel(&self) -> DashboardPanel<'_> {
        match self.active_tab {
            DashboardTab::Overview => DashboardPanel::Overview {
                user: &self.user,
                stats: &self.stats,
                recent: &self.blogs[..self.blogs.len().min(RECENT_BLOGS)],
            },
            DashboardTab::Blogs => DashboardPanel::Blogs(&self.blogs),
            DashboardTab::Stats => {
                DashboardPanel::Stats(service::detailed_statistics(&self.stats, &self.blogs))
            }
            DashboardTab::Settings => DashboardPanel::Settings(&self.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_app;

    #[tokio::test]
    async fn opens_on_overview_with_three_recent_blogs() {
        let app = seeded_app();
        let dashboard = Dashboard::load(&app.state, 11).await.unwrap();

        assert_eq!(dashboard.active_tab(), DashboardTab::Overview);
        match dashboard.panel() {
            DashboardPanel::Overview { recent, user, .. } => {
                assert_eq!(recent.len(), 3);
                assert_eq!(user.name, "Alex Johnson");
            }
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[tokio::test]
    async fn tabs_switch_panels() {
        let app = seeded_app();
        let mut dashboard = Dashboard::load(&app.state, 11).await.unwrap();

        dashboard.select_tab(DashboardTab::Blogs);
        assert!(matches!(dashboard.panel(), DashboardPanel::Blogs(blogs) if blogs.len() == 6));

        dashboard.select_tab_value("stats");
        match dashboard.panel() {
            DashboardPanel::Stats(stats) => assert_eq!(stats.top_performing.len(), 5),
            other => panic!("unexpected panel {:?}", other),
        }

        dashboard.select_tab_value("billing");
        assert_eq!(dashboard.active_tab(), DashboardTab::Stats);

        dashboard.select_tab(DashboardTab::Settings);
        assert!(matches!(dashboard.panel(), DashboardPanel::Settings(user) if user.location == "San Francisco, CA"));
    }

    #[test]
    fn overview_with_few_blogs_shows_all_of_them() {
        let dashboard = Dashboard::new(UserProfile::mock(), UserStatistics::mock(), Vec::new());

        match dashboard.panel() {
            DashboardPanel::Overview { recent, .. } => assert!(recent.is_empty()),
            other => panic!("unexpected panel {:?}", other),
        }
    }
}
