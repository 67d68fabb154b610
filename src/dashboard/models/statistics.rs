use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_blogs: u32,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub views_this_month: u64,
    pub likes_this_month: u64,
    pub comments_this_month: u64,
    pub growth_rate: f64,
    pub most_viewed_blog: String,
    pub most_liked_blog: String,
    pub most_commented_blog: String,
}

impl UserStatistics {
    pub fn mock() -> Self {
        Self {
            total_blogs: 24,
            total_views: 45892,
            total_likes: 2134,
            total_comments: 847,
            views_this_month: 5280,
            likes_this_month: 312,
            comments_this_month: 98,
            growth_rate: 12.3,
            most_viewed_blog: "Modern Luxury Villa with Ocean View".to_string(),
            most_liked_blog: "Urban Loft in Downtown District".to_string(),
            most_commented_blog: "Charming Cottage in the Countryside".to_string(),
        }
    }
}

/// One row of the "top performing content" table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub id: u64,
    pub title: String,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStatistics {
    pub total_blogs: u32,
    pub published: usize,
    pub drafts: usize,
    pub average_word_count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub average_engagement_rate: f64,
    pub views_this_month: u64,
    pub likes_this_month: u64,
    pub comments_this_month: u64,
    pub growth_rate: f64,
    pub top_performing: Vec<PerformanceRow>,
}
