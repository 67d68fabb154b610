use chrono::{Days, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use crate::blogs::models::blog::Blog;

use super::{
    enums::blog_status::BlogStatus,
    models::{
        statistics::{DetailedStatistics, PerformanceRow, UserStatistics},
        user_blog::UserBlog,
    },
};

const TOP_PERFORMING_LIMIT: usize = 5;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// (likes + comments) / views as a percentage. Zero views count as one.
pub fn engagement_rate(likes: u32, comments: u32, views: u32) -> f64 {
    (f64::from(likes) + f64::from(comments)) / f64::from(views.max(1)) * 100.0
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

pub fn word_count(html: &str) -> usize {
    HTML_TAG.replace_all(html, " ").split_whitespace().count()
}

/// Decorates store posts with mock dashboard data. The same seed always
/// yields the same statuses, views and edit dates.
pub fn to_user_blogs(blogs: Vec<Blog>, seed: u64, today: NaiveDate) -> Vec<UserBlog> {
    let mut rng = StdRng::seed_from_u64(seed);

    blogs
        .into_iter()
        .map(|blog| {
            let status = match rng.gen::<f64>() > 0.3 {
                true => BlogStatus::Published,
                false => BlogStatus::Draft,
            };
            let views = rng.gen_range(0..10_000);
            let last_edited = today
                .checked_sub_days(Days::new(rng.gen_range(0..30)))
                .unwrap_or(today);

            UserBlog {
                blog,
                status,
                views,
                last_edited: last_edited.format("%-m/%-d/%Y").to_string(),
            }
        })
        .collect()
}

pub fn performance_row(blog: &UserBlog) -> PerformanceRow {
    let fields = &blog.blog.fields;

    PerformanceRow {
        id: blog.blog.id,
        title: fields.title.to_string(),
        views: blog.views,
        likes: fields.likes,
        comments: fields.comments,
        engagement_rate: engagement_rate(fields.likes, fields.comments, blog.views),
    }
}

/// The first `limit` posts, in store order.
pub fn top_performing(blogs: &[UserBlog], limit: usize) -> Vec<PerformanceRow> {
    blogs.iter().take(limit).map(performance_row).collect()
}

pub fn detailed_statistics(stats: &UserStatistics, blogs: &[UserBlog]) -> DetailedStatistics {
    let published = blogs
        .iter()
        .filter(|b| b.status == BlogStatus::Published)
        .count();

    let (average_word_count, average_engagement_rate) = match blogs.len() {
        0 => (0, 0.0),
        len => {
            let words: usize = blogs.iter().map(|b| word_count(&b.blog.fields.content)).sum();
            let rates: f64 = blogs.iter().map(|b| performance_row(b).engagement_rate).sum();
            (words / len, rates / len as f64)
        }
    };

    DetailedStatistics {
        total_blogs: stats.total_blogs,
        published,
        drafts: blogs.len() - published,
        average_word_count,
        total_views: stats.total_views,
        total_likes: stats.total_likes,
        total_comments: stats.total_comments,
        average_engagement_rate,
        views_this_month: stats.views_this_month,
        likes_this_month: stats.likes_this_month,
        comments_this_month: stats.comments_this_month,
        growth_rate: stats.growth_rate,
        top_performing: top_performing(blogs, TOP_PERFORMING_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::blogs::data::seed_blogs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn zero_views_divide_by_one() {
        let rate = engagement_rate(3, 2, 0);

        assert_eq!(rate, 500.0);
        assert_eq!(format_rate(rate), "500.0%");
    }

    #[test]
    fn rate_is_a_percentage_of_views() {
        assert_eq!(format_rate(engagement_rate(30, 20, 1000)), "5.0%");
        assert_eq!(format_rate(engagement_rate(1, 0, 3)), "33.3%");
    }

    #[test]
    fn counts_words_outside_markup() {
        assert_eq!(word_count("<h2>Two words</h2><p>and <b>three</b> more</p>"), 5);
        assert_eq!(word_count("<p></p>"), 0);
    }

    #[test]
    fn mock_decoration_is_reproducible() {
        let a = to_user_blogs(seed_blogs(), 7, today());
        let b = to_user_blogs(seed_blogs(), 7, today());

        assert_eq!(a, b);
        for blog in &a {
            assert!(blog.views < 10_000);
            let edited = NaiveDate::parse_from_str(&blog.last_edited, "%m/%d/%Y").unwrap();
            assert!(edited <= today());
            assert!((today() - edited).num_days() < 30);
        }
    }

    #[test]
    fn top_performing_keeps_store_order_and_caps() {
        let blogs = to_user_blogs(seed_blogs(), 1, today());
        let rows = top_performing(&blogs, 5);

        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(rows[0].views, blogs[0].views);
    }

    #[test]
    fn detailed_statistics_split_statuses() {
        let blogs = to_user_blogs(seed_blogs(), 3, today());
        let stats = detailed_statistics(&UserStatistics::mock(), &blogs);

        assert_eq!(stats.published + stats.drafts, blogs.len());
        assert_eq!(stats.total_views, 45892);
        assert!(stats.average_word_count > 0);
    }

    #[test]
    fn detailed_statistics_without_blogs() {
        let stats = detailed_statistics(&UserStatistics::mock(), &[]);

        assert_eq!((stats.published, stats.drafts), (0, 0));
        assert_eq!(stats.average_engagement_rate, 0.0);
        assert!(stats.top_performing.is_empty());
    }
}
