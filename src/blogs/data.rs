use crate::blogs::{
    enums::category::Category,
    models::blog::{Author, Blog, Comment, NewBlog, Review},
};

lazy_static! {
    static ref SEED_BLOGS: Vec<Blog> = vec![
        seed(
            1,
            "Modern Luxury Villa with Ocean View",
            "Floor-to-ceiling glass, a private pool and the Pacific on three sides.",
            Category::Luxury,
            &["villa", "ocean", "luxury"],
            8,
            "January 12, 2024",
            (342, 2, 48),
        ),
        seed(
            2,
            "Urban Loft in Downtown District",
            "Exposed brick and steel beams a short walk from everything.",
            Category::Urban,
            &["loft", "downtown"],
            5,
            "February 3, 2024",
            (415, 1, 62),
        ),
        seed(
            3,
            "Charming Cottage in the Countryside",
            "A stone cottage with a wood stove, a garden and no neighbours in sight.",
            Category::Rural,
            &["cottage", "countryside"],
            6,
            "February 21, 2024",
            (198, 3, 21),
        ),
        seed(
            4,
            "Family Home Near Top-Rated Schools",
            "Four bedrooms, a fenced yard and a quiet cul-de-sac.",
            Category::Suburban,
            &["family", "schools"],
            4,
            "March 8, 2024",
            (126, 0, 9),
        ),
        seed(
            5,
            "Beach Bungalow Steps from the Sand",
            "Wake up to the surf in this sunny two-bedroom bungalow.",
            Category::Coastal,
            &["beach", "bungalow"],
            5,
            "March 30, 2024",
            (287, 2, 34),
        ),
        seed(
            6,
            "Restored Victorian Townhouse",
            "Original mouldings and a modern kitchen in the old quarter.",
            Category::Historic,
            &["victorian", "renovation"],
            7,
            "April 14, 2024",
            (153, 1, 17),
        ),
    ];
}

/// Mock catalogue backing the in-memory store.
pub fn seed_blogs() -> Vec<Blog> {
    SEED_BLOGS.clone()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    title: &str,
    excerpt: &str,
    category: Category,
    tags: &[&str],
    read_time: u32,
    date: &str,
    (likes, comments, shares): (u32, u32, u32),
) -> Blog {
    let comments_list = (0..comments)
        .map(|i| Comment {
            id: u64::from(i) + 1,
            author: "Jordan Lee".to_string(),
            content: "Would love to stay here.".to_string(),
            date: date.to_string(),
        })
        .collect();

    Blog::new(
        id,
        NewBlog {
            title: title.to_string(),
            content: format!("<h2>{}</h2><p>{}</p>", title, excerpt),
            excerpt: excerpt.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: format!("https://images.example.com/blogs/{}.jpg", id),
            category,
            read_time,
            date: date.to_string(),
            author: Author {
                name: "Alex Johnson".to_string(),
                avatar: "https://images.example.com/avatars/alex.jpg".to_string(),
            },
            likes,
            comments,
            comments_list,
            reviews: vec![Review {
                id: 1,
                author: "Sam Rivera".to_string(),
                rating: 5,
                content: "Exactly as described.".to_string(),
                date: date.to_string(),
            }],
            shares,
        },
    )
}
