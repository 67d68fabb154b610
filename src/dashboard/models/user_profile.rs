use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub bio: String,
    pub avatar: String,
    pub location: String,
    pub website: String,
    pub social_links: SocialLinks,
}

impl UserProfile {
    pub fn mock() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            join_date: "January 2023".to_string(),
            bio: "Content creator and real estate enthusiast. I write about modern living spaces and rental tips.".to_string(),
            avatar: "https://images.example.com/avatars/alex.jpg".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "alexjohnson.com".to_string(),
            social_links: SocialLinks {
                twitter: "@alexj".to_string(),
                instagram: "@alex.writes".to_string(),
                linkedin: "alexjohnson".to_string(),
            },
        }
    }
}
