//! Bundled dataset used when storage holds nothing for a collection.

use crate::{
    clock::Clock,
    models::{
        Article, Author, Category, Comment, CommentStatus, MediaItem, NavItem, Page, SiteSettings,
    },
};

const CATEGORIES: &[(&str, &str)] = &[
    ("World", "world"),
    ("Politics", "politics"),
    ("Business", "business"),
    ("Tech", "tech"),
    ("Science", "science"),
    ("Health", "health"),
    ("Sports", "sports"),
    ("Entertainment", "entertainment"),
];

const NAV_ITEMS: &[(&str, &str, bool)] = &[
    ("Home", "/", false),
    ("Latest", "/latest-news", false),
    ("World", "/category/world", true),
    ("Business", "/category/business", true),
    ("Tech", "/category/tech", true),
    ("Health", "/category/health", true),
    ("Sport", "/category/sports", true),
    ("Travel", "/category/travel", true),
];

struct SeedArticle {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    author: &'static str,
    date: &'static str,
    image_seed: &'static str,
    tags: [&'static str; 3],
    views: u64,
}

const ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Global Summit Reaches Historic Agreement on Climate Action Targets",
        excerpt: "World leaders have unanimously agreed to ambitious new goals for carbon \
                  reduction by 2030.",
        category: "World",
        author: "Sarah Jenkins",
        date: "2023-10-24",
        image_seed: "news1",
        tags: ["Climate", "Politics", "Global"],
        views: 12_500,
    },
    SeedArticle {
        title: "The Future of AI: How Machine Learning is Transforming Healthcare",
        excerpt: "New diagnostic tools powered by artificial intelligence are detecting \
                  diseases earlier than ever before.",
        category: "Tech",
        author: "David Chen",
        date: "2023-10-23",
        image_seed: "tech1",
        tags: ["AI", "Health", "Future"],
        views: 8_400,
    },
    SeedArticle {
        title: "Market Rally Continues as Tech Stocks Hit Record Highs",
        excerpt: "Wall Street sees another day of gains driven by semiconductor sector \
                  performance.",
        category: "Business",
        author: "Amanda Lewis",
        date: "2023-10-22",
        image_seed: "business1",
        tags: ["Stocks", "Economy", "Finance"],
        views: 5_600,
    },
    SeedArticle {
        title: "Hidden Gems: European Destinations You Need to Visit This Summer",
        excerpt: "Escape the crowds with these breathtaking but lesser-known vacation spots.",
        category: "Travel",
        author: "Marcus Johnson",
        date: "2023-10-21",
        image_seed: "travel1",
        tags: ["Travel", "Europe", "Guide"],
        views: 15_000,
    },
    SeedArticle {
        title: "Championship Finals: Underdog Team Shocks the World",
        excerpt: "In a stunning upset, the city favorites were defeated in overtime last night.",
        category: "Sports",
        author: "Tom Brady",
        date: "2023-10-20",
        image_seed: "sports1",
        tags: ["Sports", "Football", "Finals"],
        views: 22_000,
    },
    SeedArticle {
        title: "Minimalist Interior Design: Creating Calm in a Chaotic World",
        excerpt: "Tips and tricks for decluttering your space and your mind through design.",
        category: "Lifestyle",
        author: "Elena Rodriguez",
        date: "2023-10-19",
        image_seed: "interior1",
        tags: ["Design", "Home", "Minimalism"],
        views: 7_800,
    },
    SeedArticle {
        title: "Revolutionary Battery Tech Promises Week-Long Phone Charge",
        excerpt: "Scientists have discovered a new material that could multiply battery \
                  density by 10x.",
        category: "Science",
        author: "Dr. Alan Grant",
        date: "2023-10-18",
        image_seed: "science1",
        tags: ["Tech", "Energy", "Innovation"],
        views: 9_200,
    },
    SeedArticle {
        title: "The Art of Street Photography: Capturing Urban Life",
        excerpt: "A guide to finding beauty in the mundane corners of the city.",
        category: "Arts",
        author: "Sophia Lee",
        date: "2023-10-17",
        image_seed: "arts1",
        tags: ["Photography", "Art", "City"],
        views: 4_500,
    },
    SeedArticle {
        title: "Healthy Eating on a Budget: Meal Prep 101",
        excerpt: "Nutritious meals don't have to break the bank. Here is how to plan ahead.",
        category: "Health",
        author: "Mike Ross",
        date: "2023-10-16",
        image_seed: "food1",
        tags: ["Food", "Health", "Budget"],
        views: 11_000,
    },
    SeedArticle {
        title: "Space Tourism: When Will It Be Affordable?",
        excerpt: "Commercial space flights are here, but ticket prices remain astronomical.",
        category: "Science",
        author: "Neil A.",
        date: "2023-10-15",
        image_seed: "space1",
        tags: ["Space", "Future", "Travel"],
        views: 30_000,
    },
    SeedArticle {
        title: "Classic French Recipes Every Home Cook Should Know",
        excerpt: "Mastering the basics of French cuisine is easier than you think.",
        category: "Health",
        author: "Julia C.",
        date: "2023-10-14",
        image_seed: "food2",
        tags: ["Food", "Cooking", "French"],
        views: 6_700,
    },
    SeedArticle {
        title: "Election Updates: Key Swing States to Watch",
        excerpt: "Polling numbers shift as the campaign enters its final crucial weeks.",
        category: "Politics",
        author: "Wolf B.",
        date: "2023-10-13",
        image_seed: "pol1",
        tags: ["Politics", "Election", "USA"],
        views: 41_000,
    },
];

const COMMENTS: &[(&str, &str, &str)] = &[
    (
        "James Wilson",
        "2023-10-25T10:30:00",
        "This is a fantastic article! Really appreciate the depth of analysis provided here. The \
         points about sustainable energy are particularly relevant.",
    ),
    (
        "Emily Chen",
        "2023-10-25T11:15:00",
        "I have to disagree with the second point. While I understand the perspective, recent \
         data suggests a different trend in the market.",
    ),
    (
        "Robert Taylor",
        "2023-10-25T12:45:00",
        "Great read! I have shared this with my colleagues. Looking forward to the follow-up \
         piece.",
    ),
];

const MEDIA: &[(&str, &str)] = &[
    ("news1", "news-summit.jpg"),
    ("tech1", "tech-ai.jpg"),
    ("business1", "stock-market.jpg"),
    ("travel1", "travel-europe.jpg"),
];

fn picsum(seed: &str, width: u32, height: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

fn article_body(title: &str, category: &str) -> String {
    format!(
        "{title} has been one of the most discussed {category} stories of the week.\n\nEditors \
         followed the story from the first reports to the latest developments, talking to the \
         people closest to it.\n\n### A New Perspective\n\nExperts agree the coming months will \
         decide how lasting the impact turns out to be.\n\n> \"The future belongs to those who \
         believe in the beauty of their dreams.\"\n\nWe will keep updating this story as it \
         develops."
    )
}

/// Default sections.
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, (name, slug))| Category {
            id: (idx + 1).to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
        })
        .collect()
}

/// Default header menu.
pub fn navigation() -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .map(|(label, path, is_category)| NavItem {
            label: label.to_string(),
            path: path.to_string(),
            is_category: *is_category,
        })
        .collect()
}

/// Sample posts.
pub fn articles() -> Vec<Article> {
    ARTICLES
        .iter()
        .enumerate()
        .map(|(idx, seed)| {
            let number = idx + 1;
            Article {
                id: number.to_string(),
                title: seed.title.to_string(),
                excerpt: seed.excerpt.to_string(),
                content: article_body(seed.title, seed.category),
                category: seed.category.to_string(),
                author: Author {
                    id: format!("author{number}"),
                    name: seed.author.to_string(),
                    avatar: picsum(&format!("author{number}"), 100, 100),
                    bio: None,
                    role: None,
                    email: None,
                    social: None,
                },
                date: seed.date.to_string(),
                image_url: picsum(seed.image_seed, 800, 600),
                tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
                views: seed.views,
            }
        })
        .collect()
}

/// Seed comments start out approved so the article pages have something to
/// show on first run.
pub fn comments() -> Vec<Comment> {
    COMMENTS
        .iter()
        .enumerate()
        .map(|(idx, (author, date, content))| Comment {
            id: (idx + 1).to_string(),
            author: author.to_string(),
            date: date.to_string(),
            content: content.to_string(),
            avatar: picsum(&format!("user{}", idx + 1), 50, 50),
            status: Some(CommentStatus::Approved),
        })
        .collect()
}

/// Sample staff.
pub fn authors() -> Vec<Author> {
    [
        ("1", "Sarah Jenkins", "author1", "Senior Editor", "Experienced journalist covering global affairs."),
        ("2", "David Chen", "author2", "Tech Contributor", "Tech enthusiast and gadget reviewer."),
        ("3", "Admin User", "admin", "Administrator", "Site administrator."),
    ]
    .into_iter()
    .map(|(id, name, avatar_seed, role, bio)| Author {
        id: id.to_string(),
        name: name.to_string(),
        avatar: picsum(avatar_seed, 100, 100),
        bio: Some(bio.to_string()),
        role: Some(role.to_string()),
        email: None,
        social: None,
    })
    .collect()
}

/// Seed media is stamped with the time of first start.
pub fn media(clock: &dyn Clock) -> Vec<MediaItem> {
    let now = clock.now_rfc3339();
    MEDIA
        .iter()
        .enumerate()
        .map(|(idx, (seed, name))| MediaItem {
            id: (idx + 1).to_string(),
            url: picsum(seed, 800, 600),
            name: name.to_string(),
            kind: "image".to_string(),
            date: now.clone(),
        })
        .collect()
}

/// No pages ship by default.
pub fn pages() -> Vec<Page> {
    Vec::new()
}

/// Default site settings.
pub fn settings() -> SiteSettings {
    SiteSettings {
        site_title: "OmegaNews".to_string(),
        show_ads: false,
        logo_text: "OmegaNews".to_string(),
        footer_text: "© 2023 OmegaNews. All rights reserved.".to_string(),
        navigation: navigation(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let article_ids = articles().into_iter().map(|a| a.id).collect::<HashSet<_>>();
        assert_eq!(article_ids.len(), ARTICLES.len());
        let category_ids = categories().into_iter().map(|c| c.id).collect::<HashSet<_>>();
        assert_eq!(category_ids.len(), CATEGORIES.len());
    }

    #[test]
    fn seed_media_uses_clock() {
        let clock = ManualClock::at(0);
        let items = media(&clock);
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.date == "1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn seed_settings_carry_navigation() {
        let settings = settings();
        assert_eq!(settings.site_title, "OmegaNews");
        assert!(!settings.show_ads);
        assert_eq!(settings.navigation.len(), 8);
        assert!(settings.navigation[2].is_category);
    }
}
