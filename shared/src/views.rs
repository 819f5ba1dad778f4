//! Read-only slices the pages render.

use std::cmp::Reverse;

use crate::{
    models::{Article, Author, Category, Comment, CommentStatus, MediaItem, Page},
    text::contains_ignore_case,
};

/// Newest first. Dates are `YYYY-MM-DD`, so string order is date order.
pub fn latest(articles: &[Article]) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by(|left, right| right.date.cmp(&left.date));
    sorted
}

/// Most viewed first. Ties keep their stored order.
pub fn trending(articles: &[Article]) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by_key(|article| Reverse(article.views));
    sorted
}

/// Category with exactly this slug.
pub fn category_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.slug == slug)
}

/// Articles whose category name equals `name`, ignoring case.
pub fn by_category(articles: &[Article], name: &str) -> Vec<Article> {
    let wanted = name.trim().to_lowercase();
    articles
        .iter()
        .filter(|article| article.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Posts bylined by `name`, newest first.
pub fn by_author(articles: &[Article], name: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| article.author.name == name)
        .cloned()
        .collect()
}

/// Title, excerpt or any tag contains `query`, ignoring case. The query is
/// matched as typed, surrounding blanks included.
pub fn search(articles: &[Article], query: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| {
            contains_ignore_case(&article.title, query)
                || contains_ignore_case(&article.excerpt, query)
                || article
                    .tags
                    .iter()
                    .any(|tag| contains_ignore_case(tag, query))
        })
        .cloned()
        .collect()
}

/// Up to `limit` other articles from the same category.
pub fn related(articles: &[Article], article: &Article, limit: usize) -> Vec<Article> {
    articles
        .iter()
        .filter(|other| other.category == article.category && other.id != article.id)
        .take(limit)
        .cloned()
        .collect()
}

/// Moderation tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentFilter {
    /// Every comment.
    All,
    /// Comments in one status.
    Only(CommentStatus),
}

impl CommentFilter {
    /// Tabs of the moderation screen, in order.
    pub const TABS: [CommentFilter; 4] = [
        CommentFilter::All,
        CommentFilter::Only(CommentStatus::Pending),
        CommentFilter::Only(CommentStatus::Approved),
        CommentFilter::Only(CommentStatus::Rejected),
    ];

    /// Lowercase tab label.
    pub fn label(&self) -> &'static str {
        match self {
            CommentFilter::All => "all",
            CommentFilter::Only(status) => status.as_str(),
        }
    }

    /// Whether `comment` belongs in this tab.
    pub fn accepts(&self, comment: &Comment) -> bool {
        match self {
            CommentFilter::All => true,
            CommentFilter::Only(status) => comment.effective_status() == *status,
        }
    }
}

/// Comments passing `filter`. A comment without a status is pending.
pub fn comments_with_status(comments: &[Comment], filter: CommentFilter) -> Vec<Comment> {
    comments
        .iter()
        .filter(|comment| filter.accepts(comment))
        .cloned()
        .collect()
}

/// Number of comments passing `filter`.
pub fn comment_count(comments: &[Comment], filter: CommentFilter) -> usize {
    comments
        .iter()
        .filter(|comment| filter.accepts(comment))
        .count()
}

/// Per-tab totals for the moderation screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentCounts {
    /// Every comment.
    pub all: usize,
    /// Pending, including unmoderated.
    pub pending: usize,
    /// Approved.
    pub approved: usize,
    /// Rejected.
    pub rejected: usize,
}

impl CommentCounts {
    /// Count for one tab.
    pub fn get(&self, filter: CommentFilter) -> usize {
        match filter {
            CommentFilter::All => self.all,
            CommentFilter::Only(CommentStatus::Pending) => self.pending,
            CommentFilter::Only(CommentStatus::Approved) => self.approved,
            CommentFilter::Only(CommentStatus::Rejected) => self.rejected,
        }
    }
}

/// Count comments per moderation tab.
pub fn comment_status_counts(comments: &[Comment]) -> CommentCounts {
    comments
        .iter()
        .fold(CommentCounts::default(), |mut counts, comment| {
            counts.all += 1;
            match comment.effective_status() {
                CommentStatus::Pending => counts.pending += 1,
                CommentStatus::Approved => counts.approved += 1,
                CommentStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}

/// Public lookup: only published pages resolve by slug.
pub fn published_page_by_slug<'a>(pages: &'a [Page], slug: &str) -> Option<&'a Page> {
    pages
        .iter()
        .find(|page| page.slug == slug)
        .filter(|page| page.is_published())
}

/// Admin preview: any page by id, drafts included.
pub fn page_for_preview<'a>(pages: &'a [Page], id: &str) -> Option<&'a Page> {
    pages.iter().find(|page| page.id == id)
}

/// Profile for an author page. A registered author wins; otherwise the
/// snapshot embedded in their first article is used.
pub fn find_author_profile(authors: &[Author], articles: &[Article], name: &str) -> Option<Author> {
    authors
        .iter()
        .find(|author| author.name == name)
        .cloned()
        .or_else(|| {
            articles
                .iter()
                .find(|article| article.author.name == name)
                .map(|article| article.author.clone())
        })
}

/// Media whose name contains `term`, ignoring case.
pub fn media_matching(media: &[MediaItem], term: &str) -> Vec<MediaItem> {
    media
        .iter()
        .filter(|item| contains_ignore_case(&item.name, term.trim()))
        .cloned()
        .collect()
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// One-based page number after clamping.
    pub current_page: usize,
    /// Page count, at least one.
    pub total_pages: usize,
}

/// Pages needed for `len` items; an empty list still has one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

/// Clamp a one-based page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Cut `items` into pages of `per_page` and return the 1-based `page`,
/// clamped into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> PageSlice<T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(items.len(), per_page);
    let current_page = clamp_page(page, total_pages);
    let start = per_page.saturating_mul(current_page - 1).min(items.len());
    let end = usize::min(start + per_page, items.len());
    PageSlice {
        items: items[start..end].to_vec(),
        current_page,
        total_pages,
    }
}

/// Counters on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of posts.
    pub posts: usize,
    /// Number of pages.
    pub pages: usize,
    /// Number of comments.
    pub comments: usize,
    /// Number of categories.
    pub categories: usize,
    /// Number of media items.
    pub media: usize,
}

impl DashboardStats {
    /// Count every collection.
    pub fn collect(
        articles: &[Article],
        pages: &[Page],
        comments: &[Comment],
        categories: &[Category],
        media: &[MediaItem],
    ) -> Self {
        Self {
            posts: articles.len(),
            pages: pages.len(),
            comments: comments.len(),
            categories: categories.len(),
            media: media.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::PageStatus, seed};

    fn comment(id: &str, status: Option<CommentStatus>) -> Comment {
        Comment {
            id: id.to_string(),
            author: "Reader".to_string(),
            date: "2023-10-25T10:30:00".to_string(),
            content: "text".to_string(),
            avatar: String::new(),
            status,
        }
    }

    fn page(id: &str, slug: &str, status: PageStatus) -> Page {
        Page {
            id: id.to_string(),
            title: id.to_uppercase(),
            slug: slug.to_string(),
            content: String::new(),
            status,
            meta_title: None,
            meta_description: None,
            hero_image: None,
            last_updated: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn trending_orders_by_views() {
        let sorted = trending(&seed::articles());
        let views = sorted.iter().map(|a| a.views).collect::<Vec<_>>();
        assert_eq!(views[0], 41_000);
        assert!(views.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn latest_orders_by_date() {
        let mut articles = seed::articles();
        articles.reverse();
        let sorted = latest(&articles);
        assert_eq!(sorted[0].date, "2023-10-24");
        assert_eq!(sorted.last().map(|a| a.date.as_str()), Some("2023-10-13"));
    }

    #[test]
    fn category_filter_ignores_case() {
        let articles = seed::articles();
        let science = by_category(&articles, "science");
        assert_eq!(science.len(), 2);
        assert!(science.iter().all(|a| a.category == "Science"));

        let categories = seed::categories();
        let tech = category_by_slug(&categories, "tech").map(|c| c.name.clone());
        assert_eq!(tech.as_deref(), Some("Tech"));
        assert!(category_by_slug(&categories, "travel").is_none());
    }

    #[test]
    fn search_covers_title_excerpt_and_tags() {
        let articles = seed::articles();
        assert_eq!(search(&articles, "CHAMPIONSHIP").len(), 1);
        assert_eq!(search(&articles, "semiconductor").len(), 1);
        let food = search(&articles, "food");
        assert_eq!(food.len(), 2);
        assert_eq!(search(&articles, "").len(), articles.len());
        assert!(search(&articles, "zzz-not-there").is_empty());
    }

    #[test]
    fn search_matches_the_query_as_typed() {
        let articles = seed::articles();
        assert_eq!(search(&articles, "food").len(), 2);
        assert!(search(&articles, " food ").is_empty());
        assert!(search(&articles, "  championship").is_empty());
    }

    #[test]
    fn related_excludes_self() {
        let articles = seed::articles();
        let health = articles
            .iter()
            .find(|a| a.category == "Health")
            .cloned()
            .expect("health article");
        let others = related(&articles, &health, 3);
        assert_eq!(others.len(), 1);
        assert_ne!(others[0].id, health.id);
    }

    #[test]
    fn approved_filter_never_includes_missing_status() {
        let comments = vec![
            comment("1", Some(CommentStatus::Approved)),
            comment("2", None),
            comment("3", Some(CommentStatus::Rejected)),
            comment("4", Some(CommentStatus::Pending)),
        ];
        let approved = comments_with_status(&comments, CommentFilter::Only(CommentStatus::Approved));
        assert_eq!(approved.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["1"]);

        let pending = comments_with_status(&comments, CommentFilter::Only(CommentStatus::Pending));
        assert_eq!(pending.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["2", "4"]);

        assert_eq!(comment_count(&comments, CommentFilter::All), 4);
        assert_eq!(comment_count(&comments, CommentFilter::Only(CommentStatus::Rejected)), 1);

        let counts = comment_status_counts(&comments);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.get(CommentFilter::All), 4);
    }

    #[test]
    fn drafts_resolve_only_for_preview() {
        let pages = vec![
            page("p1", "about", PageStatus::Published),
            page("p2", "secret", PageStatus::Draft),
        ];
        assert!(published_page_by_slug(&pages, "about").is_some());
        assert!(published_page_by_slug(&pages, "secret").is_none());
        assert_eq!(page_for_preview(&pages, "p2").map(|p| p.slug.as_str()), Some("secret"));
    }

    #[test]
    fn author_profile_falls_back_to_snapshot() {
        let authors = seed::authors();
        let articles = seed::articles();
        let registered = find_author_profile(&authors, &articles, "David Chen").expect("registered");
        assert_eq!(registered.role.as_deref(), Some("Tech Contributor"));

        let snapshot = find_author_profile(&authors, &articles, "Wolf B.").expect("snapshot");
        assert_eq!(snapshot.id, "author12");
        assert!(find_author_profile(&authors, &articles, "Nobody").is_none());
    }

    #[test]
    fn paginate_clamps_page() {
        let items = (1..=13).collect::<Vec<_>>();
        let first = paginate(&items, 0, 6);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 99, 6);
        assert_eq!(last.current_page, 3);
        assert_eq!(last.items, vec![13]);

        let empty = paginate::<i32>(&[], 2, 6);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn media_search_matches_name() {
        let media = vec![MediaItem {
            id: "1".to_string(),
            url: "u".to_string(),
            name: "Stock-Market.jpg".to_string(),
            kind: "image".to_string(),
            date: "d".to_string(),
        }];
        assert_eq!(media_matching(&media, "market").len(), 1);
        assert!(media_matching(&media, "travel").is_empty());
    }
}
