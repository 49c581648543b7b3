//! Demo feed content
//!
//! A fixed, read-only post catalog standing in for a real feed backend.
//! The seed entries are the demo data the app screens render.

use serde::Serialize;

/// A single feed entry.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u32,
    pub username: String,
    pub avatar_url: String,
    pub image_url: String,
    pub likes: u32,
    pub caption: String,
    pub posted_ago: String,
}

/// Read-only catalog of demo posts, in display order.
pub struct FeedCatalog {
    posts: Vec<Post>,
}

impl Default for FeedCatalog {
    fn default() -> Self {
        Self {
            posts: seed_posts(),
        }
    }
}

impl FeedCatalog {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            username: "sarah_wanderlust".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=1".to_string(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800"
                .to_string(),
            likes: 1234,
            caption: "Lost in the mountains 🏔️".to_string(),
            posted_ago: "2h ago".to_string(),
        },
        Post {
            id: 2,
            username: "alex_photography".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=2".to_string(),
            image_url: "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800"
                .to_string(),
            likes: 856,
            caption: "Golden hour magic ✨".to_string(),
            posted_ago: "5h ago".to_string(),
        },
        Post {
            id: 3,
            username: "foodie_dreams".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=3".to_string(),
            image_url: "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=800"
                .to_string(),
            likes: 2341,
            caption: "Best burger in town! 🍔".to_string(),
            posted_ago: "8h ago".to_string(),
        },
    ]
}
