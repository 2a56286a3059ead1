use serde::{Deserialize, Serialize};

/// Storage key for the community board with its like and comment counts.
pub const COMMUNITY_STORAGE_KEY: &str = "nexora_community_posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostKind {
    Question,
    Tip,
    SuccessStory,
    JobPosting,
}

impl PostKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Tip => "tip",
            Self::SuccessStory => "success story",
            Self::JobPosting => "job posting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
}

/// Posts shown on the community board. Only the counters change after load;
/// comment text is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommunityBoard {
    posts: Vec<CommunityPost>,
}

impl CommunityBoard {
    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub(crate) fn restore(&mut self, posts: Vec<CommunityPost>) {
        self.posts = posts;
    }

    /// Returns false when no post has this id.
    pub(crate) fn like(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(post) => {
                post.likes = post.likes.saturating_add(1);
                true
            }
            None => false,
        }
    }

    pub(crate) fn comment(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(post) => {
                post.comments = post.comments.saturating_add(1);
                true
            }
            None => false,
        }
    }

    fn find(&mut self, id: &str) -> Option<&mut CommunityPost> {
        self.posts.iter_mut().find(|post| post.id == id)
    }
}
