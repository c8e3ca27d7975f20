use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a post. Both name parts are required; a post never carries a
/// partial author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The externally visible form: `"first last"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Create a new post with a freshly assigned identifier.
    pub fn new(author: Author, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
        }
    }
}

/// Post fields without an identifier - the shape of seed records and create
/// requests before storage assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub author: Author,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_parts_with_single_space() {
        let author = Author::new("Jane", "Doe");
        assert_eq!(author.display_name(), "Jane Doe");
    }

    #[test]
    fn new_post_gets_unique_ids() {
        let a = Post::new(Author::new("A", "B"), "t".into(), "c".into());
        let b = Post::new(Author::new("A", "B"), "t".into(), "c".into());
        assert_ne!(a.id, b.id);
    }
}
