//! Cache key derivation for entity lookups

use crate::domain::storage::RecordId;

/// Builds the cache key for a single entity projection, e.g. `author:42`
pub fn entity_key(namespace: &str, id: RecordId) -> String {
    format!("{}:{}", namespace, id)
}

/// Builds the cache key for an entity together with a related collection,
/// e.g. `author:42:books`. The suffix keeps the two cached shapes from
/// ever colliding.
pub fn entity_key_with(namespace: &str, id: RecordId, suffix: &str) -> String {
    format!("{}:{}:{}", namespace, id, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_key() {
        assert_eq!(entity_key("author", RecordId::new(42)), "author:42");
        assert_eq!(entity_key("book", RecordId::new(1)), "book:1");
    }

    #[test]
    fn test_entity_key_with_suffix() {
        assert_eq!(
            entity_key_with("author", RecordId::new(42), "books"),
            "author:42:books"
        );
    }

    #[test]
    fn test_plain_and_suffixed_keys_never_collide() {
        let plain = entity_key("author", RecordId::new(7));
        let with_books = entity_key_with("author", RecordId::new(7), "books");
        assert_ne!(plain, with_books);
    }
}
