//! GraphQL documents sent to the docs backend.

pub const COLLECTIONS: &str = r#"
query Collections {
    collections {
        id
        name
        slug
        description
        createdAt
        updatedAt
    }
}
"#;

pub const COLLECTION: &str = r#"
query Collection($slug: String!) {
    collection(slug: $slug) {
        id
        name
        slug
        description
        createdAt
        updatedAt
        articles {
            id
            title
            slug
            updatedAt
        }
    }
}
"#;

pub const ARTICLE: &str = r#"
query Article($slug: String!) {
    article(slug: $slug) {
        id
        collectionId
        title
        slug
        htmlContent
        markdownContent
        version
        lastEditedBy
        createdAt
        updatedAt
    }
}
"#;
