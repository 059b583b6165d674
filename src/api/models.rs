use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A collection together with the articles filed under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionDetail {
    pub collection: Collection,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub collection_id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub html_content: Option<String>,
    #[serde(default)]
    pub markdown_content: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub last_edited_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Body ready to inject into the page. Markdown wins over the stored
    /// HTML because the backend regenerates the markdown on every edit.
    pub fn body_html(&self) -> Option<String> {
        if let Some(markdown) = self.markdown_content.as_deref().filter(|m| !m.trim().is_empty()) {
            return Some(render_markdown(markdown));
        }
        self.html_content
            .as_deref()
            .filter(|html| !html.trim().is_empty())
            .map(str::to_string)
    }

    /// "Updated 2024-05-01 by alice" style byline, if the backend knows anything.
    pub fn byline(&self) -> Option<String> {
        let date = self
            .updated_at
            .or(self.created_at)
            .map(|ts| ts.format("%Y-%m-%d").to_string());
        match (date, self.last_edited_by.as_deref()) {
            (Some(date), Some(editor)) => Some(format!("Updated {date} by {editor}")),
            (Some(date), None) => Some(format!("Updated {date}")),
            (None, Some(editor)) => Some(format!("Edited by {editor}")),
            (None, None) => None,
        }
    }
}

#[cfg(feature = "pulldown-cmark")]
pub fn render_markdown(markdown: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(not(feature = "pulldown-cmark"))]
pub fn render_markdown(markdown: &str) -> String {
    markdown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article() -> Article {
        Article {
            id: "a1".to_string(),
            collection_id: "c1".to_string(),
            title: "Resetting your password".to_string(),
            slug: "reset-password".to_string(),
            html_content: None,
            markdown_content: None,
            version: None,
            last_edited_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn article_decodes_camel_case_fields() {
        let raw = r#"{
            "id": "a1",
            "collectionId": "c1",
            "title": "Resetting your password",
            "slug": "reset-password",
            "htmlContent": "<p>hi</p>",
            "lastEditedBy": "alice",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let decoded: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.collection_id, "c1");
        assert_eq!(decoded.html_content.as_deref(), Some("<p>hi</p>"));
        assert!(decoded.markdown_content.is_none());
        assert_eq!(decoded.last_edited_by.as_deref(), Some("alice"));
    }

    #[test]
    fn body_falls_back_to_stored_html() {
        let mut a = article();
        a.html_content = Some("<p>stored</p>".to_string());
        a.markdown_content = Some("   ".to_string());
        assert_eq!(a.body_html().as_deref(), Some("<p>stored</p>"));
    }

    #[test]
    fn body_is_none_without_content() {
        assert!(article().body_html().is_none());
    }

    #[test]
    fn byline_combines_date_and_editor() {
        let mut a = article();
        assert_eq!(a.byline(), None);
        a.last_edited_by = Some("alice".to_string());
        assert_eq!(a.byline().as_deref(), Some("Edited by alice"));
        a.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert_eq!(a.byline().as_deref(), Some("Updated 2024-05-01 by alice"));
    }

    #[cfg(feature = "pulldown-cmark")]
    #[test]
    fn markdown_body_is_rendered() {
        let mut a = article();
        a.markdown_content = Some("# Steps\n\n1. Open settings".to_string());
        let body = a.body_html().unwrap();
        assert!(body.contains("<h1>Steps</h1>"));
        assert!(body.contains("<li>Open settings</li>"));
    }
}
