use leptos::Params;
use leptos_router::params::{Params, ParamsError};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct SlugParams {
    pub slug: Option<String>,
}

/// Route parameter as seen by a page: the router may not have filled it in
/// yet on the first render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParam {
    Pending,
    Resolved(String),
    Invalid(String),
}

impl RouteParam {
    pub fn from_params(params: &Result<SlugParams, ParamsError>) -> Self {
        match params {
            Ok(SlugParams { slug: Some(slug) }) if !slug.trim().is_empty() => {
                RouteParam::Resolved(slug.trim().to_string())
            }
            Ok(_) | Err(ParamsError::MissingParam(_)) => RouteParam::Pending,
            Err(err) => RouteParam::Invalid(err.to_string()),
        }
    }

    pub fn resolved(&self) -> Option<&str> {
        match self {
            RouteParam::Resolved(value) => Some(value),
            _ => None,
        }
    }

    /// Page heading for an article route; drops the slug until it resolves.
    pub fn article_heading(&self) -> String {
        match self.resolved() {
            Some(slug) => format!("Article: {slug}"),
            None => "Article".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn parsed(slug: Option<&str>) -> Result<SlugParams, ParamsError> {
        Ok(SlugParams {
            slug: slug.map(str::to_string),
        })
    }

    #[test]
    fn resolved_slug_shows_in_heading() {
        let param = RouteParam::from_params(&parsed(Some("foo")));
        assert_eq!(param, RouteParam::Resolved("foo".to_string()));
        assert_eq!(param.article_heading(), "Article: foo");
    }

    #[test]
    fn unresolved_slug_degrades_to_plain_heading() {
        for params in [
            parsed(None),
            parsed(Some("")),
            parsed(Some("   ")),
            Err(ParamsError::MissingParam("slug".to_string())),
        ] {
            let param = RouteParam::from_params(&params);
            assert_eq!(param, RouteParam::Pending);
            assert_eq!(param.article_heading(), "Article");
        }
    }

    #[test]
    fn undecodable_params_are_invalid() {
        let err = std::io::Error::other("bad utf-8");
        let param = RouteParam::from_params(&Err(ParamsError::Params(Arc::new(err))));
        assert!(matches!(param, RouteParam::Invalid(_)));
        assert_eq!(param.resolved(), None);
        assert_eq!(param.article_heading(), "Article");
    }
}
