use chrono::{DateTime, Utc};

use crate::domain::model::Author;
use crate::domain::params::RequestParams;
use crate::domain::ports::{ApiRequest, HttpMethod, Paginated};
use crate::domain::range::Range;
use crate::utils::error::Result;
use crate::utils::validation::validate_identifier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAuthorById {
    pub id: String,
}

impl GetAuthorById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ApiRequest for GetAuthorById {
    type Response = Author;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        format!("alpha/author/{}", self.id)
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAuthors {
    pub biography: Option<String>,
    pub languages: Vec<String>,
    pub location: Option<String>,
    pub signed_up: Option<Range<DateTime<Utc>>>,
    pub last_login: Option<Range<DateTime<Utc>>>,
    pub alphas_listed: Option<Range<i64>>,
    pub forum_comments: Option<Range<i64>>,
    pub forum_discussions: Option<Range<i64>>,
    pub projects: Option<Range<i64>>,
    pub start: usize,
}

impl ApiRequest for SearchAuthors {
    type Response = Vec<Author>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        "alpha/author/search".to_string()
    }

    fn parameters(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert_opt("biography", self.biography.clone());
        params.insert_list("languages", self.languages.clone());
        params.insert_opt("location", self.location.clone());
        params.insert_range("signed-up", self.signed_up.as_ref());
        params.insert_range("last-login", self.last_login.as_ref());
        params.insert_range("alphas-listed", self.alphas_listed.as_ref());
        params.insert_range("forum-comments", self.forum_comments.as_ref());
        params.insert_range("forum-discussions", self.forum_discussions.as_ref());
        params.insert_range("projects", self.projects.as_ref());
        params.insert("start", self.start as u64);
        params
    }

    fn validate(&self) -> Result<()> {
        if let Some(range) = &self.signed_up {
            range.validate("signed_up")?;
        }
        if let Some(range) = &self.last_login {
            range.validate("last_login")?;
        }
        for (field, range) in [
            ("alphas_listed", &self.alphas_listed),
            ("forum_comments", &self.forum_comments),
            ("forum_discussions", &self.forum_discussions),
            ("projects", &self.projects),
        ] {
            if let Some(range) = range {
                range.validate(field)?;
            }
        }
        Ok(())
    }
}

impl Paginated for SearchAuthors {
    fn start(&self) -> usize {
        self.start
    }

    fn with_start(self, start: usize) -> Self {
        Self { start, ..self }
    }
}
