//! Product page parsing and blocked-page detection.

use crate::amazon::models::{TabularInfo, TextualInfo};
use crate::amazon::selectors::errors;
use crate::amazon::{tabular, textual};
use scraper::Html;
use thiserror::Error;
use tracing::warn;

/// Pages that cannot be extracted from at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Empty page: no HTML content to extract from")]
    Empty,

    #[error(
        "CAPTCHA detected. Amazon is blocking requests. \
         Try using a proxy or waiting before retrying."
    )]
    Captcha,

    #[error(
        "Amazon error page detected (503). \
         The service may be temporarily unavailable."
    )]
    ServiceUnavailable,
}

/// A parsed product page, ready for extraction.
pub struct ProductPage {
    document: Html,
}

impl ProductPage {
    /// Parses page HTML, rejecting empty, CAPTCHA and error pages.
    pub fn parse(html: &str) -> Result<Self, PageError> {
        if html.trim().is_empty() {
            return Err(PageError::Empty);
        }

        let document = Html::parse_document(html);

        if document.select(&errors::CAPTCHA).next().is_some() {
            warn!("CAPTCHA page returned instead of product page");
            return Err(PageError::Captcha);
        }

        if document.select(&errors::DOG_PAGE).next().is_some() {
            warn!("Amazon error page returned instead of product page");
            return Err(PageError::ServiceUnavailable);
        }

        Ok(Self { document })
    }

    /// Detail and overview tables.
    pub fn tabular(&self) -> TabularInfo {
        tabular::extract_tabular(&self.document)
    }

    /// Title, bullet points and description.
    pub fn textual(&self) -> TextualInfo {
        textual::extract_textual(&self.document)
    }
}
