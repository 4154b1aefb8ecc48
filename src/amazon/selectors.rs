//! CSS selectors for Amazon product page parsing.
//!
//! This file contains all CSS selectors used for extracting product
//! information. Update this file when Amazon changes their HTML structure.
//!
//! **Update process**: When a layout stops matching, capture an HTML sample,
//! update selectors, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the product detail table layouts.
pub mod detail {
    use super::*;

    /// `#prodDetails` header cells (attribute names).
    pub static PROD_DETAILS_KEYS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div#prodDetails tr th").unwrap());

    /// `#prodDetails` data cells (attribute values).
    pub static PROD_DETAILS_VALUES: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div#prodDetails tr td").unwrap());

    /// Detail bullet items, one `Key : Value` pair each.
    pub static BULLET_ITEMS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#detailBullets_feature_div li").unwrap());

    /// Text span inside a detail bullet item.
    pub static BULLET_TEXT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-list-item").unwrap());

    /// Detail bullet list items carrying the sales rank block.
    pub static RANK_BULLET_ITEMS: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            ".a-unordered-list.a-nostyle.a-vertical.a-spacing-none.detail-bullet-list li",
        )
        .unwrap()
    });

    /// Alternate technical specification grid cells.
    pub static TECH_SPEC_CELLS: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("div#tech.content-grid-alternate-styles.mako-v2 tr td").unwrap()
    });
}

/// Selectors for the product overview table.
pub mod overview {
    use super::*;

    /// Overview table cells, alternating name and value.
    pub static CELLS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div#productOverview_feature_div tr td").unwrap());
}

/// Selectors for title, feature bullets and description.
pub mod textual {
    use super::*;

    /// Title block.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div#title_feature_div").unwrap());

    /// Feature bullet container.
    pub static FEATURE_BULLETS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#feature-bullets").unwrap());

    /// Feature bullet items.
    pub static FEATURE_BULLET_ITEMS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#feature-bullets li").unwrap());

    /// Text span inside a feature bullet.
    pub static FEATURE_BULLET_TEXT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-list-item").unwrap());

    /// Description paragraphs, primary location.
    pub static DESCRIPTION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#productDescription p").unwrap());

    /// Description paragraphs, feature-div location used by newer pages.
    pub static DESCRIPTION_FALLBACK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#productDescription_feature_div p").unwrap());
}

/// Selectors for detecting error/captcha pages.
pub mod errors {
    use super::*;

    /// CAPTCHA form.
    pub static CAPTCHA: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("form[action*='validateCaptcha']").unwrap());

    /// Home page link on Amazon's 503 "dog" page.
    pub static DOG_PAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a[href='/ref=cs_503_link']").unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        // Force evaluation of all lazy selectors to ensure they compile
        let _ = &*detail::PROD_DETAILS_KEYS;
        let _ = &*detail::PROD_DETAILS_VALUES;
        let _ = &*detail::BULLET_ITEMS;
        let _ = &*detail::BULLET_TEXT;
        let _ = &*detail::RANK_BULLET_ITEMS;
        let _ = &*detail::TECH_SPEC_CELLS;
        let _ = &*overview::CELLS;
        let _ = &*textual::TITLE;
        let _ = &*textual::FEATURE_BULLETS;
        let _ = &*textual::FEATURE_BULLET_ITEMS;
        let _ = &*textual::FEATURE_BULLET_TEXT;
        let _ = &*textual::DESCRIPTION;
        let _ = &*textual::DESCRIPTION_FALLBACK;
        let _ = &*errors::CAPTCHA;
        let _ = &*errors::DOG_PAGE;
    }

    #[test]
    fn test_tech_spec_requires_all_classes() {
        let html = Html::parse_document(
            r#"<div id="tech" class="content-grid-alternate-styles">
                <table><tr><td>Brand</td><td>Apple</td></tr></table>
            </div>"#,
        );
        assert_eq!(html.select(&detail::TECH_SPEC_CELLS).count(), 0);

        let html = Html::parse_document(
            r#"<div id="tech" class="content-grid-alternate-styles mako-v2">
                <table><tr><td>Brand</td><td>Apple</td></tr></table>
            </div>"#,
        );
        assert_eq!(html.select(&detail::TECH_SPEC_CELLS).count(), 2);
    }

    #[test]
    fn test_error_selectors_ignore_product_images() {
        let html = Html::parse_document(
            r#"<img alt="Rubber chew toy for small dogs" src="/images/chew-toy.jpg">
               <img alt="Puzzle feeder" src="/images/captcha-style-puzzle.jpg">"#,
        );
        assert!(html.select(&errors::DOG_PAGE).next().is_none());
        assert!(html.select(&errors::CAPTCHA).next().is_none());
    }
}
