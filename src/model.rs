use chrono::NaiveDate;

/// Substring that marks syndication boilerplate lines in descriptions.
pub const BOILERPLATE_MARKER: &str = "appeared first on";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Cleaned description. Never contains a line with [`BOILERPLATE_MARKER`].
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub feeds: Vec<Feed>,
}

/// Builds an [`Article`] one recognized tag at a time.
#[derive(Debug, Default)]
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn title(&mut self, title: String) -> &mut Self {
        self.article.title = title;
        self
    }

    pub fn link(&mut self, link: String) -> &mut Self {
        self.article.link = link;
        self
    }

    /// Sets the description from raw element text. Empty text leaves the field
    /// unset; anything else is stored cleaned, even if cleaning empties it.
    pub fn description(&mut self, raw: &str) -> &mut Self {
        self.article.description = if raw.is_empty() {
            None
        } else {
            Some(clean_description(raw))
        };
        self
    }

    pub fn date(&mut self, date: Option<NaiveDate>) -> &mut Self {
        self.article.date = date;
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

/// Builds a [`Feed`], appending articles in the order they are encountered.
#[derive(Debug, Default)]
pub struct FeedBuilder {
    feed: Feed,
}

impl FeedBuilder {
    pub fn title(&mut self, title: String) -> &mut Self {
        self.feed.title = title;
        self
    }

    pub fn link(&mut self, link: String) -> &mut Self {
        self.feed.link = link;
        self
    }

    pub fn article(&mut self, article: Article) -> &mut Self {
        self.feed.articles.push(article);
        self
    }

    pub fn build(self) -> Feed {
        self.feed
    }
}

/// Drops every line containing [`BOILERPLATE_MARKER`], keeping the rest verbatim.
pub fn clean_description(text: &str) -> String {
    text.lines()
        .filter(|line| !line.contains(BOILERPLATE_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod clean_description_tests {
        use super::*;

        #[test]
        fn test_removes_boilerplate_line() {
            let text = "Hello world\nThe post Hello appeared first on Example.";
            assert_eq!(clean_description(text), "Hello world");
        }

        #[test]
        fn test_keeps_other_lines_in_order() {
            let text = "first\nsecond appeared first on X\nthird\n  indented";
            assert_eq!(clean_description(text), "first\nthird\n  indented");
        }

        #[test]
        fn test_marker_anywhere_in_line() {
            let text = "<p>It appeared first on Blog</p>\nkeep";
            assert_eq!(clean_description(text), "keep");
        }

        #[test]
        fn test_marker_is_case_sensitive() {
            let text = "Appeared First On Blog";
            assert_eq!(clean_description(text), "Appeared First On Blog");
        }

        #[test]
        fn test_idempotent() {
            let inputs = [
                "Hello world\nThe post Hello appeared first on Example.",
                "a\n\nb\nappeared first on\n",
                "no marker here",
                "",
            ];
            for input in inputs {
                let once = clean_description(input);
                assert_eq!(clean_description(&once), once, "input: {:?}", input);
            }
        }

        #[test]
        fn test_only_boilerplate_becomes_empty() {
            assert_eq!(clean_description("The post appeared first on X."), "");
        }
    }

    mod builder_tests {
        use super::*;

        #[test]
        fn test_article_builder_defaults() {
            let article = ArticleBuilder::default().build();
            assert_eq!(article.title, "");
            assert_eq!(article.link, "");
            assert_eq!(article.description, None);
            assert_eq!(article.date, None);
        }

        #[test]
        fn test_empty_description_is_unset() {
            let mut builder = ArticleBuilder::default();
            builder.description("");
            assert_eq!(builder.build().description, None);
        }

        #[test]
        fn test_cleaned_to_empty_description_is_present() {
            let mut builder = ArticleBuilder::default();
            builder.description("The post X appeared first on Y.");
            assert_eq!(builder.build().description, Some(String::new()));
        }

        #[test]
        fn test_whitespace_description_is_present() {
            let mut builder = ArticleBuilder::default();
            builder.description("   ");
            assert_eq!(builder.build().description, Some("   ".to_string()));
        }

        #[test]
        fn test_feed_builder_keeps_article_order() {
            let mut builder = FeedBuilder::default();
            builder.title("Feed".to_string()).link("https://feed.example.com".to_string());
            for i in 1..=3 {
                let mut article = ArticleBuilder::default();
                article.title(format!("Article {}", i));
                builder.article(article.build());
            }

            let feed = builder.build();
            assert_eq!(feed.title, "Feed");
            assert_eq!(feed.link, "https://feed.example.com");
            let titles: Vec<_> = feed.articles.iter().map(|a| a.title.as_str()).collect();
            assert_eq!(titles, vec!["Article 1", "Article 2", "Article 3"]);
        }
    }
}
