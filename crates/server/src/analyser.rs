use std::future::Future;
use std::pin::Pin;

use url::Url;
use web_analyser_core::{FetchConfig, Result, Summary, fetch_and_analyse};

pub type AnalyseFuture<'a> = Pin<Box<dyn Future<Output = Result<Summary>> + Send + 'a>>;

/// Produces a summary for a page URL.
///
/// Handlers only see this trait, so routes can be exercised without network access.
pub trait PageAnalyser: Send + Sync {
    fn analyse<'a>(&'a self, url: &'a Url) -> AnalyseFuture<'a>;
}

/// Fetches the page over HTTP and analyses the response body.
pub struct HttpAnalyser {
    config: FetchConfig,
}

impl HttpAnalyser {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl PageAnalyser for HttpAnalyser {
    fn analyse<'a>(&'a self, url: &'a Url) -> AnalyseFuture<'a> {
        Box::pin(fetch_and_analyse(url.as_str(), &self.config))
    }
}
