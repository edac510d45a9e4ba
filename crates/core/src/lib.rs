pub mod analyse;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod links;
pub mod login;
pub mod parse;
pub mod summary;
pub mod text;
pub mod validate;
pub mod version;

pub use analyse::{analyse_document, analyse_html, walk};
pub use error::{AnalyserError, Result};
pub use fetch::FetchConfig;
pub use fetch::{fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_and_analyse, fetch_url};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter};
pub use formatters::{convert_to_json, convert_to_text};
pub use links::{LinkKind, classify_link};
#[doc(hidden)]
pub use login::{InputTally, input_types, tally_inputs};
pub use login::is_login_form;
pub use parse::Document;
pub use summary::Summary;
pub use text::extract_text;
pub use validate::is_valid_url;
pub use version::detect_version;
