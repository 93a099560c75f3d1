//! Label roster scraper
//!
//! Reads a table of scrape directives (label, URL, tag path, optional class
//! restriction), fetches each page, walks the tag path and writes every
//! label's matches as one column of a wide CSV:
//! - `directive`: directive table loading and tag-path parsing
//! - `fetch`: blocking HTTP page source
//! - `selector`: tag-path evaluation over parsed HTML
//! - `table`: ragged column assembly and CSV output
//! - `pipeline`: per-directive orchestration with an observer hook

pub mod config;
pub mod directive;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod selector;
pub mod table;

pub use config::ScrapeConfig;
pub use directive::{
    load_directives, read_directives, ClassRestriction, ScrapeDirective, TagPath,
};
pub use error::{Result, ScrapeError};
pub use fetch::{HttpFetcher, PageSource};
pub use pipeline::{
    run, run_directives, scrape_directive, DirectiveObserver, RunSummary, TracingObserver,
};
pub use selector::{evaluate, select_text, DescendantSearch, HtmlNode};
pub use table::ResultTable;
