// Extended variant: cause suggestions enriched with nearby organizations.
// Enrichment failures never abort a request; see `enrichment`.

pub mod enrichment;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod prompts;
pub mod request;
