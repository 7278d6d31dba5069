//! GitHub gist adapter. Implements SnippetPublisher via the REST API.

pub mod client;

pub use client::{
    DEFAULT_GITHUB_API_URL, ENV_VAR_GIST_ID, ENV_VAR_GITHUB_TOKEN, GistPublisher, INFO_FILE,
    info_content, select_target_file,
};
