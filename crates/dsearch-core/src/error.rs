use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to load the specified data due to file not found")]
    LoadNotFound,

    #[error("Unable to load the specified data due to invalid file format")]
    LoadMalformed,

    #[error("Field {field} was not found")]
    UnknownField { field: String },

    #[error("No data found for field : \"{field}\" with provided value \"{query}\"")]
    NoMatch { field: String, query: String },

    #[error("Missing required data object")]
    MissingData,

    #[error("Search data and display order doesn't match")]
    Layout,
}

impl Error {
    pub fn unknown_field(field: &str) -> Self {
        Error::UnknownField { field: field.to_string() }
    }

    /// An empty query is shown as `[]` in the diagnostic, matching the
    /// marker the shell accepts for "search for empty values".
    pub fn no_match(field: &str, query: &str) -> Self {
        let query = if query.is_empty() { "[]" } else { query };
        Error::NoMatch { field: field.to_string(), query: query.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
