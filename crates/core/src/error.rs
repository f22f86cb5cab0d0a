use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Clipboard unavailable: {}", .0)]
    ClipboardUnavailable(String),

    #[error("Unknown category: \"{}\"{}", .name, did_you_mean(.suggestion))]
    UnknownCategory {
        name: String,
        suggestion: Option<String>,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error writing YAML listing: {}", .0)]
    Yaml(#[from] serde_yaml::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(suggestion) => format!(". Did you mean \"{suggestion}\"?"),
        None => String::new(),
    }
}

impl Error {
    pub fn clipboard_unavailable(original: impl ToString) -> Self {
        Self::ClipboardUnavailable(original.to_string())
    }

    pub fn unknown_category(name: String, suggestion: Option<String>) -> Self {
        Self::UnknownCategory { name, suggestion }
    }
}
