use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Invalid option name `{}`: the option name must be either a short option or long option, with dashes (-o, --option or -o|--option).",
        .0
    )]
    InvalidName(String),

    #[error("The command line arguments are not set.")]
    MissingArguments,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No commands or options were found in the definitions YAML. Is `{}` empty?", .path)]
    EmptyDefinition { path: String },

    #[error("Found a non-unique command name: `{}`", .0)]
    NonUniqueCommandName(String),

    #[error("Found a non-unique option name: `{}`", .0)]
    NonUniqueOptionName(String),

    #[error("Unknown value mode: \"{}\"", .0)]
    UnknownValueMode(String),

    #[error("Unknown color name: \"{}\"", .0)]
    UnknownColorName(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn empty_definition(path: String) -> Self {
        Self::EmptyDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
