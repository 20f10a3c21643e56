use std::{error, fmt, io};

use twilight_embed_builder::{
    EmbedBuildError, EmbedColorError, EmbedDescriptionError, EmbedFieldError, EmbedTitleError, ImageSourceUrlError,
};
use twilight_gateway::cluster::ClusterStartError;
use twilight_http::request::channel::message::create_message::CreateMessageError;
use twilight_http::request::channel::message::get_channel_messages_configured::GetChannelMessagesConfiguredError;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug)]
pub enum StartupError {
    NoConfig,
    InvalidConfig,
    NoLoggingSpec,
    Twilight(twilight_http::Error),
    Sqlx(sqlx::Error),
    ClusterStart(ClusterStartError),
    DatabaseMigration(String),
    Io(io::Error),
}

impl error::Error for StartupError {}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::NoConfig => write!(f, "Unable to locate the config file"),
            StartupError::InvalidConfig => write!(f, "Unable to load the config file"),
            StartupError::NoLoggingSpec => write!(f, "Problem with the log spec file"),
            StartupError::Twilight(e) => write!(f, "Twilight error during startup, unable to continue: {}", e),
            StartupError::Sqlx(e) => write!(f, "Unable to create database pool: {:?}", e),
            StartupError::ClusterStart(e) => write!(f, "The cluster failed to start: {}", e),
            StartupError::DatabaseMigration(e) => write!(f, "Failed to migrate the database: {}", e),
            StartupError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum EventHandlerError {
    InvalidSession(u64),
    Database(DatabaseError),
}

impl error::Error for EventHandlerError {}

impl fmt::Display for EventHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventHandlerError::InvalidSession(shard) => write!(f, "Our gateway session on shard {} died", shard),
            EventHandlerError::Database(e) => write!(f, "Database interaction failed: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum DatabaseError {
    Sqlx(sqlx::Error),
    Deserializing(serde_json::Error),
    Serializing(serde_json::Error),
}

impl error::Error for DatabaseError {}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Sqlx(e) => write!(f, "Database failure: {:?}", e),
            DatabaseError::Deserializing(e) => write!(f, "Failed to deserialize: {}", e),
            DatabaseError::Serializing(e) => write!(f, "Failed to serialize: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum MessageError {
    Create(CreateMessageError),
    Fetch(GetChannelMessagesConfiguredError),
    EmbedBuild(EmbedBuildError),
    EmbedField(EmbedFieldError),
    EmbedTitle(EmbedTitleError),
    EmbedDescription(EmbedDescriptionError),
    EmbedColor(EmbedColorError),
    ImageSourceUrl(ImageSourceUrlError),
}

impl error::Error for MessageError {}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::Create(e) => write!(f, "Failed to create message: {}", e),
            MessageError::Fetch(e) => write!(f, "Failed to fetch channel messages: {}", e),
            MessageError::EmbedBuild(e) => write!(f, "Failed to assemble embed: {}", e),
            MessageError::EmbedField(e) => write!(f, "Failed to create embed field: {}", e),
            MessageError::EmbedTitle(e) => write!(f, "Failed to set embed title: {}", e),
            MessageError::EmbedDescription(e) => write!(f, "Failed to set embed description: {}", e),
            MessageError::EmbedColor(e) => write!(f, "Failed to set embed color: {}", e),
            MessageError::ImageSourceUrl(e) => write!(f, "Failed to set embed image url: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum CommandError {
    NoDM,
    InvalidPermissions,
    SessionReplaced,
    ParseError(ParseError),
    OtherFailure(OtherFailure),
}

impl error::Error for CommandError {}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::NoDM => write!(f, "You can not use this command in DMs"),
            CommandError::InvalidPermissions => write!(f, "You don't have the permissions to run this command!"),
            CommandError::SessionReplaced => {
                write!(f, "Another prompt was started in this channel, this session has ended.")
            }
            CommandError::ParseError(e) => write!(f, "Failed to parse the command arguments!\n``{}``", e),
            CommandError::OtherFailure(_) => write!(
                f,
                "Unexpected error while executing the command, please try again later"
            ),
        }
    }
}

#[derive(Debug)]
pub enum OtherFailure {
    TwilightHttp(twilight_http::Error),
    DatabaseError(DatabaseError),
    Message(MessageError),
}

impl error::Error for OtherFailure {}

impl fmt::Display for OtherFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtherFailure::DatabaseError(e) => write!(f, "Database error: {}", e),
            OtherFailure::TwilightHttp(e) => write!(f, "Something went wrong interacting with the discord api: {}", e),
            OtherFailure::Message(e) => write!(f, "Failed to construct a message: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum ParseError {
    MissingArgument,
    WrongArgumentType(String),
}

impl error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingArgument => write!(f, "You are missing one or more required arguments"),
            ParseError::WrongArgumentType(expected) => write!(
                f,
                "The wrong type was provided! Expected a {}, but got something else!",
                expected
            ),
        }
    }
}

impl From<io::Error> for StartupError {
    fn from(e: io::Error) -> Self {
        StartupError::Io(e)
    }
}

impl From<twilight_http::Error> for StartupError {
    fn from(e: twilight_http::Error) -> Self {
        StartupError::Twilight(e)
    }
}

impl From<sqlx::Error> for StartupError {
    fn from(e: sqlx::Error) -> Self {
        StartupError::Sqlx(e)
    }
}

impl From<ClusterStartError> for StartupError {
    fn from(e: ClusterStartError) -> Self {
        StartupError::ClusterStart(e)
    }
}

impl From<DatabaseError> for EventHandlerError {
    fn from(e: DatabaseError) -> Self {
        EventHandlerError::Database(e)
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(e: sqlx::Error) -> Self {
        DatabaseError::Sqlx(e)
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        CommandError::ParseError(e)
    }
}

impl From<DatabaseError> for CommandError {
    fn from(e: DatabaseError) -> Self {
        CommandError::OtherFailure(OtherFailure::DatabaseError(e))
    }
}

impl From<twilight_http::Error> for CommandError {
    fn from(e: twilight_http::Error) -> Self {
        CommandError::OtherFailure(OtherFailure::TwilightHttp(e))
    }
}

impl From<MessageError> for CommandError {
    fn from(e: MessageError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(e))
    }
}

impl From<CreateMessageError> for CommandError {
    fn from(e: CreateMessageError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::Create(e)))
    }
}

impl From<GetChannelMessagesConfiguredError> for CommandError {
    fn from(e: GetChannelMessagesConfiguredError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::Fetch(e)))
    }
}

impl From<EmbedBuildError> for CommandError {
    fn from(e: EmbedBuildError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::EmbedBuild(e)))
    }
}

impl From<EmbedFieldError> for CommandError {
    fn from(e: EmbedFieldError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::EmbedField(e)))
    }
}

impl From<EmbedTitleError> for CommandError {
    fn from(e: EmbedTitleError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::EmbedTitle(e)))
    }
}

impl From<EmbedDescriptionError> for CommandError {
    fn from(e: EmbedDescriptionError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::EmbedDescription(e)))
    }
}

impl From<EmbedColorError> for CommandError {
    fn from(e: EmbedColorError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::EmbedColor(e)))
    }
}

impl From<ImageSourceUrlError> for CommandError {
    fn from(e: ImageSourceUrlError) -> Self {
        CommandError::OtherFailure(OtherFailure::Message(MessageError::ImageSourceUrl(e)))
    }
}
