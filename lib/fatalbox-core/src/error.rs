use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Title used when an error outside the taxonomy is shown without one.
pub const DEFAULT_TITLE: &str = "None";

/// The subsystem a fatal error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Init,
    MainLoop,
    Render,
    Networking,
    Sdl,
    #[serde(rename = "opengl")]
    OpenGl,
    #[serde(rename = "directx")]
    DirectX,
    Vulkan,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Init,
        ErrorKind::MainLoop,
        ErrorKind::Render,
        ErrorKind::Networking,
        ErrorKind::Sdl,
        ErrorKind::OpenGl,
        ErrorKind::DirectX,
        ErrorKind::Vulkan,
    ];

    /// The label shown in front of "Error" in every notification.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::Init => "Init",
            ErrorKind::MainLoop => "Main Loop",
            ErrorKind::Render => "Render",
            ErrorKind::Networking => "Networking",
            ErrorKind::Sdl => "SDL",
            ErrorKind::OpenGl => "OpenGL",
            ErrorKind::DirectX => "DirectX",
            ErrorKind::Vulkan => "Vulkan",
        }
    }

    /// The name accepted on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Init => "init",
            ErrorKind::MainLoop => "main-loop",
            ErrorKind::Render => "render",
            ErrorKind::Networking => "networking",
            ErrorKind::Sdl => "sdl",
            ErrorKind::OpenGl => "opengl",
            ErrorKind::DirectX => "directx",
            ErrorKind::Vulkan => "vulkan",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| format!("Unknown error kind '{}'", s))
    }
}

/// Anything the presenter can show: an error that knows its own title.
pub trait TitledError: std::error::Error {
    fn title(&self) -> &str;
    fn message(&self) -> &str;
}

/// A fatal error raised by one of the subsystems in [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{} Error]: {message}", .kind.title())]
pub struct FatalError {
    kind: ErrorKind,
    message: String,
}

pub type FatalResult<T> = Result<T, FatalError>;

impl FatalError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn init(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Init, message)
    }

    pub fn main_loop(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MainLoop, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }

    pub fn networking(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Networking, message)
    }

    pub fn sdl(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Sdl, message)
    }

    pub fn opengl(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OpenGl, message)
    }

    pub fn directx(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DirectX, message)
    }

    pub fn vulkan(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Vulkan, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl TitledError for FatalError {
    fn title(&self) -> &str {
        self.kind.title()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Wraps an error from outside the taxonomy together with a caller-chosen title.
#[derive(Debug, Error)]
#[error("[{title} Error]: {message}")]
pub struct UntitledError<'a> {
    inner: &'a (dyn std::error::Error + 'a),
    title: String,
    message: String,
}

impl<'a> UntitledError<'a> {
    pub fn new(inner: &'a (dyn std::error::Error + 'a), title: Option<&str>) -> Self {
        Self {
            inner,
            title: title.unwrap_or(DEFAULT_TITLE).to_owned(),
            message: inner.to_string(),
        }
    }

    /// The wrapped error as it was handed in.
    pub fn inner(&self) -> &dyn std::error::Error {
        self.inner
    }
}

impl TitledError for UntitledError<'_> {
    fn title(&self) -> &str {
        &self.title
    }

    fn message(&self) -> &str {
        &self.message
    }
}
