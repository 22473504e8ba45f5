//! UI simulation through `input` on the device.

use crate::commands::OperationArgs;

#[derive(Debug, Clone, clap::Args)]
pub struct TapArgs {
    pub x: u32,
    pub y: u32,
}

impl OperationArgs for TapArgs {
    fn operation(&self) -> &str {
        "tap"
    }

    fn into_params(self) -> Vec<String> {
        vec![self.x.to_string(), self.y.to_string()]
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct SwipeArgs {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,

    /// Swipe duration in milliseconds
    pub duration: Option<u32>,
}

impl OperationArgs for SwipeArgs {
    fn operation(&self) -> &str {
        "swipe"
    }

    fn into_params(self) -> Vec<String> {
        vec![
            self.x1.to_string(),
            self.y1.to_string(),
            self.x2.to_string(),
            self.y2.to_string(),
            self.duration.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct TextArgs {
    /// Text to type into the focused field
    pub text: String,
}

impl OperationArgs for TextArgs {
    fn operation(&self) -> &str {
        "text"
    }

    /// `input text` treats a literal space as an argument break
    fn into_params(self) -> Vec<String> {
        vec![self.text.replace(' ', "%s")]
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct KeyeventArgs {
    /// Key code, numeric or symbolic (e.g. KEYCODE_HOME)
    pub keycode: String,
}

impl OperationArgs for KeyeventArgs {
    fn operation(&self) -> &str {
        "keyevent"
    }

    fn into_params(self) -> Vec<String> {
        vec![self.keycode]
    }
}
