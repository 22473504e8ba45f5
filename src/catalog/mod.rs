//! Named bridge operations and the command templates they expand to.

mod template;

pub use template::{RenderedCommand, Template};

use crate::error::{AdbxError, Result};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Device operations known out of the box. Every entry is run once per
/// resolved target as `<program> -s <device> <rendered template>`.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    // file transfer
    ("push", "push {} {}"),
    ("pull", "pull {} {}"),
    ("sync", "shell sync"),
    ("rm", "shell rm -r {}"),
    ("chmod", "shell chmod -R 777 {}"),
    // app lifecycle
    ("install", "install {..} {}"),
    ("uninstall", "uninstall {..} {}"),
    // shell and device info
    ("shell", "shell {}"),
    ("getprop", "shell getprop {..}"),
    ("get-serialno", "get-serialno"),
    ("get-state", "get-state"),
    ("forward", "forward {} {}"),
    ("reboot", "reboot {..}"),
    ("bugreport", "bugreport"),
    // UI simulation
    ("tap", "shell input tap {} {}"),
    ("swipe", "shell input swipe {} {} {} {} {..}"),
    ("text", "shell input text {}"),
    ("keyevent", "shell input keyevent {}"),
    ("screencap", "shell screencap -p {}"),
];

/// Immutable table of operation name to template
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
}

impl TemplateCatalog {
    /// Catalog containing only the built-in operations
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, source)| {
                let template = Template::parse(name, source)
                    .unwrap_or_else(|e| panic!("built-in template '{}' is invalid: {}", name, e));
                (name.to_string(), template)
            })
            .collect();
        Self { templates }
    }

    /// Built-in operations plus user templates, which win on name clashes
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self> {
        let mut catalog = Self::builtin();
        for (name, source) in overrides {
            debug!("Registering template {} = {:?}", name, source);
            let template = Template::parse(name, source)?;
            catalog.templates.insert(name.clone(), template);
        }
        Ok(catalog)
    }

    pub fn get(&self, operation: &str) -> Result<&Template> {
        self.templates
            .get(operation)
            .ok_or_else(|| AdbxError::UnknownOperation(operation.to_string()))
    }

    /// Fill an operation's template with positional parameters
    pub fn render<S: AsRef<str>>(&self, operation: &str, params: &[S]) -> Result<RenderedCommand> {
        self.get(operation)?.render(operation, params)
    }

    /// Entries in sorted operation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Commands addressed to the bridge itself rather than to a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Version,
    StartServer,
    KillServer,
    WaitForDevice,
    /// Raw `devices` listing with extra options such as `-l`
    Devices(Vec<String>),
}

impl HostCommand {
    pub fn args(&self) -> Vec<String> {
        match self {
            HostCommand::Version => vec!["version".to_string()],
            HostCommand::StartServer => vec!["start-server".to_string()],
            HostCommand::KillServer => vec!["kill-server".to_string()],
            HostCommand::WaitForDevice => vec!["wait-for-device".to_string()],
            HostCommand::Devices(opts) => {
                let mut args = vec!["devices".to_string()];
                args.extend(opts.iter().cloned());
                args
            }
        }
    }
}
