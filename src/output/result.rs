use crate::catalog::TemplateCatalog;
use crate::core::types::{DeviceId, TargetResult};
use crate::output::{PlainFormat, TableFormat};
use serde::Serialize;

impl TableFormat for TargetResult {
    fn headers() -> Vec<&'static str> {
        vec!["DEVICE", "STATUS", "OUTPUT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.device.to_string(),
            self.result.status.to_string(),
            self.result.output.trim_end().to_string(),
        ]
    }
}

impl PlainFormat for TargetResult {
    /// Every output line prefixed with the device, tab separated
    fn plain(&self) -> String {
        let output = self.result.output.trim_end();
        if output.is_empty() {
            return format!("{}\t", self.device);
        }
        output
            .lines()
            .map(|line| format!("{}\t{}", self.device, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A device together with the index `--device` refers to it by
#[derive(Debug, Clone, Serialize)]
pub struct DeviceRow {
    pub index: usize,
    pub device: DeviceId,
}

impl DeviceRow {
    pub fn from_devices(devices: Vec<DeviceId>) -> Vec<Self> {
        devices
            .into_iter()
            .enumerate()
            .map(|(index, device)| Self { index, device })
            .collect()
    }
}

impl TableFormat for DeviceRow {
    fn headers() -> Vec<&'static str> {
        vec!["INDEX", "DEVICE ID"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.index.to_string(), self.device.to_string()]
    }
}

impl PlainFormat for DeviceRow {
    fn plain(&self) -> String {
        self.device.to_string()
    }
}

/// A catalog entry for listing
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRow {
    pub name: String,
    pub template: String,
    pub params: usize,
}

impl TemplateRow {
    pub fn from_catalog(catalog: &TemplateCatalog) -> Vec<Self> {
        catalog
            .iter()
            .map(|(name, template)| Self {
                name: name.to_string(),
                template: template.source().to_string(),
                params: template.arity(),
            })
            .collect()
    }
}

impl TableFormat for TemplateRow {
    fn headers() -> Vec<&'static str> {
        vec!["OPERATION", "PARAMS", "TEMPLATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.params.to_string(),
            self.template.clone(),
        ]
    }
}

impl PlainFormat for TemplateRow {
    fn plain(&self) -> String {
        format!("{}\t{}", self.name, self.template)
    }
}
