//! Askama templates for the server-rendered pages. Sources live in `templates/`.

use askama::Template;
use sensor_gateway_core::{default_device_name, DashboardSelector, DeviceSnapshot, HistoryPoint};

pub struct SelectorOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Chart page; the series itself is fetched from `/api/dashboard/{selector}`.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub selector: String,
    pub options: Vec<SelectorOption>,
}

impl DashboardTemplate {
    #[must_use]
    pub fn new(selected: DashboardSelector, sensor_ids: Vec<i32>) -> Self {
        let mut options = Vec::with_capacity(sensor_ids.len().saturating_add(1));
        options.push(SelectorOption {
            value: DashboardSelector::All.to_string(),
            label: "Todos los sensores".to_owned(),
            selected: selected == DashboardSelector::All,
        });
        options.extend(sensor_ids.into_iter().map(|id| SelectorOption {
            value: id.to_string(),
            label: default_device_name(id),
            selected: selected == DashboardSelector::Sensor(id),
        }));
        Self { selector: selected.to_string(), options }
    }
}

#[derive(Template)]
#[template(path = "devices.html")]
pub struct DevicesTemplate {
    pub devices: Vec<DeviceSnapshot>,
}

#[derive(Template)]
#[template(path = "device.html")]
pub struct DeviceTemplate {
    pub device: DeviceSnapshot,
    /// Oldest first.
    pub history: Vec<HistoryPoint>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub sensor_id: i32,
}
