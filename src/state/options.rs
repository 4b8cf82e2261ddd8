use serde::{Deserialize, Serialize};

pub const HAS_HEADER: &str = "has header";
pub const CHECK_DATA: &str = "check data";

/// A named toggle exposed to the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOption {
    pub name: String,
    pub enabled: bool,
}

impl ValidationOption {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

/// The fixed option set, both disabled.
pub fn default_options() -> Vec<ValidationOption> {
    vec![
        ValidationOption::new(HAS_HEADER, false),
        ValidationOption::new(CHECK_DATA, false),
    ]
}

pub fn is_enabled(options: &[ValidationOption], name: &str) -> bool {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| option.enabled)
        .unwrap_or(false)
}

/// Sets `enabled` on the option called `name`. Returns false when no such
/// option exists.
pub fn update_option(options: &mut [ValidationOption], name: &str, enabled: bool) -> bool {
    match options.iter_mut().find(|option| option.name == name) {
        Some(option) => {
            option.enabled = enabled;
            true
        }
        None => false,
    }
}
