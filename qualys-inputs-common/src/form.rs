
use serde::Serialize;
use thiserror::Error;

use crate::{
    entry::{IpList, LinuxEntry, LinuxEntryList, LinuxField},
    system::{Branch, IpSystem, SystemType},
};

pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all fields before showing the values.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", INCOMPLETE_FORM_MESSAGE)]
    Incomplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpRowsByOption {
    #[serde(rename = "DC")]
    dc: IpList,
    ascott: IpList,
    #[serde(rename = "SQL")]
    sql: IpList,
}

impl IpRowsByOption {
    pub fn get(&self, system: IpSystem) -> &IpList {
        match system {
            IpSystem::Dc => &self.dc,
            IpSystem::Ascott => &self.ascott,
            IpSystem::Sql => &self.sql,
        }
    }

    fn get_mut(&mut self, system: IpSystem) -> &mut IpList {
        match system {
            IpSystem::Dc => &mut self.dc,
            IpSystem::Ascott => &mut self.ascott,
            IpSystem::Sql => &mut self.sql,
        }
    }
}

/// Selection plus every entry typed so far, for all system types.
///
/// Switching the selection keeps the data of the other system types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    selected: SystemType,
    linux_rows: LinuxEntryList,
    ip_rows_by_option: IpRowsByOption,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(selected: SystemType) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn selected(&self) -> SystemType {
        self.selected
    }

    pub fn linux_rows(&self) -> &LinuxEntryList {
        &self.linux_rows
    }

    pub fn ip_rows(&self, system: IpSystem) -> &IpList {
        self.ip_rows_by_option.get(system)
    }

    /// Number of rows of the selected system type.
    pub fn current_len(&self) -> usize {
        match self.selected.branch() {
            Branch::Linux => self.linux_rows.len(),
            Branch::Ip(system) => self.ip_rows(system).len(),
        }
    }

    pub fn select_system(&mut self, system: SystemType) {
        self.selected = system;
    }

    pub fn add_linux_row(&mut self) {
        self.linux_rows.push_blank();
    }

    pub fn update_linux_row(&mut self, index: usize, field: LinuxField, value: impl Into<String>) {
        let value = value.into();
        self.linux_rows
            .update(index, |entry: &mut LinuxEntry| entry.set(field, value));
    }

    pub fn delete_linux_row(&mut self, index: usize) -> bool {
        self.linux_rows.remove(index)
    }

    pub fn add_ip_row(&mut self, system: IpSystem) {
        self.ip_rows_by_option.get_mut(system).push_blank();
    }

    pub fn update_ip_row(&mut self, system: IpSystem, index: usize, value: impl Into<String>) {
        let value = value.into();
        self.ip_rows_by_option
            .get_mut(system)
            .update(index, |ip| *ip = value);
    }

    pub fn delete_ip_row(&mut self, system: IpSystem, index: usize) -> bool {
        self.ip_rows_by_option.get_mut(system).remove(index)
    }

    pub fn is_current_selection_valid(&self) -> bool {
        match self.selected.branch() {
            Branch::Linux => self.linux_rows.is_valid(),
            Branch::Ip(system) => self.ip_rows(system).is_valid(),
        }
    }

    pub fn build_summary(&self) -> String {
        let mut message = format!("Selected system: {}\n\n", self.selected);

        match self.selected.branch() {
            Branch::Linux => {
                for (index, row) in self.linux_rows.iter().enumerate() {
                    message.push_str(&format!(
                        "Entry {}:\n  Hostname: {}\n  IP: {}\n\n",
                        index + 1,
                        row.hostname,
                        row.ip
                    ));
                }
            }
            Branch::Ip(system) => {
                for (index, ip) in self.ip_rows(system).iter().enumerate() {
                    message.push_str(&format!("IP {}: {}\n", index + 1, ip));
                }
            }
        }

        message
    }

    /// The summary of the selected system type, only when every entry is valid.
    pub fn submit(&self) -> Result<String, FormError> {
        if !self.is_current_selection_valid() {
            return Err(FormError::Incomplete);
        }
        Ok(self.build_summary())
    }
}
