pub mod entry;
pub mod form;
pub mod ipv4;
pub mod system;

pub use entry::{IpList, LinuxEntry, LinuxEntryList, LinuxField, Validate};
pub use form::{FormError, FormState};
pub use ipv4::{ip_field_error, is_ipv4_format, parse_ipv4_format};
pub use system::{Branch, IpSystem, SystemType};
