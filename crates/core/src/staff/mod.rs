mod assignment;
mod types;

pub use assignment::{availability, AssignmentPreview, AssignmentSelection, StaffAvailability};
pub use types::{find_staff, StaffMember};
