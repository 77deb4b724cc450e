//! Enrollment records: groups and the children assigned to them.

use serde::{Deserialize, Serialize};

/// A group (class) of children within a facility.
///
/// Rate schedules are scoped to a group, so a child's charges depend on
/// the group it is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier for the group.
    pub id: String,
    /// Display name of the group.
    pub name: String,
    /// The facility the group belongs to.
    pub facility_id: String,
}

/// A child enrolled in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// Unique identifier for the child.
    pub id: String,
    /// The child's first name.
    pub first_name: String,
    /// The child's last name.
    pub last_name: String,
    /// The group the child is currently assigned to.
    pub group_id: String,
}

impl Child {
    /// Returns "first last" for display purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycare_billing::models::Child;
    ///
    /// let child = Child {
    ///     id: "child_001".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Nowak".to_string(),
    ///     group_id: "ladybirds".to_string(),
    /// };
    /// assert_eq!(child.full_name(), "Ada Nowak");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
