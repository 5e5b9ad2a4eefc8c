//! The party a draft is written for, and the logged-in user that seeds it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DraftError;

/// Form data describing the document's subject.
///
/// Every field is plain user input. An empty field is treated as absent and
/// rendered as its template placeholder; anything else is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartyProfile {
    pub full_name: String,
    pub father_or_guardian_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub incident_location: String,
    /// `YYYY-MM-DD` as entered; defaults to the render date when empty.
    pub incident_date: String,
    /// Only the FIR template references this.
    pub police_station: String,
    pub description: String,
}

impl PartyProfile {
    /// Profile pre-filled from the logged-in user, as a new draft session starts.
    pub fn for_user(user: &UserContext) -> Self {
        Self {
            full_name: user.username.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Raw value of a field, possibly empty.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::FatherOrGuardianName => &self.father_or_guardian_name,
            ProfileField::Address => &self.address,
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::IncidentLocation => &self.incident_location,
            ProfileField::IncidentDate => &self.incident_date,
            ProfileField::PoliceStation => &self.police_station,
            ProfileField::Description => &self.description,
        }
    }

    /// The field's value if the user supplied one.
    pub fn value(&self, field: ProfileField) -> Option<&str> {
        let raw = self.get(field);
        (!raw.is_empty()).then_some(raw)
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::FatherOrGuardianName => &mut self.father_or_guardian_name,
            ProfileField::Address => &mut self.address,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Email => &mut self.email,
            ProfileField::IncidentLocation => &mut self.incident_location,
            ProfileField::IncidentDate => &mut self.incident_date,
            ProfileField::PoliceStation => &mut self.police_station,
            ProfileField::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

/// Addressable [`PartyProfile`] fields, named as in the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FullName,
    FatherOrGuardianName,
    Address,
    Phone,
    Email,
    IncidentLocation,
    IncidentDate,
    PoliceStation,
    Description,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::FullName,
        ProfileField::FatherOrGuardianName,
        ProfileField::Address,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::IncidentLocation,
        ProfileField::IncidentDate,
        ProfileField::PoliceStation,
        ProfileField::Description,
    ];

    pub fn json_name(self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::FatherOrGuardianName => "fatherOrGuardianName",
            ProfileField::Address => "address",
            ProfileField::Phone => "phone",
            ProfileField::Email => "email",
            ProfileField::IncidentLocation => "incidentLocation",
            ProfileField::IncidentDate => "incidentDate",
            ProfileField::PoliceStation => "policeStation",
            ProfileField::Description => "description",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

impl FromStr for ProfileField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|f| f.json_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}

/// The logged-in user. Created at login and dropped at logout; passed
/// explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub username: String,
    pub email: String,
}
