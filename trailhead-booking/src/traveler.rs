use serde::{Deserialize, Serialize};

use crate::session::CurrentUser;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Dietary {
    #[default]
    None,
    Vegetarian,
    Vegan,
}

/// Fields that must be filled before the wizard can leave step 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    FullName,
    Age,
    Phone,
    Email,
}

impl RequiredField {
    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::FullName => "Full name required",
            RequiredField::Age => "Age required",
            RequiredField::Phone => "Phone required",
            RequiredField::Email => "Email required",
        }
    }
}

/// One person on a booking. `id` is session-local, assigned by the
/// wizard, and only used to address slot updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traveler {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub full_name: String,
    /// Zero means "not entered yet".
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub dietary: Dietary,
}

impl Traveler {
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            full_name: String::new(),
            age: 0,
            gender: Gender::default(),
            phone: String::new(),
            email: String::new(),
            emergency_contact: None,
            dietary: Dietary::default(),
        }
    }

    /// First traveler slot: contact fields carry over from the signed-in
    /// user where known.
    pub fn prefilled(id: u32, user: &CurrentUser) -> Self {
        let mut traveler = Self::blank(id);
        if let Some(phone) = &user.phone {
            traveler.phone = phone.clone();
        }
        if let Some(email) = &user.email {
            traveler.email = email.clone();
        }
        traveler
    }

    /// Required fields still missing, in field order. Empty means the
    /// traveler passes step-1 validation.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push(RequiredField::FullName);
        }
        if self.age == 0 {
            missing.push(RequiredField::Age);
        }
        if self.phone.trim().is_empty() {
            missing.push(RequiredField::Phone);
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            missing.push(RequiredField::Email);
        }
        missing
    }
}

/// A single-field edit applied to one traveler slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum TravelerUpdate {
    FullName(String),
    Age(u32),
    Gender(Gender),
    Phone(String),
    Email(String),
    EmergencyContact(Option<String>),
    Dietary(Dietary),
}

impl Traveler {
    pub fn apply(&mut self, update: TravelerUpdate) {
        match update {
            TravelerUpdate::FullName(v) => self.full_name = v,
            TravelerUpdate::Age(v) => self.age = v,
            TravelerUpdate::Gender(v) => self.gender = v,
            TravelerUpdate::Phone(v) => self.phone = v,
            TravelerUpdate::Email(v) => self.email = v,
            TravelerUpdate::EmergencyContact(v) => self.emergency_contact = v,
            TravelerUpdate::Dietary(v) => self.dietary = v,
        }
    }
}
