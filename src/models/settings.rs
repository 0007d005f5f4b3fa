use serde::{Deserialize, Serialize};

/// Site-wide content managed from the admin back-office
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub brand: Brand,
    pub socials: Socials,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Socials {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
}
