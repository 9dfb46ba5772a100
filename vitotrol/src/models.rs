//! Structures de données du client Vitotrol

use std::collections::HashMap;

/// Identifiant d'une installation (`AnlageId`)
pub type LocationId = u32;

/// Identifiant d'un appareil (`GeraetId`)
pub type DeviceId = u32;

/// Identifiant d'un attribut d'appareil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttrId(pub u16);

/// Identifiant d'un programme horaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimesheetId(pub u16);

/// Dernière valeur connue d'un attribut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue {
    pub value: String,
}

/// Plage horaire d'un programme, en minutes depuis minuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeslot {
    pub from: u16,
    pub to: u16,
}

/// Programmes horaires d'un appareil, par identifiant puis par jour
pub type Timesheets = HashMap<TimesheetId, HashMap<String, Vec<Timeslot>>>;

/// Appareil accessible par le compte, rattaché à son installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub location_id: LocationId,
    pub location_name: String,
    pub device_id: DeviceId,
    pub device_name: String,
    pub has_error: bool,
    pub is_connected: bool,

    /// Valeurs des attributs, vide après `get_devices`
    pub attributes: HashMap<AttrId, AttrValue>,

    /// Programmes horaires, vides après `get_devices`
    pub timesheets: Timesheets,
}

/// Profil renvoyé par `Login`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub tech_version: String,
    pub salutation: i32,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
