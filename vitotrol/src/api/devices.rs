//! Liste des installations et appareils (`GetDevices`)

use super::SERVICE_NS;
use crate::error::Result;
use crate::models::{Device, DeviceId, LocationId};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use vitosoap::{HasResultHeader, ResultHeader, SoapResult, encode_body};

#[derive(Debug, Serialize)]
#[serde(rename = "GetDevices")]
struct GetDevicesRequest<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
}

#[derive(Debug, Deserialize)]
struct GetDevicesResultWire {
    #[serde(rename = "Ergebnis")]
    code: i32,
    #[serde(rename = "ErgebnisText", default)]
    message: String,
    #[serde(rename = "AnlageListe", default)]
    locations: LocationList,
}

#[derive(Debug, Default, Deserialize)]
struct LocationList {
    #[serde(rename = "AnlageV2", default)]
    items: Vec<LocationWire>,
}

#[derive(Debug, Deserialize)]
struct LocationWire {
    #[serde(rename = "AnlageId")]
    id: LocationId,
    #[serde(rename = "AnlageName", default)]
    name: String,
    #[serde(rename = "AnlageStandort", default)]
    place: String,
    #[serde(rename = "GeraeteListe", default)]
    devices: DeviceList,
    #[serde(rename = "HatFehler", default)]
    has_error: bool,
    #[serde(rename = "IstVerbunden", default)]
    is_connected: bool,
}

#[derive(Debug, Default, Deserialize)]
struct DeviceList {
    #[serde(rename = "GeraetV2", default)]
    items: Vec<DeviceWire>,
}

#[derive(Debug, Deserialize)]
struct DeviceWire {
    #[serde(rename = "GeraetId")]
    id: DeviceId,
    #[serde(rename = "GeraetName", default)]
    name: String,
    #[serde(rename = "GeraetTyp", default)]
    device_type: u32,
    #[serde(rename = "HatFehler", default)]
    has_error: bool,
    #[serde(rename = "IstVerbunden", default)]
    is_connected: bool,
}

/// Installation (`AnlageV2`) telle que décrite par le service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub place: String,
    pub has_error: bool,
    pub is_connected: bool,
    pub devices: Vec<LocationDevice>,
}

/// Appareil (`GeraetV2`) d'une installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDevice {
    pub id: DeviceId,
    pub name: String,
    pub device_type: u32,
    pub has_error: bool,
    pub is_connected: bool,
}

/// Résultat de `GetDevices`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "GetDevicesResultWire")]
pub struct GetDevicesResult {
    pub header: ResultHeader,
    pub locations: Vec<Location>,
}

impl From<GetDevicesResultWire> for GetDevicesResult {
    fn from(wire: GetDevicesResultWire) -> Self {
        let locations = wire
            .locations
            .items
            .into_iter()
            .map(|loc| Location {
                id: loc.id,
                name: loc.name,
                place: loc.place,
                has_error: loc.has_error,
                is_connected: loc.is_connected,
                devices: loc
                    .devices
                    .items
                    .into_iter()
                    .map(|dev| LocationDevice {
                        id: dev.id,
                        name: dev.name,
                        device_type: dev.device_type,
                        has_error: dev.has_error,
                        is_connected: dev.is_connected,
                    })
                    .collect(),
            })
            .collect();

        Self {
            header: ResultHeader::new(wire.code, wire.message),
            locations,
        }
    }
}

impl HasResultHeader for GetDevicesResult {
    fn result_header(&self) -> &ResultHeader {
        &self.header
    }
}

impl SoapResult for GetDevicesResult {
    const RESULT_PATH: &'static [&'static str] = &["GetDevicesResponse", "GetDevicesResult"];
}

impl GetDevicesResult {
    /// Aplatit la hiérarchie installation → appareils.
    ///
    /// Les indicateurs d'erreur et de connexion sont ceux de l'appareil ;
    /// attributs et programmes horaires partent vides.
    pub fn into_devices(self) -> Vec<Device> {
        self.locations
            .into_iter()
            .flat_map(|loc| {
                let Location {
                    id: location_id,
                    name: location_name,
                    devices,
                    ..
                } = loc;
                devices.into_iter().map(move |dev| Device {
                    location_id,
                    location_name: location_name.clone(),
                    device_id: dev.id,
                    device_name: dev.name,
                    has_error: dev.has_error,
                    is_connected: dev.is_connected,
                    attributes: HashMap::new(),
                    timesheets: HashMap::new(),
                })
            })
            .collect()
    }
}

impl Session {
    /// Récupère les appareils du compte.
    ///
    /// La liste de la session est remplacée en entier, y compris les
    /// attributs et programmes horaires déjà connus.
    pub fn get_devices(&mut self) -> Result<()> {
        let body = encode_body(&GetDevicesRequest { xmlns: SERVICE_NS })?;

        let result: GetDevicesResult = self.send_request("GetDevices", &body)?;
        debug!(locations = result.locations.len(), "GetDevices decoded");

        self.devices = result.into_devices();
        info!(devices = self.devices.len(), "Device list refreshed");
        Ok(())
    }
}
