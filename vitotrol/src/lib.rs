//! # vitotrol - Client pour le web service Vitotrol
//!
//! Cette crate fournit un client synchrone pour le web service SOAP Vitotrol
//! (Viessmann) : authentification, liste des appareils et suivi des mises à
//! jour asynchrones.
//!
//! ## Architecture
//!
//! - [`Session`] : affinité avec le serveur (cookies), état du login, appareils
//! - [`Session::send_request`] : moteur générique requête → réponse typée
//! - `api` : opérations typées (`Login`, `GetDevices`, statuts)
//! - [`poll`] : attente de fin des rafraîchissements et écritures
//! - [`VitotrolError`] : transport, décodage et erreurs applicatives distincts
//!
//! L'enveloppe SOAP et l'en-tête de résultat sont dans `vitosoap`, la
//! configuration dans `vitoconfig`.
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use vitotrol::Session;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = vitoconfig::Config::load("")?;
//!     let mut session = Session::from_config(&config);
//!
//!     session.login("user@example.com", "password")?;
//!     session.get_devices()?;
//!
//!     for device in session.devices() {
//!         println!("{} / {}", device.location_name, device.device_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Erreurs
//!
//! ```rust,no_run
//! # use vitotrol::{Session, VitotrolError};
//! # let mut session = Session::with_endpoint("http://127.0.0.1:8080/");
//! match session.login("user", "wrong") {
//!     Ok(()) => {}
//!     Err(VitotrolError::Application(header)) => eprintln!("refused: {}", header.message),
//!     Err(e) if e.is_transport() => eprintln!("network: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod api;
pub mod cookies;
pub mod error;
pub mod models;
pub mod poll;
pub mod session;

pub use api::SOAP_ACTION_BASE;
pub use api::auth::{APP_ID, APP_VERSION, LoginResult, PLATFORM};
pub use api::devices::{GetDevicesResult, Location, LocationDevice};
pub use api::status::{RefreshStatusResult, WriteStatusResult};
pub use cookies::CookieJar;
pub use error::{Result, VitotrolError};
pub use models::{
    AttrId, AttrValue, Device, DeviceId, LocationId, Timeslot, Timesheets, TimesheetId,
    UserProfile,
};
pub use poll::{PollPolicy, STATUS_COMPLETED};
pub use session::Session;

pub use vitosoap::{HasResultHeader, ResultHeader, SoapResult};
