//! REST-Handler fuer alle Endpunkte

pub mod benutzer;
pub mod kaeufe;
pub mod produkte;
pub mod token;
pub mod warenkorb;
