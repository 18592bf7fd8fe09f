//! Noyau de la calculatrice (f64)
//!
//! Organisation interne :
//! - jetons.rs      : jetons du programme (nombre | symbole)
//! - operations.rs  : table des symboles (constantes, unaires, binaires, =, variables)
//! - format.rs      : affichage des nombres + réglages
//! - cerveau.rs     : accumulateur, opération en attente, programme rejouable
//! - description.rs : description reconstruite par rejeu ("(3 + 4) ✕ 5 =")
//! - courbe.rs      : échantillonnage du programme comme fonction (grapheur)

pub mod cerveau;
pub mod courbe;
pub mod description;
pub mod format;
pub mod jetons;
pub mod operations;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use cerveau::Cerveau;
pub use jetons::Jeton;
pub use operations::TableSymboles;
