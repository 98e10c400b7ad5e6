//! Noyau de la calculatrice tactile
//!
//! Organisation interne :
//! - jetons.rs    : jetons (nombre / opérateur) + glyphes + séparateurs
//! - registre.rs  : suite de jetons en cours de saisie + rendu écran
//! - format.rs    : conversions texte <-> f64, virgule <-> point
//! - reduction.rs : réduction par classes d’opérateurs (÷, x, +, -)

pub mod format;
pub mod jetons;
pub mod reduction;
pub mod registre;

#[cfg(test)]
mod tests_reduction;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use jetons::Operateur;
pub use reduction::reduire;
pub use registre::Registre;
