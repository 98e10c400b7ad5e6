// src/noyau/format.rs
//
// Conversions texte <-> f64 et séparateurs décimaux.
// L’écran parle "virgule", le calcul parle "point".

use super::jetons::{SEPARATEUR_AFFICHAGE, SEPARATEUR_CALCUL};

/// Affichage -> calcul : toutes les virgules deviennent des points.
pub fn vers_calcul(s: &str) -> String {
    s.replace(SEPARATEUR_AFFICHAGE, &SEPARATEUR_CALCUL.to_string())
}

/// Calcul -> affichage : tous les points deviennent des virgules.
pub fn vers_affichage(s: &str) -> String {
    s.replace(SEPARATEUR_CALCUL, &SEPARATEUR_AFFICHAGE.to_string())
}

/// Écriture d’un résultat f64 (forme courte de `Display`, sans arrondi fixe).
///
/// - non finis : `inf`, `-inf`, `NaN`
/// - `-0` est écrit `0`
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

/// Lecture tolérante d’un nombre (les deux séparateurs acceptés).
/// Texte illisible (ex: "-" seul, chaîne vide) => NaN.
pub fn lire_nombre(s: &str) -> f64 {
    vers_calcul(s.trim()).parse::<f64>().unwrap_or(f64::NAN)
}
