//! Noyau — réduction d’une chaîne d’affichage en un résultat.
//!
//! Résolution PAR CLASSE d’opérateur, dans l’ordre fixe ÷, x, +, - :
//! tant que la classe courante apparaît, on remplace le premier motif
//! `nombre op nombre` par son résultat f64, puis on recommence sur la même classe.
//!
//! Contrats :
//! - fonction pure, totale (jamais d’erreur)
//! - division par zéro => inf / NaN, propagés tels quels
//! - terminaison : chaque étape retire un caractère, consomme un opérateur de la
//!   classe, ou passe à la classe suivante

use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use super::format::{format_nombre, lire_nombre, vers_calcul};
use super::jetons::Operateur;

/// Nombre non signé, point décimal optionnel, éventuellement final ("3." vient de "3,").
const NOMBRE: &str = r"[0-9]+(?:\.[0-9]*)?";

struct Motifs {
    division: Regex,
    multiplication: Regex,
    addition: Regex,
    soustraction: Regex,
}

impl Motifs {
    fn new() -> Self {
        Self {
            division: motif_binaire(Operateur::Division),
            multiplication: motif_binaire(Operateur::Multiplication),
            addition: motif_binaire(Operateur::Addition),
            soustraction: motif_binaire(Operateur::Soustraction),
        }
    }

    fn pour(&self, op: Operateur) -> &Regex {
        match op {
            Operateur::Division => &self.division,
            Operateur::Multiplication => &self.multiplication,
            Operateur::Addition => &self.addition,
            Operateur::Soustraction => &self.soustraction,
        }
    }
}

fn motif_binaire(op: Operateur) -> Regex {
    let glyphe = regex::escape(&op.glyphe().to_string());
    Regex::new(&format!("({NOMBRE}){glyphe}({NOMBRE})")).expect("motif de réduction valide")
}

fn motifs() -> &'static Motifs {
    static MOTIFS: OnceLock<Motifs> = OnceLock::new();
    MOTIFS.get_or_init(Motifs::new)
}

/// API publique : réduit une chaîne d’affichage (virgules acceptées) en résultat texte.
///
/// Le résultat est en forme "calcul" (point décimal) ; c’est à l’appelant de le
/// repasser en forme affichage s’il le réinjecte dans le registre.
pub fn reduire(affichage: &str) -> String {
    let motifs = motifs();
    let mut expr = vers_calcul(affichage);
    let mut classes = Operateur::PRIORITES.iter().copied().peekable();

    while let Some(&op) = classes.peek() {
        let glyphe = op.glyphe();

        if !expr.contains(glyphe) {
            classes.next();
            continue;
        }

        // Opérateur final sans opérande droit : on le retire, même classe.
        if expr.ends_with(glyphe) {
            expr.pop();
            trace!("réduction {glyphe}: opérateur final retiré -> {expr:?}");
            continue;
        }

        let re = motifs.pour(op);
        if !re.is_match(&expr) {
            // Glyphe présent mais pas de motif (ex: "-3", "inf+2") : classe résolue.
            classes.next();
            continue;
        }

        let suivant = re
            .replacen(&expr, 1, |caps: &regex::Captures<'_>| {
                format_nombre(op.appliquer(lire_nombre(&caps[1]), lire_nombre(&caps[2])))
            })
            .into_owned();
        trace!("réduction {glyphe}: {expr:?} -> {suivant:?}");
        expr = suivant;
    }

    expr
}
