//! src/app/touches.rs
//!
//! Touches du pavé : ensemble FERMÉ d’entrées, identifiées par un nom stable
//! ("0".."9", "dot", "plusminus", "divide", "multiply", "plus", "minus",
//! "percent", "result", "clear") ou par un caractère clavier.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::noyau::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Virgule,
    PlusMoins,
    Operateur(Operateur),
    Pourcent,
    Resultat,
    Clear,
}

/// Identifiant de touche hors du pavé (ignoré par la saisie).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("touche inconnue: {0:?}")]
pub struct ToucheInconnue(pub String);

impl FromStr for Touche {
    type Err = ToucheInconnue;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let t = match id {
            "dot" => Touche::Virgule,
            "plusminus" => Touche::PlusMoins,
            "divide" => Touche::Operateur(Operateur::Division),
            "multiply" => Touche::Operateur(Operateur::Multiplication),
            "plus" => Touche::Operateur(Operateur::Addition),
            "minus" => Touche::Operateur(Operateur::Soustraction),
            "percent" => Touche::Pourcent,
            "result" => Touche::Resultat,
            "clear" => Touche::Clear,
            _ => {
                let mut chars = id.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Touche::Chiffre(d as u8),
                    _ => return Err(ToucheInconnue(id.to_string())),
                }
            }
        };
        Ok(t)
    }
}

impl fmt::Display for Touche {
    /// Identifiant stable (inverse de `from_str`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(d) => write!(f, "{d}"),
            Touche::Virgule => f.write_str("dot"),
            Touche::PlusMoins => f.write_str("plusminus"),
            Touche::Operateur(Operateur::Division) => f.write_str("divide"),
            Touche::Operateur(Operateur::Multiplication) => f.write_str("multiply"),
            Touche::Operateur(Operateur::Addition) => f.write_str("plus"),
            Touche::Operateur(Operateur::Soustraction) => f.write_str("minus"),
            Touche::Pourcent => f.write_str("percent"),
            Touche::Resultat => f.write_str("result"),
            Touche::Clear => f.write_str("clear"),
        }
    }
}

impl Touche {
    /// Clavier : caractère tapé -> touche (None si hors pavé).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        let t = match c {
            ',' | '.' => Touche::Virgule,
            '+' => Touche::Operateur(Operateur::Addition),
            '-' => Touche::Operateur(Operateur::Soustraction),
            '*' | 'x' | 'X' | '×' => Touche::Operateur(Operateur::Multiplication),
            '/' | '÷' => Touche::Operateur(Operateur::Division),
            '%' => Touche::Pourcent,
            '=' => Touche::Resultat,
            _ => return None,
        };
        Some(t)
    }

    /// Texte du bouton (hors "C"/"AC", qui dépend du mode).
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Virgule => ",".to_string(),
            Touche::PlusMoins => "±".to_string(),
            Touche::Operateur(op) => op.glyphe().to_string(),
            Touche::Pourcent => "%".to_string(),
            Touche::Resultat => "=".to_string(),
            Touche::Clear => "C".to_string(),
        }
    }
}
