// src/noyau/registre.rs
//
// Registre : suite ordonnée de jetons = expression en cours de saisie.
// Toutes les opérations sont totales (pas d’erreur, au pire un no-op).

use super::jetons::{format_jetons, Jeton, Operateur, SEPARATEUR_AFFICHAGE, SEPARATEUR_CALCUL};

/// Valeur affichée pour un registre vide.
pub const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registre {
    jetons: Vec<Jeton>,
}

impl Registre {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Dernier jeton s’il s’agit d’un nombre.
    pub fn dernier_nombre(&self) -> Option<&str> {
        match self.jetons.last() {
            Some(Jeton::Nombre(chiffres)) => Some(chiffres),
            _ => None,
        }
    }

    fn dernier_nombre_mut(&mut self) -> Option<&mut String> {
        match self.jetons.last_mut() {
            Some(Jeton::Nombre(chiffres)) => Some(chiffres),
            _ => None,
        }
    }

    /// Chiffre : prolonge le nombre final, sinon ouvre un nouveau nombre.
    pub fn append_digit(&mut self, d: char) {
        match self.dernier_nombre_mut() {
            Some(chiffres) => chiffres.push(d),
            None => self.jetons.push(Jeton::Nombre(d.to_string())),
        }
    }

    /// Virgule : une seule par nombre ; après un opérateur (ou à vide) on ouvre "0,".
    pub fn append_separateur(&mut self) {
        match self.dernier_nombre_mut() {
            Some(chiffres) => {
                if !chiffres.contains([SEPARATEUR_AFFICHAGE, SEPARATEUR_CALCUL]) {
                    chiffres.push(SEPARATEUR_AFFICHAGE);
                }
            }
            None => {
                let mut chiffres = String::from("0");
                chiffres.push(SEPARATEUR_AFFICHAGE);
                self.jetons.push(Jeton::Nombre(chiffres));
            }
        }
    }

    /// ± : bascule le `-` de tête du nombre final (no-op sur un opérateur ou à vide).
    pub fn set_signe(&mut self) {
        if let Some(chiffres) = self.dernier_nombre_mut() {
            if chiffres.starts_with('-') {
                chiffres.remove(0);
            } else {
                chiffres.insert(0, '-');
            }
        }
    }

    /// Opérateur : remplace l’opérateur final (changement d’avis), sinon l’ajoute.
    pub fn set_operateur(&mut self, op: Operateur) {
        match self.jetons.last_mut() {
            Some(Jeton::Operateur(dernier)) => *dernier = op,
            _ => self.jetons.push(Jeton::Operateur(op)),
        }
    }

    /// Retire le jeton final (C). Rend le jeton retiré, s’il y en avait un.
    pub fn pop_last(&mut self) -> Option<Jeton> {
        self.jetons.pop()
    }

    /// AC : registre vide.
    pub fn reset(&mut self) {
        self.jetons.clear();
    }

    /// "=" : le registre ne contient plus que le résultat.
    /// Un résultat vide laisse le registre vide (l’écran retombe sur "0").
    pub fn replace_with_result(&mut self, valeur: impl Into<String>) {
        self.jetons.clear();
        let valeur = valeur.into();
        if !valeur.is_empty() {
            self.jetons.push(Jeton::Nombre(valeur));
        }
    }

    /// Ajoute un nombre complet en fin de registre (résultat du pourcentage).
    pub fn push_nombre(&mut self, valeur: impl Into<String>) {
        let valeur = valeur.into();
        if !valeur.is_empty() {
            self.jetons.push(Jeton::Nombre(valeur));
        }
    }

    /// Chaîne d’affichage (et d’entrée de la réduction).
    pub fn render(&self) -> String {
        if self.is_empty() {
            return AFFICHAGE_VIDE.to_string();
        }
        let mut out = String::new();
        for j in &self.jetons {
            j.ecrire(&mut out);
        }
        out
    }

    /// Vue debug (jetons séparés).
    pub fn decrire(&self) -> String {
        format_jetons(self.jetons())
    }
}
