//! src/app/etat.rs
//!
//! État UI (sans vue) : registre de jetons + mode du bouton d’effacement.
//!
//! Rôle : recevoir une touche, faire évoluer l’état, rendre la chaîne écran.
//!
//! Contrats :
//! - Toute touche du pavé est acceptée (aucune erreur possible).
//! - Un identifiant inconnu est ignoré (état et mode d’effacement intacts).
//! - Une instance = une calculatrice (pas d’état global).

use log::debug;

use super::touches::Touche;
use crate::noyau::format::{format_nombre, lire_nombre, vers_affichage};
use crate::noyau::{reduire, Registre};

/// Au-delà de ce nombre de caractères, l’écran passe en petite taille.
pub const SEUIL_PETIT_ECRAN: usize = 7;

/// Bouton d’effacement à deux temps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeClear {
    /// "C" : retire le dernier jeton.
    #[default]
    Dernier,
    /// "AC" : vide tout le registre.
    Total,
}

impl ModeClear {
    pub fn libelle(self) -> &'static str {
        match self {
            ModeClear::Dernier => "C",
            ModeClear::Total => "AC",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    registre: Registre,
    mode_clear: ModeClear,

    // --- sortie ---
    pub ecran: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        let registre = Registre::new();
        let ecran = registre.render();
        Self {
            registre,
            mode_clear: ModeClear::default(),
            ecran,
        }
    }
}

impl AppCalc {
    pub fn mode_clear(&self) -> ModeClear {
        self.mode_clear
    }

    /// L’écran doit-il passer en petite taille ?
    pub fn ecran_petit(&self) -> bool {
        self.ecran.chars().count() > SEUIL_PETIT_ECRAN
    }

    /// Entrée par identifiant de bouton ("7", "dot", "plus", ...).
    pub fn appliquer_id(&mut self, id: &str) -> &str {
        match id.parse::<Touche>() {
            Ok(t) => self.appliquer(t),
            Err(e) => {
                debug!("{e} (ignorée)");
                &self.ecran
            }
        }
    }

    /// Transition d’état : une touche, puis rendu de l’écran.
    pub fn appliquer(&mut self, touche: Touche) -> &str {
        match touche {
            Touche::Chiffre(d) => {
                let Some(c) = char::from_digit(u32::from(d), 10) else {
                    debug!("chiffre hors pavé: {d} (ignoré)");
                    return &self.ecran;
                };
                self.registre.append_digit(c);
            }
            Touche::Virgule => self.registre.append_separateur(),
            Touche::PlusMoins => self.registre.set_signe(),
            Touche::Operateur(op) => self.registre.set_operateur(op),
            Touche::Pourcent => self.pourcent(),
            Touche::Resultat => self.resultat(),
            Touche::Clear => self.clear(),
        }

        if touche != Touche::Clear {
            self.mode_clear = ModeClear::Dernier;
        }

        self.ecran = self.registre.render();
        debug!(
            "touche {touche} -> [{}] écran {:?} ({})",
            self.registre.decrire(),
            self.ecran,
            self.mode_clear.libelle()
        );
        &self.ecran
    }

    /// "=" : le registre devient le résultat (affiché avec la virgule).
    fn resultat(&mut self) {
        let brut = reduire(&self.registre.render());
        self.registre.replace_with_result(vers_affichage(&brut));
    }

    /// "%" : nombre final x (réduction du reste / 100).
    ///
    /// Le produit remplace le nombre final et le reste est conservé :
    /// "200+10" % donne "200+20" (pas "20" seul).
    /// Sans nombre final : no-op. Reste vide => écran "0" => coefficient 0.
    fn pourcent(&mut self) {
        let Some(valeur) = self.registre.dernier_nombre().map(lire_nombre) else {
            return;
        };
        self.registre.pop_last();

        let reste = lire_nombre(&reduire(&self.registre.render()));
        let produit = valeur * (reste / 100.0);
        self.registre
            .push_nombre(vers_affichage(&format_nombre(produit)));
    }

    /// C puis AC : un seul retrait du dernier jeton, ensuite remise à zéro.
    fn clear(&mut self) {
        match self.mode_clear {
            ModeClear::Dernier => {
                self.registre.pop_last();
                self.mode_clear = ModeClear::Total;
            }
            ModeClear::Total => self.registre.reset(),
        }
    }
}
