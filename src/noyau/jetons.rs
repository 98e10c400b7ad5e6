// src/noyau/jetons.rs

/// Séparateur décimal affiché à l’utilisateur.
pub const SEPARATEUR_AFFICHAGE: char = ',';

/// Séparateur décimal utilisé pour le calcul (f64).
pub const SEPARATEUR_CALCUL: char = '.';

/// Opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Division,
    Multiplication,
    Addition,
    Soustraction,
}

impl Operateur {
    /// Ordre FIXE de résolution (par classe, pas par position).
    pub const PRIORITES: [Operateur; 4] = [
        Operateur::Division,
        Operateur::Multiplication,
        Operateur::Addition,
        Operateur::Soustraction,
    ];

    /// Glyphe affiché à l’écran (et lu par la réduction).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Division => '÷',
            Operateur::Multiplication => 'x',
            Operateur::Addition => '+',
            Operateur::Soustraction => '-',
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Division => a / b,
            Operateur::Multiplication => a * b,
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Fragment de nombre brut : chiffres, au plus un séparateur, signe `-` optionnel.
    Nombre(String),
    Operateur(Operateur),
}

impl Jeton {
    /// Texte de ce jeton dans la chaîne d’affichage.
    pub fn ecrire(&self, out: &mut String) {
        match self {
            Jeton::Nombre(chiffres) => out.push_str(chiffres),
            Jeton::Operateur(op) => out.push(op.glyphe()),
        }
    }
}

/// Format utilitaire (debug/log) : liste de jetons en texte, séparés par des espaces.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| {
            let mut s = String::new();
            j.ecrire(&mut s);
            s
        })
        .collect::<Vec<_>>()
        .join(" ")
}
