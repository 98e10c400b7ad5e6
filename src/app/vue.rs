// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran aligné à droite, police réduite au-delà de SEUIL_PETIT_ECRAN caractères
// - Tactile : gros boutons, grille 4 colonnes
// - Bouton d’effacement : libellé "C" ou "AC" selon le mode

use eframe::egui;

use super::etat::AppCalc;
use super::touches::Touche;
use crate::noyau::Operateur;

const TAILLE_ECRAN: f32 = 48.0;
const TAILLE_ECRAN_PETIT: f32 = 30.0;
const TAILLE_LIBELLE: f32 = 24.0;
const TAILLE_BOUTON: [f32; 2] = [64.0, 56.0];

/// Pavé, ligne par ligne (None = case vide).
const PAVE: [[Option<Touche>; 4]; 5] = [
    [
        Some(Touche::Clear),
        Some(Touche::PlusMoins),
        Some(Touche::Pourcent),
        Some(Touche::Operateur(Operateur::Division)),
    ],
    [
        Some(Touche::Chiffre(7)),
        Some(Touche::Chiffre(8)),
        Some(Touche::Chiffre(9)),
        Some(Touche::Operateur(Operateur::Multiplication)),
    ],
    [
        Some(Touche::Chiffre(4)),
        Some(Touche::Chiffre(5)),
        Some(Touche::Chiffre(6)),
        Some(Touche::Operateur(Operateur::Soustraction)),
    ],
    [
        Some(Touche::Chiffre(1)),
        Some(Touche::Chiffre(2)),
        Some(Touche::Chiffre(3)),
        Some(Touche::Operateur(Operateur::Addition)),
    ],
    [
        Some(Touche::Chiffre(0)),
        Some(Touche::Virgule),
        Some(Touche::Resultat),
        None,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let taille = if self.ecran_petit() {
            TAILLE_ECRAN_PETIT
        } else {
            TAILLE_ECRAN
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(TAILLE_ECRAN * 1.4);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.ecran).monospace().size(taille));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tactile")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for case in ligne {
                        match case {
                            Some(touche) => self.bouton(ui, touche),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let libelle = match touche {
            Touche::Clear => self.mode_clear().libelle().to_string(),
            _ => touche.libelle(),
        };

        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(libelle).size(TAILLE_LIBELLE)),
        );
        if resp.clicked() {
            self.appliquer(touche);
        }
    }
}
