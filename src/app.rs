// src/app.rs
//
// Calculatrice tactile — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (en plus du pavé) :
// - chiffres, virgule/point, + - * / x ÷ %, "=" : comme les boutons
// - Enter = résultat ; Escape / Backspace / Delete = bouton d’effacement

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use touches::Touche;

/// Touches clavier reçues pendant la frame, dans l’ordre.
fn touches_clavier(input: &egui::InputState) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in &input.events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Touche::depuis_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Resultat),
                egui::Key::Escape | egui::Key::Backspace | egui::Key::Delete => {
                    out.push(Touche::Clear);
                }
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in ctx.input(touches_clavier) {
            self.appliquer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
