// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : texte tapé => touches du noyau, Enter = "=", Esc/Suppr = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : tout événement clavier est une touche de calculatrice.
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c.encode_utf8(&mut [0u8; 4]));
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.egal(),
                    egui::Key::Escape | egui::Key::Delete => self.efface(),
                    _ => {}
                },
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
