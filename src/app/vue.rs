// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : une ligne monospace, alignée à droite (texte rendu par le noyau)
// - Pavé : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 . = + | C
//
// Le clavier est géré dans app.rs (événements globaux).

use eframe::egui;

use calculatrice_touches::noyau::Operateur;

use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(28.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/"],
                    ["4", "5", "6", "*"],
                    ["1", "2", "3", "-"],
                    ["0", ".", "=", "+"],
                ] {
                    for label in ligne {
                        self.bouton(ui, label);
                    }
                    ui.end_row();
                }

                self.bouton(ui, "C");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        if let Some(op) = Operateur::depuis_symbole(label) {
            self.operateur(op);
            return;
        }
        match label {
            "=" => self.egal(),
            "C" => self.efface(),
            _ => self.chiffre(label),
        }
    }
}
