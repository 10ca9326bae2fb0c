//! Calculatrice à touches : noyau (saisie + évaluation), sans interface.
//!
//! L’interface (eframe/egui) vit dans le binaire et n’appelle que `Saisie`.

pub mod noyau;
