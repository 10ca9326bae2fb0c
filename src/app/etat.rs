//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session de saisie (noyau) + le texte affiché,
//! et relayer les intentions (chiffre, opérateur, =, C) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Saisie`.
//! - `affichage` est toujours le dernier texte rendu par le noyau.

use calculatrice_touches::noyau::{Operateur, Saisie};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- session (noyau) ---
    pub saisie: Saisie,

    // --- sortie ---
    pub affichage: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        let saisie = Saisie::new();
        let affichage = saisie.rendu();
        Self { saisie, affichage }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn chiffre(&mut self, token: &str) {
        self.affichage = self.saisie.on_chiffre(token);
    }

    pub fn operateur(&mut self, op: Operateur) {
        self.affichage = self.saisie.on_operateur(op);
    }

    pub fn egal(&mut self) {
        self.affichage = self.saisie.on_egal();
    }

    /// C : remise à zéro (expression + attente de reset).
    pub fn efface(&mut self) {
        self.affichage = self.saisie.on_efface();
    }

    /// Touche clavier texte ; ignorée si le noyau ne la reconnaît pas.
    pub fn touche(&mut self, texte: &str) {
        if let Some(a) = self.saisie.on_touche(texte) {
            self.affichage = a;
        }
    }
}
