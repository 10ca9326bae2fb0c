//! Saisie incrémentale (touche par touche) + état de session.
//!
//! Contrats :
//! - l’expression est vide ou commence par un nombre
//! - jamais deux opérateurs consécutifs
//! - au plus un point décimal dans le nombre courant (dernier jeton seulement)
//! - après "=", la prochaine touche chiffre repart de zéro ; un opérateur
//!   continue sur le résultat
//!
//! Chaque action rend le nouvel affichage (même texte que `rendu()`).

use log::{debug, warn};

use super::eval::evalue_jetons;
use super::format::format_resultat;
use super::jetons::{est_chiffre_ou_point, format_tokens, Operateur, Tok};

/// Chiffres après la virgule à l’affichage d’un résultat (le calcul reste exact).
pub const PRECISION_AFFICHAGE: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatEvaluation {
    pub expression: Vec<Tok>,
    pub attente_reset: bool,
}

#[derive(Clone, Debug)]
pub struct Saisie {
    etat: EtatEvaluation,
}

impl Default for Saisie {
    fn default() -> Self {
        Self::new()
    }
}

impl Saisie {
    pub fn new() -> Self {
        Self {
            etat: EtatEvaluation::default(),
        }
    }

    pub fn etat(&self) -> &EtatEvaluation {
        &self.etat
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Chiffre (0-9) ou "." ; tout autre texte est ignoré.
    pub fn on_chiffre(&mut self, token: &str) -> String {
        if !est_chiffre_ou_point(token) {
            return self.rendu();
        }

        if self.etat.attente_reset {
            self.etat.expression.clear();
            self.etat.attente_reset = false;
        }

        let courant = match self.etat.expression.last_mut() {
            Some(Tok::Num(s)) => Some(s),
            _ => None,
        };

        // Second point dans le nombre courant : ignoré
        if token == "." && courant.as_deref().is_some_and(|s| s.contains('.')) {
            return self.rendu();
        }

        match courant {
            Some(s) => s.push_str(token),
            None => self.etat.expression.push(Tok::Num(token.to_string())),
        }
        self.rendu()
    }

    pub fn on_point(&mut self) -> String {
        self.on_chiffre(".")
    }

    pub fn on_operateur(&mut self, op: Operateur) -> String {
        match self.etat.expression.last() {
            None => return self.rendu(),
            Some(t) if t.est_operateur() => return self.rendu(),
            Some(_) => {}
        }

        // On continue sur le résultat affiché
        self.etat.attente_reset = false;
        self.etat.expression.push(Tok::Op(op));
        self.rendu()
    }

    /// "=" : retire un opérateur final, évalue, remplace l’expression par le résultat.
    pub fn on_egal(&mut self) -> String {
        if self.etat.expression.is_empty() {
            return self.rendu();
        }

        if self.etat.expression.last().is_some_and(Tok::est_operateur) {
            self.etat.expression.pop();
        }

        match evalue_jetons(&self.etat.expression) {
            Ok(valeur) => {
                let texte = format_resultat(&valeur, PRECISION_AFFICHAGE);
                debug!("évaluation: {} = {texte}", self.rendu());
                self.etat.expression = vec![Tok::Resultat { valeur, texte }];
            }
            Err(e) => {
                warn!("évaluation échouée ({}): {e}", self.rendu());
                self.etat.expression = vec![Tok::Erreur];
            }
        }
        self.etat.attente_reset = true;
        self.rendu()
    }

    pub fn on_efface(&mut self) -> String {
        self.etat = EtatEvaluation::default();
        self.rendu()
    }

    /// Touche texte brute (clavier). Retourne None si la touche est ignorée.
    pub fn on_touche(&mut self, touche: &str) -> Option<String> {
        if est_chiffre_ou_point(touche) {
            return Some(self.on_chiffre(touche));
        }
        if let Some(op) = Operateur::depuis_symbole(touche) {
            return Some(self.on_operateur(op));
        }
        match touche {
            "=" => Some(self.on_egal()),
            "c" | "C" => Some(self.on_efface()),
            _ => None,
        }
    }

    /* ------------------------ Affichage ------------------------ */

    /// "0" si vide, sinon jetons séparés par un espace.
    pub fn rendu(&self) -> String {
        if self.etat.expression.is_empty() {
            "0".to_string()
        } else {
            format_tokens(&self.etat.expression)
        }
    }
}
