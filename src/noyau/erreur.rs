//! Erreurs d’évaluation (typées, jamais fatales).
//!
//! Le noyau ne lève rien : chaque échec remonte comme `Err(ErreurEval)`,
//! et la saisie le convertit en affichage "Error".

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Diviseur nul (arithmétique exacte : zéro = zéro).
    #[error("division par zéro")]
    DivisionParZero,

    /// Symbole isolé qui n’est pas + - * /.
    #[error("opérateur invalide: {0:?}")]
    OperateurInvalide(String),

    /// Jeton illisible, pile d’opérandes vide, reste en trop, etc.
    #[error("expression malformée: {0}")]
    ExpressionMalformee(String),
}

impl ErreurEval {
    pub(crate) fn malformee(msg: impl Into<String>) -> Self {
        Self::ExpressionMalformee(msg.into())
    }
}
