//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs  : jetons (nombre / opérateur) + classement + découpe
//! - erreur.rs  : erreurs typées d’évaluation
//! - eval.rs    : évaluation à deux piles (puissance + - < * /)
//! - format.rs  : résultat exact => texte décimal
//! - saisie.rs  : saisie touche par touche + état de session

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;



#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evalue, evalue_jetons};
pub use jetons::{Operateur, Tok};
pub use saisie::{EtatEvaluation, Saisie};
