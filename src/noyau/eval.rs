//! Noyau — évaluation à deux piles (opérandes / opérateurs)
//!
//! Pour chaque jeton :
//! - nombre    => pile des opérandes
//! - opérateur => tant que le sommet a une puissance >= la sienne, on replie
//!   (dépile op + deux opérandes, applique, rempile), puis on l’empile
//!
//! En fin de flux on replie tout. Égalité de puissance => gauche à droite.

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurEval;
use super::jetons::{decoupe, lire_decimal, Operateur, Tok};

/// API texte : "2 * 3 + 4" => 10.
pub fn evalue(expr_str: &str) -> Result<BigRational, ErreurEval> {
    let jetons = decoupe(expr_str)?;
    evalue_jetons(&jetons)
}

/// Évalue une suite de jetons déjà classés.
pub fn evalue_jetons(jetons: &[Tok]) -> Result<BigRational, ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::malformee("expression vide"));
    }

    let mut valeurs: Vec<BigRational> = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut ops: Vec<Operateur> = Vec::with_capacity(jetons.len() / 2);

    for tok in jetons {
        match tok {
            Tok::Num(txt) => {
                let v = lire_decimal(txt)
                    .ok_or_else(|| ErreurEval::malformee(format!("nombre illisible: {txt:?}")))?;
                valeurs.push(v);
            }

            Tok::Resultat { valeur, .. } => valeurs.push(valeur.clone()),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    replie(&mut valeurs, top)?;
                }
                ops.push(*op);
            }

            Tok::Erreur => return Err(ErreurEval::malformee("jeton d’erreur")),
        }
    }

    while let Some(op) = ops.pop() {
        replie(&mut valeurs, op)?;
    }

    let resultat = valeurs
        .pop()
        .ok_or_else(|| ErreurEval::malformee("aucun opérande"))?;
    if !valeurs.is_empty() {
        return Err(ErreurEval::malformee("opérandes en trop"));
    }
    Ok(resultat)
}

/// Dépile deux opérandes (b au sommet, puis a), calcule a op b, rempile.
fn replie(valeurs: &mut Vec<BigRational>, op: Operateur) -> Result<(), ErreurEval> {
    let b = valeurs
        .pop()
        .ok_or_else(|| ErreurEval::malformee("opérande manquant"))?;
    let a = valeurs
        .pop()
        .ok_or_else(|| ErreurEval::malformee("opérande manquant"))?;
    valeurs.push(applique(op, a, b)?);
    Ok(())
}

fn applique(op: Operateur, a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Minus => Ok(a - b),
        Operateur::Star => Ok(a * b),
        Operateur::Slash => {
            if b.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a / b)
        }
    }
}
