// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurEval;

/// Texte affiché (et jeton posé) après une évaluation ratée.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    /// Reconnaît + - * / (rien d’autre).
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
        }
    }

    /// Puissance : + - => 1, * / => 2.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte décimal tel que tapé (ou lu par `decoupe`, éventuellement négatif)
    Num(String),
    Op(Operateur),
    // Résultat de "=" : valeur exacte reportée, texte tronqué pour l’affichage seulement
    Resultat { valeur: BigRational, texte: String },
    // Posé à la place de l’expression après un échec ; jamais évaluable
    Erreur,
}

impl Tok {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Op(_))
    }

    pub fn texte(&self) -> &str {
        match self {
            Tok::Num(s) => s.as_str(),
            Tok::Op(op) => op.symbole(),
            Tok::Resultat { texte, .. } => texte.as_str(),
            Tok::Erreur => TEXTE_ERREUR,
        }
    }
}

/// Un chiffre ASCII seul ou le point décimal.
pub fn est_chiffre_ou_point(s: &str) -> bool {
    s == "." || (s.len() == 1 && s.bytes().all(|b| b.is_ascii_digit()))
}

/// Lit un décimal : `-`? chiffres? (`.` chiffres?)? avec au moins un chiffre.
/// Exemples acceptés : "12", "3.5", ".5", "5.", "-3".
pub fn lire_decimal(s: &str) -> Option<BigRational> {
    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (ent, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // "3.25" => 325 / 10^2
    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);

    let r = BigRational::new(n, d);
    if neg && !r.is_zero() {
        Some(-r)
    } else {
        Some(r)
    }
}

/// Classe un morceau de texte en jeton.
/// - décimal => Num
/// - + - * / => Op
/// - autre symbole isolé (ex: ^, %) => OperateurInvalide
/// - le reste => ExpressionMalformee
pub fn classe(s: &str) -> Result<Tok, ErreurEval> {
    if let Some(op) = Operateur::depuis_symbole(s) {
        return Ok(Tok::Op(op));
    }
    if lire_decimal(s).is_some() {
        return Ok(Tok::Num(s.to_string()));
    }

    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) if !c.is_alphanumeric() && c != '.' => {
            Err(ErreurEval::OperateurInvalide(s.to_string()))
        }
        _ => Err(ErreurEval::ExpressionMalformee(format!(
            "jeton illisible: {s:?}"
        ))),
    }
}

/// Découpe une expression délimitée par espaces ("2 * 3 + 4") en jetons.
/// Les espaces multiples sont tolérés.
pub fn decoupe(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    s.split_whitespace().map(classe).collect()
}

/// Liste de jetons => texte séparé par un espace (forme affichée).
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}
