//! Tests fuzz safe : séquences de touches aléatoires, sans brûler la machine.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants : l’expression est vide, "Error" ou commence par un nombre / résultat ;
//!   jamais deux opérateurs consécutifs ; au plus un point par nombre saisi

use std::time::{Duration, Instant};

use super::jetons::Tok;
use super::saisie::Saisie;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

// chiffres, point, opérateurs ("=" et "C" tirés à part)
const TOUCHES: [&str; 15] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/",
];

fn gen_touche(rng: &mut Rng) -> &'static str {
    // "C" rare, sinon le fuzz ne construit jamais rien
    match rng.pick(100) {
        0..=1 => "C",
        2..=11 => "=",
        _ => TOUCHES[rng.pick(TOUCHES.len() as u32) as usize],
    }
}

fn check_invariants(s: &Saisie, trace: &[&str]) {
    let e = &s.etat().expression;

    match e.first() {
        None | Some(Tok::Num(_)) | Some(Tok::Resultat { .. }) | Some(Tok::Erreur) => {}
        Some(t) => panic!("commence par {t:?} ; trace={trace:?}"),
    }

    assert!(
        e.windows(2)
            .all(|w| !(w[0].est_operateur() && w[1].est_operateur())),
        "opérateurs consécutifs ; trace={trace:?}"
    );

    for t in e {
        if let Tok::Num(n) | Tok::Resultat { texte: n, .. } = t {
            assert!(n.matches('.').count() <= 1, "nombre {n:?} ; trace={trace:?}");
        }
    }

    let rendu = s.rendu();
    assert_eq!(rendu, s.rendu(), "rendu non idempotent");
    if e.is_empty() {
        assert_eq!(rendu, "0");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_resultat = 0usize;
    let mut vu_erreur = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let mut s = Saisie::new();
        let mut trace: Vec<&str> = Vec::new();

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            trace.push(t);
            s.on_touche(t);
            check_invariants(&s, &trace);

            if t == "=" && !s.etat().expression.is_empty() {
                if s.etat().expression == [Tok::Erreur] {
                    vu_erreur += 1;
                } else {
                    vu_resultat += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_resultat > 10, "trop peu de résultats: {vu_resultat}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes touches => même affichage
    let joue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut s = Saisie::new();
        let mut affichages = Vec::new();
        for _ in 0..200 {
            if let Some(a) = s.on_touche(gen_touche(&mut rng)) {
                affichages.push(a);
            }
        }
        affichages
    };

    assert_eq!(joue(0xBADC0DE_u64), joue(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_longue_chaine_gauche_a_droite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1 - 1 - 1 ... (800 fois) : repli gauche à droite, piles bornées
    let mut s = Saisie::new();
    s.on_touche("1");
    for _ in 0..800 {
        s.on_touche("-");
        s.on_touche("1");
    }
    budget(t0, max);

    assert_eq!(s.on_egal(), "-799");
}
