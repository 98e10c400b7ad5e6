//! Tests fuzz safe : robustesse + déterminisme + terminaison de la réduction.
//!
//! But : marteler registre + réduction sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - saisies bornées (longueur)
//! - budget temps global
//! - invariant clé : sans glyphe d’opérateur restant, le résultat se relit en f64

use std::time::{Duration, Instant};

use super::jetons::Operateur;
use super::reduire;
use super::registre::Registre;

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

/* ------------------------ Génération de saisies (bornée) ------------------------ */

/// Rejoue une suite de touches "pavé" tirées au hasard sur un registre neuf.
fn gen_registre(rng: &mut Rng, longueur: usize) -> Registre {
    let mut r = Registre::new();
    for _ in 0..longueur {
        match rng.pick(16) {
            0..=9 => {
                let d = char::from_digit(rng.pick(10), 10).unwrap_or('0');
                r.append_digit(d);
            }
            10 => r.append_separateur(),
            11 => r.set_signe(),
            12..=14 => {
                let i = rng.pick(Operateur::PRIORITES.len() as u32) as usize;
                r.set_operateur(Operateur::PRIORITES[i]);
            }
            _ => {
                r.pop_last();
            }
        }
    }
    r
}

fn contient_glyphe(s: &str) -> bool {
    Operateur::PRIORITES.iter().any(|op| s.contains(op.glyphe()))
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_reduction_termine_et_deterministe() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let longueur = 1 + rng.pick(24) as usize;
        let r = gen_registre(&mut rng, longueur);
        let affichage = r.render();

        let a = reduire(&affichage);
        let b = reduire(&affichage);
        assert_eq!(a, b, "non déterministe pour {affichage:?}");

        if !a.is_empty() && !contient_glyphe(&a) {
            assert!(
                a.parse::<f64>().is_ok(),
                "résultat illisible {a:?} pour {affichage:?}"
            );
        }
    }
}

#[test]
fn fuzz_chaines_longues_bornees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..50 {
        budget(start, max);

        let r = gen_registre(&mut rng, 400);
        let _ = reduire(&r.render());
    }
}

#[test]
fn fuzz_division_par_zero_jamais_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        budget(start, max);

        let a = rng.pick(1000);
        let s = format!("{a}÷0");
        let out = reduire(&s);
        if a == 0 {
            assert_eq!(out, "NaN", "s={s:?}");
        } else {
            assert_eq!(out, "inf", "s={s:?}");
        }
    }
}
