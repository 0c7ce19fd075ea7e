//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : aucune entrée ne fait paniquer, toute erreur est typée

use std::time::{Duration, Instant};

use super::{evaluate, format_resultat, Decimal, EvaluationError, Op};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// N’importe quoi : chiffres, points, opérateurs, espaces, lettres.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '9', '.', '+', '-', '*', '/', '%', ' ', 'x', '(', 'é',
    ];
    let n = rng.pick(24);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Décimal bien formé : (littéral, numérateur, échelle).
fn gen_decimal(rng: &mut Rng) -> (String, i128, u32) {
    let n = i128::from(rng.pick(100_000));
    let scale = rng.pick(5);
    let d = Decimal::new(n.into(), scale);
    (d.to_string(), n, scale)
}

/// Expression alternée nombre/opérateur, sans erreur de syntaxe.
fn gen_bien_forme(rng: &mut Rng, ops: &[Op]) -> String {
    let mut s = gen_decimal(rng).0;
    for _ in 0..rng.pick(6) {
        s.push(ops[rng.pick(ops.len() as u32) as usize].symbole());
        // espace ignoré par la tokenisation
        if rng.coin() {
            s.push(' ');
        }
        s.push_str(&gen_decimal(rng).0);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let sorties = |seed: u64| -> Vec<Result<Decimal, EvaluationError>> {
        let mut rng = Rng::new(seed);
        (0..300).map(|_| evaluate(&gen_bruit(&mut rng))).collect()
    };
    let a = sorties(0xBADC0DE_u64);
    let b = sorties(0xBADC0DE_u64);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        match (x, y) {
            (Ok(vx), Ok(vy)) => assert_eq!(vx.to_string(), vy.to_string()),
            _ => assert_eq!(x, y),
        }
    }
}

#[test]
fn fuzz_safe_bien_forme_seule_erreur_division_par_zero() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_bien_forme(&mut rng, &Op::TOUS);
        match evaluate(&expr) {
            Ok(v) => {
                // le texte affiché se réévalue en lui-même
                let affiche = format_resultat(&v);
                if !v.is_negative() {
                    let relu = evaluate(&affiche)
                        .unwrap_or_else(|e| panic!("réévaluation de {affiche:?}: {e}"));
                    assert_eq!(relu, v, "expr={expr:?}");
                }
            }
            Err(e) => assert_eq!(e, EvaluationError::DivisionByZero, "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_binaire_exact() {
    // a op b pour op ∈ {+,-,*} : résultat exact, vérifié en i128 à échelle commune
    let mut rng = Rng::new(0xA11CE_u64);

    for _ in 0..400 {
        let (sa, na, ea) = gen_decimal(&mut rng);
        let (sb, nb, eb) = gen_decimal(&mut rng);
        let op = [Op::Plus, Op::Minus, Op::Star][rng.pick(3) as usize];

        let expr = format!("{sa}{op}{sb}");
        let v = evaluate(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        let (attendu, echelle) = match op {
            Op::Star => (na * nb, ea + eb),
            _ => {
                let e = ea.max(eb);
                let a = na * 10i128.pow(e - ea);
                let b = nb * 10i128.pow(e - eb);
                (if op == Op::Plus { a + b } else { a - b }, e)
            }
        };
        assert_eq!(v, Decimal::new(attendu.into(), echelle), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::from("1");
    for i in 0..5000 {
        expr.push(if i % 2 == 0 { '+' } else { '-' });
        expr.push_str(if i % 2 == 0 { "3" } else { "1" });
        if i % 100 == 0 {
            expr.push_str(if i % 200 == 0 { "*1" } else { "/1" });
        }
    }
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 1 + 2500×3 − 2500×1
    assert_eq!(format_resultat(&v), "5001");
}
