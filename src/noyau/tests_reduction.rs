//! Tests de la réduction (campagne) : priorités par classe + cas limites observés.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - Les nombres du motif sont NON signés : un `-` de tête reste collé devant le
//!   résultat de l’opération suivante ("-5+3" => "-8").
//! - ÷ et x sont toujours résolus avant + et -, quelle que soit leur position.
//! - Une classe dont le glyphe reste présent sans motif est considérée résolue.

use super::reduire;

fn assert_reduit(expr: &str, attendu: &str) {
    assert_eq!(reduire(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn priorite_multiplication_avant_addition() {
    // 2+3x4 -> 2+12 -> 14
    assert_reduit("2+3x4", "14");
}

#[test]
fn priorite_division_avant_multiplication() {
    // 8x6÷3 : ÷ d’abord (6÷3=2), puis 8x2
    assert_reduit("8x6÷3", "16");
}

#[test]
fn priorite_addition_avant_soustraction() {
    // 10-2+3 : + d’abord (2+3=5), puis 10-5
    assert_reduit("10-2+3", "5");
}

#[test]
fn plusieurs_divisions_en_chaine() {
    // 100÷5÷2 -> 20÷2 -> 10
    assert_reduit("100÷5÷2", "10");
}

#[test]
fn melange_complet() {
    // 1+2x3-8÷4 -> 1+2x3-2 -> 1+6-2 -> 7-2 -> 5
    assert_reduit("1+2x3-8÷4", "5");
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn decimaux_virgule() {
    assert_reduit("0,1+0,2", "0.30000000000000004");
    assert_reduit("2,5x4", "10");
}

#[test]
fn division_non_entiere() {
    assert_reduit("1÷3", "0.3333333333333333");
}

#[test]
fn separateur_final_operande_gauche() {
    // "3," vient d’une virgule sans décimale : se lit 3
    assert_reduit("3,+2", "5");
    assert_reduit("0,x4", "0");
}

#[test]
fn separateur_final_operande_droit() {
    // le point final est consommé avec l’opérande, pas recollé au résultat
    assert_reduit("4-1,", "3");
    assert_reduit("588774,2583-4,", "588770.2583");
}

/* ------------------------ Non finis ------------------------ */

#[test]
fn division_par_zero_infinie() {
    assert_reduit("5÷0", "inf");
}

#[test]
fn zero_sur_zero_nan() {
    assert_reduit("0÷0", "NaN");
}

#[test]
fn infini_propage() {
    // inf n’est pas un nombre du motif : la classe + est résolue telle quelle
    assert_reduit("5÷0+2", "inf+2");
    assert_reduit("5÷0x2", "infx2");
}

/* ------------------------ Signes ------------------------ */

#[test]
fn resultat_negatif() {
    assert_reduit("2-5", "-3");
}

#[test]
fn signe_de_tete_non_capture() {
    assert_reduit("-5+3", "-8");
    assert_reduit("-5x2", "-10");
}

#[test]
fn soustractions_en_chaine() {
    // 2-3-4 -> -1-4 -> --3 : aucun motif restant, on s’arrête
    assert_reduit("2-3-4", "--3");
}

/* ------------------------ Opérateurs pendants ------------------------ */

#[test]
fn operateur_pendant_apres_calcul() {
    // 2+3+ : le premier + n’est pas final -> 5+ -> 5
    assert_reduit("2+3+", "5");
}

#[test]
fn operateur_final_apres_signe_de_tete() {
    // le premier "-" est un signe : seul le "-" final est retiré
    assert_reduit("-5-", "-5");
    assert_reduit("-5+3-", "-8");
}

#[test]
fn deterministe() {
    for expr in ["2+3x4", "5÷0", "1,5-0,25x2", "9-", "x"] {
        assert_eq!(reduire(expr), reduire(expr), "expr={expr:?}");
    }
}
