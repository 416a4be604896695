//! Grade-indexed recommendation tables.
//!
//! Resolution order for the advice shown to the user:
//!
//! 1. advice supplied by the analysis service, when non-empty, verbatim;
//! 2. the built-in table for the grade;
//! 3. the built-in `C` table.
//!
//! The result is never empty.

use crate::classifier::classify_code;
use crate::grade::Grade;

const ADVICE_A: &[&str] = &[
    "Votre site est très léger, continuez à surveiller le poids des médias.",
    "Automatisez la compression des nouvelles images.",
    "Évitez d'ajouter des scripts tiers non indispensables.",
];

const ADVICE_B: &[&str] = &[
    "Compressez les images d'arrière-plan et bannière.",
    "Réduisez les animations non essentielles.",
    "Activez la mise en cache navigateur pour les assets.",
    "Simplifiez les bibliothèques JavaScript utilisées.",
];

const ADVICE_C: &[&str] = &[
    "Activez le lazy-loading sur toutes les images.",
    "Combinez ou supprimez les scripts tiers inutiles.",
    "Utilisez une compression serveur (gzip/brotli).",
    "Réduisez le nombre de requêtes simultanées.",
];

const ADVICE_D: &[&str] = &[
    "Remplacez les images lourdes par des versions responsives.",
    "Scindez votre bundle JS pour charger uniquement le nécessaire.",
    "Supprimez les animations coûteuses sur mobile.",
    "Choisissez un hébergement plus performant et vert.",
];

const ADVICE_E: &[&str] = &[
    "Auditez chaque page pour retirer les assets superflus.",
    "Convertissez toutes les images en WebP/AVIF avec forte compression.",
    "Réduisez drastiquement les scripts et widgets externes.",
    "Appliquez un design plus simple pour limiter les composants.",
    "Activez cache + CDN pour servir les assets statiques.",
];

/// Where a resolved advice list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceOrigin {
    Provided,
    Builtin(Grade),
}

/// Static, immutable advice set keyed by [`Grade`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceRepository;

impl AdviceRepository {
    /// Built-in recommendations for `grade`, most important first.
    #[must_use]
    pub const fn builtin(grade: Grade) -> &'static [&'static str] {
        match grade {
            Grade::A => ADVICE_A,
            Grade::B => ADVICE_B,
            Grade::C => ADVICE_C,
            Grade::D => ADVICE_D,
            Grade::E => ADVICE_E,
        }
    }

    /// Resolve the advice list for `grade`.
    ///
    /// Non-empty `provided` advice wins and is returned unchanged.
    #[must_use]
    pub fn resolve(grade: Grade, provided: Option<&[String]>) -> Vec<String> {
        Self::resolve_with_origin(grade, provided).0
    }

    /// Resolve advice for a raw upstream grade code; unknown codes use `C`.
    #[must_use]
    pub fn resolve_code(code: &str, provided: Option<&[String]>) -> Vec<String> {
        Self::resolve(classify_code(code), provided)
    }

    /// Like [`resolve`](Self::resolve), also reporting which source was used.
    #[must_use]
    pub fn resolve_with_origin(
        grade: Grade,
        provided: Option<&[String]>,
    ) -> (Vec<String>, AdviceOrigin) {
        if let Some(items) = provided.filter(|items| !items.is_empty()) {
            return (items.to_vec(), AdviceOrigin::Provided);
        }

        let (table, origin) = match Self::builtin(grade) {
            [] => (
                Self::builtin(Grade::FALLBACK),
                AdviceOrigin::Builtin(Grade::FALLBACK),
            ),
            table => (table, AdviceOrigin::Builtin(grade)),
        };
        tracing::debug!(%grade, ?origin, "using built-in advice");
        (table.iter().map(|s| (*s).to_string()).collect(), origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn every_grade_resolves_non_empty() {
        for grade in Grade::ALL {
            let advice = AdviceRepository::resolve(grade, None);
            assert!(!advice.is_empty(), "grade {grade} has no advice");
            assert!(advice.iter().all(|item| !item.trim().is_empty()));
        }
    }

    #[test]
    fn provided_advice_wins_unchanged() {
        let provided = owned(&["  second thing ", "first thing", "first thing"]);
        let advice = AdviceRepository::resolve(Grade::E, Some(&provided));
        assert_eq!(advice, provided);
    }

    #[test]
    fn empty_provided_advice_uses_table() {
        let advice = AdviceRepository::resolve(Grade::D, Some(&[]));
        assert_eq!(advice, owned(ADVICE_D));
    }

    #[test]
    fn unknown_code_matches_c() {
        assert_eq!(
            AdviceRepository::resolve_code("Z", None),
            AdviceRepository::resolve(Grade::C, None)
        );
        assert_eq!(
            AdviceRepository::resolve_code("", None),
            AdviceRepository::resolve_code("C", None)
        );
    }

    #[test]
    fn known_code_uses_its_table() {
        assert_eq!(AdviceRepository::resolve_code("d", None), owned(ADVICE_D));
    }

    #[test]
    fn origin_reports_source() {
        let provided = owned(&["x"]);
        let (_, origin) = AdviceRepository::resolve_with_origin(Grade::A, Some(&provided));
        assert_eq!(origin, AdviceOrigin::Provided);
        let (_, origin) = AdviceRepository::resolve_with_origin(Grade::B, None);
        assert_eq!(origin, AdviceOrigin::Builtin(Grade::B));
    }

    #[test]
    fn tables_keep_insertion_order() {
        let advice = AdviceRepository::resolve(Grade::E, None);
        assert_eq!(advice.first().map(String::as_str), Some(ADVICE_E[0]));
        assert_eq!(advice.last().map(String::as_str), Some(ADVICE_E[4]));
    }
}
