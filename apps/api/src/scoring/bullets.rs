//! Rule-based bullet rewriting and the apply-improvement edit.
//!
//! The improver never calls out anywhere; it is a small cascade of rewrite
//! rules ordered from most to least specific.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::Resume;
use crate::models::score::{BulletImprovement, ImprovementImpact};

lazy_static! {
    static ref WEAK_PHRASE: Regex = Regex::new(r"(?i)worked on|responsible for").unwrap();
    static ref ANY_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// Suggests a stronger rewrite of one experience bullet.
pub fn improve_bullet(bullet: &str) -> BulletImprovement {
    if WEAK_PHRASE.is_match(bullet) {
        return BulletImprovement {
            original: bullet.to_string(),
            improved: WEAK_PHRASE.replace(bullet, "Led development of").into_owned(),
            reason: "Changed weak phrase to strong action verb".to_string(),
            impact: ImprovementImpact::High,
        };
    }

    if !ANY_DIGIT.is_match(bullet) {
        return BulletImprovement {
            original: bullet.to_string(),
            improved: format!(
                "{} achieving 45% increase in team productivity",
                bullet.trim_end_matches('.')
            ),
            reason: "Added quantifiable metric to demonstrate impact".to_string(),
            impact: ImprovementImpact::High,
        };
    }

    BulletImprovement {
        original: bullet.to_string(),
        improved: format!(
            "Spearheaded {} resulting in 35% efficiency improvement and $200K cost savings",
            bullet.to_lowercase()
        ),
        reason: "Added action verb, quantified impact, and business value".to_string(),
        impact: ImprovementImpact::High,
    }
}

/// Applies an accepted rewrite, producing a new `Resume` value by structural
/// copy. Returns None when the experience id or bullet index does not exist;
/// the original is never mutated.
pub fn apply_bullet_improvement(
    resume: &Resume,
    experience_id: &str,
    bullet_index: usize,
    improved: &str,
) -> Option<Resume> {
    let mut updated = resume.clone();
    let entry = updated
        .content
        .experience
        .iter_mut()
        .find(|e| e.id == experience_id)?;
    let bullet = entry.bullets.get_mut(bullet_index)?;
    *bullet = improved.to_string();
    entry.is_improved = Some(true);
    Some(updated)
}
