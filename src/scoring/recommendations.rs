// Advisory text for weak consistency dimensions.
//
// Each rule is checked independently against the unrounded 0.0-1.0
// fractions, so several advisories can fire together. The order is fixed:
// tone, formality, messaging, and the positive fallback only when nothing
// else fired.

/// Tone advisory fires below this sentiment consistency.
pub const SENTIMENT_THRESHOLD: f64 = 0.7;
/// Formality advisory fires below this formality consistency.
pub const FORMALITY_THRESHOLD: f64 = 0.7;
/// Messaging advisory fires below this keyword consistency.
pub const KEYWORD_THRESHOLD: f64 = 0.5;

pub const TONE_ADVISORY: &str = "Your messaging tone varies significantly across platforms. \
Consider standardizing your emotional tone to maintain brand consistency.";

pub const FORMALITY_ADVISORY: &str = "The formality level of your content varies between \
platforms. Develop a consistent voice that can be adapted to each platform while maintaining \
your brand identity.";

pub const MESSAGING_ADVISORY: &str = "Your key message points differ substantially across \
platforms. Identify your core value propositions and ensure they appear consistently in all \
communications.";

pub const CONSISTENT_MESSAGE: &str = "Your messaging is quite consistent across platforms. \
Continue monitoring to maintain this consistency as your content evolves.";

/// Build the recommendation list from unrounded consistency fractions.
pub fn generate_recommendations(
    sentiment_consistency: f64,
    formality_consistency: f64,
    keyword_consistency: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if sentiment_consistency < SENTIMENT_THRESHOLD {
        recommendations.push(TONE_ADVISORY.to_string());
    }
    if formality_consistency < FORMALITY_THRESHOLD {
        recommendations.push(FORMALITY_ADVISORY.to_string());
    }
    if keyword_consistency < KEYWORD_THRESHOLD {
        recommendations.push(MESSAGING_ADVISORY.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(CONSISTENT_MESSAGE.to_string());
    }

    recommendations
}
