//! Canned response templates for each intent.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::chat::{Category, Emotion};
use crate::classifier::Intent;

/// A generated assistant response, not yet part of any conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub text: String,
    pub category: Category,
    pub emotion: Emotion,
    /// Emergency contacts must be alerted.
    pub alert: bool,
}

impl Response {
    fn new(text: String, category: Category, emotion: Emotion) -> Self {
        Self {
            text,
            category,
            emotion,
            alert: false,
        }
    }
}

/// Turns an intent into a templated response for a named user.
///
/// Every intent maps to a fixed category and emotion. Only greetings are
/// randomized, picking one of several variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Category and emotion attached to responses for `intent`.
    pub fn tags_for(intent: Intent) -> (Category, Emotion) {
        match intent {
            Intent::Emergency => (Category::Emergency, Emotion::Urgent),
            Intent::Medicine => (Category::Suggestion, Emotion::Encouraging),
            Intent::MentalHealth => (Category::Suggestion, Emotion::Concerned),
            Intent::Symptom => (Category::Warning, Emotion::Concerned),
            Intent::Tips => (Category::Suggestion, Emotion::Encouraging),
            Intent::Analysis => (Category::Info, Emotion::Encouraging),
            Intent::Greeting => (Category::Info, Emotion::Happy),
            Intent::General => (Category::Info, Emotion::Concerned),
        }
    }

    pub fn respond<R: Rng + ?Sized>(&self, intent: Intent, name: &str, rng: &mut R) -> Response {
        let (category, emotion) = Self::tags_for(intent);

        let text = match intent {
            Intent::Emergency => EMERGENCY.to_string(),
            Intent::Medicine => format!(
                "Great question, {name}! 📊 Looking at your recent activity:\n\n\
                 ✅ You've been 95% consistent with morning medicines\n\
                 ⚠️ Evening medicines are sometimes delayed by 30-60 minutes\n\
                 🎯 Overall health score: 8.2/10\n\n\
                 I suggest setting your evening reminder 30 minutes earlier. \
                 Would you like me to adjust your schedule? You're doing amazing - keep it up! 💪"
            ),
            Intent::MentalHealth => format!(
                "I hear you, {name}, and I want you to know that what you're feeling is valid. 💙 \
                 Let's try some immediate relief:\n\n\
                 🌬️ Breathing Exercise: Breathe in for 4 counts, hold for 4, exhale for 6. Repeat 5 times.\n\n\
                 🧘 Grounding Technique: Name 5 things you can see, 4 you can touch, 3 you can hear, \
                 2 you can smell, 1 you can taste.\n\n\
                 Remember: It's okay to not be okay sometimes. Would you like me to help you find \
                 a mental health professional in your area? I'm here for you. 🤗"
            ),
            Intent::Symptom => format!(
                "I'm sorry you're not feeling well, {name}. 😟 Let me help you assess this:\n\n\
                 🌡️ Immediate steps:\n\
                 • Check your temperature\n\
                 • Stay hydrated\n\
                 • Rest when possible\n\n\
                 📝 Please tell me:\n\
                 • What specific symptoms are you experiencing?\n\
                 • When did they start?\n\
                 • On a scale of 1-10, how severe is the discomfort?\n\n\
                 Based on your symptoms, I can provide guidance, but remember - if symptoms worsen \
                 or you feel seriously unwell, please contact your doctor. Your health comes first! 💙"
            ),
            Intent::Tips => format!(
                "Here are your personalized health tips for today, {name}! ✨\n\n\
                 💧 Hydration: You're at 60% of your daily water goal - try to drink 2 more glasses\n\
                 🚶 Movement: A 10-minute walk after your evening medicine can improve absorption\n\
                 😴 Sleep: Based on your pattern, try going to bed 30 minutes earlier tonight\n\
                 🥗 Nutrition: Include vitamin C-rich foods to boost your immune system\n\
                 🧘 Mindfulness: 5 minutes of deep breathing can reduce stress hormones\n\n\
                 Which area would you like me to focus on more? I'm here to support your health journey! 🌟"
            ),
            Intent::Analysis => format!(
                "Let me analyze your health patterns, {name}! 📈\n\n\
                 This Week's Insights:\n\
                 ✅ Medicine compliance: 92% (Excellent!)\n\
                 📅 Best performance: Monday mornings\n\
                 ⏰ Optimal reminder time: 8:00 AM and 6:30 PM\n\
                 💪 Health streak: 12 days\n\n\
                 Recommendations:\n\
                 🔄 Your body responds best to consistent timing\n\
                 📱 Weekend reminders could be 30 minutes later\n\
                 🎯 You're on track to reach your monthly health goals!\n\n\
                 You're doing fantastic! Small consistent actions lead to big health improvements. \
                 Keep up the excellent work! 🌟"
            ),
            Intent::Greeting => {
                let variants = [
                    format!("Hello there, {name}! 😊 I'm so glad you're here. How can I support your health journey today?"),
                    format!("Hi {name}! 🌟 Ready to tackle another healthy day together? What's on your mind?"),
                    format!("Hey {name}! 💙 I'm here and ready to help with anything health-related. What would you like to explore?"),
                ];
                variants
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(|| variants[0].clone())
            }
            Intent::General => format!(
                "I understand you're asking about health-related topics, {name}. While I can provide \
                 general guidance and support, I want to remind you that I'm an AI assistant designed \
                 to complement - not replace - professional medical advice. 💙\n\n\
                 For specific health concerns, always consult with your doctor or healthcare provider. \
                 That said, I'm here to help with:\n\
                 • Medicine reminders and tracking\n\
                 • General health tips\n\
                 • Emotional support\n\
                 • Symptom guidance\n\
                 • Health pattern analysis\n\n\
                 What would you like to explore together? I'm here for you! 🤗"
            ),
        };

        let mut response = Response::new(text, category, emotion);
        response.alert = intent == Intent::Emergency;
        response
    }

    /// First message of a session, worded for the time of day.
    pub fn opening_greeting(&self, name: &str, hour: u32) -> Response {
        let greeting = if hour < 12 {
            format!("Good morning, {name}! 🌅 Ready to start your healthy day?")
        } else if hour < 17 {
            format!("Good afternoon, {name}! ☀️ How's your day going?")
        } else {
            format!("Good evening, {name}! 🌙 Time to wind down and take your evening medicines.")
        };

        Response::new(
            format!(
                "{greeting} I'm your AI Health Companion. I can help you with medicine reminders, \
                 health tips, symptom checking, and I'm here to listen if you need support. \
                 What can I do for you today?"
            ),
            Category::Info,
            Emotion::Happy,
        )
    }

    /// Weekly emotional check-in.
    pub fn mood_check_in(&self) -> Response {
        Response::new(MOOD_CHECK_IN.to_string(), Category::Suggestion, Emotion::Concerned)
    }
}

const EMERGENCY: &str = "🚨 EMERGENCY ALERT: If you're experiencing chest pain or breathing difficulties, \
please call emergency services immediately (911 or your local emergency number). Don't wait - this \
could be serious. I'm also notifying your emergency contacts. Your health is the priority! 🚨";

const MOOD_CHECK_IN: &str = "By the way, I like to check in with you weekly. How have you been \
feeling emotionally? Any stress, anxiety, or concerns I can help you with? 💙";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Intent; 8] = [
        Intent::Emergency,
        Intent::Medicine,
        Intent::MentalHealth,
        Intent::Symptom,
        Intent::Tips,
        Intent::Analysis,
        Intent::Greeting,
        Intent::General,
    ];

    #[test]
    fn test_emergency_response_is_urgent_and_alerts() {
        let mut rng = StdRng::seed_from_u64(1);
        let response = ResponseGenerator::new().respond(Intent::Emergency, "John", &mut rng);
        assert_eq!(response.category, Category::Emergency);
        assert_eq!(response.emotion, Emotion::Urgent);
        assert!(response.alert);
        assert!(response.text.contains("EMERGENCY ALERT"));
    }

    #[test]
    fn test_only_emergency_alerts() {
        let mut rng = StdRng::seed_from_u64(2);
        let generator = ResponseGenerator::new();
        for intent in ALL.into_iter().filter(|i| *i != Intent::Emergency) {
            assert!(!generator.respond(intent, "Asha", &mut rng).alert, "{}", intent);
        }
    }

    #[test]
    fn test_templates_interpolate_name() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = ResponseGenerator::new();
        for intent in ALL.into_iter().filter(|i| *i != Intent::Emergency) {
            let response = generator.respond(intent, "Priya", &mut rng);
            assert!(response.text.contains("Priya"), "{}", intent);
        }
    }

    #[test]
    fn test_tags_match_table() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = ResponseGenerator::new();
        for intent in ALL {
            let response = generator.respond(intent, "John", &mut rng);
            assert_eq!(
                (response.category, response.emotion),
                ResponseGenerator::tags_for(intent)
            );
        }
        assert_eq!(
            ResponseGenerator::tags_for(Intent::Medicine),
            (Category::Suggestion, Emotion::Encouraging)
        );
        assert_eq!(
            ResponseGenerator::tags_for(Intent::General),
            (Category::Info, Emotion::Concerned)
        );
    }

    #[test]
    fn test_deterministic_intents_ignore_rng() {
        let generator = ResponseGenerator::new();
        let a = generator.respond(Intent::Tips, "John", &mut StdRng::seed_from_u64(5));
        let b = generator.respond(Intent::Tips, "John", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_greeting_variants_are_seed_stable() {
        let generator = ResponseGenerator::new();
        let a = generator.respond(Intent::Greeting, "John", &mut StdRng::seed_from_u64(7));
        let b = generator.respond(Intent::Greeting, "John", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let mut rng = StdRng::seed_from_u64(8);
        let seen: std::collections::HashSet<String> = (0..64)
            .map(|_| generator.respond(Intent::Greeting, "John", &mut rng).text)
            .collect();
        assert!(seen.len() > 1);
        assert!(seen.len() <= 3);
    }

    #[test]
    fn test_opening_greeting_by_hour() {
        let generator = ResponseGenerator::new();
        assert!(generator.opening_greeting("John", 8).text.starts_with("Good morning, John!"));
        assert!(generator.opening_greeting("John", 12).text.starts_with("Good afternoon, John!"));
        assert!(generator.opening_greeting("John", 16).text.starts_with("Good afternoon"));
        assert!(generator.opening_greeting("John", 17).text.starts_with("Good evening"));

        let greeting = generator.opening_greeting("John", 0);
        assert_eq!((greeting.category, greeting.emotion), (Category::Info, Emotion::Happy));
    }

    #[test]
    fn test_mood_check_in_tags() {
        let response = ResponseGenerator::new().mood_check_in();
        assert_eq!(response.category, Category::Suggestion);
        assert_eq!(response.emotion, Emotion::Concerned);
        assert!(!response.alert);
    }
}
