//! Response entries and the follow-up specialization table

use ahash::{AHashMap, AHashSet};
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::context::ConversationContext;
use crate::types::IntentLabel;

/// Placeholder replaced by the user's name in response templates
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Stands in for the name until the user has told us theirs
pub const ANONYMOUS_NAME: &str = "friend";

/// What a generator gets to look at
pub struct GenerateInput<'a> {
    /// Normalized user text
    pub text: &'a str,
    pub context: &'a ConversationContext,
}

pub type Generator = fn(&GenerateInput<'_>, &mut dyn RngCore) -> String;

/// How an intent is answered
#[derive(Clone)]
pub enum ResponseEntry {
    Fixed(String),
    /// Uniform random choice
    OneOf(Vec<String>),
    /// Computed from the input, the context and data tables
    Generated(Generator),
}

impl ResponseEntry {
    pub fn fixed(text: &str) -> Self {
        Self::Fixed(text.to_string())
    }

    pub fn one_of(candidates: &[&str]) -> Self {
        Self::OneOf(candidates.iter().map(|c| c.to_string()).collect())
    }

    pub fn render(&self, input: &GenerateInput<'_>, rng: &mut dyn RngCore) -> String {
        self.render_avoiding(input, rng, None)
    }

    /// Render, steering a candidate choice away from `avoid` when another exists
    pub fn render_avoiding(
        &self,
        input: &GenerateInput<'_>,
        rng: &mut dyn RngCore,
        avoid: Option<&str>,
    ) -> String {
        let name = input.context.user_name.as_deref();
        match self {
            Self::Fixed(text) => personalize(text, name),
            Self::OneOf(candidates) => {
                let fresh: Vec<&String> = candidates
                    .iter()
                    .filter(|c| avoid.map_or(true, |a| personalize(c, name) != a))
                    .collect();
                let pick = if fresh.is_empty() {
                    candidates.choose(rng)
                } else {
                    fresh.choose(rng).copied()
                };
                pick.map(|c| personalize(c, name)).unwrap_or_default()
            }
            Self::Generated(generate) => generate(input, rng),
        }
    }
}

/// Fill the name placeholder
pub fn personalize(template: &str, name: Option<&str>) -> String {
    if !template.contains(NAME_PLACEHOLDER) {
        return template.to_string();
    }
    template.replace(NAME_PLACEHOLDER, name.unwrap_or(ANONYMOUS_NAME))
}

/// Intent label to response entry
#[derive(Clone, Default)]
pub struct ResponseTable {
    entries: AHashMap<IntentLabel, ResponseEntry>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: IntentLabel, entry: ResponseEntry) {
        self.entries.insert(label, entry);
    }

    pub fn get(&self, label: &IntentLabel) -> Option<&ResponseEntry> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Follow-up intents ("why?", "tell me more", "yes") and their answers
/// specialized to the intent that preceded them
#[derive(Clone, Default)]
pub struct FollowUpTable {
    labels: AHashSet<IntentLabel>,
    /// Follow-up that re-answers the previous intent
    repeat: Option<IntentLabel>,
    specialized: AHashMap<(IntentLabel, IntentLabel), ResponseEntry>,
}

impl FollowUpTable {
    pub fn new(labels: impl IntoIterator<Item = IntentLabel>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_repeat(mut self, label: IntentLabel) -> Self {
        self.labels.insert(label.clone());
        self.repeat = Some(label);
        self
    }

    pub fn specialize(&mut self, prior: IntentLabel, follow_up: IntentLabel, entry: ResponseEntry) {
        self.labels.insert(follow_up.clone());
        self.specialized.insert((prior, follow_up), entry);
    }

    pub fn is_follow_up(&self, label: &IntentLabel) -> bool {
        self.labels.contains(label)
    }

    pub fn is_repeat(&self, label: &IntentLabel) -> bool {
        self.repeat.as_ref() == Some(label)
    }

    pub fn lookup(&self, prior: &IntentLabel, follow_up: &IntentLabel) -> Option<&ResponseEntry> {
        self.specialized.get(&(prior.clone(), follow_up.clone()))
    }
}

/// Interest tags collected when the user asks about an intent
#[derive(Clone, Default)]
pub struct InterestTable {
    tags: AHashMap<IntentLabel, Vec<&'static str>>,
}

impl InterestTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: IntentLabel, tags: &[&'static str]) {
        self.tags.entry(label).or_default().extend_from_slice(tags);
    }

    pub fn tags(&self, label: &IntentLabel) -> &[&'static str] {
        self.tags.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn input<'a>(context: &'a ConversationContext) -> GenerateInput<'a> {
        GenerateInput { text: "", context }
    }

    #[test]
    fn test_fixed_personalized() {
        let mut context = ConversationContext::new();
        let entry = ResponseEntry::fixed("Hi {name}!");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(entry.render(&input(&context), &mut rng), "Hi friend!");
        context.user_name = Some("Jordan".to_string());
        assert_eq!(entry.render(&input(&context), &mut rng), "Hi Jordan!");
    }

    #[test]
    fn test_one_of_avoids_previous() {
        let context = ConversationContext::new();
        let entry = ResponseEntry::one_of(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            assert_eq!(entry.render_avoiding(&input(&context), &mut rng, Some("a")), "b");
        }
    }

    #[test]
    fn test_one_of_single_candidate_may_repeat() {
        let context = ConversationContext::new();
        let entry = ResponseEntry::one_of(&["only"]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(entry.render_avoiding(&input(&context), &mut rng, Some("only")), "only");
    }

    #[test]
    fn test_generated_sees_context() {
        fn shout(input: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
            input.context.topic.clone().unwrap_or_default().to_uppercase()
        }
        let mut context = ConversationContext::new();
        context.topic = Some("privacy".to_string());
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(ResponseEntry::Generated(shout).render(&input(&context), &mut rng), "PRIVACY");
    }

    #[test]
    fn test_follow_up_lookup() {
        let why = IntentLabel::from_static("WHY");
        let privacy = IntentLabel::from_static("PRIVACY_INFO");
        let mut table = FollowUpTable::new([why.clone()]).with_repeat("MORE".into());
        table.specialize(privacy.clone(), why.clone(), ResponseEntry::fixed("because"));

        assert!(table.is_follow_up(&why));
        assert!(table.is_repeat(&IntentLabel::from_static("MORE")));
        assert!(table.lookup(&privacy, &why).is_some());
        assert!(table.lookup(&why, &privacy).is_none());
    }
}
